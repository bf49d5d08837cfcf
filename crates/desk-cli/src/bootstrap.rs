use anyhow::Context;

use crate::cli::GlobalFlags;

/// Load `.env` from the working directory, then the layered config.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<desk_config::DeskConfig> {
    load_local_dotenv()?;

    let config = desk_config::DeskConfig::load().context("failed to load desk configuration")?;
    tracing::debug!(
        analysis_window = config.general.analysis_window,
        recent_limit = config.general.recent_limit,
        playbook_industries = config.playbook.industries.len(),
        data_override = flags.data.is_some(),
        "configuration loaded"
    );
    Ok(config)
}

fn load_local_dotenv() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let env_path = cwd.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}

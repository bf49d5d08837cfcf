//! Reading and checking the record snapshot a run operates on.

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use desk_config::DeskConfig;
use desk_core::entities::QnaSeed;
use desk_core::snapshot::Snapshot;
use desk_schema::SchemaRegistry;

use crate::cli::GlobalFlags;

/// `--data` wins over `general.data_path`.
pub fn resolve_data_path(flags: &GlobalFlags, config: &DeskConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = flags.data.as_deref() {
        return Ok(PathBuf::from(path));
    }
    match config.general.data_path() {
        Some(path) => Ok(PathBuf::from(path)),
        None => bail!(
            "no snapshot file given: pass --data <file> or set general.data_path (DESK_GENERAL__DATA_PATH)"
        ),
    }
}

/// Parse `path`, validate it against the `snapshot` schema, and deserialize.
pub fn load_snapshot(path: &Path, registry: &SchemaRegistry) -> anyhow::Result<Snapshot> {
    let value = read_json(path, "snapshot")?;
    registry
        .validate("snapshot", &value)
        .with_context(|| format!("snapshot {} was rejected", path.display()))?;

    let snapshot: Snapshot = serde_json::from_value(value)
        .with_context(|| format!("failed to decode snapshot {}", path.display()))?;

    tracing::debug!(
        path = %path.display(),
        companies = snapshot.companies.len(),
        inquiries = snapshot.inquiries.len(),
        qna = snapshot.qna.len(),
        "snapshot loaded"
    );
    Ok(snapshot)
}

/// Parse a JSON array of QnA seeds, checking each item against `qna_seed`.
pub fn load_qna_seeds(path: &Path, registry: &SchemaRegistry) -> anyhow::Result<Vec<QnaSeed>> {
    let value = read_json(path, "QnA seed file")?;
    let Some(items) = value.as_array() else {
        bail!("QnA seed file {} must hold a JSON array", path.display());
    };
    for (index, item) in items.iter().enumerate() {
        registry
            .validate("qna_seed", item)
            .with_context(|| format!("QnA seed #{} in {} was rejected", index + 1, path.display()))?;
    }

    serde_json::from_value(value)
        .with_context(|| format!("failed to decode QnA seeds {}", path.display()))
}

/// Overwrite `path` with `snapshot` as pretty-printed JSON.
pub fn write_snapshot(path: &Path, snapshot: &Snapshot) -> anyhow::Result<()> {
    let mut json = serde_json::to_string_pretty(snapshot).context("failed to encode snapshot")?;
    json.push('\n');
    std::fs::write(path, json)
        .with_context(|| format!("failed to write snapshot {}", path.display()))?;
    tracing::debug!(path = %path.display(), qna = snapshot.qna.len(), "snapshot written");
    Ok(())
}

fn read_json(path: &Path, what: &str) -> anyhow::Result<serde_json::Value> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {what} {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("{what} {} is not valid JSON", path.display()))
}

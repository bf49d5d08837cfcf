use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use desk_analytics::{Clock, Collaborators, FixedClock, InMemoryStore, InsightService, SystemClock};
use desk_config::DeskConfig;
use desk_schema::SchemaRegistry;

use crate::cli::GlobalFlags;
use crate::context::snapshot::{load_snapshot, resolve_data_path, write_snapshot};

/// Shared application resources initialized once per invocation.
pub struct AppContext {
    pub service: InsightService,
    pub registry: SchemaRegistry,
    store: Arc<InMemoryStore>,
    data_path: PathBuf,
}

impl AppContext {
    /// Load the snapshot named by the flags or config and wire the engine.
    pub fn init(flags: &GlobalFlags, config: DeskConfig) -> anyhow::Result<Self> {
        let registry = SchemaRegistry::new().context("failed to build schema registry")?;
        let data_path = resolve_data_path(flags, &config)?;
        let snapshot = load_snapshot(&data_path, &registry)?;
        let store = Arc::new(
            InMemoryStore::new(snapshot)
                .with_context(|| format!("snapshot {} failed validation", data_path.display()))?,
        );

        let clock: Arc<dyn Clock> = match flags.now {
            Some(now) => Arc::new(FixedClock(now)),
            None => Arc::new(SystemClock),
        };
        let deps = Collaborators::in_memory(store.clone()).with_clock(clock);

        Ok(Self {
            service: InsightService::new(deps, config),
            registry,
            store,
            data_path,
        })
    }

    /// Write the store's current records back to the snapshot file.
    pub fn persist(&self) -> anyhow::Result<()> {
        let snapshot = self.store.snapshot()?;
        write_snapshot(&self.data_path, &snapshot)
    }
}

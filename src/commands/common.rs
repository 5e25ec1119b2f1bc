//! Shared command setup.

use crate::{core::AppConfig, service::RecordService, storage::RecordDatabase, Result};
use tracing::debug;

/// Context containing the resources every command needs
pub struct CommandContext {
    pub config: AppConfig,
    pub service: RecordService,
}

impl CommandContext {
    /// Open the configured database and wrap it in a record service
    pub fn new(config: AppConfig) -> Result<Self> {
        debug!(db = %config.db_path.display(), "connecting to database");
        let db = RecordDatabase::open(&config.db_path)?;
        let service = RecordService::new(db, config.sources.clone());

        Ok(Self { config, service })
    }
}

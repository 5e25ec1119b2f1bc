//! Serve command implementation

use super::common::CommandContext;
use crate::{
    server::{self, AppState},
    RecordKind, Result,
};
use tracing::{info, warn};

/// Handle the serve command
///
/// With `reload`, both kinds are reloaded before the listener starts. A
/// missing stats file is not fatal: the stats endpoint reports it per request.
pub async fn handle_serve(ctx: CommandContext, reload: bool) -> Result<()> {
    if reload {
        for kind in RecordKind::ALL {
            match ctx.service.load(kind) {
                Ok(report) => info!(%kind, rows = report.rows, "startup reload complete"),
                Err(e) if kind == RecordKind::Stats => {
                    warn!(%kind, error = %e, "startup reload failed")
                }
                Err(e) => return Err(e),
            }
        }
    }

    let CommandContext { config, service } = ctx;
    let state = AppState::new(service).with_static_dir(config.static_dir.clone());
    server::serve(&config, state).await
}

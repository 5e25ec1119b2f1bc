//! JSON endpoints
//!
//! Store access is blocking (SQLite and CSV), so each handler hands the work
//! to the blocking pool.

use super::AppState;
use crate::error::Result;
use crate::storage::{SalaryRecord, StatsRecord};
use axum::{extract::State, Json};
use std::sync::Arc;
use tokio::task::spawn_blocking;

/// `GET /data`
pub async fn salary_data_handler(State(state): State<AppState>) -> Result<Json<Vec<SalaryRecord>>> {
    let service = Arc::clone(&state.service);
    let records = spawn_blocking(move || service.list_salaries()).await??;
    Ok(Json(records))
}

/// `GET /player-stats`
pub async fn player_stats_handler(State(state): State<AppState>) -> Result<Json<Vec<StatsRecord>>> {
    let service = Arc::clone(&state.service);
    let records = spawn_blocking(move || service.list_stats()).await??;
    Ok(Json(records))
}

//! Record store and query service
//!
//! Wraps the database with the lazy-fill policy: a query against a kind with
//! no stored records runs a full load before answering. The check and the
//! load happen under one lock, so concurrent first requests load once.

use crate::cli::types::RecordKind;
use crate::core::SourcePaths;
use crate::error::{GamesError, Result};
use crate::ingest::{load_salary_records, load_stats_records, SourceOrigin};
use crate::storage::{RecordDatabase, SalaryRecord, StatsRecord};
use serde::Serialize;
use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Mutex, MutexGuard,
};
use std::time::Instant;
use tracing::{debug, info};

#[cfg(test)]
mod tests;

/// Summary of one completed load
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadReport {
    pub kind: RecordKind,
    pub rows: usize,
    /// Salary loads record whether the source was synthesized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<SourceOrigin>,
    pub elapsed_ms: u64,
}

/// Shared handle over the record database
pub struct RecordService {
    db: Mutex<RecordDatabase>,
    sources: SourcePaths,
    populated: [AtomicBool; 2],
    loads: [AtomicUsize; 2],
}

impl RecordService {
    pub fn new(db: RecordDatabase, sources: SourcePaths) -> Self {
        Self {
            db: Mutex::new(db),
            sources,
            populated: [AtomicBool::new(false), AtomicBool::new(false)],
            loads: [AtomicUsize::new(0), AtomicUsize::new(0)],
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, RecordDatabase>> {
        self.db.lock().map_err(|_| GamesError::Task {
            message: "record database lock poisoned".to_string(),
        })
    }

    /// Clear all records of `kind`, run the loader, and store the result.
    ///
    /// The kind is left empty if the loader fails.
    pub fn load(&self, kind: RecordKind) -> Result<LoadReport> {
        let mut db = self.lock()?;
        self.load_locked(&mut db, kind)
    }

    fn load_locked(&self, db: &mut RecordDatabase, kind: RecordKind) -> Result<LoadReport> {
        let started = Instant::now();
        info!(%kind, "loading records");

        self.populated[kind.index()].store(false, Ordering::SeqCst);
        db.clear(kind)?;

        let (rows, origin) = match kind {
            RecordKind::Salary => {
                let (records, origin) = load_salary_records(&self.sources.salary_csv)?;
                (db.replace_salary_records(&records)?, Some(origin))
            }
            RecordKind::Stats => {
                let records = load_stats_records(&self.sources.stats_csv)?;
                (db.replace_stats_records(&records)?, None)
            }
        };

        self.loads[kind.index()].fetch_add(1, Ordering::SeqCst);
        self.populated[kind.index()].store(true, Ordering::SeqCst);

        let report = LoadReport {
            kind,
            rows,
            origin,
            elapsed_ms: started.elapsed().as_millis() as u64,
        };
        info!(%kind, rows, elapsed_ms = report.elapsed_ms, "records loaded");
        Ok(report)
    }

    /// Run a load if `kind` has never been populated and has no stored rows.
    ///
    /// Returns the report when a load ran.
    pub fn ensure_loaded(&self, kind: RecordKind) -> Result<Option<LoadReport>> {
        let mut db = self.lock()?;
        self.ensure_loaded_locked(&mut db, kind)
    }

    fn ensure_loaded_locked(
        &self,
        db: &mut RecordDatabase,
        kind: RecordKind,
    ) -> Result<Option<LoadReport>> {
        if self.populated[kind.index()].load(Ordering::SeqCst) {
            return Ok(None);
        }

        if db.count(kind)? > 0 {
            debug!(%kind, "store already populated");
            self.populated[kind.index()].store(true, Ordering::SeqCst);
            return Ok(None);
        }

        debug!(%kind, "store empty, loading on first read");
        self.load_locked(db, kind).map(Some)
    }

    /// Every salary record in storage order, loading first if empty
    pub fn list_salaries(&self) -> Result<Vec<SalaryRecord>> {
        let mut db = self.lock()?;
        self.ensure_loaded_locked(&mut db, RecordKind::Salary)?;
        db.list_salary_records()
    }

    /// Every stored stats record in storage order, loading first if empty
    pub fn list_stats(&self) -> Result<Vec<StatsRecord>> {
        let mut db = self.lock()?;
        self.ensure_loaded_locked(&mut db, RecordKind::Stats)?;
        db.list_stats_records()
    }

    /// Number of records of `kind` currently stored (no lazy load)
    pub fn stored_count(&self, kind: RecordKind) -> Result<usize> {
        self.lock()?.count(kind)
    }

    pub fn is_populated(&self, kind: RecordKind) -> bool {
        self.populated[kind.index()].load(Ordering::SeqCst)
    }

    /// How many loads of `kind` have completed in this process
    pub fn load_count(&self, kind: RecordKind) -> usize {
        self.loads[kind.index()].load(Ordering::SeqCst)
    }
}

//! Synthesize command implementation

use crate::{core::AppConfig, ingest::write_synthetic_salary_csv, Result};

/// Handle the synthesize command
///
/// Returns `false` when an existing file was left alone.
pub fn handle_synthesize(config: &AppConfig, force: bool) -> Result<bool> {
    let path = &config.sources.salary_csv;

    if path.exists() && !force {
        println!(
            "Salary data already exists at {} (use --force to overwrite)",
            path.display()
        );
        return Ok(false);
    }

    let rows = write_synthetic_salary_csv(path)?;
    println!("✓ Wrote {} sample salary rows to {}", rows, path.display());
    Ok(true)
}

//! Deterministic synthetic salary dataset.
//!
//! Used when no salary source exists so the salary game always has data.
//! The dataset is a fixed list of contracts for a reference season plus two
//! earlier seasons derived by fixed decay multipliers.

use crate::core::paths::write_bytes;
use crate::error::Result;
use serde::Serialize;
use std::path::Path;
use tracing::info;


pub const REFERENCE_SEASON: &str = "2022-2023";

/// Earlier seasons and the multiplier applied to each reference salary
pub const DERIVED_SEASONS: [(&str, f64); 2] = [("2021-2022", 0.95), ("2020-2021", 0.90)];

/// Reference-season contracts, in file order
pub const BASE_SALARIES: [(&str, u64); 50] = [
    ("LeBron James", 44_474_988),
    ("Stephen Curry", 48_070_014),
    ("Kevin Durant", 44_119_845),
    ("Giannis Antetokounmpo", 42_492_492),
    ("Damian Lillard", 42_492_492),
    ("Kawhi Leonard", 42_492_492),
    ("Paul George", 42_492_492),
    ("Klay Thompson", 40_600_080),
    ("Jimmy Butler", 37_653_300),
    ("Kyrie Irving", 36_934_550),
    ("Trae Young", 37_096_500),
    ("Devin Booker", 33_833_400),
    ("Joel Embiid", 33_616_770),
    ("Anthony Davis", 37_980_720),
    ("Nikola Jokic", 33_047_803),
    ("Luka Doncic", 37_096_500),
    ("Jayson Tatum", 30_351_780),
    ("Zion Williamson", 13_534_817),
    ("Ja Morant", 12_119_440),
    ("Zach LaVine", 37_096_500),
    ("Bradley Beal", 43_279_250),
    ("Karl-Anthony Towns", 33_833_400),
    ("Donovan Mitchell", 30_913_750),
    ("Bam Adebayo", 30_351_780),
    ("Deandre Ayton", 32_459_438),
    ("Michael Porter Jr.", 30_913_750),
    ("Shai Gilgeous-Alexander", 30_913_750),
    ("Jaylen Brown", 28_741_071),
    ("Ben Simmons", 35_448_672),
    ("Pascal Siakam", 35_448_672),
    ("Draymond Green", 25_806_469),
    ("CJ McCollum", 33_333_333),
    ("Rudy Gobert", 38_172_414),
    ("Khris Middleton", 37_948_276),
    ("Jrue Holiday", 32_544_000),
    ("Brandon Ingram", 31_650_600),
    ("De'Aaron Fox", 30_351_780),
    ("Jamal Murray", 31_650_600),
    ("Julius Randle", 23_760_000),
    ("Kristaps Porzingis", 33_833_400),
    ("John Wall", 47_345_760),
    ("Russell Westbrook", 47_063_478),
    ("Chris Paul", 28_400_000),
    ("Kyle Lowry", 28_333_334),
    ("Gordon Hayward", 30_075_000),
    ("Tobias Harris", 37_633_050),
    ("Kevin Love", 31_258_256),
    ("DeMar DeRozan", 27_300_000),
    ("Myles Turner", 17_500_000),
    ("Jarrett Allen", 20_000_000),
];

/// Where the salary records of a load came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "origin", rename_all = "lowercase")]
pub enum SourceOrigin {
    /// An existing file on disk
    Existing,
    /// Written from the synthetic dataset during this load
    Synthesized { rows: usize },
}

#[derive(Debug, Serialize)]
struct SampleRow<'a> {
    player: &'a str,
    season: &'a str,
    salary: u64,
}

fn sample_rows() -> Vec<SampleRow<'static>> {
    let mut rows: Vec<SampleRow<'static>> = BASE_SALARIES
        .iter()
        .map(|&(player, salary)| SampleRow {
            player,
            season: REFERENCE_SEASON,
            salary,
        })
        .collect();

    for &(player, salary) in BASE_SALARIES.iter() {
        for &(season, multiplier) in DERIVED_SEASONS.iter() {
            rows.push(SampleRow {
                player,
                season,
                salary: (salary as f64 * multiplier) as u64,
            });
        }
    }

    rows
}

/// Render the synthetic dataset as CSV with a `player,season,salary` header.
pub fn render_synthetic_salary_csv() -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in sample_rows() {
        writer.serialize(row)?;
    }

    writer.into_inner().map_err(|e| e.into_error().into())
}

/// Write the synthetic dataset to `path`, replacing any existing file.
///
/// Returns the number of data rows written.
pub fn write_synthetic_salary_csv(path: &Path) -> Result<usize> {
    let contents = render_synthetic_salary_csv()?;
    write_bytes(path, &contents)?;

    let rows = BASE_SALARIES.len() * (1 + DERIVED_SEASONS.len());
    info!(path = %path.display(), rows, "wrote synthetic salary data");
    Ok(rows)
}

/// Make sure a salary source exists at `path`, synthesizing one if absent.
pub fn ensure_salary_source(path: &Path) -> Result<SourceOrigin> {
    if path.exists() {
        info!(path = %path.display(), "using existing salary data");
        return Ok(SourceOrigin::Existing);
    }

    let rows = write_synthetic_salary_csv(path)?;
    Ok(SourceOrigin::Synthesized { rows })
}

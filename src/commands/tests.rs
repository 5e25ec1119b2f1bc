//! Unit tests for command handlers

use super::*;
use crate::{
    core::SourcePaths,
    ingest::SourceOrigin,
    service::LoadReport,
    storage::{SalaryRecord, StatsRecord},
    RecordKind,
};
use common::CommandContext;
use list::{format_salary_line, format_stats_line, select, ListParams};
use std::path::Path;
use tempfile::TempDir;

fn test_config(dir: &Path) -> AppConfig {
    AppConfig {
        db_path: dir.join("records.db"),
        sources: SourcePaths {
            salary_csv: dir.join("nba_player_salaries.csv"),
            stats_csv: dir.join("nba_per_game_stats.csv"),
        },
        ..AppConfig::default()
    }
}

fn salary_record(id: i64, season: &str) -> SalaryRecord {
    SalaryRecord {
        id,
        rank: id as u32,
        player: format!("Player {}", id),
        season: season.to_string(),
        salary: 1_000_000.0 * id as f64,
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_resolve_config_applies_overrides() {
        let _guard = crate::core::config::ENV_LOCK
            .lock()
            .unwrap_or_else(|e| e.into_inner());
        std::env::remove_var(crate::core::config::PORT_ENV_VAR);

        let paths = CommonPaths {
            db: Some("custom.db".into()),
            salary_csv: None,
            stats_csv: Some("custom_stats.csv".into()),
        };

        let config = resolve_config(paths).unwrap();
        assert_eq!(config.db_path, Path::new("custom.db"));
        assert_eq!(config.sources.stats_csv, Path::new("custom_stats.csv"));
    }
}

#[cfg(test)]
mod context_tests {
    use super::*;

    #[test]
    fn test_command_context_creates_database_file() {
        let dir = TempDir::new().unwrap();
        let config = test_config(dir.path());

        let ctx = CommandContext::new(config.clone()).unwrap();
        assert!(config.db_path.exists());
        assert_eq!(ctx.service.stored_count(RecordKind::Salary).unwrap(), 0);
    }

    #[test]
    fn test_load_then_reopen_serves_without_reload() {
        let dir = TempDir::new().unwrap();
        let config = test_config(dir.path());

        {
            let ctx = CommandContext::new(config.clone()).unwrap();
            load::handle_load(&ctx, RecordKind::Salary, false).unwrap();
        }

        // File-backed store survives; a new process does not reload
        let ctx = CommandContext::new(config).unwrap();
        assert_eq!(ctx.service.list_salaries().unwrap().len(), 150);
        assert_eq!(ctx.service.load_count(RecordKind::Salary), 0);
    }

    #[test]
    fn test_list_stats_without_source_fails() {
        let dir = TempDir::new().unwrap();
        let ctx = CommandContext::new(test_config(dir.path())).unwrap();

        let result = list::handle_list(&ctx, RecordKind::Stats, ListParams::default());
        assert!(matches!(
            result,
            Err(crate::GamesError::SourceNotFound { .. })
        ));
    }
}

#[cfg(test)]
mod load_tests {
    use super::*;

    #[test]
    fn test_describe_report_synthesized() {
        let report = LoadReport {
            kind: RecordKind::Salary,
            rows: 150,
            origin: Some(SourceOrigin::Synthesized { rows: 150 }),
            elapsed_ms: 12,
        };

        let text = load::describe_report(&report);
        assert!(text.contains("Loaded 150 salary records"));
        assert!(text.contains("synthesized"));
    }

    #[test]
    fn test_describe_report_stats() {
        let report = LoadReport {
            kind: RecordKind::Stats,
            rows: 87,
            origin: None,
            elapsed_ms: 3,
        };

        let text = load::describe_report(&report);
        assert!(text.contains("Loaded 87 stats records"));
        assert!(!text.contains("synthesized"));
    }
}

#[cfg(test)]
mod list_tests {
    use super::*;

    #[test]
    fn test_select_filters_by_season_and_keeps_order() {
        let records = vec![
            salary_record(1, "2022-2023"),
            salary_record(2, "2021-2022"),
            salary_record(3, "2022-2023"),
        ];
        let params = ListParams {
            season: Some("2022-2023".to_string()),
            ..ListParams::default()
        };

        let selected = select(records, &params, |r| &r.season);
        let ids: Vec<i64> = selected.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_select_limit() {
        let records = vec![
            salary_record(1, "2022-2023"),
            salary_record(2, "2022-2023"),
            salary_record(3, "2022-2023"),
        ];
        let params = ListParams {
            limit: Some(2),
            ..ListParams::default()
        };

        assert_eq!(select(records, &params, |r| &r.season).len(), 2);
    }

    #[test]
    fn test_select_no_filters_returns_everything() {
        let records = vec![salary_record(1, ""), salary_record(2, "2020-2021")];
        assert_eq!(
            select(records, &ListParams::default(), |r| &r.season).len(),
            2
        );
    }

    #[test]
    fn test_format_salary_line() {
        let line = format_salary_line(&salary_record(2, "2021-2022"));
        assert!(line.starts_with("#2"));
        assert!(line.contains("Player 2"));
        assert!(line.contains("2021-2022"));
        assert!(line.contains("2000000"));
    }

    #[test]
    fn test_format_stats_line() {
        let record = StatsRecord {
            id: 1,
            rank: 9,
            player: "Jimmy Butler".to_string(),
            team: "MIA".to_string(),
            position: "SF".to_string(),
            age: 33,
            games: 64,
            mpg: 33.4,
            ppg: 22.9,
            rpg: 5.9,
            apg: 5.3,
            spg: 1.8,
            bpg: 0.3,
            season: "2022-23".to_string(),
            year: 2023,
            source_id: "u9".to_string(),
        };

        let line = format_stats_line(&record);
        assert!(line.starts_with("#9"));
        assert!(line.contains("Jimmy Butler"));
        assert!(line.contains("MIA"));
        assert!(line.contains("64g"));
        assert!(line.contains("22.9 pts"));
    }
}

#[cfg(test)]
mod synthesize_tests {
    use super::*;

    #[test]
    fn test_synthesize_writes_then_refuses_without_force() {
        let dir = TempDir::new().unwrap();
        let config = test_config(dir.path());

        assert!(synthesize::handle_synthesize(&config, false).unwrap());
        assert!(config.sources.salary_csv.exists());

        std::fs::write(&config.sources.salary_csv, "player,season,salary\n").unwrap();
        assert!(!synthesize::handle_synthesize(&config, false).unwrap());
        assert_eq!(
            std::fs::read_to_string(&config.sources.salary_csv).unwrap(),
            "player,season,salary\n"
        );

        assert!(synthesize::handle_synthesize(&config, true).unwrap());
        let contents = std::fs::read_to_string(&config.sources.salary_csv).unwrap();
        assert_eq!(contents.lines().count(), 151);
    }
}

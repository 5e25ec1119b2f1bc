//! Unit tests for the lazy-loading record service

use super::*;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

const STATS_CSV: &str = "\
Unique_ID,Rk,Player,Team,Pos,Age,G,MP,PTS,TRB,AST,STL,BLK,Year
a,1,Joel Embiid,PHI,C,28,66,34.6,33.1,10.2,4.2,1.0,1.7,2023
b,2,Luka Doncic,DAL,PG,23,66,36.2,32.4,8.6,8.0,1.4,0.5,2023
c,3,Bench Guy,DAL,SG,30,12,10.0,3.0,1.0,1.0,0.2,0.1,2023
d,250,Deep Rotation,BOS,PF,25,70,14.0,5.0,3.0,1.0,0.3,0.3,2023
";

fn service_in(dir: &Path) -> RecordService {
    let db = RecordDatabase::open_in_memory().unwrap();
    RecordService::new(
        db,
        SourcePaths {
            salary_csv: dir.join("nba_player_salaries.csv"),
            stats_csv: dir.join("nba_per_game_stats.csv"),
        },
    )
}

#[cfg(test)]
mod lazy_load_tests {
    use super::*;

    #[test]
    fn test_first_salary_query_loads_once() {
        let dir = TempDir::new().unwrap();
        let service = service_in(dir.path());

        assert!(!service.is_populated(RecordKind::Salary));
        assert_eq!(service.load_count(RecordKind::Salary), 0);

        let first = service.list_salaries().unwrap();
        assert_eq!(service.load_count(RecordKind::Salary), 1);
        assert!(service.is_populated(RecordKind::Salary));
        assert_eq!(first.len(), 150);
        assert!(first.iter().all(|r| r.rank >= 1));

        let second = service.list_salaries().unwrap();
        assert_eq!(service.load_count(RecordKind::Salary), 1);
        assert_eq!(first, second);
    }

    #[test]
    fn test_existing_rows_skip_load() {
        let dir = TempDir::new().unwrap();
        let mut db = RecordDatabase::open_in_memory().unwrap();
        db.replace_salary_records(&[crate::storage::NewSalaryRecord {
            player: "Preloaded".to_string(),
            season: "2022-2023".to_string(),
            salary: 1.0,
            rank: 1,
        }])
        .unwrap();

        let service = RecordService::new(
            db,
            SourcePaths {
                salary_csv: dir.path().join("salaries.csv"),
                stats_csv: dir.path().join("stats.csv"),
            },
        );

        let records = service.list_salaries().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].player, "Preloaded");
        assert_eq!(service.load_count(RecordKind::Salary), 0);
        assert!(service.is_populated(RecordKind::Salary));
        // No synthesis happened
        assert!(!dir.path().join("salaries.csv").exists());
    }

    #[test]
    fn test_ensure_loaded_reports_only_when_loading() {
        let dir = TempDir::new().unwrap();
        let service = service_in(dir.path());

        let report = service.ensure_loaded(RecordKind::Salary).unwrap().unwrap();
        assert_eq!(report.kind, RecordKind::Salary);
        assert_eq!(report.rows, 150);
        assert_eq!(report.origin, Some(SourceOrigin::Synthesized { rows: 150 }));

        assert!(service.ensure_loaded(RecordKind::Salary).unwrap().is_none());
    }

    #[test]
    fn test_concurrent_first_queries_load_once() {
        let dir = TempDir::new().unwrap();
        let service = Arc::new(service_in(dir.path()));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let service = Arc::clone(&service);
                std::thread::spawn(move || service.list_salaries().unwrap().len())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 150);
        }
        assert_eq!(service.load_count(RecordKind::Salary), 1);
        assert_eq!(service.stored_count(RecordKind::Salary).unwrap(), 150);
    }
}

#[cfg(test)]
mod stats_tests {
    use super::*;

    #[test]
    fn test_stats_query_filters_rows() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("nba_per_game_stats.csv"), STATS_CSV).unwrap();
        let service = service_in(dir.path());

        let records = service.list_stats().unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.player.as_str()).collect();
        assert_eq!(names, vec!["Joel Embiid", "Luka Doncic"]);
        assert!(records.iter().all(|r| r.games >= 41 && r.rank <= 100));
        assert_eq!(service.load_count(RecordKind::Stats), 1);
    }

    #[test]
    fn test_missing_stats_source_is_not_found_and_retried() {
        let dir = TempDir::new().unwrap();
        let service = service_in(dir.path());

        match service.list_stats() {
            Err(GamesError::SourceNotFound { .. }) => (),
            other => panic!("Expected SourceNotFound, got {:?}", other.map(|r| r.len())),
        }
        assert!(!service.is_populated(RecordKind::Stats));
        assert_eq!(service.load_count(RecordKind::Stats), 0);

        // Once the file shows up the next query loads it
        std::fs::write(dir.path().join("nba_per_game_stats.csv"), STATS_CSV).unwrap();
        assert_eq!(service.list_stats().unwrap().len(), 2);
        assert_eq!(service.load_count(RecordKind::Stats), 1);
    }

    #[test]
    fn test_kinds_load_independently() {
        let dir = TempDir::new().unwrap();
        let service = service_in(dir.path());

        service.list_salaries().unwrap();
        assert!(service.is_populated(RecordKind::Salary));
        assert!(!service.is_populated(RecordKind::Stats));
        assert_eq!(service.stored_count(RecordKind::Stats).unwrap(), 0);
    }
}

#[cfg(test)]
mod reload_tests {
    use super::*;

    #[test]
    fn test_explicit_load_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let service = service_in(dir.path());

        service.load(RecordKind::Salary).unwrap();
        let first = service.list_salaries().unwrap();

        let report = service.load(RecordKind::Salary).unwrap();
        assert_eq!(report.origin, Some(SourceOrigin::Existing));
        let second = service.list_salaries().unwrap();

        assert_eq!(first, second);
        assert_eq!(service.load_count(RecordKind::Salary), 2);
    }

    #[test]
    fn test_failed_load_leaves_kind_empty() {
        let dir = TempDir::new().unwrap();
        let stats_path = dir.path().join("nba_per_game_stats.csv");
        std::fs::write(&stats_path, STATS_CSV).unwrap();
        let service = service_in(dir.path());

        service.load(RecordKind::Stats).unwrap();
        assert_eq!(service.stored_count(RecordKind::Stats).unwrap(), 2);

        std::fs::remove_file(&stats_path).unwrap();
        assert!(service.load(RecordKind::Stats).is_err());
        assert_eq!(service.stored_count(RecordKind::Stats).unwrap(), 0);
        assert!(!service.is_populated(RecordKind::Stats));
    }

    #[test]
    fn test_reload_picks_up_changed_source() {
        let dir = TempDir::new().unwrap();
        let salary_path = dir.path().join("nba_player_salaries.csv");
        std::fs::write(&salary_path, "player,season,salary\nA,2022-2023,1\n").unwrap();
        let service = service_in(dir.path());

        assert_eq!(service.list_salaries().unwrap().len(), 1);

        std::fs::write(
            &salary_path,
            "player,season,salary\nA,2022-2023,1\nB,2022-2023,2\n",
        )
        .unwrap();
        // Populated kinds are served from storage until an explicit load
        assert_eq!(service.list_salaries().unwrap().len(), 1);

        service.load(RecordKind::Salary).unwrap();
        let records = service.list_salaries().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].player, "B");
    }
}

#[cfg(test)]
mod short_row_tests {
    use super::*;

    #[test]
    fn test_short_rows_still_load() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("nba_player_salaries.csv"),
            "player,season,salary\nA,2022-2023,5\nB,2022-2023\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("nba_per_game_stats.csv"),
            "Unique_ID,Rk,Player,Team,Pos,Age,G,MP,PTS,TRB,AST,STL,BLK,Year\n\
             a,1,Joel Embiid,PHI,C,28,66,34.6,33.1,10.2,4.2,1.0,1.7,2023\n\
             b,2,Luka Doncic,DAL,PG,23,66\n",
        )
        .unwrap();
        let service = service_in(dir.path());

        let salaries = service.list_salaries().unwrap();
        let order: Vec<(&str, f64, u32)> = salaries
            .iter()
            .map(|r| (r.player.as_str(), r.salary, r.rank))
            .collect();
        assert_eq!(order, vec![("A", 5.0, 1), ("B", 0.0, 2)]);

        // The short stats row still meets the thresholds
        let stats = service.list_stats().unwrap();
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[1].player, "Luka Doncic");
        assert_eq!(stats[1].ppg, 0.0);
        assert_eq!(stats[1].season, "");
    }
}

//! Bulk replace and read operations

use super::{models::*, schema::RecordDatabase};
use crate::cli::types::RecordKind;
use crate::error::Result;
use rusqlite::{params, Row};

impl RecordDatabase {
    /// Replace every salary record with `records`, in one transaction
    pub fn replace_salary_records(&mut self, records: &[NewSalaryRecord]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM salary_records", [])?;

        {
            let mut stmt = tx.prepare(
                "INSERT INTO salary_records (player, season, salary, rank)
                 VALUES (?, ?, ?, ?)",
            )?;
            for record in records {
                stmt.execute(params![
                    record.player,
                    record.season,
                    record.salary,
                    record.rank
                ])?;
            }
        }

        tx.commit()?;
        Ok(records.len())
    }

    /// Replace every stats record with `records`, in one transaction
    pub fn replace_stats_records(&mut self, records: &[NewStatsRecord]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM stats_records", [])?;

        {
            let mut stmt = tx.prepare(
                "INSERT INTO stats_records
                 (source_id, rank, player, team, position, age, games,
                  mpg, ppg, rpg, apg, spg, bpg, season, year)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            )?;
            for record in records {
                stmt.execute(params![
                    record.source_id,
                    record.rank,
                    record.player,
                    record.team,
                    record.position,
                    record.age,
                    record.games,
                    record.mpg,
                    record.ppg,
                    record.rpg,
                    record.apg,
                    record.spg,
                    record.bpg,
                    record.season,
                    record.year
                ])?;
            }
        }

        tx.commit()?;
        Ok(records.len())
    }

    /// All salary records in insertion order
    pub fn list_salary_records(&self) -> Result<Vec<SalaryRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, rank, player, season, salary
             FROM salary_records
             ORDER BY id",
        )?;

        let rows = stmt.query_map([], Self::row_to_salary_record)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    /// All stats records in insertion order
    pub fn list_stats_records(&self) -> Result<Vec<StatsRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, rank, player, team, position, age, games,
                    mpg, ppg, rpg, apg, spg, bpg, season, year, source_id
             FROM stats_records
             ORDER BY id",
        )?;

        let rows = stmt.query_map([], Self::row_to_stats_record)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    /// Number of stored records of `kind`
    pub fn count(&self, kind: RecordKind) -> Result<usize> {
        let sql = format!("SELECT COUNT(*) FROM {}", kind.table_name());
        let count: i64 = self.conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Delete every record of `kind`
    pub fn clear(&mut self, kind: RecordKind) -> Result<()> {
        let sql = format!("DELETE FROM {}", kind.table_name());
        self.conn.execute(&sql, [])?;
        Ok(())
    }

    /// Clear all data from the database
    pub fn clear_all(&mut self) -> Result<()> {
        for kind in RecordKind::ALL {
            self.clear(kind)?;
        }
        Ok(())
    }

    fn row_to_salary_record(row: &Row) -> rusqlite::Result<SalaryRecord> {
        Ok(SalaryRecord {
            id: row.get(0)?,
            rank: row.get(1)?,
            player: row.get(2)?,
            season: row.get(3)?,
            salary: row.get(4)?,
        })
    }

    fn row_to_stats_record(row: &Row) -> rusqlite::Result<StatsRecord> {
        Ok(StatsRecord {
            id: row.get(0)?,
            rank: row.get(1)?,
            player: row.get(2)?,
            team: row.get(3)?,
            position: row.get(4)?,
            age: row.get(5)?,
            games: row.get(6)?,
            mpg: row.get(7)?,
            ppg: row.get(8)?,
            rpg: row.get(9)?,
            apg: row.get(10)?,
            spg: row.get(11)?,
            bpg: row.get(12)?,
            season: row.get(13)?,
            year: row.get(14)?,
            source_id: row.get(15)?,
        })
    }
}

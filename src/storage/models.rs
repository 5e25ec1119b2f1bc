//! Data models for the storage layer

use serde::{Deserialize, Serialize};

/// A ranked salary row ready for insertion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSalaryRecord {
    pub player: String,
    pub season: String,
    pub salary: f64,
    pub rank: u32, // 1-based, dense within the season
}

/// Salary record as stored and served by `/data`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRecord {
    pub id: i64,
    pub rank: u32,
    pub player: String,
    pub season: String,
    pub salary: f64,
}

/// A filtered per-game stats row ready for insertion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStatsRecord {
    pub source_id: String,
    pub rank: i32, // As supplied by the source
    pub player: String,
    pub team: String,
    pub position: String,
    pub age: u32,
    pub games: u32,
    pub mpg: f64,
    pub ppg: f64,
    pub rpg: f64,
    pub apg: f64,
    pub spg: f64,
    pub bpg: f64,
    pub season: String,
    pub year: i32,
}

/// Stats record as stored and served by `/player-stats`
///
/// `source_id` and `year` are kept in storage but left out of the JSON shape
/// the guess-player game consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsRecord {
    pub id: i64,
    pub rank: i32,
    pub player: String,
    pub team: String,
    pub position: String,
    pub age: u32,
    pub games: u32,
    pub mpg: f64,
    pub ppg: f64,
    pub rpg: f64,
    pub apg: f64,
    pub spg: f64,
    pub bpg: f64,
    pub season: String,
    #[serde(skip_serializing, default)]
    pub year: i32,
    #[serde(skip_serializing, default)]
    pub source_id: String,
}

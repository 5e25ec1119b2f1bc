//! List command implementation

use super::common::CommandContext;
use crate::{
    storage::{SalaryRecord, StatsRecord},
    RecordKind, Result,
};

/// Parameters for the list command
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    pub as_json: bool,
    pub season: Option<String>,
    pub limit: Option<usize>,
}

/// Handle the list command
pub fn handle_list(ctx: &CommandContext, kind: RecordKind, params: ListParams) -> Result<()> {
    let output = match kind {
        RecordKind::Salary => {
            let records = select(ctx.service.list_salaries()?, &params, |r| &r.season);
            render(&records, params.as_json, format_salary_line)?
        }
        RecordKind::Stats => {
            let records = select(ctx.service.list_stats()?, &params, |r| &r.season);
            render(&records, params.as_json, format_stats_line)?
        }
    };

    println!("{}", output);
    Ok(())
}

/// Apply the season filter and limit, keeping storage order
pub fn select<T>(records: Vec<T>, params: &ListParams, season_of: impl Fn(&T) -> &String) -> Vec<T> {
    records
        .into_iter()
        .filter(|r| {
            params
                .season
                .as_ref()
                .map_or(true, |season| season_of(r) == season)
        })
        .take(params.limit.unwrap_or(usize::MAX))
        .collect()
}

fn render<T: serde::Serialize>(
    records: &[T],
    as_json: bool,
    line: impl Fn(&T) -> String,
) -> Result<String> {
    if as_json {
        return Ok(serde_json::to_string_pretty(records)?);
    }

    Ok(records.iter().map(line).collect::<Vec<_>>().join("\n"))
}

pub fn format_salary_line(record: &SalaryRecord) -> String {
    format!(
        "#{:<3} {:<26} {:<10} ${:>12.0}",
        record.rank, record.player, record.season, record.salary
    )
}

pub fn format_stats_line(record: &StatsRecord) -> String {
    format!(
        "#{:<3} {:<26} {:<4} {:<5} {:<8} {:>2}g {:>5.1} pts {:>4.1} reb {:>4.1} ast",
        record.rank,
        record.player,
        record.team,
        record.position,
        record.season,
        record.games,
        record.ppg,
        record.rpg,
        record.apg
    )
}

use aoc_core::{AocParser, ParseError, PartSolver, SolveError};
use aoc_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashMap;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(parts = 2)]
#[aoc(year = 2018, day = 4, tags = ["2018"])]
pub struct Solver;

/// Minute-by-minute sleep frequency per guard
pub type Timesheets = HashMap<u64, [u32; 60]>;

impl AocParser for Solver {
    type SharedData<'a> = Timesheets;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        // Timestamps are zero-padded, so sorting the raw records puts the
        // log in chronological order
        let mut records: Vec<&str> = input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        records.sort_unstable();

        let mut schedules: Timesheets = HashMap::new();
        let mut guard: Option<u64> = None;
        let mut sleep_start: usize = 0;

        for record in records {
            let minute = record
                .get(15..17)
                .and_then(|m| m.parse::<usize>().ok())
                .filter(|&m| m < 60)
                .ok_or_else(|| ParseError::InvalidFormat(format!("bad record: {}", record)))?;

            if let Some(id) = record.split('#').nth(1) {
                let id = id
                    .split_whitespace()
                    .next()
                    .and_then(|n| n.parse().ok())
                    .ok_or_else(|| ParseError::InvalidFormat(format!("bad guard: {}", record)))?;
                schedules.entry(id).or_insert([0; 60]);
                guard = Some(id);
            } else if record.contains("falls") {
                sleep_start = minute;
            } else if record.contains("wakes") {
                let id =
                    guard.ok_or_else(|| ParseError::MissingData("wake before any guard".into()))?;
                let timesheet = schedules.entry(id).or_insert([0; 60]);
                for slot in &mut timesheet[sleep_start..minute] {
                    *slot += 1;
                }
            } else {
                return Err(ParseError::InvalidFormat(format!("bad record: {}", record)));
            }
        }
        Ok(schedules)
    }
}

fn best_guard<K: Ord>(schedules: &Timesheets, key: impl Fn(&[u32; 60]) -> K) -> Option<u64> {
    schedules
        .iter()
        .max_by_key(|(id, timesheet)| (key(timesheet), *id))
        .map(|(&id, _)| id)
}

fn sleepiest_minute(timesheet: &[u32; 60]) -> u64 {
    let (minute, _) = timesheet
        .iter()
        .enumerate()
        .max_by_key(|&(_, count)| count)
        .unwrap_or((0, &0));
    minute as u64
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let id = best_guard(shared, |t| t.iter().sum::<u32>())
            .ok_or_else(|| SolveError::SolveFailed("no guards on record".into()))?;
        Ok((id * sleepiest_minute(&shared[&id])).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let id = best_guard(shared, |t| t.iter().max().copied().unwrap_or(0))
            .ok_or_else(|| SolveError::SolveFailed("no guards on record".into()))?;
        Ok((id * sleepiest_minute(&shared[&id])).to_string())
    }
}

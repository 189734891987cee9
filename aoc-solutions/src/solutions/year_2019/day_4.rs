use aoc_core::{AocParser, ParseError, PartSolver, SolveError};
use aoc_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(parts = 2)]
#[aoc(year = 2019, day = 4, tags = ["2019"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    low: u32,
    high: u32,
    // Part one's survivors, reused by part two
    candidates: Option<Vec<u32>>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let (low, high) = input
            .trim()
            .split_once('-')
            .ok_or_else(|| ParseError::InvalidFormat("expected low-high".into()))?;
        let low = low
            .trim()
            .parse()
            .map_err(|_| ParseError::InvalidFormat(format!("bad bound: {}", low)))?;
        let high = high
            .trim()
            .parse()
            .map_err(|_| ParseError::InvalidFormat(format!("bad bound: {}", high)))?;
        Ok(SharedData {
            low,
            high,
            candidates: None,
        })
    }
}

fn digits_never_decrease(password: u32) -> bool {
    password
        .to_string()
        .bytes()
        .tuple_windows()
        .all(|(a, b)| a <= b)
}

fn has_repeat(password: u32) -> bool {
    password
        .to_string()
        .bytes()
        .tuple_windows()
        .any(|(a, b)| a == b)
}

/// Some digit appears in a run of exactly two
fn has_isolated_pair(password: u32) -> bool {
    let text = password.to_string();
    let runs = text.bytes().chunk_by(|&b| b);
    (&runs).into_iter().any(|(_, run)| run.count() == 2)
}

fn candidates(shared: &mut SharedData) -> &[u32] {
    shared.candidates.get_or_insert_with(|| {
        (shared.low..=shared.high)
            .filter(|&p| digits_never_decrease(p) && has_repeat(p))
            .collect()
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(candidates(shared).len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let strict = candidates(shared)
            .iter()
            .filter(|&&p| has_isolated_pair(p))
            .count();
        Ok(strict.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monotonic_with_a_repeat() {
        assert!(digits_never_decrease(111111) && has_repeat(111111));
        assert!(!digits_never_decrease(223450));
        assert!(!has_repeat(123789));
    }

    #[test]
    fn isolated_pairs() {
        assert!(has_isolated_pair(112233));
        assert!(!has_isolated_pair(123444));
        assert!(has_isolated_pair(111122));
    }

    #[test]
    fn counts_over_a_range() {
        let mut shared = Solver::parse("111110-111135").unwrap();
        // 111111, 111112 ... all monotonic with repeats
        let part1: usize = <Solver as PartSolver<1>>::solve(&mut shared)
            .unwrap()
            .parse()
            .unwrap();
        let part2: usize = <Solver as PartSolver<2>>::solve(&mut shared)
            .unwrap()
            .parse()
            .unwrap();
        assert!(part1 > 0);
        assert!(part2 <= part1);
    }
}

use aoc_core::{AocParser, ParseError, PartSolver, SolveError};
use aoc_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashSet;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(parts = 2)]
#[aoc(year = 2018, day = 1, tags = ["2018"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                // `+3` parses fine once the sign prefix is peeled off
                line.strip_prefix('+')
                    .unwrap_or(line)
                    .parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("bad jump: {}", line)))
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if shared.is_empty() {
            return Err(SolveError::SolveFailed("no frequency jumps".into()));
        }

        let mut seen = HashSet::from([0]);
        let mut frequency = 0i64;

        for jump in shared.iter().cycle() {
            frequency += jump;
            if !seen.insert(frequency) {
                break;
            }
        }
        Ok(frequency.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve_part<const N: u8>(input: &str) -> String
    where
        Solver: PartSolver<N>,
    {
        let mut shared = Solver::parse(input).unwrap();
        <Solver as PartSolver<N>>::solve(&mut shared).unwrap()
    }

    #[test]
    fn final_frequency() {
        assert_eq!(solve_part::<1>("+1\n-2\n+3\n+1"), "3");
        assert_eq!(solve_part::<1>("+1\n+1\n+1"), "3");
        assert_eq!(solve_part::<1>("-1\n-2\n-3"), "-6");
    }

    #[test]
    fn first_repeated_frequency() {
        assert_eq!(solve_part::<2>("+1\n-2\n+3\n+1"), "2");
        assert_eq!(solve_part::<2>("+1\n-1"), "0");
        assert_eq!(solve_part::<2>("+3\n+3\n+4\n-2\n-4"), "10");
        assert_eq!(solve_part::<2>("-6\n+3\n+8\n+5\n-6"), "5");
        assert_eq!(solve_part::<2>("+7\n+7\n-2\n-7\n-4"), "14");
    }
}

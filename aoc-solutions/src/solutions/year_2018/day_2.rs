use crate::utils::collections::Counter;
use aoc_core::{AocParser, ParseError, PartSolver, SolveError};
use aoc_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(parts = 2)]
#[aoc(year = 2018, day = 2, tags = ["2018"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let ids: Vec<&str> = input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if ids.is_empty() {
            return Err(ParseError::MissingData("no box ids".into()));
        }
        Ok(ids)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut twos = 0u64;
        let mut threes = 0u64;

        for id in shared.iter() {
            let counts: Counter<char> = id.chars().collect();
            twos += counts.has_count(2) as u64;
            threes += counts.has_count(3) as u64;
        }
        Ok((twos * threes).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .tuple_combinations()
            .find_map(|(a, b)| {
                let mismatches = a
                    .chars()
                    .zip(b.chars())
                    .filter(|(ca, cb)| ca != cb)
                    .count();
                (mismatches == 1).then(|| {
                    a.chars()
                        .zip(b.chars())
                        .filter(|(ca, cb)| ca == cb)
                        .map(|(c, _)| c)
                        .collect()
                })
            })
            .ok_or_else(|| {
                SolveError::SolveFailed("no ids differ by exactly one character".into())
            })
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
    fn checksum_counts_doubles_and_triples() {
        let input = "abcdef\nbababc\nabbcde\nabcccd\naabcdd\nabcdee\nababab";
        assert_eq!(solve_part::<1>(input), "12");
    }

    #[test]
    fn common_letters_of_the_close_pair() {
        let input = "abcde\nfghij\nklmno\npqrst\nfguij\naxcye\nwvxyz";
        assert_eq!(solve_part::<2>(input), "fgij");
    }
}

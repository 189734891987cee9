use aoc_core::{AocParser, ParseError, PartSolver, SolveError};
use aoc_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(parts = 2)]
#[aoc(year = 2017, day = 2, tags = ["2017"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Vec<u64>>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                line.split_whitespace()
                    .map(|token| {
                        token
                            .parse()
                            .map_err(|_| ParseError::InvalidFormat(format!("bad cell: {}", token)))
                    })
                    .collect()
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let checksum: u64 = shared
            .iter()
            .filter_map(|row| {
                let (min, max) = row.iter().minmax().into_option()?;
                Some(max - min)
            })
            .sum();
        Ok(checksum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let checksum: u64 = shared
            .iter()
            .map(|row| {
                row.iter()
                    .tuple_combinations()
                    .find_map(|(&a, &b)| {
                        let (small, large) = if a < b { (a, b) } else { (b, a) };
                        (small != 0 && large % small == 0).then(|| large / small)
                    })
                    .unwrap_or(0)
            })
            .sum();
        Ok(checksum.to_string())
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
    fn min_max_checksum() {
        assert_eq!(solve_part::<1>("5 1 9 5\n7 5 3\n2 4 6 8"), "18");
    }

    #[test]
    fn even_division_checksum() {
        assert_eq!(solve_part::<2>("5 9 2 8\n9 4 7 3\n3 8 6 5"), "9");
    }
}

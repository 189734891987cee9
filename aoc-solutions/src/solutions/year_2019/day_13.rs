use crate::utils::intcode::Machine;
use aoc_core::{AocParser, ParseError, PartSolver, SolveError};
use aoc_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

const BLOCK_TILE: i64 = 2;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(parts = 1)]
#[aoc(year = 2019, day = 13, tags = ["2019", "intcode"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Machine::parse(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut cabinet = Machine::new(shared);
        cabinet
            .run()
            .map_err(|e| SolveError::SolveFailed(Box::new(e)))?;

        // The screen arrives as (x, y, tile) triples
        let blocks = cabinet
            .drain_output()
            .into_iter()
            .tuples()
            .filter(|&(_, _, tile)| tile == BLOCK_TILE)
            .count();
        Ok(blocks.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_block_tiles() {
        // Draws (1,2)=3 and (6,5)=2: one block
        let mut program = Solver::parse("104,1,104,2,104,3,104,6,104,5,104,2,99").unwrap();
        let answer = <Solver as PartSolver<1>>::solve(&mut program).unwrap();
        assert_eq!(answer, "1");
    }

    #[test]
    fn incomplete_triples_are_ignored() {
        let mut program = Solver::parse("104,1,104,2,99").unwrap();
        let answer = <Solver as PartSolver<1>>::solve(&mut program).unwrap();
        assert_eq!(answer, "0");
    }
}

use crate::utils::intcode::Machine;
use aoc_core::{AocParser, ParseError, PartSolver, SolveError};
use aoc_macros::{AocSolver, AutoRegisterSolver};
use rayon::prelude::*;

const TARGET_OUTPUT: i64 = 19_690_720;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(parts = 2)]
#[aoc(year = 2019, day = 2, tags = ["2019", "intcode"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Machine::parse(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

fn run_with(program: &[i64], noun: i64, verb: i64) -> Result<i64, SolveError> {
    let mut machine = Machine::new(program);
    machine.set_noun_verb(noun, verb);
    machine
        .run()
        .map_err(|e| SolveError::SolveFailed(Box::new(e)))?;
    Ok(machine.peek(0))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // Restore the "1202 program alarm" state
        Ok(run_with(shared, 12, 2)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // Brute force over the hundred-by-hundred noun/verb space
        let hit = (0..100i64)
            .into_par_iter()
            .find_map_first(|noun| {
                (0..100i64).find_map(|verb| {
                    match run_with(shared, noun, verb) {
                        Ok(TARGET_OUTPUT) => Some(100 * noun + verb),
                        _ => None,
                    }
                })
            });
        hit.map(|answer| answer.to_string())
            .ok_or_else(|| SolveError::SolveFailed("no noun/verb pair matches".into()))
    }
}

use crate::utils::intcode::Machine;
use aoc_core::{AocParser, ParseError, PartSolver, SolveError};
use aoc_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(parts = 2)]
#[aoc(year = 2019, day = 5, tags = ["2019", "intcode"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Machine::parse(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

/// Run the diagnostic program with one input; the answer is the final output
fn diagnostic(program: &[i64], system_id: i64) -> Result<String, SolveError> {
    let mut machine = Machine::new(program);
    machine.push_input(system_id);
    machine
        .run()
        .map_err(|e| SolveError::SolveFailed(Box::new(e)))?;
    machine
        .last_output()
        .map(|code| code.to_string())
        .ok_or_else(|| SolveError::SolveFailed("diagnostic produced no output".into()))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        diagnostic(shared, 1)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        diagnostic(shared, 5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echoes_its_input() {
        assert_eq!(diagnostic(&[3, 0, 4, 0, 99], 17).unwrap(), "17");
    }

    #[test]
    fn branches_around_eight() {
        let program = Machine::parse(
            "3,21,1008,21,8,20,1005,20,22,107,8,21,20,1006,20,31,\
             1106,0,36,98,0,0,1002,21,125,20,4,20,1105,1,46,104,\
             999,1105,1,46,1101,1000,1,20,4,20,1105,1,46,98,99",
        )
        .unwrap();
        assert_eq!(diagnostic(&program, 7).unwrap(), "999");
        assert_eq!(diagnostic(&program, 8).unwrap(), "1000");
        assert_eq!(diagnostic(&program, 9).unwrap(), "1001");
    }

    #[test]
    fn no_output_is_an_error() {
        assert!(diagnostic(&[99], 1).is_err());
    }
}

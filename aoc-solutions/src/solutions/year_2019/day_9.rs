use crate::utils::intcode::Machine;
use aoc_core::{AocParser, ParseError, PartSolver, SolveError};
use aoc_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(parts = 2)]
#[aoc(year = 2019, day = 9, tags = ["2019", "intcode"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Machine::parse(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

fn boost(program: &[i64], mode: i64) -> Result<String, SolveError> {
    let mut machine = Machine::new(program);
    machine.push_input(mode);
    machine
        .run()
        .map_err(|e| SolveError::SolveFailed(Box::new(e)))?;
    machine
        .last_output()
        .map(|value| value.to_string())
        .ok_or_else(|| SolveError::SolveFailed("BOOST produced no output".into()))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // Test mode; the output is the BOOST keycode
        boost(shared, 1)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // Sensor boost mode; the output is the distress signal coordinates
        boost(shared, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_itself_regardless_of_input() {
        // The quine ignores its input, so boost() sees its last output
        let answer = boost(
            &Machine::parse("109,1,204,-1,1001,100,1,100,1008,100,16,101,1006,101,0,99").unwrap(),
            1,
        )
        .unwrap();
        assert_eq!(answer, "99");
    }

    #[test]
    fn sixteen_digit_output() {
        let answer = boost(
            &Machine::parse("1102,34915192,34915192,7,4,7,99,0").unwrap(),
            1,
        )
        .unwrap();
        assert_eq!(answer.len(), 16);
    }

    #[test]
    fn large_constant_output() {
        let answer = boost(&Machine::parse("104,1125899906842624,99").unwrap(), 1).unwrap();
        assert_eq!(answer, "1125899906842624");
    }
}

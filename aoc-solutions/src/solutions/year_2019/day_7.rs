use crate::utils::collections::Pool;
use crate::utils::intcode::Machine;
use aoc_core::{AocParser, ParseError, PartSolver, SolveError};
use aoc_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

const AMPLIFIER_COUNT: usize = 5;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(parts = 2)]
#[aoc(year = 2019, day = 7, tags = ["2019", "intcode"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Machine::parse(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

/// Signal reaching the thrusters for one phase assignment.
///
/// The amplifiers form a ring: each one's output queue drains into the next
/// one's input queue. With phases 0-4 every amplifier halts after a single
/// pass; with 5-9 the ring keeps feeding back until the program stops.
fn thruster_signal(amplifiers: &mut [Machine], phases: &[i64]) -> Result<i64, SolveError> {
    for (amplifier, &phase) in amplifiers.iter_mut().zip(phases) {
        amplifier.push_input(phase);
    }
    amplifiers[0].push_input(0);

    let mut last_signal = None;
    loop {
        let mut all_halted = true;
        let mut moved = false;

        for i in 0..amplifiers.len() {
            amplifiers[i]
                .run()
                .map_err(|e| SolveError::SolveFailed(Box::new(e)))?;
            let outputs = amplifiers[i].drain_output();
            moved |= !outputs.is_empty();

            if i == amplifiers.len() - 1
                && let Some(&signal) = outputs.last()
            {
                last_signal = Some(signal);
            }
            let next = (i + 1) % amplifiers.len();
            for value in outputs {
                amplifiers[next].push_input(value);
            }
            all_halted &= amplifiers[i].is_halted();
        }

        if all_halted {
            break;
        }
        if !moved {
            return Err(SolveError::SolveFailed(
                "amplifier ring starved without halting".into(),
            ));
        }
    }

    last_signal.ok_or_else(|| SolveError::SolveFailed("no signal reached the thrusters".into()))
}

/// Best signal over every permutation of the given phase settings
fn best_signal(program: &[i64], phase_settings: [i64; AMPLIFIER_COUNT]) -> Result<i64, SolveError> {
    // One pool of machines reused across all 120 permutations
    let mut pool = Pool::new(|| Machine::new(program));
    let mut best = i64::MIN;

    for phases in phase_settings.iter().copied().permutations(AMPLIFIER_COUNT) {
        let mut amplifiers: Vec<Machine> = (0..AMPLIFIER_COUNT)
            .map(|_| {
                let mut machine = pool.take();
                machine.reset(program);
                machine
            })
            .collect();

        best = best.max(thruster_signal(&mut amplifiers, &phases)?);

        for machine in amplifiers {
            pool.restore(machine);
        }
    }
    Ok(best)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(best_signal(shared, [0, 1, 2, 3, 4])?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(best_signal(shared, [5, 6, 7, 8, 9])?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn best(source: &str, phases: [i64; 5]) -> i64 {
        best_signal(&Machine::parse(source).unwrap(), phases).unwrap()
    }

    #[test]
    fn single_pass_chains() {
        assert_eq!(
            best("3,15,3,16,1002,16,10,16,1,16,15,15,4,15,99,0,0", [0, 1, 2, 3, 4]),
            43210
        );
        assert_eq!(
            best(
                "3,23,3,24,1002,24,10,24,1002,23,-1,23,101,5,23,23,1,24,23,23,4,23,99,0,0",
                [0, 1, 2, 3, 4]
            ),
            54321
        );
        assert_eq!(
            best(
                "3,31,3,32,1002,32,10,32,1001,31,-2,31,1007,31,0,33,1002,33,7,33,1,33,31,31,1,32,31,31,4,31,99,0,0,0",
                [0, 1, 2, 3, 4]
            ),
            65210
        );
    }

    #[test]
    fn feedback_loops() {
        assert_eq!(
            best(
                "3,26,1001,26,-4,26,3,27,1002,27,2,27,1,27,26,27,4,27,1001,28,-1,28,1005,28,6,99,0,0,5",
                [5, 6, 7, 8, 9]
            ),
            139629729
        );
        assert_eq!(
            best(
                "3,52,1001,52,-5,52,3,53,1,52,56,54,1007,54,5,55,1005,55,26,1001,54,-5,54,1105,1,12,1,53,54,53,1008,54,0,55,1001,55,1,55,2,53,55,53,4,53,1001,56,-1,56,1005,56,6,99,0,0,0,0,10",
                [5, 6, 7, 8, 9]
            ),
            18216
        );
    }
}

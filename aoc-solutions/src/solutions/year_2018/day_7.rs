use aoc_core::{AocParser, ParseError, PartSolver, SolveError};
use aoc_macros::{AocSolver, AutoRegisterSolver};
use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap};

const WORKER_COUNT: usize = 5;
const BASE_DURATION: u32 = 60;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(parts = 2)]
#[aoc(year = 2018, day = 7, tags = ["2018"])]
pub struct Solver;

/// Step -> prerequisite steps. Ordered maps keep the alphabetical tie-break
/// the puzzle asks for.
pub type Requirements = BTreeMap<char, BTreeSet<char>>;

impl AocParser for Solver {
    type SharedData<'a> = Requirements;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut requirements = Requirements::new();

        for line in input.lines().filter(|line| !line.trim().is_empty()) {
            // Step C must be finished before step A can begin.
            let words: Vec<&str> = line.split_whitespace().collect();
            let step_of = |word: Option<&&str>| {
                word.and_then(|w| w.chars().next())
                    .filter(char::is_ascii_uppercase)
            };
            let (required, dependent) = match (step_of(words.get(1)), step_of(words.get(7))) {
                (Some(required), Some(dependent)) => (required, dependent),
                _ => return Err(ParseError::InvalidFormat(format!("bad step: {}", line))),
            };

            requirements.entry(required).or_default();
            requirements.entry(dependent).or_default().insert(required);
        }
        Ok(requirements)
    }
}

/// Order steps one at a time, alphabetically among the unblocked ones.
/// Returns `None` when the requirements contain a cycle.
fn assembly_order(requirements: &Requirements) -> Option<String> {
    let mut remaining = requirements.clone();
    let mut sequence = String::with_capacity(remaining.len());

    while !remaining.is_empty() {
        let step = *remaining
            .iter()
            .find(|(_, prerequisites)| prerequisites.is_empty())?
            .0;
        remaining.remove(&step);
        for prerequisites in remaining.values_mut() {
            prerequisites.remove(&step);
        }
        sequence.push(step);
    }
    Some(sequence)
}

/// Total seconds for `workers` workers to finish every step, where a step
/// takes `base + 1 + (letter index)` seconds.
fn parallel_assembly_time(requirements: &Requirements, workers: usize, base: u32) -> Option<u32> {
    let mut remaining = requirements.clone();
    // Min-heap of (finish time, step) for steps being worked on
    let mut running: BinaryHeap<Reverse<(u32, char)>> = BinaryHeap::new();
    let mut free = workers;
    let mut elapsed = 0u32;

    while !remaining.is_empty() || !running.is_empty() {
        while free > 0 {
            let Some(step) = remaining
                .iter()
                .find(|(_, prerequisites)| prerequisites.is_empty())
                .map(|(&step, _)| step)
            else {
                break;
            };
            remaining.remove(&step);
            let duration = base + 1 + (step as u32 - 'A' as u32);
            running.push(Reverse((elapsed + duration, step)));
            free -= 1;
        }

        // Nothing running and nothing startable means a cycle
        let Reverse((finish, step)) = running.pop()?;
        elapsed = finish;
        free += 1;
        for prerequisites in remaining.values_mut() {
            prerequisites.remove(&step);
        }
    }
    Some(elapsed)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        assembly_order(shared)
            .ok_or_else(|| SolveError::SolveFailed("step requirements form a cycle".into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        parallel_assembly_time(shared, WORKER_COUNT, BASE_DURATION)
            .map(|t| t.to_string())
            .ok_or_else(|| SolveError::SolveFailed("step requirements form a cycle".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Step C must be finished before step A can begin.
Step C must be finished before step F can begin.
Step A must be finished before step B can begin.
Step A must be finished before step D can begin.
Step B must be finished before step E can begin.
Step D must be finished before step E can begin.
Step F must be finished before step E can begin.";

    #[test]
    fn alphabetical_topological_order() {
        let requirements = Solver::parse(SAMPLE).unwrap();
        assert_eq!(assembly_order(&requirements).unwrap(), "CABDFE");
    }

    #[test]
    fn two_workers_with_short_steps() {
        let requirements = Solver::parse(SAMPLE).unwrap();
        assert_eq!(parallel_assembly_time(&requirements, 2, 0), Some(15));
    }

    #[test]
    fn cycle_is_detected() {
        let requirements =
            Solver::parse("Step A must be finished before step B can begin.\nStep B must be finished before step A can begin.")
                .unwrap();
        assert_eq!(assembly_order(&requirements), None);
        assert_eq!(parallel_assembly_time(&requirements, 2, 0), None);
    }
}

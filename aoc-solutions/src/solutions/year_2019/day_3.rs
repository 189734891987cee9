use crate::utils::vector::{Direction, Vec2};
use anyhow::anyhow;
use aoc_core::{AocParser, ParseError, PartSolver, SolveError};
use aoc_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashMap;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(parts = 2)]
#[aoc(year = 2019, day = 3, tags = ["2019", "grid"])]
pub struct Solver;

type Wire = Vec<(Direction, i64)>;

#[derive(Debug)]
pub struct SharedData {
    wires: [Wire; 2],
    // (closest crossing by Manhattan distance, fewest combined steps)
    crossings: Option<(i64, u64)>,
}

fn parse_wire(line: &str) -> Result<Wire, ParseError> {
    line.trim()
        .split(',')
        .map(|instruction| -> Result<(Direction, i64), anyhow::Error> {
            let mut chars = instruction.chars();
            let direction = chars
                .next()
                .and_then(Direction::from_char)
                .ok_or_else(|| anyhow!("bad direction in {:?}", instruction))?;
            let length = chars
                .as_str()
                .parse()
                .map_err(|_| anyhow!("bad length in {:?}", instruction))?;
            Ok((direction, length))
        })
        .collect::<Result<_, _>>()
        .map_err(|e| ParseError::InvalidFormat(e.to_string()))
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut lines = input.lines().filter(|line| !line.trim().is_empty());
        let first = lines
            .next()
            .ok_or_else(|| ParseError::MissingData("expected two wires".into()))?;
        let second = lines
            .next()
            .ok_or_else(|| ParseError::MissingData("expected two wires".into()))?;
        Ok(SharedData {
            wires: [parse_wire(first)?, parse_wire(second)?],
            crossings: None,
        })
    }
}

/// Walk a wire cell by cell, yielding each position with its step count
fn trace(wire: &Wire, mut visit: impl FnMut(Vec2, u64)) {
    let mut position = Vec2::ZERO;
    let mut steps = 0u64;
    for &(direction, length) in wire {
        for _ in 0..length {
            position += direction.offset();
            steps += 1;
            visit(position, steps);
        }
    }
}

fn crossings(shared: &mut SharedData) -> (i64, u64) {
    *shared.crossings.get_or_insert_with(|| {
        // First wire marks each cell with the steps of its first visit
        let mut first_visits: HashMap<Vec2, u64> = HashMap::new();
        trace(&shared.wires[0], |position, steps| {
            first_visits.entry(position).or_insert(steps);
        });

        let mut closest = i64::MAX;
        let mut fewest = u64::MAX;
        trace(&shared.wires[1], |position, steps| {
            if let Some(&first_steps) = first_visits.get(&position) {
                closest = closest.min(position.manhattan());
                fewest = fewest.min(first_steps + steps);
            }
        });
        (closest, fewest)
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        match crossings(shared) {
            (i64::MAX, _) => Err(SolveError::SolveFailed("the wires never cross".into())),
            (closest, _) => Ok(closest.to_string()),
        }
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        match crossings(shared) {
            (_, u64::MAX) => Err(SolveError::SolveFailed("the wires never cross".into())),
            (_, fewest) => Ok(fewest.to_string()),
        }
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
    fn closest_crossing() {
        assert_eq!(solve_part::<1>("R8,U5,L5,D3\nU7,R6,D4,L4"), "6");
        assert_eq!(
            solve_part::<1>(
                "R75,D30,R83,U83,L12,D49,R71,U7,L72\nU62,R66,U55,R34,D71,R55,D58,R83"
            ),
            "159"
        );
        assert_eq!(
            solve_part::<1>(
                "R98,U47,R26,D63,R33,U87,L62,D20,R33,U53,R51\nU98,R91,D20,R16,D67,R40,U7,R15,U6,R7"
            ),
            "135"
        );
    }

    #[test]
    fn fewest_combined_steps() {
        assert_eq!(solve_part::<2>("R8,U5,L5,D3\nU7,R6,D4,L4"), "30");
        assert_eq!(
            solve_part::<2>(
                "R75,D30,R83,U83,L12,D49,R71,U7,L72\nU62,R66,U55,R34,D71,R55,D58,R83"
            ),
            "610"
        );
        assert_eq!(
            solve_part::<2>(
                "R98,U47,R26,D63,R33,U87,L62,D20,R33,U53,R51\nU98,R91,D20,R16,D67,R40,U7,R15,U6,R7"
            ),
            "410"
        );
    }
}

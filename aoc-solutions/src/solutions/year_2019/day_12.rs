use crate::utils::parse::integers;
use anyhow::anyhow;
use aoc_core::{AocParser, ParseError, PartSolver, SolveError};
use aoc_macros::{AocSolver, AutoRegisterSolver};

const SIMULATION_STEPS: usize = 1000;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(parts = 2)]
#[aoc(year = 2019, day = 12, tags = ["2019"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Moon {
    position: [i64; 3],
    velocity: [i64; 3],
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Moon>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let moons = input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                // <x=-1, y=0, z=2>
                match integers(line)[..] {
                    [x, y, z] => Ok(Moon {
                        position: [x, y, z],
                        velocity: [0; 3],
                    }),
                    _ => Err(anyhow!("bad moon: {}", line.trim())),
                }
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        if moons.is_empty() {
            return Err(ParseError::MissingData("no moons".into()));
        }
        Ok(moons)
    }
}

/// One step of gravity and velocity on a single axis
fn step_axis(moons: &mut [Moon], axis: usize) {
    for i in 0..moons.len() {
        for j in 0..moons.len() {
            if i != j {
                moons[i].velocity[axis] +=
                    (moons[j].position[axis] - moons[i].position[axis]).signum();
            }
        }
    }
    for moon in moons.iter_mut() {
        moon.position[axis] += moon.velocity[axis];
    }
}

fn step(moons: &mut [Moon]) {
    for axis in 0..3 {
        step_axis(moons, axis);
    }
}

fn total_energy(moons: &[Moon]) -> i64 {
    moons
        .iter()
        .map(|moon| {
            let potential: i64 = moon.position.iter().map(|p| p.abs()).sum();
            let kinetic: i64 = moon.velocity.iter().map(|v| v.abs()).sum();
            potential * kinetic
        })
        .sum()
}

/// Steps until one axis returns to its starting state.
///
/// The axes are independent and the dynamics reversible, so the first state
/// ever revisited is the initial one.
fn axis_cycle(moons: &[Moon], axis: usize) -> u64 {
    let initial: Vec<(i64, i64)> = moons
        .iter()
        .map(|m| (m.position[axis], m.velocity[axis]))
        .collect();

    let mut simulated = moons.to_vec();
    let mut steps = 0u64;
    loop {
        step_axis(&mut simulated, axis);
        steps += 1;
        let state_matches = simulated
            .iter()
            .zip(&initial)
            .all(|(m, &(p, v))| m.position[axis] == p && m.velocity[axis] == v);
        if state_matches {
            return steps;
        }
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn lcm(a: u64, b: u64) -> u64 {
    a / gcd(a, b) * b
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut moons = shared.clone();
        for _ in 0..SIMULATION_STEPS {
            step(&mut moons);
        }
        Ok(total_energy(&moons).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let cycle = (0..3)
            .map(|axis| axis_cycle(shared, axis))
            .fold(1, lcm);
        Ok(cycle.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIRST: &str = "<x=-1, y=0, z=2>\n<x=2, y=-10, z=-7>\n<x=4, y=-8, z=8>\n<x=3, y=5, z=-1>";
    const SECOND: &str = "<x=-8, y=-10, z=0>\n<x=5, y=5, z=10>\n<x=2, y=-7, z=3>\n<x=9, y=-8, z=-3>";

    #[test]
    fn energy_after_ten_steps() {
        let mut moons = Solver::parse(FIRST).unwrap();
        for _ in 0..10 {
            step(&mut moons);
        }
        assert_eq!(total_energy(&moons), 179);
    }

    #[test]
    fn energy_after_a_hundred_steps() {
        let mut moons = Solver::parse(SECOND).unwrap();
        for _ in 0..100 {
            step(&mut moons);
        }
        assert_eq!(total_energy(&moons), 1940);
    }

    #[test]
    fn short_history_repeats() {
        let mut shared = Solver::parse(FIRST).unwrap();
        let answer = <Solver as PartSolver<2>>::solve(&mut shared).unwrap();
        assert_eq!(answer, "2772");
    }

    #[test]
    fn long_history_repeats() {
        let mut shared = Solver::parse(SECOND).unwrap();
        let answer = <Solver as PartSolver<2>>::solve(&mut shared).unwrap();
        assert_eq!(answer, "4686774924");
    }
}

use crate::utils::parse::integers;
use crate::utils::vector::Vec2;
use aoc_core::{AocParser, ParseError, PartSolver, SolveError};
use aoc_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashSet;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(parts = 2)]
#[aoc(year = 2018, day = 10, tags = ["2018", "grid"])]
pub struct Solver;

#[derive(Debug, Clone, Copy)]
pub struct Particle {
    position: Vec2,
    velocity: Vec2,
}

#[derive(Debug)]
pub struct SharedData {
    particles: Vec<Particle>,
    message: Option<(String, u64)>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let particles = input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                // position=< 9,  1> velocity=< 0,  2>
                match integers(line)[..] {
                    [px, py, vx, vy] => Ok(Particle {
                        position: Vec2::new(px, py),
                        velocity: Vec2::new(vx, vy),
                    }),
                    _ => Err(ParseError::InvalidFormat(format!("bad particle: {}", line))),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        if particles.is_empty() {
            return Err(ParseError::MissingData("no particles".into()));
        }
        Ok(SharedData {
            particles,
            message: None,
        })
    }
}

fn positions_at(particles: &[Particle], seconds: i64) -> Vec<Vec2> {
    particles
        .iter()
        .map(|p| p.position + p.velocity * seconds)
        .collect()
}

fn bounding_height(positions: &[Vec2]) -> i64 {
    let min = positions.iter().map(|p| p.y).min().unwrap_or(0);
    let max = positions.iter().map(|p| p.y).max().unwrap_or(0);
    max - min
}

fn render(positions: &[Vec2]) -> String {
    let lit: HashSet<Vec2> = positions.iter().copied().collect();
    let min_x = positions.iter().map(|p| p.x).min().unwrap_or(0);
    let max_x = positions.iter().map(|p| p.x).max().unwrap_or(0);
    let min_y = positions.iter().map(|p| p.y).min().unwrap_or(0);
    let max_y = positions.iter().map(|p| p.y).max().unwrap_or(0);

    let mut out = String::new();
    for y in min_y..=max_y {
        if y > min_y {
            out.push('\n');
        }
        for x in min_x..=max_x {
            out.push(if lit.contains(&Vec2::new(x, y)) {
                '▓'
            } else {
                '░'
            });
        }
    }
    out
}

/// The particles converge into a message at the second their bounding box is
/// tightest; advancing one more second starts spreading them apart again.
fn message(shared: &mut SharedData) -> &(String, u64) {
    let SharedData { particles, message } = shared;
    message.get_or_insert_with(|| {
        let mut seconds: i64 = 0;
        let mut height = bounding_height(&positions_at(particles, 0));

        loop {
            let next = bounding_height(&positions_at(particles, seconds + 1));
            if next >= height {
                break;
            }
            height = next;
            seconds += 1;
        }

        let rendered = render(&positions_at(particles, seconds));
        (rendered, seconds as u64)
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(message(shared).0.clone())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(message(shared).1.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
position=< 9,  1> velocity=< 0,  2>
position=< 7,  0> velocity=<-1,  0>
position=< 3, -2> velocity=<-1,  1>
position=< 6, 10> velocity=<-2, -1>
position=< 2, -4> velocity=< 2,  2>
position=<-6, 10> velocity=< 2, -2>
position=< 1,  8> velocity=< 1, -1>
position=< 1,  7> velocity=< 1,  0>
position=<-3, 11> velocity=< 1, -2>
position=< 7,  6> velocity=<-1, -1>
position=<-2,  3> velocity=< 1,  0>
position=<-4,  3> velocity=< 2,  0>
position=<10, -3> velocity=<-1,  1>
position=< 5, 11> velocity=< 1, -2>
position=< 4,  7> velocity=< 0, -1>
position=< 8, -2> velocity=< 0,  1>
position=<15,  0> velocity=<-2,  0>
position=< 1,  6> velocity=< 1,  0>
position=< 8,  9> velocity=< 0, -1>
position=< 3,  3> velocity=<-1,  1>
position=< 0,  5> velocity=< 0, -1>
position=<-2,  2> velocity=< 2,  0>
position=< 5, -2> velocity=< 1,  2>
position=< 1,  4> velocity=< 2,  1>
position=<-2,  7> velocity=< 2, -2>
position=< 3,  6> velocity=<-1, -1>
position=< 5,  0> velocity=< 1,  0>
position=<-6,  0> velocity=< 2,  0>
position=< 5,  9> velocity=< 1, -2>
position=<14,  7> velocity=<-2,  0>
position=<-3,  6> velocity=< 2, -1>";

    const MESSAGE: &str = "\
▓░░░▓░░▓▓▓
▓░░░▓░░░▓░
▓░░░▓░░░▓░
▓▓▓▓▓░░░▓░
▓░░░▓░░░▓░
▓░░░▓░░░▓░
▓░░░▓░░░▓░
▓░░░▓░░▓▓▓";

    #[test]
    fn sample_spells_hi_after_three_seconds() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        let (rendered, seconds) = message(&mut shared).clone();
        assert_eq!(seconds, 3);
        assert_eq!(rendered, MESSAGE);
    }
}

use crate::utils::vector::{Direction, Vec2};
use aoc_core::{AocParser, ParseError, PartSolver, SolveError};
use aoc_macros::{AocSolver, AutoRegisterSolver};
use std::collections::{HashMap, HashSet};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(parts = 2)]
#[aoc(year = 2019, day = 10, tags = ["2019", "grid"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    asteroids: Vec<Vec2>,
    station: Option<(Vec2, usize)>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut asteroids = Vec::new();
        for (y, line) in input.lines().enumerate() {
            for (x, c) in line.trim().chars().enumerate() {
                match c {
                    '#' => asteroids.push(Vec2::new(x as i64, y as i64)),
                    '.' => {}
                    _ => {
                        return Err(ParseError::InvalidFormat(format!("bad map cell: {}", c)));
                    }
                }
            }
        }
        if asteroids.is_empty() {
            return Err(ParseError::MissingData("no asteroids on the map".into()));
        }
        Ok(SharedData {
            asteroids,
            station: None,
        })
    }
}

/// The asteroid seeing the most others, with its count. Two asteroids see
/// each other when no third one sits on the segment between them, so lines
/// of sight collapse onto reduced direction vectors.
fn station(shared: &mut SharedData) -> (Vec2, usize) {
    *shared.station.get_or_insert_with(|| {
        shared
            .asteroids
            .iter()
            .map(|&candidate| {
                let directions: HashSet<Vec2> = shared
                    .asteroids
                    .iter()
                    .filter(|&&other| other != candidate)
                    .map(|&other| (other - candidate).reduced())
                    .collect();
                (candidate, directions.len())
            })
            .max_by_key(|&(_, visible)| visible)
            .unwrap_or((Vec2::ZERO, 0))
    })
}

/// Asteroids in the order the rotating laser destroys them
fn vaporization_order(asteroids: &[Vec2], station: Vec2) -> Vec<Vec2> {
    // Queue per line of sight, nearest asteroid first
    let mut lines: HashMap<Vec2, Vec<Vec2>> = HashMap::new();
    for &asteroid in asteroids {
        if asteroid != station {
            lines
                .entry((asteroid - station).reduced())
                .or_default()
                .push(asteroid);
        }
    }
    for queue in lines.values_mut() {
        queue.sort_by_key(|a| std::cmp::Reverse(a.manhattan_to(station)));
    }

    // The laser starts pointing up and sweeps clockwise
    let mut directions: Vec<Vec2> = lines.keys().copied().collect();
    directions.sort_by(|a, b| {
        let up = Direction::Up.offset();
        up.angle_to(*a).total_cmp(&up.angle_to(*b))
    });

    let mut order = Vec::with_capacity(asteroids.len().saturating_sub(1));
    while order.len() + 1 < asteroids.len() {
        for direction in &directions {
            if let Some(queue) = lines.get_mut(direction)
                && let Some(next) = queue.pop()
            {
                order.push(next);
            }
        }
    }
    order
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(station(shared).1.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (station, _) = station(shared);
        let order = vaporization_order(&shared.asteroids, station);
        let target = order
            .get(199)
            .ok_or_else(|| SolveError::SolveFailed("fewer than 200 asteroids to destroy".into()))?;
        Ok((target.x * 100 + target.y).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = ".#..#\n.....\n#####\n....#\n...##";

    const LARGE: &str = "\
.#..##.###...#######
##.############..##.
.#.######.########.#
.###.#######.####.#.
#####.##.#.##.###.##
..#####..#.#########
####################
#.####....###.#.#.##
##.#################
#####.##.###..####..
..######..##.#######
####.##.####...##..#
.#####..#.######.###
##...#.##########...
#.##########.#######
.####.#.###.###.#.##
....##.##.###..#####
.#.#.###########.###
#.#.#.#####.####.###
###.##.####.##.#..##";

    #[test]
    fn best_station_on_the_small_map() {
        let mut shared = Solver::parse(SMALL).unwrap();
        assert_eq!(station(&mut shared), (Vec2::new(3, 4), 8));
    }

    #[test]
    fn best_station_on_the_large_map() {
        let mut shared = Solver::parse(LARGE).unwrap();
        assert_eq!(station(&mut shared), (Vec2::new(11, 13), 210));
    }

    #[test]
    fn laser_sweep_order() {
        let mut shared = Solver::parse(LARGE).unwrap();
        let (station, _) = station(&mut shared);
        let order = vaporization_order(&shared.asteroids, station);

        assert_eq!(order[0], Vec2::new(11, 12));
        assert_eq!(order[1], Vec2::new(12, 1));
        assert_eq!(order[2], Vec2::new(12, 2));
        assert_eq!(order[199], Vec2::new(8, 2));
        assert_eq!(order[298], Vec2::new(11, 1));
        assert_eq!(order.len(), 299);
    }
}

use crate::utils::parse::integers;
use crate::utils::vector::Vec2;
use aoc_core::{AocParser, ParseError, PartSolver, SolveError};
use aoc_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashSet;

const SAFE_DISTANCE_LIMIT: i64 = 10_000;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(parts = 2)]
#[aoc(year = 2018, day = 6, tags = ["2018", "grid"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Vec2>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let points = input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| match integers(line)[..] {
                [x, y] => Ok(Vec2::new(x, y)),
                _ => Err(ParseError::InvalidFormat(format!("bad coordinate: {}", line))),
            })
            .collect::<Result<Vec<_>, _>>()?;
        if points.is_empty() {
            return Err(ParseError::MissingData("no coordinates".into()));
        }
        Ok(points)
    }
}

fn bounds(points: &[Vec2]) -> (Vec2, Vec2) {
    let min = Vec2::new(
        points.iter().map(|p| p.x).min().unwrap_or(0),
        points.iter().map(|p| p.y).min().unwrap_or(0),
    );
    let max = Vec2::new(
        points.iter().map(|p| p.x).max().unwrap_or(0),
        points.iter().map(|p| p.y).max().unwrap_or(0),
    );
    (min, max)
}

/// Size of the largest closest-point area that does not touch the bounding
/// box edge (areas on the edge extend forever).
fn largest_finite_area(points: &[Vec2]) -> usize {
    let (min, max) = bounds(points);
    let mut counts = vec![0usize; points.len()];
    let mut infinite: HashSet<usize> = HashSet::new();

    for y in min.y..=max.y {
        for x in min.x..=max.x {
            let pos = Vec2::new(x, y);
            let mut closest: Option<usize> = None;
            let mut smallest = i64::MAX;

            for (i, point) in points.iter().enumerate() {
                let dist = pos.manhattan_to(*point);
                if dist < smallest {
                    smallest = dist;
                    closest = Some(i);
                } else if dist == smallest {
                    closest = None;
                }
            }

            if let Some(i) = closest {
                if x == min.x || x == max.x || y == min.y || y == max.y {
                    infinite.insert(i);
                } else {
                    counts[i] += 1;
                }
            }
        }
    }

    counts
        .iter()
        .enumerate()
        .filter(|(i, _)| !infinite.contains(i))
        .map(|(_, &count)| count)
        .max()
        .unwrap_or(0)
}

/// Number of positions whose summed distance to every point stays under `limit`
fn safe_region_size(points: &[Vec2], limit: i64) -> usize {
    let (min, max) = bounds(points);
    let mut size = 0;

    for y in min.y..=max.y {
        for x in min.x..=max.x {
            let pos = Vec2::new(x, y);
            let total: i64 = points.iter().map(|p| pos.manhattan_to(*p)).sum();
            size += (total < limit) as usize;
        }
    }
    size
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(largest_finite_area(shared).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(safe_region_size(shared, SAFE_DISTANCE_LIMIT).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "1, 1\n1, 6\n8, 3\n3, 4\n5, 5\n8, 9";

    #[test]
    fn finite_area_around_e() {
        let points = Solver::parse(SAMPLE).unwrap();
        assert_eq!(largest_finite_area(&points), 17);
    }

    #[test]
    fn safe_region_with_small_limit() {
        let points = Solver::parse(SAMPLE).unwrap();
        assert_eq!(safe_region_size(&points, 32), 16);
    }
}

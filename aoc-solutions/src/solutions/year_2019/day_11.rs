use crate::utils::intcode::{Machine, RunState};
use crate::utils::vector::{Direction, Vec2};
use aoc_core::{AocParser, ParseError, PartSolver, SolveError};
use aoc_macros::{AocSolver, AutoRegisterSolver};
use std::collections::{HashMap, HashSet};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(parts = 2)]
#[aoc(year = 2019, day = 11, tags = ["2019", "intcode", "grid"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Machine::parse(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

/// Run the painting robot. Returns the hull (position -> white?) and the
/// set of panels that got painted at least once.
fn paint_hull(
    program: &[i64],
    start_white: bool,
) -> Result<(HashMap<Vec2, bool>, HashSet<Vec2>), SolveError> {
    let mut brain = Machine::new(program);
    let mut hull: HashMap<Vec2, bool> = HashMap::new();
    let mut painted: HashSet<Vec2> = HashSet::new();
    let mut position = Vec2::ZERO;
    let mut heading = Direction::Up;

    if start_white {
        hull.insert(position, true);
    }

    loop {
        brain.push_input(hull.get(&position).copied().unwrap_or(false) as i64);
        let state = brain
            .run()
            .map_err(|e| SolveError::SolveFailed(Box::new(e)))?;

        // Each step the brain emits a colour and a turn
        while brain.output_len() >= 2 {
            let colour = brain.pop_output().unwrap_or(0);
            let turn = brain.pop_output().unwrap_or(0);

            hull.insert(position, colour == 1);
            painted.insert(position);
            heading = if turn == 1 {
                heading.turn_right()
            } else {
                heading.turn_left()
            };
            position += heading.offset();
        }

        if state == RunState::Halted {
            break;
        }
    }
    Ok((hull, painted))
}

/// Render the white panels over the hull's bounding box
fn render(hull: &HashMap<Vec2, bool>) -> String {
    let white: Vec<Vec2> = hull
        .iter()
        .filter(|&(_, &is_white)| is_white)
        .map(|(&pos, _)| pos)
        .collect();
    if white.is_empty() {
        return String::new();
    }

    let min_x = white.iter().map(|p| p.x).min().unwrap_or(0);
    let max_x = white.iter().map(|p| p.x).max().unwrap_or(0);
    let min_y = white.iter().map(|p| p.y).min().unwrap_or(0);
    let max_y = white.iter().map(|p| p.y).max().unwrap_or(0);
    let lit: HashSet<&Vec2> = white.iter().collect();

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

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (_, painted) = paint_hull(shared, false)?;
        Ok(painted.len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (hull, _) = paint_hull(shared, true)?;
        Ok(render(&hull))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_brain_walks_the_published_path() {
        // Outputs the fixed colour/turn sequence from the puzzle statement,
        // ignoring camera input: 1,0 0,0 1,0 1,0 0,1 1,0 1,0
        let source = "104,1,104,0,104,0,104,0,104,1,104,0,104,1,104,0,104,0,104,1,104,1,104,0,104,1,104,0,99";
        let program = Machine::parse(source).unwrap();
        let (hull, painted) = paint_hull(&program, false).unwrap();

        assert_eq!(painted.len(), 6);
        // The robot ends up back near the start with the origin black
        assert_eq!(hull.get(&Vec2::ZERO), Some(&false));
    }

    #[test]
    fn renders_only_the_white_panels() {
        let mut hull = HashMap::new();
        hull.insert(Vec2::new(0, 0), true);
        hull.insert(Vec2::new(2, 0), true);
        hull.insert(Vec2::new(1, 1), true);
        hull.insert(Vec2::new(5, 5), false);
        assert_eq!(render(&hull), "▓░▓\n░▓░");
    }
}

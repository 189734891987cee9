use crate::utils::parse::integers;
use aoc_core::{AocParser, ParseError, PartSolver, SolveError};
use aoc_macros::{AocSolver, AutoRegisterSolver};
use std::collections::VecDeque;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(parts = 2)]
#[aoc(year = 2018, day = 9, tags = ["2018"])]
pub struct Solver;

#[derive(Debug, Clone, Copy)]
pub struct Game {
    players: usize,
    final_marble: u64,
}

impl AocParser for Solver {
    type SharedData<'a> = Game;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        // 464 players; last marble is worth 70918 points
        match integers(input)[..] {
            [players, final_marble] if players > 0 && final_marble >= 0 => Ok(Game {
                players: players as usize,
                final_marble: final_marble as u64,
            }),
            _ => Err(ParseError::InvalidFormat(format!(
                "bad game description: {}",
                input.trim()
            ))),
        }
    }
}

/// Play the marble game; the current marble is kept at the back of the
/// circle so placement and scoring are deque rotations.
fn high_score(players: usize, final_marble: u64) -> u64 {
    let mut scores = vec![0u64; players];
    let mut circle: VecDeque<u64> = VecDeque::with_capacity(final_marble as usize + 1);
    circle.push_back(0);

    for marble in 1..=final_marble {
        if marble % 23 == 0 {
            let player = (marble as usize - 1) % players;
            // Scoring marble: keep it, take the one seven to the left
            circle.rotate_right(7);
            scores[player] += marble + circle.pop_back().unwrap_or(0);
            circle.rotate_left(1);
        } else {
            circle.rotate_left(1);
            circle.push_back(marble);
        }
    }

    scores.into_iter().max().unwrap_or(0)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(high_score(shared.players, shared.final_marble).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(high_score(shared.players, shared.final_marble * 100).to_string())
    }
}

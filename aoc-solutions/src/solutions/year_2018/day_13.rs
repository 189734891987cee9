use crate::utils::collections::SortedList;
use crate::utils::grid::Grid;
use crate::utils::vector::{Direction, Vec2};
use aoc_core::{AocParser, ParseError, PartSolver, SolveError};
use aoc_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(parts = 2)]
#[aoc(year = 2018, day = 13, tags = ["2018", "grid"])]
pub struct Solver;

#[derive(Debug, Clone, Copy)]
pub struct Cart {
    position: Vec2,
    heading: Direction,
    // Intersections cycle left, straight, right
    turns: u8,
    active: bool,
}

impl Cart {
    fn advance(&mut self, rails: &Grid<char>) {
        self.position += self.heading.offset();
        self.heading = match rails.get(self.position).copied().unwrap_or(' ') {
            '/' => match self.heading {
                Direction::Up => Direction::Right,
                Direction::Right => Direction::Up,
                Direction::Down => Direction::Left,
                Direction::Left => Direction::Down,
            },
            '\\' => match self.heading {
                Direction::Up => Direction::Left,
                Direction::Left => Direction::Up,
                Direction::Down => Direction::Right,
                Direction::Right => Direction::Down,
            },
            '+' => {
                let heading = match self.turns {
                    0 => self.heading.turn_left(),
                    1 => self.heading,
                    _ => self.heading.turn_right(),
                };
                self.turns = (self.turns + 1) % 3;
                heading
            }
            _ => self.heading,
        };
    }
}

#[derive(Debug, Clone)]
pub struct Mine {
    rails: Grid<char>,
    carts: Vec<Cart>,
}

impl Mine {
    /// Run one tick in reading order. Returns the first crash position, if
    /// any; crashed carts are deactivated either way.
    fn tick(&mut self) -> Option<Vec2> {
        // Carts act top to bottom, left to right, by position at tick start
        let mut order: SortedList<(i64, i64, usize)> = SortedList::new();
        for (i, cart) in self.carts.iter().enumerate() {
            if cart.active {
                order.insert((cart.position.y, cart.position.x, i));
            }
        }

        let mut first_crash = None;
        for &(_, _, i) in order.iter() {
            if !self.carts[i].active {
                continue;
            }
            let mut cart = self.carts[i];
            cart.advance(&self.rails);
            self.carts[i] = cart;

            let hit = self
                .carts
                .iter()
                .enumerate()
                .find(|&(j, other)| j != i && other.active && other.position == cart.position)
                .map(|(j, _)| j);
            if let Some(j) = hit {
                // Hit another cart; both are out
                self.carts[i].active = false;
                self.carts[j].active = false;
                first_crash.get_or_insert(cart.position);
            }
        }
        first_crash
    }

    fn active_carts(&self) -> impl Iterator<Item = &Cart> {
        self.carts.iter().filter(|cart| cart.active)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Mine;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut rails = Grid::from_lines(input, ' ', |c| c)
            .ok_or_else(|| ParseError::MissingData("empty mine map".into()))?;

        let mut carts = Vec::new();
        for pos in rails.positions().collect::<Vec<_>>() {
            let c = rails[pos];
            if let Some(heading) = Direction::from_char(c) {
                carts.push(Cart {
                    position: pos,
                    heading,
                    turns: 0,
                    active: true,
                });
                // The rail under a cart is straight in its travel axis
                rails[pos] = match heading {
                    Direction::Up | Direction::Down => '|',
                    Direction::Left | Direction::Right => '-',
                };
            } else if !matches!(c, '|' | '-' | '/' | '\\' | '+' | ' ') {
                return Err(ParseError::InvalidFormat(format!("bad rail: {}", c)));
            }
        }

        if carts.is_empty() {
            return Err(ParseError::MissingData("no carts on the rails".into()));
        }
        Ok(Mine { rails, carts })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut mine = shared.clone();
        loop {
            if let Some(crash) = mine.tick() {
                return Ok(format!("{},{}", crash.x, crash.y));
            }
        }
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut mine = shared.clone();
        while mine.active_carts().count() > 1 {
            mine.tick();
        }
        let last = mine
            .active_carts()
            .next()
            .ok_or_else(|| SolveError::SolveFailed("no cart survived".into()))?;
        Ok(format!("{},{}", last.position.x, last.position.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CRASH_SAMPLE: &str = r"/->-\
|   |  /----\
| /-+--\  |  |
| | |  | v  |
\-+-/  \-+--/
  \------/   ";

    const LAST_CART_SAMPLE: &str = r"/>-<\
|   |
| /<+-\
| | | v
\>+</ |
  |   ^
  \<->/";

    fn solve_part<const N: u8>(input: &str) -> String
    where
        Solver: PartSolver<N>,
    {
        let mut shared = Solver::parse(input).unwrap();
        <Solver as PartSolver<N>>::solve(&mut shared).unwrap()
    }

    #[test]
    fn first_crash_position() {
        assert_eq!(solve_part::<1>(CRASH_SAMPLE), "7,3");
    }

    #[test]
    fn last_cart_standing() {
        assert_eq!(solve_part::<2>(LAST_CART_SAMPLE), "6,4");
    }

    #[test]
    fn straight_track_under_carts() {
        let mine = Solver::parse(CRASH_SAMPLE).unwrap();
        assert_eq!(mine.rails[Vec2::new(2, 0)], '-');
        assert_eq!(mine.rails[Vec2::new(9, 3)], '|');
        assert_eq!(mine.carts.len(), 2);
    }
}

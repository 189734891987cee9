//! 2D integer vectors and the four cardinal directions
//!
//! Coordinates are screen-style: x grows right, y grows down. Turning and
//! angle math below assume that orientation.

use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// A 2D integer vector / grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Vec2 {
    pub x: i64,
    pub y: i64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0, y: 0 };

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Dot product
    pub fn dot(self, other: Vec2) -> i64 {
        self.x * other.x + self.y * other.y
    }

    /// Manhattan distance to the origin
    pub fn manhattan(self) -> i64 {
        self.x.abs() + self.y.abs()
    }

    /// Manhattan distance to `other`
    pub fn manhattan_to(self, other: Vec2) -> i64 {
        (self - other).manhattan()
    }

    /// Euclidean length
    pub fn magnitude(self) -> f64 {
        ((self.x * self.x + self.y * self.y) as f64).sqrt()
    }

    /// Euclidean distance to `other`
    pub fn distance_to(self, other: Vec2) -> f64 {
        (self - other).magnitude()
    }

    /// Component-wise absolute value
    pub fn abs(self) -> Vec2 {
        Vec2::new(self.x.abs(), self.y.abs())
    }

    /// Component-wise sign (-1, 0 or 1)
    pub fn signum(self) -> Vec2 {
        Vec2::new(self.x.signum(), self.y.signum())
    }

    /// Shortest integer vector with the same direction.
    ///
    /// Both components are divided by their gcd, so two positions see each
    /// other along the same line of sight exactly when the reduced deltas
    /// are equal. The zero vector reduces to itself.
    pub fn reduced(self) -> Vec2 {
        let g = gcd(self.x.unsigned_abs(), self.y.unsigned_abs());
        if g == 0 {
            self
        } else {
            Vec2::new(self.x / g as i64, self.y / g as i64)
        }
    }

    /// Clockwise angle in degrees `[0, 360)` from `self` to `other`
    pub fn angle_to(self, other: Vec2) -> f64 {
        let det = (self.x * other.y - other.x * self.y) as f64;
        let angle = det.atan2(self.dot(other) as f64).to_degrees();
        if angle < 0.0 { angle + 360.0 } else { angle }
    }

    /// Quarter turn counter-clockwise (on screen coordinates)
    pub fn rotate_left(self) -> Vec2 {
        Vec2::new(self.y, -self.x)
    }

    /// Quarter turn clockwise (on screen coordinates)
    pub fn rotate_right(self) -> Vec2 {
        Vec2::new(-self.y, self.x)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, other: Vec2) {
        *self = *self + other;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, other: Vec2) {
        *self = *self - other;
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl Mul<i64> for Vec2 {
    type Output = Vec2;

    fn mul(self, scalar: i64) -> Vec2 {
        Vec2::new(self.x * scalar, self.y * scalar)
    }
}

impl From<(i64, i64)> for Vec2 {
    fn from((x, y): (i64, i64)) -> Vec2 {
        Vec2::new(x, y)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// One of the four cardinal directions, on screen coordinates (y down)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in reading-order of their offsets
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Right,
        Direction::Down,
    ];

    /// Unit offset of this direction
    pub const fn offset(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0, -1),
            Direction::Down => Vec2::new(0, 1),
            Direction::Left => Vec2::new(-1, 0),
            Direction::Right => Vec2::new(1, 0),
        }
    }

    /// The direction after turning 90° left
    pub const fn turn_left(self) -> Direction {
        match self {
            Direction::Up => Direction::Left,
            Direction::Left => Direction::Down,
            Direction::Down => Direction::Right,
            Direction::Right => Direction::Up,
        }
    }

    /// The direction after turning 90° right
    pub const fn turn_right(self) -> Direction {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    /// The opposite direction
    pub const fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Parse the direction characters puzzle inputs use (`^v<>` or `UDLR`)
    pub const fn from_char(c: char) -> Option<Direction> {
        match c {
            '^' | 'U' => Some(Direction::Up),
            'v' | 'D' => Some(Direction::Down),
            '<' | 'L' => Some(Direction::Left),
            '>' | 'R' => Some(Direction::Right),
            _ => None,
        }
    }
}

impl From<Direction> for Vec2 {
    fn from(dir: Direction) -> Vec2 {
        dir.offset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        let a = Vec2::new(3, -2);
        let b = Vec2::new(-1, 5);
        assert_eq!(a + b, Vec2::new(2, 3));
        assert_eq!(a - b, Vec2::new(4, -7));
        assert_eq!(-a, Vec2::new(-3, 2));
        assert_eq!(a * 3, Vec2::new(9, -6));
        assert_eq!(a.dot(b), -13);
    }

    #[test]
    fn distances() {
        let a = Vec2::new(1, 1);
        let b = Vec2::new(4, 5);
        assert_eq!(a.manhattan_to(b), 7);
        assert_eq!(a.distance_to(b), 5.0);
        assert_eq!(Vec2::new(3, 4).magnitude(), 5.0);
    }

    #[test]
    fn reduction() {
        assert_eq!(Vec2::new(6, -9).reduced(), Vec2::new(2, -3));
        assert_eq!(Vec2::new(0, 7).reduced(), Vec2::new(0, 1));
        assert_eq!(Vec2::new(-4, 0).reduced(), Vec2::new(-1, 0));
        assert_eq!(Vec2::ZERO.reduced(), Vec2::ZERO);
    }

    #[test]
    fn angles_clockwise_with_y_down() {
        let up = Vec2::new(0, -1);
        assert_eq!(up.angle_to(up), 0.0);
        assert_eq!(up.angle_to(Vec2::new(1, 0)), 90.0);
        assert_eq!(up.angle_to(Vec2::new(0, 1)), 180.0);
        assert_eq!(up.angle_to(Vec2::new(-1, 0)), 270.0);
    }

    #[test]
    fn rotations_match_direction_turns() {
        for dir in Direction::ALL {
            assert_eq!(dir.offset().rotate_left(), dir.turn_left().offset());
            assert_eq!(dir.offset().rotate_right(), dir.turn_right().offset());
        }
        assert_eq!(Direction::Up.turn_left(), Direction::Left);
        assert_eq!(Direction::Up.turn_right(), Direction::Right);
        assert_eq!(Direction::Left.reverse(), Direction::Right);
    }

    #[test]
    fn parses_puzzle_characters() {
        assert_eq!(Direction::from_char('^'), Some(Direction::Up));
        assert_eq!(Direction::from_char('D'), Some(Direction::Down));
        assert_eq!(Direction::from_char('x'), None);
    }
}

//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Trait for parsing puzzle input into shared data.
///
/// Parsing is separated from solving so a day's input is parsed exactly once
/// and both parts work from the same data.
///
/// # Example
///
/// ```
/// use aoc_core::{AocParser, ParseError};
///
/// struct Day1;
///
/// impl AocParser for Day1 {
///     type SharedData<'a> = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.into())))
///             .collect()
///     }
/// }
/// ```
pub trait AocParser {
    /// Parsed input plus any intermediate results shared between parts.
    ///
    /// Use owned data (`Vec<T>`, a custom struct) when parts mutate it, or
    /// `&'a str` slices for zero-copy borrowing from the raw input.
    type SharedData<'a>;

    /// Parse the raw input string into the shared data structure.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Trait for solving one part of a puzzle.
///
/// The const generic `N` is the part number; implementing `PartSolver<1>` and
/// `PartSolver<2>` gives compile-time evidence that both parts exist. The
/// [`Solver`](crate::Solver) dispatch over these impls is normally generated
/// by `#[derive(AocSolver)]`.
///
/// Parts take `&mut` shared data so an expensive computation can be done once
/// and reused by the other part.
pub trait PartSolver<const N: u8>: AocParser {
    /// Solve this part, returning the answer as a string.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// Core trait all registered solvers implement.
///
/// Usually derived with `#[derive(AocSolver)]` from the `PartSolver` impls;
/// a manual impl is free to match on `part` directly instead.
///
/// # Example
///
/// ```
/// use aoc_core::{AocParser, ParseError, SolveError, Solver};
///
/// struct Day1;
///
/// impl AocParser for Day1 {
///     type SharedData<'a> = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.into())))
///             .collect()
///     }
/// }
///
/// impl Solver for Day1 {
///     const PARTS: u8 = 2;
///
///     fn solve_part(
///         shared: &mut Self::SharedData<'_>,
///         part: u8,
///     ) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.iter().sum::<i64>().to_string()),
///             2 => Ok(shared.iter().product::<i64>().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
/// ```
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve a specific part of the puzzle
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked solving, blanket-implemented for every [`Solver`].
pub trait SolverExt: Solver {
    /// Solve `part`, rejecting part numbers outside `1..=PARTS` with
    /// [`SolveError::PartOutOfRange`] before touching the solver.
    fn solve_part_checked(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}

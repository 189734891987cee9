//! Advent of Code solver framework
//!
//! A type-safe framework for organizing puzzle solvers across multiple years
//! and days. Each day implements input parsing once and any number of parts
//! over the parsed data; a registry maps (year, day) to type-erased solver
//! instances that a runner can drive uniformly.
//!
//! # Overview
//!
//! - [`AocParser`] / [`PartSolver`] / [`Solver`]: the trait hierarchy a day
//!   implements. `#[derive(AocSolver)]` generates the `Solver` dispatch from
//!   the per-part impls.
//! - [`SolverInstance`] / [`DynSolver`]: one parsed input plus timing,
//!   behind dynamic dispatch.
//! - [`RegistryBuilder`] / [`SolverRegistry`]: immutable (year, day) lookup
//!   with duplicate detection, populated manually or from plugins collected
//!   through `inventory` (`#[derive(AutoRegisterSolver)]`).
//!
//! # Quick example
//!
//! ```
//! use aoc_core::{AocParser, ParseError, RegisterableSolver, RegistryBuilder,
//!                SolveError, Solver};
//!
//! struct Day1;
//!
//! impl AocParser for Day1 {
//!     type SharedData<'a> = Vec<i64>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.into())))
//!             .collect()
//!     }
//! }
//!
//! impl Solver for Day1 {
//!     const PARTS: u8 = 1;
//!
//!     fn solve_part(
//!         shared: &mut Self::SharedData<'_>,
//!         part: u8,
//!     ) -> Result<String, SolveError> {
//!         match part {
//!             1 => Ok(shared.iter().sum::<i64>().to_string()),
//!             _ => Err(SolveError::PartNotImplemented(part)),
//!         }
//!     }
//! }
//!
//! let registry = Day1
//!     .register_with(RegistryBuilder::new(), 2018, 1)
//!     .unwrap()
//!     .build();
//! let mut solver = registry.create_solver(2018, 1, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! ```

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    BASE_YEAR, CAPACITY, DAYS_PER_YEAR, FactoryInfo, MAX_YEARS, RegisterableSolver,
    RegistryBuilder, SolverFactory, SolverPlugin, SolverRegistry,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-exported for the derive macros' generated code
pub use inventory;

pub use aoc_macros::{AocSolver, AutoRegisterSolver};

//! Advent of Code puzzle solutions with automatic registration
//!
//! Puzzle solutions organized by year under [`solutions`], registered with
//! the solver framework through the `AutoRegisterSolver` derive macro.
//! Shared infrastructure the days lean on (grids, vectors, graph search,
//! collection helpers, the 2019 Intcode machine) lives under [`utils`].

pub mod solutions;
pub mod utils;

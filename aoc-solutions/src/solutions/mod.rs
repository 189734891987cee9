//! Daily solvers, one module per year

pub mod year_2017;
pub mod year_2018;
pub mod year_2019;

pub mod day_1;
pub mod day_2;

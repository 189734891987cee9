use aoc_core::{AocParser, ParseError, PartSolver, SolveError};
use aoc_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(parts = 2)]
#[aoc(year = 2019, day = 1, tags = ["2019"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("bad mass: {}", line)))
            })
            .collect()
    }
}

fn fuel_for(mass: i64) -> i64 {
    mass / 3 - 2
}

/// Fuel for the mass, plus fuel for that fuel, until the requirement drops
/// to nothing
fn total_fuel_for(mass: i64) -> i64 {
    let mut total = 0;
    let mut extra = fuel_for(mass);
    while extra > 0 {
        total += extra;
        extra = fuel_for(extra);
    }
    total
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().map(|&m| fuel_for(m)).sum::<i64>().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .iter()
            .map(|&m| total_fuel_for(m))
            .sum::<i64>()
            .to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_fuel() {
        assert_eq!(fuel_for(12), 2);
        assert_eq!(fuel_for(14), 2);
        assert_eq!(fuel_for(1969), 654);
        assert_eq!(fuel_for(100756), 33583);
    }

    #[test]
    fn fuel_for_the_fuel() {
        assert_eq!(total_fuel_for(14), 2);
        assert_eq!(total_fuel_for(1969), 966);
        assert_eq!(total_fuel_for(100756), 50346);
    }
}

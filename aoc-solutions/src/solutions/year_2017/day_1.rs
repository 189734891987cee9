use aoc_core::{AocParser, ParseError, PartSolver, SolveError};
use aoc_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(parts = 2)]
#[aoc(year = 2017, day = 1, tags = ["2017"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<u32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .trim()
            .chars()
            .map(|c| {
                c.to_digit(10)
                    .ok_or_else(|| ParseError::InvalidFormat(format!("not a digit: {}", c)))
            })
            .collect()
    }
}

/// Sum of digits matching the digit `offset` places ahead, circularly
fn captcha(digits: &[u32], offset: usize) -> u64 {
    digits
        .iter()
        .enumerate()
        .filter(|&(i, &d)| d == digits[(i + offset) % digits.len()])
        .map(|(_, &d)| d as u64)
        .sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(captcha(shared, 1).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(captcha(shared, shared.len() / 2).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part1(input: &str) -> u64 {
        captcha(&Solver::parse(input).unwrap(), 1)
    }

    fn part2(input: &str) -> u64 {
        let digits = Solver::parse(input).unwrap();
        captcha(&digits, digits.len() / 2)
    }

    #[test]
    fn next_digit_matches() {
        assert_eq!(part1("1122"), 3);
        assert_eq!(part1("1111"), 4);
        assert_eq!(part1("1234"), 0);
        assert_eq!(part1("91212129"), 9);
    }

    #[test]
    fn halfway_around_matches() {
        assert_eq!(part2("1212"), 6);
        assert_eq!(part2("1221"), 0);
        assert_eq!(part2("123425"), 4);
        assert_eq!(part2("123123"), 12);
        assert_eq!(part2("12131415"), 4);
    }

    #[test]
    fn rejects_non_digits() {
        assert!(Solver::parse("12a4").is_err());
    }
}

use aoc_core::{AocParser, ParseError, PartSolver, SolveError};
use aoc_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(parts = 2)]
#[aoc(year = 2018, day = 14, tags = ["2018"])]
pub struct Solver;

#[derive(Debug, Clone)]
pub struct SharedData {
    // The input both as a count and as the digit sequence to search for
    count: usize,
    digits: Vec<u8>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let text = input.trim();
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(format!("bad recipe count: {}", text)));
        }
        let count = text
            .parse()
            .map_err(|_| ParseError::InvalidFormat(format!("bad recipe count: {}", text)))?;
        Ok(SharedData {
            count,
            digits: text.bytes().map(|b| b - b'0').collect(),
        })
    }
}

/// Drive the scoreboard, calling `check` after every appended recipe.
/// Stops once `check` returns a result.
fn scoreboard<T>(mut check: impl FnMut(&[u8]) -> Option<T>) -> T {
    let mut scores: Vec<u8> = vec![3, 7];
    let (mut first, mut second) = (0usize, 1usize);

    if let Some(result) = check(&scores) {
        return result;
    }
    loop {
        let sum = scores[first] + scores[second];
        if sum >= 10 {
            scores.push(sum / 10);
            if let Some(result) = check(&scores) {
                return result;
            }
        }
        scores.push(sum % 10);
        if let Some(result) = check(&scores) {
            return result;
        }
        first = (first + 1 + scores[first] as usize) % scores.len();
        second = (second + 1 + scores[second] as usize) % scores.len();
    }
}

/// The ten recipe scores immediately after the first `count` recipes
fn scores_after(count: usize) -> String {
    scoreboard(|scores| {
        (scores.len() >= count + 10).then(|| {
            scores[count..count + 10]
                .iter()
                .map(|d| (d + b'0') as char)
                .collect()
        })
    })
}

/// Number of recipes to the left of the first occurrence of `pattern`
fn recipes_before(pattern: &[u8]) -> usize {
    scoreboard(|scores| {
        // Only windows ending at the freshly appended recipe need checking
        scores
            .len()
            .checked_sub(pattern.len())
            .filter(|&start| &scores[start..] == pattern)
            .or_else(|| {
                // The very first call sees two seed recipes at once
                (scores.len() == 2 && scores.len() > pattern.len()
                    && &scores[..pattern.len()] == pattern)
                    .then_some(0)
            })
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(scores_after(shared.count))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(recipes_before(&shared.digits).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_scores_after() {
        assert_eq!(scores_after(9), "5158916779");
        assert_eq!(scores_after(5), "0124515891");
        assert_eq!(scores_after(18), "9251071085");
        assert_eq!(scores_after(2018), "5941429882");
    }

    #[test]
    fn recipes_left_of_pattern() {
        assert_eq!(recipes_before(&[5, 1, 5, 8, 9]), 9);
        assert_eq!(recipes_before(&[0, 1, 2, 4, 5]), 5);
        assert_eq!(recipes_before(&[9, 2, 5, 1, 0]), 18);
        assert_eq!(recipes_before(&[5, 9, 4, 1, 4]), 2018);
        assert_eq!(recipes_before(&[3]), 0);
        assert_eq!(recipes_before(&[7]), 1);
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert!(Solver::parse("12x").is_err());
        assert!(Solver::parse("").is_err());
    }
}

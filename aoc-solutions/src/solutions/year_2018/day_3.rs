use crate::utils::grid::Grid;
use crate::utils::parse::integers;
use crate::utils::vector::Vec2;
use aoc_core::{AocParser, ParseError, PartSolver, SolveError};
use aoc_macros::{AocSolver, AutoRegisterSolver};

const FABRIC_SIZE: usize = 1000;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(parts = 2)]
#[aoc(year = 2018, day = 3, tags = ["2018", "grid"])]
pub struct Solver;

#[derive(Debug, Clone, Copy)]
pub struct Claim {
    id: i64,
    x: i64,
    y: i64,
    width: i64,
    height: i64,
}

impl Claim {
    fn cells(&self) -> impl Iterator<Item = Vec2> {
        let (x, y, width, height) = (self.x, self.y, self.width, self.height);
        (x..x + width).flat_map(move |i| (y..y + height).map(move |j| Vec2::new(i, j)))
    }
}

#[derive(Debug)]
pub struct SharedData {
    claims: Vec<Claim>,
    fabric: Option<Grid<u16>>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let claims = input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                // #123 @ 3,2: 5x4
                match integers(line)[..] {
                    [id, x, y, width, height] => Ok(Claim {
                        id,
                        x,
                        y,
                        width,
                        height,
                    }),
                    _ => Err(ParseError::InvalidFormat(format!("bad claim: {}", line))),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SharedData {
            claims,
            fabric: None,
        })
    }
}

/// Overlap counts per square inch, computed once for both parts
fn fabric(shared: &mut SharedData) -> (&[Claim], &Grid<u16>) {
    let SharedData { claims, fabric } = shared;
    let grid = fabric.get_or_insert_with(|| {
        let mut counts = Grid::filled(FABRIC_SIZE, FABRIC_SIZE, 0u16);
        for claim in claims.iter() {
            for cell in claim.cells() {
                counts[cell] += 1;
            }
        }
        counts
    });
    (claims, grid)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (_, grid) = fabric(shared);
        let overlapping = grid.iter().filter(|&&count| count > 1).count();
        Ok(overlapping.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (claims, grid) = fabric(shared);
        claims
            .iter()
            .find(|claim| claim.cells().all(|cell| grid[cell] == 1))
            .map(|claim| claim.id.to_string())
            .ok_or_else(|| SolveError::SolveFailed("every claim overlaps another".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "#1 @ 1,3: 4x4\n#2 @ 3,1: 4x4\n#3 @ 5,5: 2x2";

    fn solve_part<const N: u8>(input: &str) -> String
    where
        Solver: PartSolver<N>,
    {
        let mut shared = Solver::parse(input).unwrap();
        <Solver as PartSolver<N>>::solve(&mut shared).unwrap()
    }

    #[test]
    fn overlapping_area() {
        assert_eq!(solve_part::<1>(SAMPLE), "4");
    }

    #[test]
    fn intact_claim() {
        assert_eq!(solve_part::<2>(SAMPLE), "3");
    }

    #[test]
    fn malformed_claim_is_rejected() {
        assert!(Solver::parse("#1 @ 1,3").is_err());
    }
}

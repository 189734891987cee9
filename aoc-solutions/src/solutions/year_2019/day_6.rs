use crate::utils::collections::FactoryMap;
use crate::utils::search::{bfs, bfs_all};
use aoc_core::{AocParser, ParseError, PartSolver, SolveError};
use aoc_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashMap;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(parts = 2)]
#[aoc(year = 2019, day = 6, tags = ["2019", "graph"])]
pub struct Solver;

#[derive(Debug)]
pub struct OrbitMap<'a> {
    // Body -> bodies orbiting it directly
    children: HashMap<&'a str, Vec<&'a str>>,
    // Body -> the body it orbits
    parent: HashMap<&'a str, &'a str>,
}

impl<'a> OrbitMap<'a> {
    fn neighbors(&self, body: &'a str) -> Vec<&'a str> {
        let mut all: Vec<&str> = self.children.get(body).cloned().unwrap_or_default();
        if let Some(&parent) = self.parent.get(body) {
            all.push(parent);
        }
        all
    }
}

impl AocParser for Solver {
    type SharedData<'a> = OrbitMap<'a>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut children: FactoryMap<&str, Vec<&str>, _> = FactoryMap::new(|_: &&str| Vec::new());
        let mut parent = HashMap::new();

        for line in input.lines().filter(|line| !line.trim().is_empty()) {
            let (center, satellite) = line
                .trim()
                .split_once(')')
                .ok_or_else(|| ParseError::InvalidFormat(format!("bad orbit: {}", line)))?;
            children.get_or_create(center).push(satellite);
            parent.insert(satellite, center);
        }
        if parent.is_empty() {
            return Err(ParseError::MissingData("no orbits listed".into()));
        }
        Ok(OrbitMap {
            children: children.into_inner(),
            parent,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // Every body orbits, directly or indirectly, everything on its path
        // to the root; that is exactly its depth
        let depths = bfs_all("COM", |&body| {
            shared.children.get(body).cloned().unwrap_or_default()
        });
        Ok(depths.values().sum::<usize>().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // Hops between the bodies YOU and SAN orbit, so two less than the
        // path between them
        let transfers = bfs("YOU", |&body| shared.neighbors(body), |&body| body == "SAN")
            .and_then(|steps| steps.checked_sub(2))
            .ok_or_else(|| SolveError::SolveFailed("no route from YOU to SAN".into()))?;
        Ok(transfers.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "COM)B\nB)C\nC)D\nD)E\nE)F\nB)G\nG)H\nD)I\nE)J\nJ)K\nK)L";

    fn solve_part<const N: u8>(input: &str) -> String
    where
        Solver: PartSolver<N>,
    {
        let mut shared = Solver::parse(input).unwrap();
        <Solver as PartSolver<N>>::solve(&mut shared).unwrap()
    }

    #[test]
    fn total_orbit_count() {
        assert_eq!(solve_part::<1>(SAMPLE), "42");
    }

    #[test]
    fn orbital_transfers() {
        let input = format!("{}\nK)YOU\nI)SAN", SAMPLE);
        assert_eq!(solve_part::<2>(&input), "4");
    }
}

use aoc_core::{AocParser, ParseError, PartSolver, SolveError};
use aoc_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(parts = 2)]
#[aoc(year = 2018, day = 8, tags = ["2018"])]
pub struct Solver;

/// One node of the license tree
#[derive(Debug)]
pub struct Node {
    children: Vec<Node>,
    metadata: Vec<u64>,
}

impl Node {
    /// Consume this node and its subtree from the number stream
    fn build(numbers: &mut impl Iterator<Item = u64>) -> Option<Node> {
        let child_count = numbers.next()?;
        let metadata_count = numbers.next()?;

        let children = (0..child_count)
            .map(|_| Node::build(numbers))
            .collect::<Option<Vec<_>>>()?;
        let metadata = (0..metadata_count)
            .map(|_| numbers.next())
            .collect::<Option<Vec<_>>>()?;

        Some(Node { children, metadata })
    }

    /// Sum of all metadata in this subtree
    fn total(&self) -> u64 {
        self.metadata.iter().sum::<u64>()
            + self.children.iter().map(Node::total).sum::<u64>()
    }

    /// Value of this node: metadata sum for leaves, otherwise metadata
    /// entries index children (1-based, out of range skipped)
    fn value(&self) -> u64 {
        if self.children.is_empty() {
            self.metadata.iter().sum()
        } else {
            self.metadata
                .iter()
                .filter_map(|&m| self.children.get(m.checked_sub(1)? as usize))
                .map(Node::value)
                .sum()
        }
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Node;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let numbers = input
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<u64>()
                    .map_err(|_| ParseError::InvalidFormat(format!("bad number: {}", token)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Node::build(&mut numbers.into_iter())
            .ok_or_else(|| ParseError::MissingData("truncated license tree".into()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.total().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.value().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "2 3 0 3 10 11 12 1 1 0 1 99 2 1 1 2";

    #[test]
    fn metadata_total() {
        let root = Solver::parse(SAMPLE).unwrap();
        assert_eq!(root.total(), 138);
    }

    #[test]
    fn node_value_indexes_children() {
        let root = Solver::parse(SAMPLE).unwrap();
        assert_eq!(root.value(), 66);
    }

    #[test]
    fn truncated_tree_is_rejected() {
        assert!(Solver::parse("2 3 0 3 10").is_err());
    }
}

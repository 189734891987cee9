//! Generic graph search over closure-defined neighbourhoods
//!
//! States only need `Eq + Hash + Clone`; callers describe the graph with a
//! successor closure, so grids, trees and implicit state spaces all work
//! without an adjacency structure.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};
use std::hash::Hash;

/// Breadth-first search: fewest edges from `start` to a goal state.
///
/// Returns `None` when no goal is reachable.
pub fn bfs<N, S, I, G>(start: N, mut successors: S, mut is_goal: G) -> Option<usize>
where
    N: Eq + Hash + Clone,
    S: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
    G: FnMut(&N) -> bool,
{
    if is_goal(&start) {
        return Some(0);
    }

    let mut visited = HashSet::from([start.clone()]);
    let mut queue = VecDeque::from([(start, 0usize)]);

    while let Some((node, dist)) = queue.pop_front() {
        for next in successors(&node) {
            if visited.insert(next.clone()) {
                if is_goal(&next) {
                    return Some(dist + 1);
                }
                queue.push_back((next, dist + 1));
            }
        }
    }
    None
}

/// Breadth-first flood: edge distance from `start` to every reachable state.
pub fn bfs_all<N, S, I>(start: N, mut successors: S) -> HashMap<N, usize>
where
    N: Eq + Hash + Clone,
    S: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    let mut distances = HashMap::from([(start.clone(), 0usize)]);
    let mut queue = VecDeque::from([start]);

    while let Some(node) = queue.pop_front() {
        let dist = distances[&node];
        for next in successors(&node) {
            if !distances.contains_key(&next) {
                distances.insert(next.clone(), dist + 1);
                queue.push_back(next);
            }
        }
    }
    distances
}

/// Dijkstra: cheapest cost from `start` to a goal state.
///
/// Successors yield `(state, step_cost)` pairs. Stale heap entries are
/// skipped on pop instead of being decreased in place.
pub fn dijkstra<N, S, I, G>(start: N, mut successors: S, mut is_goal: G) -> Option<u64>
where
    N: Eq + Hash + Clone + Ord,
    S: FnMut(&N) -> I,
    I: IntoIterator<Item = (N, u64)>,
    G: FnMut(&N) -> bool,
{
    let mut best: HashMap<N, u64> = HashMap::from([(start.clone(), 0)]);
    let mut heap = BinaryHeap::from([Reverse((0u64, start))]);

    while let Some(Reverse((cost, node))) = heap.pop() {
        if is_goal(&node) {
            return Some(cost);
        }
        if best.get(&node).is_some_and(|&b| cost > b) {
            continue;
        }
        for (next, step) in successors(&node) {
            let next_cost = cost + step;
            if best.get(&next).is_none_or(|&b| next_cost < b) {
                best.insert(next.clone(), next_cost);
                heap.push(Reverse((next_cost, next)));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::grid::Grid;
    use crate::utils::vector::Vec2;

    #[test]
    fn bfs_shortest_path_on_grid() {
        let grid = Grid::from_lines("....\n.##.\n.#..\n....", '.', |c| c == '#').unwrap();
        let steps = bfs(
            Vec2::ZERO,
            |&pos| {
                grid.neighbors4(pos)
                    .filter(|&p| !grid[p])
                    .collect::<Vec<_>>()
            },
            |&pos| pos == Vec2::new(3, 3),
        );
        assert_eq!(steps, Some(6));
    }

    #[test]
    fn bfs_start_is_goal() {
        assert_eq!(bfs(7, |_| Vec::<i32>::new(), |&n| n == 7), Some(0));
    }

    #[test]
    fn bfs_unreachable() {
        let steps = bfs(
            0,
            |&n: &i32| if n < 3 { vec![n + 1] } else { vec![] },
            |&n| n == 10,
        );
        assert_eq!(steps, None);
    }

    #[test]
    fn bfs_all_distances() {
        // Chain 0 - 1 - 2 - 3 with a shortcut 0 - 3
        let edges = |&n: &u32| -> Vec<u32> {
            match n {
                0 => vec![1, 3],
                1 => vec![0, 2],
                2 => vec![1, 3],
                3 => vec![0, 2],
                _ => vec![],
            }
        };
        let distances = bfs_all(0, edges);
        assert_eq!(distances[&0], 0);
        assert_eq!(distances[&1], 1);
        assert_eq!(distances[&2], 2);
        assert_eq!(distances[&3], 1);
    }

    #[test]
    fn dijkstra_prefers_cheap_detour() {
        // 0 -> 2 direct costs 10; 0 -> 1 -> 2 costs 3.
        let edges = |&n: &u32| -> Vec<(u32, u64)> {
            match n {
                0 => vec![(2, 10), (1, 1)],
                1 => vec![(2, 2)],
                _ => vec![],
            }
        };
        assert_eq!(dijkstra(0, edges, |&n| n == 2), Some(3));
    }

    #[test]
    fn dijkstra_unreachable() {
        assert_eq!(
            dijkstra(0u32, |_| Vec::<(u32, u64)>::new(), |&n| n == 1),
            None
        );
    }
}

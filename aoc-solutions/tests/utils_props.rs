//! Property tests for the shared utility modules

use aoc_solutions::utils::collections::SortedList;
use aoc_solutions::utils::grid::Grid;
use aoc_solutions::utils::parse;
use aoc_solutions::utils::vector::Vec2;
use proptest::prelude::*;

proptest! {
    /// Inserting in any order always yields a sorted list
    #[test]
    fn sorted_list_is_always_sorted(values in prop::collection::vec(-1000i64..1000, 0..64)) {
        let mut list = SortedList::new();
        for value in &values {
            list.insert(*value);
        }

        prop_assert_eq!(list.len(), values.len());
        prop_assert!(list.as_slice().windows(2).all(|w| w[0] <= w[1]));
    }

    /// Wrapped and clamped steps always land inside the grid
    #[test]
    fn grid_movement_stays_in_bounds(
        x in 0i64..8,
        y in 0i64..8,
        dx in -20i64..20,
        dy in -20i64..20,
    ) {
        let grid = Grid::filled(8, 8, 0u8);
        let pos = Vec2::new(x, y);
        let delta = Vec2::new(dx, dy);

        prop_assert!(grid.in_bounds(grid.step_wrap(pos, delta)));
        prop_assert!(grid.in_bounds(grid.step_clamp(pos, delta)));
        if let Some(stepped) = grid.step(pos, delta) {
            prop_assert_eq!(stepped, pos + delta);
            prop_assert!(grid.in_bounds(stepped));
        }
    }

    /// Numbers written with separators come back out unchanged
    #[test]
    fn integer_scraping_round_trips(values in prop::collection::vec(-10000i64..10000, 1..16)) {
        let text = values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        prop_assert_eq!(parse::integers(&text), values);
    }

    /// Reducing a vector keeps its direction: the original is a positive
    /// integer multiple of the reduced form
    #[test]
    fn reduced_vectors_keep_direction(x in -50i64..50, y in -50i64..50) {
        prop_assume!(x != 0 || y != 0);
        let v = Vec2::new(x, y);
        let r = v.reduced();

        let scale = if r.x != 0 { v.x / r.x } else { v.y / r.y };
        prop_assert!(scale > 0);
        prop_assert_eq!(r * scale, v);
    }
}

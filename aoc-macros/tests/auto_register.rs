use aoc_core::{AocParser, ParseError, PartSolver, RegistryBuilder, SolveError};
use aoc_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(parts = 2)]
#[aoc(year = 2016, day = 24, tags = ["test", "even"])]
struct Registered;

impl AocParser for Registered {
    type SharedData<'a> = i64;

    fn parse(input: &str) -> Result<i64, ParseError> {
        input
            .trim()
            .parse()
            .map_err(|_| ParseError::InvalidFormat("Expected integer".into()))
    }
}

impl PartSolver<1> for Registered {
    fn solve(shared: &mut i64) -> Result<String, SolveError> {
        Ok((*shared + 1).to_string())
    }
}

impl PartSolver<2> for Registered {
    fn solve(shared: &mut i64) -> Result<String, SolveError> {
        Ok((*shared - 1).to_string())
    }
}

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(parts = 1)]
#[aoc(year = 2016, day = 25, tags = ["test", "odd"])]
struct AlsoRegistered;

impl AocParser for AlsoRegistered {
    type SharedData<'a> = ();

    fn parse(_input: &str) -> Result<(), ParseError> {
        Ok(())
    }
}

impl PartSolver<1> for AlsoRegistered {
    fn solve(_shared: &mut ()) -> Result<String, SolveError> {
        Ok("done".into())
    }
}

#[test]
fn plugins_are_collected_and_registered() {
    let registry = RegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    let info = registry.get_info(2016, 24).unwrap();
    assert_eq!(info.parts, 2);

    let mut solver = registry.create_solver(2016, 24, "41").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "42");
    assert_eq!(solver.solve(2).unwrap().answer, "40");
}

#[test]
fn tag_filtering_selects_plugins() {
    let registry = RegistryBuilder::new()
        .register_plugins_filtered(|plugin| plugin.tags.contains(&"odd"))
        .unwrap()
        .build();

    assert!(registry.contains(2016, 25));
    assert!(!registry.contains(2016, 24));
}

//! Solver registry: flat year-day storage, builder-only mutation

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;

/// First Advent of Code year
pub const BASE_YEAR: u16 = 2015;
/// Number of years the flat storage covers
pub const MAX_YEARS: usize = 20;
/// Days per event (1-25)
pub const DAYS_PER_YEAR: usize = 25;
/// Total capacity of the flat storage
pub const CAPACITY: usize = MAX_YEARS * DAYS_PER_YEAR;

/// Flat index for a year/day, `None` if out of bounds
#[inline]
fn calc_index(year: u16, day: u8) -> Option<usize> {
    if year < BASE_YEAR || year >= BASE_YEAR + MAX_YEARS as u16 {
        return None;
    }
    if day == 0 || day > DAYS_PER_YEAR as u8 {
        return None;
    }
    Some((year - BASE_YEAR) as usize * DAYS_PER_YEAR + (day - 1) as usize)
}

/// Reconstruct the year/day encoded by a flat index
#[inline]
fn from_index(index: usize) -> (u16, u8) {
    let year = BASE_YEAR + (index / DAYS_PER_YEAR) as u16;
    let day = (index % DAYS_PER_YEAR) as u8 + 1;
    (year, day)
}

/// Thread-safe factory producing a solver instance from raw input
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// Number of parts the solver implements
    pub parts: u8,
}

struct Entry {
    factory: SolverFactory,
    parts: u8,
}

/// Builder for a [`SolverRegistry`].
///
/// Registration is the only mutation path; once [`build`](Self::build) runs,
/// the registry can only look solvers up. Duplicate and out-of-range
/// registrations are rejected.
///
/// # Example
///
/// ```no_run
/// # use aoc_core::RegistryBuilder;
/// let registry = RegistryBuilder::new()
///     .register_all_plugins()
///     .unwrap()
///     .build();
/// ```
pub struct RegistryBuilder {
    entries: Vec<Option<Entry>>,
}

impl RegistryBuilder {
    /// Create an empty builder with pre-allocated storage
    pub fn new() -> Self {
        Self {
            entries: (0..CAPACITY).map(|_| None).collect(),
        }
    }

    /// Register a factory for a specific year and day.
    ///
    /// `parts` is the number of parts the produced solvers implement; it is
    /// stored alongside the factory so work can be scheduled without parsing
    /// any input first.
    pub fn register<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        let index = calc_index(year, day).ok_or(RegistrationError::InvalidYearDay(year, day))?;
        if self.entries[index].is_some() {
            return Err(RegistrationError::Duplicate(year, day));
        }
        self.entries[index] = Some(Entry {
            factory: Box::new(factory),
            parts,
        });
        Ok(self)
    }

    /// Register every plugin submitted through `inventory`
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_plugins_filtered(|_| true)
    }

    /// Register the plugins matching `filter`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use aoc_core::RegistryBuilder;
    /// // Only 2019 solvers
    /// let registry = RegistryBuilder::new()
    ///     .register_plugins_filtered(|plugin| plugin.year == 2019)
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_plugins_filtered<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin
                    .solver
                    .register_with(self, plugin.year, plugin.day)?;
            }
        }
        Ok(self)
    }

    /// Finalize into an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable lookup table from (year, day) to solver factories
pub struct SolverRegistry {
    entries: Vec<Option<Entry>>,
}

impl SolverRegistry {
    /// Create a solver instance for a specific year and day by parsing `input`
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let index = calc_index(year, day).ok_or(SolverError::InvalidYearDay(year, day))?;
        let entry = self.entries[index]
            .as_ref()
            .ok_or(SolverError::NotFound(year, day))?;
        (entry.factory)(input).map_err(SolverError::ParseError)
    }

    /// Metadata for a specific registered solver
    pub fn get_info(&self, year: u16, day: u8) -> Option<FactoryInfo> {
        let index = calc_index(year, day)?;
        self.entries[index].as_ref().map(|e| FactoryInfo {
            year,
            day,
            parts: e.parts,
        })
    }

    /// Whether a solver is registered for year/day
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.get_info(year, day).is_some()
    }

    /// Iterate metadata for all registered solvers, in (year, day) order
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.entries.iter().enumerate().filter_map(|(i, entry)| {
            entry.as_ref().map(|e| {
                let (year, day) = from_index(i);
                FactoryInfo {
                    year,
                    day,
                    parts: e.parts,
                }
            })
        })
    }

    /// Number of registered solvers
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Whether no solver is registered
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.is_none())
    }
}

/// Type-erased self-registration, blanket-implemented for every `Solver`.
///
/// `SolverPlugin` holds `&'static dyn RegisterableSolver` so solvers with
/// different associated types can sit in one inventory collection.
pub trait RegisterableSolver: Sync {
    /// Register this solver type with the builder for a specific year and day
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError>;

    /// Number of parts the solver implements
    fn parts(&self) -> u8;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register(year, day, S::PARTS, move |input: &str| {
            Ok(Box::new(SolverInstance::<S>::new(year, day, input)?))
        })
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// Plugin record for automatic solver registration.
///
/// Normally submitted by `#[derive(AutoRegisterSolver)]`; a manual
/// `inventory::submit!` with the same fields works too.
///
/// # Example
///
/// ```ignore
/// inventory::submit! {
///     SolverPlugin {
///         year: 2018,
///         day: 1,
///         solver: &Day1,
///         tags: &["2018"],
///     }
/// }
/// ```
pub struct SolverPlugin {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// The solver, type-erased
    pub solver: &'static dyn RegisterableSolver,
    /// Tags for filtering (e.g. a year label, "intcode", "grid")
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolveError;
    use crate::solver::AocParser;

    struct Doubler;

    impl AocParser for Doubler {
        type SharedData<'a> = i64;

        fn parse(input: &str) -> Result<i64, ParseError> {
            input
                .trim()
                .parse()
                .map_err(|_| ParseError::InvalidFormat(input.into()))
        }
    }

    impl Solver for Doubler {
        const PARTS: u8 = 1;

        fn solve_part(shared: &mut i64, part: u8) -> Result<String, SolveError> {
            match part {
                1 => Ok((*shared * 2).to_string()),
                _ => Err(SolveError::PartNotImplemented(part)),
            }
        }
    }

    fn register_doubler(builder: RegistryBuilder, year: u16, day: u8) -> RegistryBuilder {
        Doubler.register_with(builder, year, day).unwrap()
    }

    #[test]
    fn index_round_trip() {
        for year in BASE_YEAR..BASE_YEAR + MAX_YEARS as u16 {
            for day in 1..=DAYS_PER_YEAR as u8 {
                let index = calc_index(year, day).unwrap();
                assert_eq!(from_index(index), (year, day));
            }
        }
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(calc_index(2014, 1), None);
        assert_eq!(calc_index(BASE_YEAR + MAX_YEARS as u16, 1), None);
        assert_eq!(calc_index(2018, 0), None);
        assert_eq!(calc_index(2018, 26), None);
    }

    #[test]
    fn create_and_solve() {
        let registry = register_doubler(RegistryBuilder::new(), 2018, 1).build();
        let mut solver = registry.create_solver(2018, 1, "21").unwrap();
        assert_eq!(solver.solve(1).unwrap().answer, "42");
        assert_eq!(solver.year(), 2018);
        assert_eq!(solver.day(), 1);
        assert_eq!(solver.parts(), 1);
    }

    #[test]
    fn duplicate_registration_fails() {
        let builder = register_doubler(RegistryBuilder::new(), 2018, 1);
        let err = Doubler.register_with(builder, 2018, 1).err().unwrap();
        assert!(matches!(err, RegistrationError::Duplicate(2018, 1)));
    }

    #[test]
    fn invalid_year_registration_fails() {
        let err = Doubler
            .register_with(RegistryBuilder::new(), 1999, 1)
            .err()
            .unwrap();
        assert!(matches!(err, RegistrationError::InvalidYearDay(1999, 1)));
    }

    #[test]
    fn missing_solver_not_found() {
        let registry = RegistryBuilder::new().build();
        assert!(matches!(
            registry.create_solver(2018, 2, "x").err().unwrap(),
            SolverError::NotFound(2018, 2)
        ));
        assert!(matches!(
            registry.create_solver(1999, 2, "x").err().unwrap(),
            SolverError::InvalidYearDay(1999, 2)
        ));
    }

    #[test]
    fn info_iteration_is_ordered() {
        let builder = register_doubler(RegistryBuilder::new(), 2019, 3);
        let builder = register_doubler(builder, 2017, 5);
        let registry = register_doubler(builder, 2017, 1).build();

        let info: Vec<(u16, u8)> = registry.iter_info().map(|i| (i.year, i.day)).collect();
        assert_eq!(info, vec![(2017, 1), (2017, 5), (2019, 3)]);
        assert_eq!(registry.len(), 3);
        assert!(registry.contains(2017, 5));
        assert!(!registry.contains(2018, 5));
    }
}

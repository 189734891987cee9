//! Local store for puzzle input files

use crate::error::InputError;
use std::fs;
use std::path::PathBuf;

/// File-backed puzzle inputs
///
/// Directory structure: `{root}/{year}/day{DD}.txt`
pub struct InputStore {
    root: PathBuf,
}

impl InputStore {
    /// Create a store rooted at `root`
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Path of the input file for a specific year/day
    pub fn path(&self, year: u16, day: u8) -> PathBuf {
        self.root
            .join(year.to_string())
            .join(format!("day{:02}.txt", day))
    }

    /// Whether an input file exists for year/day
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.path(year, day).is_file()
    }

    /// Read the input for year/day
    pub fn load(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.path(year, day);
        if !path.is_file() {
            return Err(InputError::NotFound(path));
        }
        fs::read_to_string(&path).map_err(|e| InputError::Io {
            path,
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn path_layout() {
        let store = InputStore::new(PathBuf::from("inputs"));
        let path = store.path(2018, 1);
        assert!(path.ends_with("2018/day01.txt"));
        let path = store.path(2019, 25);
        assert!(path.ends_with("2019/day25.txt"));
    }

    #[test]
    fn load_round_trip() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        assert!(!store.contains(2018, 1));
        assert!(matches!(
            store.load(2018, 1),
            Err(InputError::NotFound(_))
        ));

        let day_dir = temp.path().join("2018");
        fs::create_dir_all(&day_dir).unwrap();
        fs::write(day_dir.join("day01.txt"), "+1\n-2\n").unwrap();

        assert!(store.contains(2018, 1));
        assert_eq!(store.load(2018, 1).unwrap(), "+1\n-2\n");
    }
}

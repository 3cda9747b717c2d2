//! [`TestConfigDir`] builder for cluster configuration test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary config directory with helpers for writing preset files.
///
/// # Example
///
/// ```rust,no_run
/// use cluster_test_utils::TestConfigDir;
///
/// let dir = TestConfigDir::new()
///     .with_preset("small", Some(1), Some(3))
///     .with_file("small.somethingelse", "chicken");
/// dir.assert_file_exists("small.workercount");
/// ```
pub struct TestConfigDir {
    temp_dir: TempDir,
}

impl Default for TestConfigDir {
    fn default() -> Self {
        Self::new()
    }
}

impl TestConfigDir {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Return the path of `name` inside the directory.
    pub fn file_path(&self, name: &str) -> PathBuf {
        self.path().join(name)
    }

    /// Write `content` verbatim to `name`.
    pub fn with_file(self, name: &str, content: &str) -> Self {
        self.write_file(name, content);
        self
    }

    /// Write `<name>.mastercount` / `<name>.workercount` for each supplied value.
    pub fn with_preset(self, name: &str, master_count: Option<i64>, worker_count: Option<i64>) -> Self {
        if let Some(count) = master_count {
            self.write_file(&format!("{name}.mastercount"), &count.to_string());
        }
        if let Some(count) = worker_count {
            self.write_file(&format!("{name}.workercount"), &count.to_string());
        }
        self
    }

    /// Write the `default` preset that replaces the built-in default tier.
    pub fn with_user_default(self, master_count: i64, worker_count: i64) -> Self {
        self.with_preset("default", Some(master_count), Some(worker_count))
    }

    /// Write `content` to `name`, replacing any existing file.
    pub fn write_file(&self, name: &str, content: &str) {
        fs::write(self.file_path(name), content)
            .unwrap_or_else(|e| panic!("Could not write fixture file {name}: {e}"));
    }

    /// Remove `name` from the directory.
    pub fn remove_file(&self, name: &str) {
        fs::remove_file(self.file_path(name))
            .unwrap_or_else(|e| panic!("Could not remove fixture file {name}: {e}"));
    }

    /// Assert that `name` exists in the directory.
    ///
    /// # Panics
    /// Panics with a descriptive message if the file does not exist.
    pub fn assert_file_exists(&self, name: &str) {
        let full_path = self.file_path(name);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `name` holds exactly `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or its content differs.
    pub fn assert_file_content(&self, name: &str, content: &str) {
        let full_path = self.file_path(name);
        let file_content = fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()));
        assert_eq!(
            file_content,
            content,
            "Unexpected content in {}",
            full_path.display()
        );
    }
}

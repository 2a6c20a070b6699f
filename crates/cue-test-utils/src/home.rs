//! [`TestHome`] fixture for cueme test scenarios.

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory laid out as `home/` and `work/`, with helpers for
/// writing the cueme config and asserting on files.
///
/// Relative paths passed to the file helpers are resolved against the
/// temporary root, so `"home/.kiro/steering/x.md"` and `"work/notes.md"`
/// both work.
///
/// # Example
///
/// ```rust,no_run
/// use cue_test_utils::TestHome;
/// use serde_json::json;
///
/// let home = TestHome::new();
/// home.write_protocol("Hello\n");
/// home.write_config(json!({ "cueme.proto.prefix": { "kiro": [] } }));
/// home.assert_file_exists("home/.cue/cueme.json");
/// ```
pub struct TestHome {
    temp_dir: TempDir,
}

impl Default for TestHome {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHome {
    /// Create the temporary root with empty `home/` and `work/` directories.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("home")).unwrap();
        fs::create_dir_all(temp_dir.path().join("work")).unwrap();
        Self { temp_dir }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn home(&self) -> PathBuf {
        self.root().join("home")
    }

    pub fn cwd(&self) -> PathBuf {
        self.root().join("work")
    }

    /// `home/.cue/cueme.json`
    pub fn config_path(&self) -> PathBuf {
        self.home().join(".cue").join("cueme.json")
    }

    /// `home/.cue/protocol.md`
    pub fn protocol_path(&self) -> PathBuf {
        self.home().join(".cue").join("protocol.md")
    }

    /// Absolute path for `rel` under the root.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Write `config` as the cueme config.
    ///
    /// `cueme.proto.protocol_path` defaults to [`Self::protocol_path`] when
    /// the document does not set it.
    pub fn write_config(&self, mut config: Value) -> PathBuf {
        if let Value::Object(map) = &mut config {
            map.entry("cueme.proto.protocol_path").or_insert_with(|| {
                Value::String(self.protocol_path().to_string_lossy().into_owned())
            });
        }
        let path = self.config_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
        path
    }

    /// Write the raw config text, for malformed-document scenarios.
    pub fn write_config_raw(&self, content: &str) -> PathBuf {
        let path = self.config_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    pub fn write_protocol(&self, content: &str) -> PathBuf {
        let path = self.protocol_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    /// Write `content` at `rel`, creating parent directories.
    pub fn write_file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.path(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    /// Read the file at `rel`.
    ///
    /// # Panics
    /// Panics with the path if the file cannot be read.
    pub fn read_file(&self, rel: &str) -> String {
        let path = self.path(rel);
        fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", path.display()))
    }

    /// # Panics
    /// Panics if `rel` does not exist.
    pub fn assert_file_exists(&self, rel: &str) {
        let path = self.path(rel);
        assert!(path.exists(), "Expected file to exist: {}", path.display());
    }

    /// # Panics
    /// Panics if `rel` exists.
    pub fn assert_file_not_exists(&self, rel: &str) {
        let path = self.path(rel);
        assert!(
            !path.exists(),
            "Expected file NOT to exist: {}",
            path.display()
        );
    }

    /// Assert that the file at `rel` contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, rel: &str, content: &str) {
        let actual = self.read_file(rel);
        assert!(
            actual.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            rel,
            content,
            actual
        );
    }
}

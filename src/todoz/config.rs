use crate::error::{Result, TodoError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_TODO_FILE: &str = "todo.txt";
const DEFAULT_DONE_FILE: &str = "done.txt";

/// Locations of the two backing files.
///
/// Read from `config.json` in a config directory. Every field is optional in
/// the file; missing fields fall back to the defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoConfig {
    /// Pending items, one per line
    #[serde(default = "default_todo_file")]
    pub todo_file: PathBuf,

    /// Completed items, append-only
    #[serde(default = "default_done_file")]
    pub done_file: PathBuf,
}

fn default_todo_file() -> PathBuf {
    PathBuf::from(DEFAULT_TODO_FILE)
}

fn default_done_file() -> PathBuf {
    PathBuf::from(DEFAULT_DONE_FILE)
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            todo_file: default_todo_file(),
            done_file: default_done_file(),
        }
    }
}

impl TodoConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        tracing::debug!(path = %config_path.display(), "loading config");
        let content = fs::read_to_string(&config_path).map_err(TodoError::Io)?;
        let config: TodoConfig = serde_json::from_str(&content).map_err(TodoError::Config)?;
        Ok(config)
    }

    /// Load `config.json` from each of `dirs` in order. A later file replaces
    /// an earlier one; directories without a config are skipped.
    pub fn load_layered<P: AsRef<Path>>(dirs: &[P]) -> Result<Self> {
        let mut config = Self::default();
        for dir in dirs {
            if dir.as_ref().join(CONFIG_FILENAME).exists() {
                config = Self::load(dir)?;
            }
        }
        Ok(config)
    }

    pub fn with_todo_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.todo_file = path.into();
        self
    }

    pub fn with_done_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.done_file = path.into();
        self
    }

    /// Resolve relative file paths against `base`.
    pub fn resolved(mut self, base: &Path) -> Self {
        if self.todo_file.is_relative() {
            self.todo_file = base.join(&self.todo_file);
        }
        if self.done_file.is_relative() {
            self.done_file = base.join(&self.done_file);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &Path, config: &TodoConfig) {
        let content = serde_json::to_string_pretty(config).unwrap();
        fs::write(dir.join(CONFIG_FILENAME), content).unwrap();
    }

    #[test]
    fn test_default_config() {
        let config = TodoConfig::default();
        assert_eq!(config.todo_file, PathBuf::from("todo.txt"));
        assert_eq!(config.done_file, PathBuf::from("done.txt"));
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = TodoConfig::load(dir.path()).unwrap();
        assert_eq!(config, TodoConfig::default());
    }

    #[test]
    fn test_load_written_config() {
        let dir = TempDir::new().unwrap();
        let config = TodoConfig::default().with_todo_file("tasks.txt");
        write_config(dir.path(), &config);

        let loaded = TodoConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.todo_file, PathBuf::from("tasks.txt"));
        assert_eq!(loaded.done_file, PathBuf::from("done.txt"));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.json"), r#"{"done_file": "archive.txt"}"#).unwrap();

        let loaded = TodoConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.todo_file, PathBuf::from("todo.txt"));
        assert_eq!(loaded.done_file, PathBuf::from("archive.txt"));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.json"), "{not json").unwrap();
        assert!(matches!(
            TodoConfig::load(dir.path()),
            Err(TodoError::Config(_))
        ));
    }

    #[test]
    fn test_layered_last_wins() {
        let user = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        write_config(user.path(), &TodoConfig::default().with_todo_file("user.txt"));
        write_config(
            project.path(),
            &TodoConfig::default().with_todo_file("project.txt"),
        );

        let loaded = TodoConfig::load_layered(&[user.path(), project.path()]).unwrap();
        assert_eq!(loaded.todo_file, PathBuf::from("project.txt"));
    }

    #[test]
    fn test_resolved_keeps_absolute_paths() {
        let base = TempDir::new().unwrap();
        let absolute = base.path().join("abs.txt");
        let config = TodoConfig::default()
            .with_todo_file(&absolute)
            .resolved(Path::new("/elsewhere"));
        assert_eq!(config.todo_file, absolute);
        assert_eq!(config.done_file, Path::new("/elsewhere").join("done.txt"));
    }
}

use super::DataStore;
use crate::config::TodoConfig;
use crate::error::{Result, TodoError};
use crate::model::DoneRecord;
use std::fs::{self, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

pub struct FileStore {
    todo_file: PathBuf,
    done_file: PathBuf,
}

impl FileStore {
    pub fn new(todo_file: PathBuf, done_file: PathBuf) -> Self {
        Self {
            todo_file,
            done_file,
        }
    }

    pub fn from_config(config: &TodoConfig) -> Self {
        Self::new(config.todo_file.clone(), config.done_file.clone())
    }

    fn ensure_parent(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(TodoError::Io)?;
        }
        Ok(())
    }

    fn read_lines(&self, path: &Path) -> Result<Vec<String>> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "file missing, treating as empty");
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(path).map_err(TodoError::Io)?;
        let lines: Vec<String> = content.lines().map(str::to_string).collect();
        tracing::debug!(path = %path.display(), lines = lines.len(), "read file");
        Ok(lines)
    }

    /// Append `line` as its own record. A file whose last line lacks a
    /// terminator (hand edits, older done files) is terminated first.
    fn append_line(&self, path: &Path, line: &str) -> Result<()> {
        self.ensure_parent(path)?;
        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(path)
            .map_err(TodoError::Io)?;

        let mut record = String::with_capacity(line.len() + 2);
        if ends_unterminated(&mut file).map_err(TodoError::Io)? {
            record.push('\n');
        }
        record.push_str(line);
        record.push('\n');
        file.write_all(record.as_bytes()).map_err(TodoError::Io)?;
        tracing::debug!(path = %path.display(), "appended line");
        Ok(())
    }
}

fn ends_unterminated(file: &mut fs::File) -> std::io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(false);
    }
    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}

impl DataStore for FileStore {
    fn read_pending(&self) -> Result<Vec<String>> {
        self.read_lines(&self.todo_file)
    }

    fn write_pending(&mut self, lines: &[String]) -> Result<()> {
        self.ensure_parent(&self.todo_file)?;

        let mut content = String::new();
        for line in lines {
            content.push_str(line);
            content.push('\n');
        }

        // Write to a sibling and rename so a failed write never truncates the list
        let file_name = self
            .todo_file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "todo".to_string());
        let tmp_file = self
            .todo_file
            .with_file_name(format!(".{}-{}.tmp", file_name, std::process::id()));
        fs::write(&tmp_file, content).map_err(TodoError::Io)?;
        fs::rename(&tmp_file, &self.todo_file).map_err(TodoError::Io)?;

        tracing::debug!(path = %self.todo_file.display(), lines = lines.len(), "rewrote file");
        Ok(())
    }

    fn append_pending(&mut self, line: &str) -> Result<()> {
        self.append_line(&self.todo_file, line)
    }

    fn read_done(&self) -> Result<Vec<String>> {
        self.read_lines(&self.done_file)
    }

    fn append_done(&mut self, record: &DoneRecord) -> Result<()> {
        self.append_line(&self.done_file, &record.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("todo.txt"), dir.path().join("done.txt"));
        (dir, store)
    }

    #[test]
    fn missing_files_read_as_empty() {
        let (_dir, store) = setup();
        assert!(store.read_pending().unwrap().is_empty());
        assert!(store.read_done().unwrap().is_empty());
    }

    #[test]
    fn append_then_read_pending() {
        let (dir, mut store) = setup();
        store.append_pending("One").unwrap();
        store.append_pending("Two").unwrap();

        assert_eq!(store.read_pending().unwrap(), vec!["One", "Two"]);
        let on_disk = fs::read_to_string(dir.path().join("todo.txt")).unwrap();
        assert_eq!(on_disk, "One\nTwo\n");
    }

    #[test]
    fn rewrite_replaces_content_and_leaves_no_tmp_files() {
        let (dir, mut store) = setup();
        fs::write(dir.path().join("todo.txt"), "One\nTwo\nThree\n").unwrap();

        store
            .write_pending(&["One".to_string(), "Three".to_string()])
            .unwrap();

        let on_disk = fs::read_to_string(dir.path().join("todo.txt")).unwrap();
        assert_eq!(on_disk, "One\nThree\n");

        for entry in fs::read_dir(dir.path()).unwrap() {
            let path = entry.unwrap().path();
            let name = path.file_name().unwrap().to_str().unwrap();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }

    #[test]
    fn rewrite_with_no_lines_empties_the_file() {
        let (dir, mut store) = setup();
        fs::write(dir.path().join("todo.txt"), "Only\n").unwrap();
        store.write_pending(&[]).unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("todo.txt")).unwrap(), "");
    }

    #[test]
    fn reads_file_without_trailing_newline() {
        let (dir, store) = setup();
        fs::write(dir.path().join("todo.txt"), "One\nTwo").unwrap();
        assert_eq!(store.read_pending().unwrap(), vec!["One", "Two"]);
    }

    #[test]
    fn append_done_writes_one_record_per_line() {
        let (dir, mut store) = setup();
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        store.append_done(&DoneRecord::new("One", date)).unwrap();
        store.append_done(&DoneRecord::new("Two", date)).unwrap();

        let on_disk = fs::read_to_string(dir.path().join("done.txt")).unwrap();
        assert_eq!(on_disk, "One (02-01-2024)\nTwo (02-01-2024)\n");
    }

    #[test]
    fn append_pending_after_unterminated_last_line() {
        let (dir, mut store) = setup();
        fs::write(dir.path().join("todo.txt"), "One\nTwo").unwrap();

        store.append_pending("Three").unwrap();

        assert_eq!(store.read_pending().unwrap(), vec!["One", "Two", "Three"]);
        let on_disk = fs::read_to_string(dir.path().join("todo.txt")).unwrap();
        assert_eq!(on_disk, "One\nTwo\nThree\n");
    }

    #[test]
    fn append_done_after_legacy_record_without_newline() {
        let (dir, mut store) = setup();
        fs::write(dir.path().join("done.txt"), "\n Old (01-02-2020)").unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();

        store.append_done(&DoneRecord::new("New", date)).unwrap();

        assert_eq!(
            store.read_done().unwrap(),
            vec!["", " Old (01-02-2020)", "New (02-01-2024)"]
        );
    }

    #[test]
    fn append_to_empty_file_adds_no_blank_line() {
        let (dir, mut store) = setup();
        fs::write(dir.path().join("todo.txt"), "").unwrap();
        store.append_pending("First").unwrap();
        assert_eq!(
            fs::read_to_string(dir.path().join("todo.txt")).unwrap(),
            "First\n"
        );
    }

    #[test]
    fn rewrite_normalizes_crlf_terminators_but_keeps_content() {
        let (dir, mut store) = setup();
        fs::write(dir.path().join("todo.txt"), "(A)tight\r\nTwo\r\nThree\r\n").unwrap();

        let mut lines = store.read_pending().unwrap();
        assert_eq!(lines, vec!["(A)tight", "Two", "Three"]);
        lines.remove(1);
        store.write_pending(&lines).unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("todo.txt")).unwrap(),
            "(A)tight\nThree\n"
        );
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let mut store = FileStore::new(nested.join("todo.txt"), nested.join("done.txt"));
        store.append_pending("Deep").unwrap();
        assert_eq!(store.read_pending().unwrap(), vec!["Deep"]);
    }
}

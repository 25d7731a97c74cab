use super::DataStore;
use crate::error::Result;
use crate::model::DoneRecord;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    pending: Vec<String>,
    done: Vec<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn read_pending(&self) -> Result<Vec<String>> {
        Ok(self.pending.clone())
    }

    fn write_pending(&mut self, lines: &[String]) -> Result<()> {
        self.pending = lines.to_vec();
        Ok(())
    }

    fn append_pending(&mut self, line: &str) -> Result<()> {
        self.pending.push(line.to_string());
        Ok(())
    }

    fn read_done(&self) -> Result<Vec<String>> {
        Ok(self.done.clone())
    }

    fn append_done(&mut self, record: &DoneRecord) -> Result<()> {
        self.done.push(record.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_items(mut self, lines: &[&str]) -> Self {
            for line in lines {
                self.store.append_pending(line).unwrap();
            }
            self
        }

        pub fn with_numbered_items(mut self, count: usize) -> Self {
            for i in 0..count {
                self.store
                    .append_pending(&format!("Item {}", i + 1))
                    .unwrap();
            }
            self
        }

        pub fn with_done_lines(mut self, lines: &[&str]) -> Self {
            self.store.done.extend(lines.iter().map(|l| l.to_string()));
            self
        }
    }
}

use super::backend::StorageBackend;
use crate::error::{Result, TextBuddyError};
use std::cell::{Cell, RefCell};

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since textbuddy is single-threaded,
/// which lets `StorageBackend` take `&self` everywhere.
pub struct MemBackend {
    name: String,
    lines: RefCell<Vec<String>>,
    saves: Cell<usize>,
    simulate_write_error: Cell<bool>,
}

impl Default for MemBackend {
    fn default() -> Self {
        Self::new("mem.txt")
    }
}

impl MemBackend {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lines: RefCell::new(Vec::new()),
            saves: Cell::new(0),
            simulate_write_error: Cell::new(false),
        }
    }

    /// Pre-populates storage, as if the file already had content.
    pub fn with_lines<I, S>(self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        *self.lines.borrow_mut() = lines.into_iter().map(Into::into).collect();
        self
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Number of successful `save_lines` calls so far.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    pub fn stored_lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl StorageBackend for MemBackend {
    fn name(&self) -> &str {
        &self.name
    }

    fn load_lines(&self) -> Result<Vec<String>> {
        Ok(self.lines.borrow().clone())
    }

    fn save_lines(&self, lines: &[String]) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(TextBuddyError::io(
                self.name.clone(),
                std::io::Error::other("simulated write error"),
            ));
        }
        *self.lines.borrow_mut() = lines.to_vec();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn read_raw(&self) -> Result<String> {
        Ok(self.lines.borrow().iter().map(|l| format!("{}\n", l)).collect())
    }
}

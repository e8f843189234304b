use super::backend::StorageBackend;
use crate::error::Result;
use std::cmp::Ordering;

/// The ordered lines of one backing file.
///
/// Every mutating method rewrites the whole backing storage before returning,
/// so after any successful call `lines()` equals what the backend holds.
pub struct LineStore<B: StorageBackend> {
    backend: B,
    lines: Vec<String>,
}

impl<B: StorageBackend> LineStore<B> {
    /// Loads the existing lines from `backend`.
    pub fn open(backend: B) -> Result<Self> {
        let lines = backend.load_lines()?;
        log::debug!("loaded {} line(s) from {}", lines.len(), backend.name());
        Ok(Self { backend, lines })
    }

    /// Name of the backing file, as used in feedback messages.
    pub fn name(&self) -> &str {
        self.backend.name()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Re-reads the backing storage as it currently is.
    pub fn read_backing_content(&self) -> Result<String> {
        self.backend.read_raw()
    }

    pub fn push(&mut self, line: String) -> Result<()> {
        self.lines.push(line);
        self.sync()
    }

    /// Removes the line at the 0-based `position`.
    /// Returns `None` without touching storage if `position` is out of range.
    pub fn remove(&mut self, position: usize) -> Result<Option<String>> {
        if position >= self.lines.len() {
            return Ok(None);
        }
        let removed = self.lines.remove(position);
        self.sync()?;
        Ok(Some(removed))
    }

    pub fn clear(&mut self) -> Result<()> {
        self.lines.clear();
        self.sync()
    }

    /// Stable sort with `compare`.
    pub fn sort_by<F>(&mut self, compare: F) -> Result<()>
    where
        F: FnMut(&String, &String) -> Ordering,
    {
        self.lines.sort_by(compare);
        self.sync()
    }

    fn sync(&self) -> Result<()> {
        self.backend.save_lines(&self.lines)?;
        log::debug!(
            "rewrote {} with {} line(s)",
            self.backend.name(),
            self.lines.len()
        );
        Ok(())
    }
}

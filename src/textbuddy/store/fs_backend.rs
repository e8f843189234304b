use super::backend::StorageBackend;
use crate::error::{Result, TextBuddyError};
use std::fs::{self, File};
use std::path::PathBuf;

#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Stores lines in a plain text file, one line per file line.
pub struct FsBackend {
    path: PathBuf,
    name: String,
}

impl FsBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, name }
    }

    fn io_err(&self, source: std::io::Error) -> TextBuddyError {
        TextBuddyError::io(self.name.clone(), source)
    }

    fn ensure_exists(&self) -> Result<()> {
        if !self.path.exists() {
            log::debug!("creating empty backing file {}", self.path.display());
            File::create(&self.path).map_err(|e| self.io_err(e))?;
        }
        Ok(())
    }
}

/// Renders lines in the on-disk format: every line, the last included,
/// followed by a line terminator.
pub fn serialize_lines(lines: &[String]) -> String {
    let mut content = String::with_capacity(lines.iter().map(|l| l.len() + 2).sum());
    for line in lines {
        content.push_str(line);
        content.push_str(LINE_ENDING);
    }
    content
}

impl StorageBackend for FsBackend {
    fn name(&self) -> &str {
        &self.name
    }

    fn load_lines(&self) -> Result<Vec<String>> {
        self.ensure_exists()?;
        let content = self.read_raw()?;
        Ok(content.lines().map(str::to_string).collect())
    }

    /// Truncates and rewrites the file in place, so symlinks, permissions
    /// and ownership of the user's file are kept.
    fn save_lines(&self, lines: &[String]) -> Result<()> {
        fs::write(&self.path, serialize_lines(lines)).map_err(|e| self.io_err(e))
    }

    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    fn read_raw(&self) -> Result<String> {
        let bytes = fs::read(&self.path).map_err(|e| self.io_err(e))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

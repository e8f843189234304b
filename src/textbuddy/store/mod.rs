//! # Storage Layer
//!
//! Storage is split in two:
//!
//! - [`line_store::LineStore`] owns the lines in memory and decides *when* to
//!   persist: after every mutation, synchronously, by rewriting everything.
//! - [`backend::StorageBackend`] decides *how*:
//!   - [`fs_backend::FsBackend`]: the production text file, rewritten in
//!     place so symlinks and permissions survive. Reads decode lossily.
//!   - [`mem_backend::MemBackend`]: in-memory, for tests.
//!
//! ## Storage Format
//!
//! ```text
//! first line\n
//! second line\n
//! ```
//!
//! One stored line per file line, each followed by the platform line
//! terminator. Display numbers are never written.

pub mod backend;
pub mod fs_backend;
pub mod line_store;
pub mod mem_backend;

pub use backend::StorageBackend;
pub use line_store::LineStore;

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::line_store::LineStore;
    use super::mem_backend::MemBackend;

    pub const FIXTURE_FILE: &str = "testfile.txt";

    pub struct StoreFixture {
        pub store: LineStore<MemBackend>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: LineStore::open(MemBackend::new(FIXTURE_FILE)).unwrap(),
            }
        }

        pub fn with_line(mut self, line: &str) -> Self {
            self.store.push(line.to_string()).unwrap();
            self
        }

        pub fn with_lines(mut self, lines: &[&str]) -> Self {
            for line in lines {
                self.store.push(line.to_string()).unwrap();
            }
            self
        }

        /// The three lines used throughout the search tests.
        pub fn with_animals(self) -> Self {
            self.with_lines(&[
                "a quick brown fox",
                "jumps over a lazy dog",
                "how now brown cow",
            ])
        }
    }
}

use super::{empty_file, CmdResult};
use crate::error::Result;
use crate::index::index_lines;
use crate::store::{LineStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &LineStore<B>) -> Result<CmdResult> {
    if store.is_empty() {
        return Ok(empty_file(store.name()));
    }
    Ok(CmdResult::default().with_listed_lines(index_lines(store.lines())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn empty_store_says_so() {
        let store = StoreFixture::new().store;
        assert_eq!(run(&store).unwrap().feedback(), "testfile.txt is empty");
    }

    #[test]
    fn lists_numbered_lines() {
        let store = StoreFixture::new()
            .with_lines(&["a quick brown fox", "jumps over a lazy dog"])
            .store;

        assert_eq!(
            run(&store).unwrap().feedback(),
            "1. a quick brown fox\n2. jumps over a lazy dog"
        );
        assert_eq!(
            store.read_backing_content().unwrap(),
            "a quick brown fox\njumps over a lazy dog\n"
        );
    }
}

use super::{empty_file, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{LineStore, StorageBackend};
use std::cmp::Ordering;

pub fn run<B: StorageBackend>(store: &mut LineStore<B>) -> Result<CmdResult> {
    if store.is_empty() {
        return Ok(empty_file(store.name()));
    }

    store.sort_by(|a, b| alphabetical(a, b))?;
    Ok(CmdResult::with_message(CmdMessage::success(
        "Sorted alphabetically",
    )))
}

/// Letters compare ignoring case; lines equal under that rule fall back to
/// ordinal order, so "B" sorts before "b".
pub fn alphabetical(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::display;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn empty_store_says_so() {
        let mut store = StoreFixture::new().store;
        assert_eq!(run(&mut store).unwrap().feedback(), "testfile.txt is empty");
        assert_eq!(store.backend().save_count(), 0);
    }

    #[test]
    fn sorts_alphabetically_and_persists() {
        let mut store = StoreFixture::new()
            .with_animals()
            .with_lines(&[
                "black sheep wall",
                "grass of green",
                "grass of different colors",
                "B for bee",
            ])
            .store;

        assert_eq!(run(&mut store).unwrap().feedback(), "Sorted alphabetically");
        assert_eq!(store.line_count(), 7);
        assert_eq!(
            display::run(&store).unwrap().feedback(),
            "1. a quick brown fox\n\
             2. B for bee\n\
             3. black sheep wall\n\
             4. grass of different colors\n\
             5. grass of green\n\
             6. how now brown cow\n\
             7. jumps over a lazy dog"
        );
        assert_eq!(
            store.read_backing_content().unwrap(),
            "a quick brown fox\n\
             B for bee\n\
             black sheep wall\n\
             grass of different colors\n\
             grass of green\n\
             how now brown cow\n\
             jumps over a lazy dog\n"
        );
    }

    #[test]
    fn uppercase_breaks_ties_first() {
        assert_eq!(alphabetical("B", "b"), Ordering::Less);
        assert_eq!(alphabetical("b", "B"), Ordering::Greater);
        assert_eq!(alphabetical("apple", "Banana"), Ordering::Less);
        assert_eq!(alphabetical("same", "same"), Ordering::Equal);
    }

    #[test]
    fn equal_lines_keep_their_order() {
        let mut store = StoreFixture::new().with_lines(&["b", "a", "b", "A"]).store;
        run(&mut store).unwrap();
        assert_eq!(store.lines(), ["A", "a", "b", "b"]);
    }
}

use super::{invalid_parameters, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::parse_display_index;
use crate::store::{LineStore, StorageBackend};

/// Removes the line shown at display index `parameter`.
pub fn run<B: StorageBackend>(
    store: &mut LineStore<B>,
    parameter: Option<&str>,
) -> Result<CmdResult> {
    let Some(position) = parameter.and_then(parse_display_index) else {
        return Ok(invalid_parameters("delete"));
    };

    match store.remove(position)? {
        Some(removed) => Ok(CmdResult::with_message(CmdMessage::success(format!(
            "deleted from {}: \"{}\"",
            store.name(),
            removed
        )))),
        None => Ok(invalid_parameters("delete")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn removes_line_and_shifts_the_rest() {
        let mut store = StoreFixture::new().with_lines(&["a", "b", "c"]).store;
        let result = run(&mut store, Some("2")).unwrap();

        assert_eq!(result.feedback(), "deleted from testfile.txt: \"b\"");
        assert_eq!(store.lines(), ["a", "c"]);
        assert_eq!(store.read_backing_content().unwrap(), "a\nc\n");
    }

    #[test]
    fn add_then_delete_restores_state() {
        let mut store = StoreFixture::new().store;
        add::run(&mut store, Some("abc")).unwrap();

        let result = run(&mut store, Some("1")).unwrap();
        assert_eq!(result.feedback(), "deleted from testfile.txt: \"abc\"");
        assert!(store.is_empty());
        assert_eq!(store.read_backing_content().unwrap(), "");

        let again = run(&mut store, Some("1")).unwrap();
        assert_eq!(again.feedback(), "Invalid parameters for delete command");
    }

    #[test]
    fn out_of_range_indexes_change_nothing() {
        let mut store = StoreFixture::new().with_lines(&["a", "b"]).store;
        let saves = store.backend().save_count();

        for bad in ["0", "3", "-1", "two", "1.5"] {
            let result = run(&mut store, Some(bad)).unwrap();
            assert_eq!(result.feedback(), "Invalid parameters for delete command");
        }
        let result = run(&mut store, None).unwrap();
        assert_eq!(result.feedback(), "Invalid parameters for delete command");

        assert_eq!(store.lines(), ["a", "b"]);
        assert_eq!(store.backend().save_count(), saves);
    }
}

use super::{invalid_parameters, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::index_lines;
use crate::store::{LineStore, StorageBackend};

/// Case-sensitive substring search. Matches keep their original display index.
pub fn run<B: StorageBackend>(
    store: &LineStore<B>,
    parameter: Option<&str>,
) -> Result<CmdResult> {
    let Some(term) = parameter else {
        return Ok(invalid_parameters("search"));
    };

    let matches: Vec<_> = index_lines(store.lines())
        .into_iter()
        .filter(|dl| dl.text.contains(term))
        .collect();

    if matches.is_empty() {
        return Ok(CmdResult::with_message(CmdMessage::info(format!(
            "{} not found",
            term
        ))));
    }

    Ok(CmdResult::with_message(CmdMessage::success(format!(
        "Found {} item(s):",
        matches.len()
    )))
    .with_listed_lines(matches))
}

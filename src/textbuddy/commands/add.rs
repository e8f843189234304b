use super::{invalid_parameters, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{LineStore, StorageBackend};

pub fn run<B: StorageBackend>(
    store: &mut LineStore<B>,
    parameter: Option<&str>,
) -> Result<CmdResult> {
    let Some(text) = parameter else {
        return Ok(invalid_parameters("add"));
    };

    store.push(text.to_string())?;
    Ok(CmdResult::with_message(CmdMessage::success(format!(
        "added to {}: \"{}\"",
        store.name(),
        text
    ))))
}

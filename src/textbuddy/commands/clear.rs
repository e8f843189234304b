use super::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{LineStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &mut LineStore<B>) -> Result<CmdResult> {
    store.clear()?;
    Ok(CmdResult::with_message(CmdMessage::success(format!(
        "all content deleted from {}",
        store.name()
    ))))
}

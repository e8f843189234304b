//! # API Facade
//!
//! [`TextBuddyApi`] is the command interpreter and the single entry point for
//! every operation. It owns the [`LineStore`], parses raw input into a
//! [`Command`], and dispatches to the matching function in `commands/`.
//!
//! Two entry points are offered:
//! - [`TextBuddyApi::execute`] returns the structured [`CmdResult`], for
//!   clients that style messages by level.
//! - [`TextBuddyApi::handle`] returns the plain feedback string.
//!
//! Both return `Ok(None)` for `exit`; ending the process is the caller's job.
//! Storage failures are returned as errors and are meant to be fatal.

use crate::command::Command;
use crate::commands::{self, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{LineStore, StorageBackend};

pub struct TextBuddyApi<B: StorageBackend> {
    store: LineStore<B>,
}

impl<B: StorageBackend> TextBuddyApi<B> {
    pub fn new(store: LineStore<B>) -> Self {
        Self { store }
    }

    /// Opens the store on `backend` and wraps it.
    pub fn open(backend: B) -> Result<Self> {
        Ok(Self::new(LineStore::open(backend)?))
    }

    pub fn store(&self) -> &LineStore<B> {
        &self.store
    }

    /// Runs one line of user input and returns its feedback text.
    pub fn handle(&mut self, input: &str) -> Result<Option<String>> {
        Ok(self.execute(input)?.map(|result| result.feedback()))
    }

    pub fn execute(&mut self, input: &str) -> Result<Option<CmdResult>> {
        let command = Command::parse(input);
        log::debug!("dispatching {} command", command);
        self.dispatch(command)
    }

    pub fn dispatch(&mut self, command: Command) -> Result<Option<CmdResult>> {
        let result = match command {
            Command::Add(text) => commands::add::run(&mut self.store, text.as_deref())?,
            Command::Display => commands::display::run(&self.store)?,
            Command::Delete(index) => commands::delete::run(&mut self.store, index.as_deref())?,
            Command::Clear => commands::clear::run(&mut self.store)?,
            Command::Search(term) => commands::search::run(&self.store, term.as_deref())?,
            Command::Sort => commands::sort::run(&mut self.store)?,
            Command::Exit => return Ok(None),
            Command::Invalid => CmdResult::with_message(CmdMessage::error("Invalid command")),
        };
        Ok(Some(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::FIXTURE_FILE;
    use crate::store::mem_backend::MemBackend;

    fn api() -> TextBuddyApi<MemBackend> {
        TextBuddyApi::open(MemBackend::new(FIXTURE_FILE)).unwrap()
    }

    fn feedback(api: &mut TextBuddyApi<MemBackend>, input: &str) -> String {
        api.handle(input).unwrap().expect("command produced no feedback")
    }

    #[test]
    fn dispatches_each_command() {
        let mut api = api();
        assert_eq!(feedback(&mut api, "add abc"), "added to testfile.txt: \"abc\"");
        assert_eq!(feedback(&mut api, "display"), "1. abc");
        assert_eq!(feedback(&mut api, "search b"), "Found 1 item(s):\n1. abc");
        assert_eq!(feedback(&mut api, "sort"), "Sorted alphabetically");
        assert_eq!(feedback(&mut api, "delete 1"), "deleted from testfile.txt: \"abc\"");
        assert_eq!(feedback(&mut api, "clear"), "all content deleted from testfile.txt");
        assert_eq!(feedback(&mut api, "display"), "testfile.txt is empty");
    }

    #[test]
    fn exit_produces_no_feedback() {
        let mut api = api();
        assert_eq!(api.handle("exit").unwrap(), None);
        assert_eq!(api.handle("  EXIT  ").unwrap(), None);
    }

    #[test]
    fn unknown_commands_are_invalid() {
        let mut api = api();
        assert_eq!(feedback(&mut api, "undo"), "Invalid command");
        assert_eq!(feedback(&mut api, ""), "Invalid command");
    }

    #[test]
    fn missing_parameters_are_reported_per_command() {
        let mut api = api();
        assert_eq!(feedback(&mut api, "add"), "Invalid parameters for add command");
        assert_eq!(feedback(&mut api, "add   "), "Invalid parameters for add command");
        assert_eq!(feedback(&mut api, "delete"), "Invalid parameters for delete command");
        assert_eq!(feedback(&mut api, "search"), "Invalid parameters for search command");
    }

    #[test]
    fn add_increases_count_by_one() {
        let mut api = api();
        api.handle("add first").unwrap();
        api.handle("add  keeps  inner  spacing ").unwrap();

        assert_eq!(api.store().line_count(), 2);
        assert_eq!(api.store().lines()[1], "keeps  inner  spacing");
    }

    #[test]
    fn storage_failures_propagate() {
        let mut api = api();
        api.store().backend().set_simulate_write_error(true);
        assert!(api.handle("add x").is_err());
        assert!(api.handle("display").is_ok());
    }
}

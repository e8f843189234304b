//! # TextBuddy Architecture
//!
//! TextBuddy is a **line editor library** with a thin interactive client on top.
//! A session loads a text file into an ordered list of lines, accepts one command
//! at a time (`add`, `display`, `delete`, `clear`, `search`, `sort`, `exit`) and
//! rewrites the file after every command that changes the list.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, runs the prompt loop, prints feedback  │
//! │  - The ONLY place that knows about stdout/exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - The command interpreter: raw input in, feedback out      │
//! │  - Parses input into a `Command` and dispatches it          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One function per command, returns a `CmdResult`          │
//! │  - Validates parameters, formats messages                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - `LineStore`: the in-memory lines, synced on mutation     │
//! │  - `StorageBackend`: FsBackend (production), MemBackend     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout and never calls
//! `std::process::exit`. The `exit` command is reported back to the caller as
//! `Ok(None)`, and storage failures come back as [`error::TextBuddyError`]; the
//! binary decides what to print and which status to exit with.
//!
//! ## Display Indexes
//!
//! Lines are stored without numbers. The 1-based numbers users see in
//! `display` and `search` output, and type for `delete`, are computed on the fly.
//! See [`index`].
//!
//! ## Module Overview
//!
//! - [`api`]: The command interpreter, entry point for all operations
//! - [`command`]: Parsing raw input into a [`command::Command`]
//! - [`commands`]: Logic for each command
//! - [`store`]: The line store and its storage backends
//! - [`index`]: Display numbering
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing, prompt loop and printing for the binary (not part of the lib API)

pub mod api;
pub mod command;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod store;

//! The interactive client: welcome line, prompt loop, printing.

mod print;

use std::io::{BufRead, Write};
use textbuddy::api::TextBuddyApi;
use textbuddy::config::TextBuddyConfig;
use textbuddy::error::{Result, TextBuddyError};
use textbuddy::store::StorageBackend;

pub(crate) use print::render_fatal;

/// Runs the prompt loop until `exit` or end of input.
///
/// `label` is how the file is named in the welcome line, typically the path
/// exactly as the user typed it.
pub fn run_session<B, R, W>(
    api: &mut TextBuddyApi<B>,
    config: &TextBuddyConfig,
    label: &str,
    mut input: R,
    out: &mut W,
) -> Result<()>
where
    B: StorageBackend,
    R: BufRead,
    W: Write,
{
    let stdout_err = |e: std::io::Error| TextBuddyError::io("stdout", e);

    writeln!(out, "Welcome to TextBuddy. {} is ready for use", label).map_err(stdout_err)?;

    let mut buf = Vec::new();
    loop {
        write!(out, "{}", config.prompt).map_err(stdout_err)?;
        out.flush().map_err(stdout_err)?;

        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .map_err(|e| TextBuddyError::io("stdin", e))?;
        if read == 0 {
            log::debug!("end of input, closing session");
            writeln!(out).map_err(stdout_err)?;
            return Ok(());
        }

        // Undecodable bytes are typing mistakes, not I/O failures.
        let line = String::from_utf8_lossy(&buf);
        match api.execute(&line)? {
            Some(result) => {
                writeln!(out, "{}", print::render_result(&result, config.color))
                    .map_err(stdout_err)?;
            }
            None => return Ok(()),
        }
    }
}

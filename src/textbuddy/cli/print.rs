use console::style;
use textbuddy::commands::{CmdResult, MessageLevel};
use textbuddy::index::DisplayLine;

/// Renders a command result for the terminal.
///
/// The text is always identical to [`CmdResult::feedback`]; only styling is
/// added, and `console` drops it when stdout is not a terminal.
pub(super) fn render_result(result: &CmdResult, color: bool) -> String {
    if !color {
        return result.feedback();
    }

    let mut rows: Vec<String> = result
        .messages
        .iter()
        .map(|m| match m.level {
            MessageLevel::Info => m.content.clone(),
            MessageLevel::Success => style(&m.content).green().to_string(),
            MessageLevel::Warning => style(&m.content).yellow().to_string(),
            MessageLevel::Error => style(&m.content).red().to_string(),
        })
        .collect();
    rows.extend(result.listed_lines.iter().map(render_line));
    rows.join("\n")
}

fn render_line(line: &DisplayLine) -> String {
    format!("{} {}", style(format!("{}.", line.index)).yellow(), line.text)
}

pub(crate) fn render_fatal(message: &str, color: bool) -> String {
    if color {
        style(message).red().bold().to_string()
    } else {
        message.to_string()
    }
}

use crate::index::{render_lines, DisplayLine};

pub mod add;
pub mod clear;
pub mod delete;
pub mod display;
pub mod search;
pub mod sort;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Outcome of one command: messages first, then any listed lines.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
    pub listed_lines: Vec<DisplayLine>,
}

impl CmdResult {
    pub fn with_message(message: CmdMessage) -> Self {
        Self {
            messages: vec![message],
            listed_lines: Vec::new(),
        }
    }

    pub fn with_listed_lines(mut self, lines: Vec<DisplayLine>) -> Self {
        self.listed_lines = lines;
        self
    }

    /// The single feedback string: every message, then every listed line,
    /// one per row, no trailing newline.
    pub fn feedback(&self) -> String {
        let mut rows: Vec<String> = self.messages.iter().map(|m| m.content.clone()).collect();
        if !self.listed_lines.is_empty() {
            rows.push(render_lines(&self.listed_lines));
        }
        rows.join("\n")
    }
}

pub(crate) fn invalid_parameters(keyword: &str) -> CmdResult {
    CmdResult::with_message(CmdMessage::warning(format!(
        "Invalid parameters for {} command",
        keyword
    )))
}

pub(crate) fn empty_file(name: &str) -> CmdResult {
    CmdResult::with_message(CmdMessage::info(format!("{} is empty", name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::index_lines;

    #[test]
    fn feedback_puts_messages_before_lines() {
        let result = CmdResult::with_message(CmdMessage::info("Found 1 item(s):"))
            .with_listed_lines(index_lines(&["x".to_string()]));
        assert_eq!(result.feedback(), "Found 1 item(s):\n1. x");
    }

    #[test]
    fn feedback_of_lines_only() {
        let result = CmdResult::default()
            .with_listed_lines(index_lines(&["x".to_string(), "y".to_string()]));
        assert_eq!(result.feedback(), "1. x\n2. y");
    }
}

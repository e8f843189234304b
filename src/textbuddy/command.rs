use std::fmt;

/// A parsed user command.
///
/// Commands that take a parameter keep it as typed; validating it is up to the
/// command itself so each can report its own "invalid parameters" message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Option<String>),
    Display,
    Delete(Option<String>),
    Clear,
    Search(Option<String>),
    Sort,
    Exit,
    Invalid,
}

impl Command {
    /// Parses one line of user input. Never fails: unknown keywords become
    /// [`Command::Invalid`].
    pub fn parse(input: &str) -> Self {
        let (keyword, parameter) = split_input(input);
        let parameter = parameter.map(str::to_string);

        match fold_case(keyword).as_str() {
            "add" => Command::Add(parameter),
            "display" => Command::Display,
            "delete" => Command::Delete(parameter),
            "clear" => Command::Clear,
            "search" => Command::Search(parameter),
            "sort" => Command::Sort,
            "exit" => Command::Exit,
            _ => Command::Invalid,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Add(_) => "add",
            Command::Display => "display",
            Command::Delete(_) => "delete",
            Command::Clear => "clear",
            Command::Search(_) => "search",
            Command::Sort => "sort",
            Command::Exit => "exit",
            Command::Invalid => "invalid",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Case folding through upper then lower case, so characters whose upper case
/// is ASCII (e.g. the long s in "ſort") still match a keyword.
fn fold_case(keyword: &str) -> String {
    keyword
        .chars()
        .flat_map(char::to_uppercase)
        .flat_map(char::to_lowercase)
        .collect()
}

/// Splits trimmed input at the first whitespace run into keyword and parameter.
/// The parameter is `None` when nothing follows the keyword.
pub fn split_input(input: &str) -> (&str, Option<&str>) {
    let input = input.trim();
    match input.split_once(char::is_whitespace) {
        Some((keyword, rest)) => {
            let rest = rest.trim_start();
            (keyword, (!rest.is_empty()).then_some(rest))
        }
        None => (input, None),
    }
}

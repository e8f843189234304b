use thiserror::Error;

#[derive(Error, Debug)]
pub enum TextBuddyError {
    #[error("I/O operation failed for {file}. Please try again")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl TextBuddyError {
    /// Wraps an I/O failure with the name of the file it concerns.
    pub fn io(file: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            file: file.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, TextBuddyError>;

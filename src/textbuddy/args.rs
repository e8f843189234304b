use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "textbuddy", version)]
#[command(about = "Edit a text file one line at a time from an interactive prompt", long_about = None)]
pub struct Cli {
    /// Text file to edit (created if missing)
    pub file: Option<PathBuf>,

    /// Verbose logging on stderr (repeat for more)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

use clap::Parser;
use log::LevelFilter;
use std::io;
use std::path::Path;
use textbuddy::api::TextBuddyApi;
use textbuddy::config::TextBuddyConfig;
use textbuddy::error::Result;
use textbuddy::store::fs_backend::FsBackend;

mod args;
mod cli;

use args::Cli;

const IO_FAILURE_STATUS: i32 = -1;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(file) = cli.file.as_deref() else {
        println!("No arguments!");
        return;
    };

    let config = load_config(cli.config.as_deref());
    if let Err(e) = run(file, &config) {
        log::debug!("fatal: {}", e);
        println!("{}", cli::render_fatal(&e.to_string(), config.color));
        std::process::exit(IO_FAILURE_STATUS);
    }
}

fn run(file: &Path, config: &TextBuddyConfig) -> Result<()> {
    let mut api = TextBuddyApi::open(FsBackend::new(file))?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    cli::run_session(
        &mut api,
        config,
        &file.display().to_string(),
        stdin.lock(),
        &mut stdout,
    )
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .target(env_logger::Target::Stderr)
        .init();
}

fn load_config(explicit: Option<&Path>) -> TextBuddyConfig {
    let Some(path) = explicit
        .map(Path::to_path_buf)
        .or_else(TextBuddyConfig::default_path)
    else {
        return TextBuddyConfig::default();
    };

    TextBuddyConfig::load(&path).unwrap_or_else(|e| {
        log::warn!("ignoring config {}: {}", path.display(), e);
        TextBuddyConfig::default()
    })
}

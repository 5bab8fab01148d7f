use std::io;

use command_less::{CommandLine, HelpStyle};
use command_less_core::ProgramMeta;
use command_less_history::{HistoryFile, PersistOutcome};
use tracing::{debug, info};

mod config;
mod logging;
mod shell;

use config::{ReplConfig, option_table};
use shell::Shell;

const PACKAGE_NAME: &str = env!("CARGO_PKG_NAME");
const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    let log = logging::init();

    let meta = ProgramMeta::new(PACKAGE_NAME, PACKAGE_VERSION)
        .with_description(env!("CARGO_PKG_DESCRIPTION"))
        .with_author(env!("CARGO_PKG_AUTHORS"));
    let mut cli = match CommandLine::from_env(meta, HelpStyle::Man) {
        Ok(cli) => cli,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let options = match cli.parse(&option_table()) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    // Print and stop before the shell starts.
    if options.flag("version") || options.flag("help") {
        if options.flag("version") {
            println!("Version: {PACKAGE_VERSION}\n");
        }
        if options.flag("help") {
            println!("{}", cli.help().unwrap_or_default());
        }
        return;
    }

    let config = match ReplConfig::from_options(&options) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };
    if config.debug {
        log.enable_debug();
    }
    debug!(
        options = %serde_json::to_string(&options).unwrap_or_default(),
        "Resolved options"
    );

    if let Err(err) = run(&config) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(config: &ReplConfig) -> Result<(), String> {
    debug!("Initializing {PACKAGE_NAME}");

    let file = HistoryFile::new(&config.history_file);
    let previous = file.load().map_err(|e| e.to_string())?;

    let mut shell = Shell::new(PACKAGE_NAME, config, previous);
    debug!("{PACKAGE_NAME} ready");
    let read = shell.run(io::stdin().lock(), &mut io::stdout(), &mut io::stderr());

    // Commands accepted before a read failure are still saved.
    debug!("Closing {PACKAGE_NAME}...saving history");
    let session = shell.into_session();
    match file
        .persist(&session, &config.policy)
        .map_err(|e| format!("Failed to write '{}': {e}", file.path().display()))?
    {
        PersistOutcome::Written { lines } => {
            info!(path = %file.path().display(), lines, "Saved history")
        }
        PersistOutcome::Skipped => debug!("No commands entered, history not saved"),
    }

    read.map_err(|e| format!("Failed to read input: {e}"))
}

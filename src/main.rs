// declang: run a declang source file

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use tracing::{info, Level};

use declang::run_source;
use declang::terminal::WriterTerminal;

/// Wrong number of command-line arguments
const EX_USAGE: i32 = 64;
/// Unreadable source file, or the program failed to lex, parse or run
const EX_IOERR: i32 = 74;

/// Run a declang program.
#[derive(Parser, Debug)]
#[command(name = "declang", version, about, long_about = None)]
struct Cli {
    /// Path of the source file to execute
    file: PathBuf,

    /// Log more about each stage (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Printing help/usage can only fail if stderr is gone
            let _ = err.print();
            match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => process::exit(0),
                _ => process::exit(EX_USAGE),
            }
        }
    };

    init_logging(cli.verbose);

    process::exit(run_file(&cli.file));
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

/// Execute one file and return the process exit code.
fn run_file(path: &Path) -> i32 {
    info!(file = %path.display(), "executing file");

    let source = match read_source(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            return EX_IOERR;
        }
    };

    match run_source(&source, WriterTerminal::stdout()) {
        Ok(()) => {
            info!("execution finished successfully");
            0
        }
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("Execution failed.");
            EX_IOERR
        }
    }
}

fn read_source(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("could not read file '{}'", path.display()))
}

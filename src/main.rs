use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use alphaforest::errors::Error;
use alphaforest::ForestBuilder;

/// Count the trees in an alphabet forest and check it against the puzzle's formatting rules
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File holding the forest; typed in on standard input when omitted
    file: Option<PathBuf>,
}

/// Delegates to [`try_main`], printing any error to stderr and exiting with code 1.
fn main() -> ExitCode {
    let debug_enabled = std::env::var("ALPHAFOREST_DEBUG").is_ok();
    alphaforest::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        eprintln!("Error: {e}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Read the forest, from the named file to its end or from standard input up to the first empty line, then print the report.
fn try_main() -> Result<(), Error> {
    let cli = Cli::parse();

    let builder = match cli.file {
        Some(path) => {
            log::debug!("reading forest from {}", path.display());
            let file = File::open(&path).map_err(|source| Error::Open { path, source })?;
            ForestBuilder::from_fallible_lines(BufReader::new(file).lines())?
        }
        None => {
            println!("Enter your tree with an additional newline to terminate");
            io::stdout().flush()?;

            ForestBuilder::from_fallible_lines(io::stdin()
                .lock()
                .lines()
                .take_while(|line| !matches!(line, Ok(line) if line.is_empty())))?
        }
    };

    let report = builder.survey();
    if report.is_undefined() {
        log::info!("{} problem(s) found in the input", report.problems.problems().len());
    }

    print!("{report}");
    io::stdout().flush()?;

    Ok(())
}

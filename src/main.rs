use std::{fs, process::ExitCode};

use clap::Parser;
use jipl::{error::Error, get_result, interpreter::value::Environment};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// jipl is a small interpreted language with C-like syntax, featuring
/// closures, arrays and for-loops.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells jipl to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode automatically prints out the final value of a jipl script.
    #[arg(short, long)]
    pipe_mode: bool,

    contents: String,
}

/// Logs go to stderr and are filtered by `RUST_LOG`; nothing is logged by
/// default.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));

    tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr))
                                  .with(filter)
                                  .init();
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    let env = Environment::new_root();

    match get_result(&script, &env) {
        Ok(value) => {
            if args.pipe_mode {
                println!("{value}");
            }
            ExitCode::SUCCESS
        },
        Err(Error::Parse(errors)) => {
            for error in errors {
                eprintln!("{error}");
            }
            ExitCode::FAILURE
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

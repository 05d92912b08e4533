use std::ffi::OsString;
use std::io::{self, Read};

use clap::Parser;
use eyre::{Result, WrapErr};
use tracing::{Level, info};

use sha256_core::hash::sha256;

/// Prints the SHA-256 digest of a string, or of standard input.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Text to hash, taken as raw OS bytes. Standard input is hashed when
    /// omitted.
    input: Option<OsString>,

    /// Print the digest in uppercase hexadecimal
    #[arg(short, long)]
    uppercase: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn read_input(cli: &Cli) -> Result<Vec<u8>> {
    match &cli.input {
        Some(text) => Ok(text.as_encoded_bytes().to_vec()),
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .wrap_err("failed to read standard input")?;
            Ok(buf)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(log_level(cli.verbose))
        .with_writer(io::stderr)
        .init();

    let input = read_input(&cli)?;
    info!(
        len = input.len(),
        source = if cli.input.is_some() { "argument" } else { "stdin" },
        "hashing input"
    );

    let digest = sha256(&input).wrap_err("failed to hash input")?;

    if cli.uppercase {
        println!("{digest:X}");
    } else {
        println!("{digest}");
    }

    Ok(())
}

//! Firmware memory map lister.
//!
//! Reads the entries under `/sys/firmware/memmap`, sorts them by start address,
//! and prints them as a table on stdout. Any read or parse failure aborts the
//! run with a diagnostic on stderr and exit status 1; no partial table is printed.
//!
//! Log verbosity follows `RUST_LOG` (default `warn`); logs go to stderr.

use std::error::Error;
use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use efimmap_core::Config;

#[derive(Parser, Debug)]
#[command(
    name = "efimmap",
    version,
    about = "Print the firmware-provided physical memory map",
    long_about = "Print the firmware-provided physical memory map.\n\nReads every entry under /sys/firmware/memmap and prints start, end, size and type, sorted by start address."
)]
struct Cli {}

/// Installs the stderr log subscriber; `RUST_LOG` overrides the `warn` default.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Formats `err` followed by its chain of sources.
fn describe(err: &dyn Error) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}

fn main() -> ExitCode {
    let _cli = Cli::parse();
    init_logging();

    let config = Config::default();
    let mut stdout = io::stdout().lock();

    match efimmap_core::report(&config, &mut stdout) {
        Ok(count) => {
            tracing::debug!(entries = count, "memory map printed");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(root = %config.root.display(), "memory map read failed");
            eprintln!("[!] FATAL: {}", describe(&e));
            ExitCode::FAILURE
        }
    }
}

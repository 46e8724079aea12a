//! # RISC-V PTE Utility
//!
//! Encodes one Sv32/Sv39/Sv48 page table entry from the command line:
//!
//! ```text
//! $ riscv-pte-util sv39 0x80000000 URWV
//! mode=sv39 pa=0x80000000 flags=0x17 pte_val=0x8000017
//! ```
//!
//! Exit status is `0` on success, `1` for a wrong argument count (usage is
//! printed) and `2` when an argument cannot be decoded.

mod cli;
mod logger;

use crate::cli::{Args, CliError};
use crate::logger::StderrLogger;
use log::debug;
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = StderrLogger::init() {
        eprintln!("failed to install logger: {e}");
    }

    let mut argv = env::args_os().map(|a| a.to_string_lossy().into_owned());
    let program = argv.next().unwrap_or_else(|| cli::PROGRAM_NAME.into());

    match Args::parse(argv).and_then(|args| cli::run(&args)) {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(e @ CliError::Usage(_)) => {
            debug!("{e}");
            print!("{}", cli::usage(&program));
            ExitCode::from(e.exit_code())
        }
        Err(e) => {
            debug!("giving up on {program}: {e:?}");
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

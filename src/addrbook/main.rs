//! # addrbook binary
//!
//! The binary is thin: everything terminal-related lives in `cli/`, and this
//! file only calls `cli::run()` and turns a startup failure into an exit code.
//! Errors raised by individual commands never reach here; the prompt loop
//! prints them and keeps going.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

//! # Crowdfund Console
//!
//! The binary is intentionally thin: the presentation layer lives in `cli/`
//! and this file only invokes `cli::run()` and handles process termination.
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI layer owns every
//! user-facing concern: argument parsing, logging setup, menus, prompts,
//! password masking, the cancel token, and rendering results.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

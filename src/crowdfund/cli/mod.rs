//! # CLI Layer
//!
//! This module is **one possible UI client** for crowdfund. It is the only
//! place that knows about the terminal.
//!
//! - `setup.rs`: clap argument definitions
//! - `commands.rs`: context setup (home dir, config, logging) and dispatch
//! - `menu.rs`: the interactive register/login/project menus
//! - `prompt.rs`: line and masked-password input, cancel token handling
//! - `print.rs`: colored output of messages and project listings

mod commands;
mod menu;
mod print;
mod prompt;
mod setup;

pub use commands::run;

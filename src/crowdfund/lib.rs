//! # Crowdfund Architecture
//!
//! Crowdfund is a **UI-agnostic record-management library** for user accounts
//! and crowdfunding projects, with an interactive console client on top.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menus, prompts, masked passwords, colored output         │
//! │  - Maps the cancel token `0` to an aborted operation        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Parses selectors and dates, supplies "today"             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - register, login, create, edit, delete, list, search      │
//! │  - Validation and uniqueness rules, one load/save per call  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: load / save the whole dataset           │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never
//! exits the process. Diagnostics go through the `log` facade; the binary
//! decides where they end up.
//!
//! ## Security note
//!
//! Passwords are stored and compared as plain text.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`User`, `Project`, `Dataset`)
//! - [`validation`]: Field validators
//! - [`index`]: Per-user project numbering
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod store;
pub mod validation;

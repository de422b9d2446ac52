//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `dispatcher.rs` — table-driven validation that turns a command into an `ExecutionRequest`.
//! - `coordinator.rs` — designated-controller (DC) probe.
//! - `runner.rs` — `CommandRunner` trait + std::process implementation.
//! - `config.rs` — TOML config loading and defaults.
//! - `logging.rs` — tracing subscriber setup.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Process spawns only happen behind `CommandRunner`.
//! - Keep command handlers thin; delegate to services.

pub mod config;
pub mod coordinator;
pub mod dispatcher;
pub mod logging;
pub mod output;
pub mod runner;

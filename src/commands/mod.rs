//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `configure.rs` — show/property: dispatch, then run through the runner.
//! - `cluster.rs` — commands/dc: table listing and DC status.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate validation to `services::dispatcher` and execution to `services::runner`.
//! - Keep behavior and output schema stable.

pub mod cluster;
pub mod configure;

pub use cluster::handle_cluster_commands;
pub use configure::handle_configure_commands;

//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep request/report structs in one place.
//! - Avoid cyclic imports between the dispatcher, the runner and the CLI.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — option values, execution requests, run options/output, reports.
//! - `constants.rs` — tool/subsystem names and config defaults.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no process or filesystem side effects.

pub mod constants;
pub mod models;

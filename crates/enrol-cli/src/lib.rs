//! # enrol-cli — Enrollment Statistics Command-Line Interface
//!
//! The thin I/O shell around the statistics engine: the embedded decade
//! dataset, the interactive school prompt, and report formatting.
//!
//! ## Modules
//!
//! - `data` — the pre-supplied yearly enrollment tables
//! - `session` — interactive identifier prompt with re-prompt on failure
//! - `report` — text rendering of the engine's result snapshots
//!
//! ## Crate Policy
//!
//! - No statistics are computed here. Handlers validate input, call the
//!   engine, and print its returned values — nothing more.
//! - Formatting lives in `report` so it can be tested without a terminal.

pub mod data;
pub mod report;
pub mod session;

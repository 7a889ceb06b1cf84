//! # eonmap common
//!
//! Types shared by every crate in the workspace.
//!
//! * **[`inventory`]**: The records read from and written to the inventory files.
//! * **[`error`]**: The fatal error conditions of a report run.
//! * **[`config`]**: Runtime options collected by the CLI.
//! * **[`log`]**: Thin macros over `tracing` used for user-facing status lines.

pub mod config;
pub mod error;
pub mod inventory;
pub mod log;

#[doc(hidden)]
pub use tracing;

//! # eonmap core
//!
//! Loads the three inventory files and joins them into a report.
//!
//! * **[`cmdb`]**: asset id → EON id.
//! * **[`deployments`]**: deployment key → environment → hosts.
//! * **[`assets`]**: positional parsing of asset records.
//! * **[`report`]**: the join itself and the text it renders to.
//! * **[`source`]**: where the raw file contents come from.
//! * **[`service`]**: runs the whole pipeline against a source.

pub mod assets;
pub mod cmdb;
pub mod deployments;
mod lines;
pub mod report;
pub mod service;
pub mod source;

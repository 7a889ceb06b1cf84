//! # Inventory Models
//!
//! * [`file::InventoryFile`]: The three fixed input files of an inventory directory.
//! * [`key::DeploymentKey`]: The application/service/instance triple that correlates
//!   assets with deployments.
//! * [`record::AssetRecord`] and [`record::ReportLine`]: One parsed asset and one
//!   line of the joined report.

pub mod file;
pub mod key;
pub mod record;

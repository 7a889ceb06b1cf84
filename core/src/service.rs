//! # Report Service
//!
//! Runs the complete pipeline: read every inventory file, build both lookup maps, then
//! join the asset records against them.

use eonmap_common::error::InventoryResult;
use tracing::debug;

use crate::cmdb::CmdbEonMap;
use crate::deployments::DeploymentMap;
use crate::report::{self, Report};
use crate::source::{InventoryFile, InventorySource};

pub struct ReportService {
    source: Box<dyn InventorySource>,
}

impl ReportService {
    pub fn new(source: Box<dyn InventorySource>) -> Self {
        Self { source }
    }

    /// Produces the joined report.
    ///
    /// All three files are read before any of them is parsed, so a missing file is
    /// reported before any parse error.
    pub fn generate(&self) -> InventoryResult<Report> {
        let asset_text = self.source.read(InventoryFile::AssetMap)?;
        let deployment_text = self.source.read(InventoryFile::Deployments)?;
        let cmdb_text = self.source.read(InventoryFile::CmdbEonMap)?;

        let cmdb = CmdbEonMap::from_lines(cmdb_text.lines())?;
        debug!(entries = cmdb.len(), "loaded {}", InventoryFile::CmdbEonMap);

        let deployments = DeploymentMap::from_lines(deployment_text.lines());
        debug!(
            keys = deployments.len(),
            skipped = deployments.skipped(),
            "loaded {}",
            InventoryFile::Deployments
        );

        let report = report::join(asset_text.lines(), &cmdb, &deployments);
        debug!(lines = report.lines.len(), "joined {}", InventoryFile::AssetMap);

        Ok(report)
    }
}

//! # Asset/Deployment Join
//!
//! Walks the asset records in file order and emits one [`ReportLine`] for every
//! environment the asset is deployed to. Assets that cannot be matched are counted in
//! the [`ReportSummary`] and otherwise ignored.

use eonmap_common::inventory::record::ReportLine;
use tracing::debug;

use crate::assets;
use crate::cmdb::CmdbEonMap;
use crate::deployments::DeploymentMap;
use crate::lines;

/// Counters collected while loading and joining. Purely diagnostic.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReportSummary {
    pub cmdb_entries: usize,
    pub deployment_keys: usize,
    pub deployments_skipped: usize,
    pub assets_read: usize,
    pub assets_malformed: usize,
    pub assets_without_cmdb: usize,
    pub assets_without_deployment: usize,
    pub assets_matched: usize,
}

impl ReportSummary {
    /// Records that were dropped because they were too short.
    pub fn malformed(&self) -> usize {
        self.deployments_skipped + self.assets_malformed
    }

    /// Well-formed assets that found no partner in one of the other two files.
    pub fn unmatched(&self) -> usize {
        self.assets_without_cmdb + self.assets_without_deployment
    }
}

#[derive(Debug, Default, Clone)]
pub struct Report {
    pub lines: Vec<ReportLine>,
    pub summary: ReportSummary,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The full report text, one `\n`-terminated line per entry.
    pub fn render(&self) -> String {
        self.lines
            .iter()
            .map(|line| format!("{line}\n"))
            .collect()
    }
}

/// Joins the asset lines against the two loaded maps.
pub fn join<'a, I>(asset_lines: I, cmdb: &CmdbEonMap, deployments: &DeploymentMap) -> Report
where
    I: IntoIterator<Item = &'a str>,
{
    let mut report = Report {
        lines: Vec::new(),
        summary: ReportSummary {
            cmdb_entries: cmdb.len(),
            deployment_keys: deployments.len(),
            deployments_skipped: deployments.skipped(),
            ..ReportSummary::default()
        },
    };
    let summary = &mut report.summary;

    for (line_no, line) in lines::records(asset_lines) {
        summary.assets_read += 1;

        let Some(asset) = assets::parse_asset_line(line) else {
            debug!(line_no, "skipping asset record with fewer than {} fields", assets::MIN_FIELDS);
            summary.assets_malformed += 1;
            continue;
        };

        let Some(eon_id) = cmdb.eon_id(&asset.asset_id) else {
            debug!(line_no, asset_id = %asset.asset_id, "asset has no CMDB entry");
            summary.assets_without_cmdb += 1;
            continue;
        };

        let Some(environments) = deployments.environments(&asset.key) else {
            debug!(line_no, key = %asset.key, "asset has no deployments");
            summary.assets_without_deployment += 1;
            continue;
        };

        summary.assets_matched += 1;
        for (environment, hosts) in environments {
            report.lines.push(ReportLine {
                eon_id: eon_id.to_string(),
                environment: environment.clone(),
                key: asset.key.clone(),
                hosts: hosts.iter().cloned().collect(),
            });
        }
    }

    report
}

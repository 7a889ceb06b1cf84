use std::fmt;

use crate::inventory::key::DeploymentKey;

/// The parts of an `assetmap.txt` record that take part in the join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRecord {
    /// Lookup key into the CMDB-to-EON map.
    pub asset_id: String,
    pub key: DeploymentKey,
}

/// One line of the joined report: an asset deployed in one environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub eon_id: String,
    pub environment: String,
    pub key: DeploymentKey,
    /// Never empty. Sorted, without duplicates.
    pub hosts: Vec<String>,
}

/// `eon_id:environment:application:service:instance:host1,host2,...`
impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}:{}:{}",
            self.eon_id,
            self.environment,
            self.key.application,
            self.key.service,
            self.key.instance,
            self.hosts.join(",")
        )
    }
}

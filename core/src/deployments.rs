//! # Deployment Map
//!
//! Parses `deployments.txt` into `DeploymentKey → environment → hosts`.
//!
//! Records look like `environment:application:service:instance:host[:...]`. Records
//! with fewer than five fields are skipped and counted, never fatal.

use std::collections::{BTreeMap, BTreeSet};

use eonmap_common::inventory::key::DeploymentKey;
use tracing::debug;

use crate::lines;

const MIN_FIELDS: usize = 5;

/// Hosts per environment for one deployment key. Both levels iterate in sorted order.
pub type Environments = BTreeMap<String, BTreeSet<String>>;

#[derive(Debug, Default, Clone)]
pub struct DeploymentMap {
    groups: BTreeMap<DeploymentKey, Environments>,
    skipped: usize,
}

impl DeploymentMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the map from the lines of `deployments.txt`.
    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut map = Self::new();

        for (line_no, record) in lines::records(lines) {
            let fields: Vec<&str> = record.split(':').collect();
            let [environment, application, service, instance, host, ..] = fields[..] else {
                debug!(
                    line_no,
                    found = fields.len(),
                    "skipping deployment record with fewer than {MIN_FIELDS} fields"
                );
                map.skipped += 1;
                continue;
            };

            let key = DeploymentKey::new(application, service, instance);
            map.insert(key, environment, host.trim_end());
        }

        map
    }

    /// Adds `host` under `(key, environment)`, creating the inner containers on first use.
    pub fn insert(&mut self, key: DeploymentKey, environment: &str, host: &str) {
        self.groups
            .entry(key)
            .or_default()
            .entry(environment.to_string())
            .or_default()
            .insert(host.to_string());
    }

    pub fn environments(&self, key: &DeploymentKey) -> Option<&Environments> {
        self.groups.get(key)
    }

    pub fn hosts(&self, key: &DeploymentKey, environment: &str) -> Option<&BTreeSet<String>> {
        self.groups.get(key)?.get(environment)
    }

    /// Number of distinct deployment keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Records dropped for having too few fields.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

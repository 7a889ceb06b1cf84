//! # CMDB-to-EON Map
//!
//! Parses `cmdb_eon_map.txt` into a lookup from asset id to EON id.
//!
//! Records look like `asset_id:eon_id[:...]`. A record without a second field is the
//! only kind of malformed line that aborts the run.

use std::collections::HashMap;

use eonmap_common::error::{InventoryError, InventoryResult};
use eonmap_common::inventory::file::InventoryFile;

use crate::lines;

const MIN_FIELDS: usize = 2;

#[derive(Debug, Default, Clone)]
pub struct CmdbEonMap {
    entries: HashMap<String, String>,
}

impl CmdbEonMap {
    /// Builds the map from the lines of `cmdb_eon_map.txt`.
    ///
    /// A repeated asset id overwrites the earlier entry. The EON id is trimmed, the
    /// asset id is kept exactly as written.
    pub fn from_lines<'a, I>(lines: I) -> InventoryResult<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut map = Self::default();

        for (line_no, record) in lines::records(lines) {
            let mut fields = record.split(':');
            let (Some(asset_id), Some(eon_id)) = (fields.next(), fields.next()) else {
                return Err(InventoryError::MalformedRecord {
                    file: InventoryFile::CmdbEonMap,
                    line_no,
                    expected: MIN_FIELDS,
                    found: 1,
                });
            };

            map.entries.insert(asset_id.to_string(), eon_id.trim().to_string());
        }

        Ok(map)
    }

    pub fn eon_id(&self, asset_id: &str) -> Option<&str> {
        self.entries.get(asset_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

use std::fmt;

/// The three files an inventory directory must contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InventoryFile {
    /// `assetmap.txt`: seven or more fields per record, asset id first.
    AssetMap,
    /// `deployments.txt`: `environment:application:service:instance:host[:...]`.
    Deployments,
    /// `cmdb_eon_map.txt`: `asset_id:eon_id[:...]`.
    CmdbEonMap,
}

impl InventoryFile {
    pub fn file_name(self) -> &'static str {
        match self {
            InventoryFile::AssetMap => "assetmap.txt",
            InventoryFile::Deployments => "deployments.txt",
            InventoryFile::CmdbEonMap => "cmdb_eon_map.txt",
        }
    }
}

impl fmt::Display for InventoryFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

use std::fs;
use std::path::Path;

use eonmap_common::inventory::file::InventoryFile;
use tempfile::TempDir;

/// A throwaway inventory directory. Removed when dropped.
pub struct InventoryDir {
    dir: TempDir,
}

impl InventoryDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Builds a directory holding all three files.
    pub fn with_files(assets: &str, deployments: &str, cmdb: &str) -> Self {
        let inv = Self::new();
        inv.write(InventoryFile::AssetMap, assets);
        inv.write(InventoryFile::Deployments, deployments);
        inv.write(InventoryFile::CmdbEonMap, cmdb);
        inv
    }

    pub fn write(&self, file: InventoryFile, contents: &str) {
        fs::write(self.path().join(file.file_name()), contents).expect("failed to write fixture");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

//! # Inventory Sources
//!
//! [`InventorySource`] is the contract the report service reads its input through.
//! [`DirectorySource`] is the implementation backed by a directory on disk.

use std::fs;
use std::path::{Path, PathBuf};

use eonmap_common::error::{InventoryError, InventoryResult};
pub use eonmap_common::inventory::file::InventoryFile;

/// Supplies the complete text of an inventory file.
pub trait InventorySource {
    /// Reads `file` to completion.
    ///
    /// # Errors
    /// * [`InventoryError::Read`] - The file is missing or unreadable.
    fn read(&self, file: InventoryFile) -> InventoryResult<String>;
}

/// Reads the inventory files from a single directory.
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_of(&self, file: InventoryFile) -> PathBuf {
        self.root.join(file.file_name())
    }
}

impl InventorySource for DirectorySource {
    fn read(&self, file: InventoryFile) -> InventoryResult<String> {
        let path = self.path_of(file);
        fs::read_to_string(&path).map_err(|source| InventoryError::Read { file, path, source })
    }
}

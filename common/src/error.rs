use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::inventory::file::InventoryFile;

/// Conditions that abort a report run.
///
/// Everything else (short deployment or asset lines, unmatched assets) is skipped and
/// only counted.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("failed to read {file} from '{}'", path.display())]
    Read {
        file: InventoryFile,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{file} line {line_no}: expected at least {expected} ':'-separated fields, found {found}")]
    MalformedRecord {
        file: InventoryFile,
        line_no: usize,
        expected: usize,
        found: usize,
    },
}

pub type InventoryResult<T> = Result<T, InventoryError>;

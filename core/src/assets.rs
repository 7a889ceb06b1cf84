//! Positional parsing of `assetmap.txt` records.

use eonmap_common::inventory::key::DeploymentKey;
use eonmap_common::inventory::record::AssetRecord;

/// Records shorter than this are ignored. Fields 1, 2 and 6 onward are not used.
pub const MIN_FIELDS: usize = 7;

const ASSET_ID: usize = 0;
const APPLICATION: usize = 3;
const SERVICE: usize = 4;
const INSTANCE: usize = 5;

/// Extracts the asset id and deployment key from one asset record.
///
/// Returns `None` when the trimmed line has fewer than [`MIN_FIELDS`] fields.
pub fn parse_asset_line(line: &str) -> Option<AssetRecord> {
    let fields: Vec<&str> = line.trim().split(':').collect();
    if fields.len() < MIN_FIELDS {
        return None;
    }

    Some(AssetRecord {
        asset_id: fields[ASSET_ID].to_string(),
        key: DeploymentKey::new(fields[APPLICATION], fields[SERVICE], fields[INSTANCE]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_fields_by_position() {
        let record = parse_asset_line("CM1:name:owner:appX:svcY:instZ:notes").unwrap();

        assert_eq!(record.asset_id, "CM1");
        assert_eq!(record.key, DeploymentKey::new("appX", "svcY", "instZ"));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let record = parse_asset_line("  CM1:n:o:a:s:i:x\r").unwrap();
        assert_eq!(record.asset_id, "CM1");
        assert_eq!(record.key.instance, "i");
    }

    #[test]
    fn extra_fields_are_ignored() {
        let record = parse_asset_line("CM1:n:o:a:s:i:x:y:z").unwrap();
        assert_eq!(record.key, DeploymentKey::new("a", "s", "i"));
    }

    #[test]
    fn short_lines_are_rejected() {
        assert!(parse_asset_line("CM1:n:o:a:s:i").is_none());
        assert!(parse_asset_line("").is_none());
        assert!(parse_asset_line("# comment").is_none());
    }
}

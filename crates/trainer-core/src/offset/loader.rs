use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::offset::{CodeHandler, OffsetTable, VersionOffsets};

/// On-disk shape of the offset table. Kept separate from `OffsetTable` so the
/// sorted/validated invariants only exist on the loaded form.
#[derive(Debug, Serialize, Deserialize)]
struct OffsetFile {
    code_handler: CodeHandler,
    versions: Vec<VersionOffsets>,
}

/// Load the offset table from a JSON file.
pub fn load_offsets<P: AsRef<Path>>(path: P) -> Result<OffsetTable> {
    let data = fs::read_to_string(path.as_ref())?;
    let file: OffsetFile = serde_json::from_str(&data)?;
    let table = OffsetTable::new(file.code_handler, file.versions)?;
    info!(
        "Loaded offsets for {} game versions from {:?}",
        table.versions().count(),
        path.as_ref()
    );
    Ok(table)
}

pub fn save_offsets<P: AsRef<Path>>(path: P, table: &OffsetTable) -> Result<()> {
    let file = OffsetFile {
        code_handler: table.code_handler,
        versions: table.entries().to_vec(),
    };
    fs::write(path, serde_json::to_string_pretty(&file)?)?;
    Ok(())
}

/// Offsets shipped with the trainer, used when no offsets file is present.
pub fn builtin_offsets() -> OffsetTable {
    let versions = [
        ("1.0.0", 0x3FCE_8000u32, 0x3FD4_A000u32, 0x3FCD_79B4u32),
        ("1.1.0", 0x3FD1_C000, 0x3FD7_E000, 0x3FD0_B9B4),
        ("1.3.0", 0x40E5_C558, 0x40EB_E558, 0x40E4_BF1C),
        ("1.3.1", 0x40E6_4558, 0x40EC_6558, 0x40E5_3F1C),
        ("1.5.0", 0x40EF_C558, 0x40F5_E558, 0x40EE_BF1C),
    ];
    let versions = versions
        .into_iter()
        .map(|(version, start, end, count)| VersionOffsets {
            version: version.to_string(),
            start,
            end,
            count,
        })
        .collect();

    // Table entries are static and well-formed, construction cannot fail.
    OffsetTable::new(
        CodeHandler {
            start: 0x010014D0,
            enabled: 0x010014CC,
        },
        versions,
    )
    .expect("builtin offset table is well-formed")
}

/// Load from `path` if it exists, otherwise fall back to the builtin table.
pub fn load_or_builtin<P: AsRef<Path>>(path: P) -> Result<OffsetTable> {
    if path.as_ref().exists() {
        load_offsets(path)
    } else {
        info!("No offsets file at {:?}, using builtin table", path.as_ref());
        Ok(builtin_offsets())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_newest() {
        let table = builtin_offsets();
        assert_eq!(table.newest().unwrap().version, "1.5.0");
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("offsets.json");

        let table = builtin_offsets();
        save_offsets(&path, &table).unwrap();
        let loaded = load_offsets(&path).unwrap();

        assert_eq!(
            loaded.versions().collect::<Vec<_>>(),
            table.versions().collect::<Vec<_>>()
        );
        assert_eq!(loaded.get("1.3.1").unwrap().start, 0x40E6_4558);
        assert_eq!(loaded.code_handler.start, table.code_handler.start);
    }

    #[test]
    fn test_load_or_builtin_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let table = load_or_builtin(dir.path().join("missing.json")).unwrap();
        assert!(table.versions().count() > 0);
    }
}

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::offset::GameVersion;

/// Inventory table addresses for one game build.
///
/// The table is scanned backward from `end`; `count` is the address holding
/// the live item count, not the count itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionOffsets {
    pub version: String,
    pub start: u32,
    pub end: u32,
    pub count: u32,
}

impl VersionOffsets {
    pub fn is_valid(&self) -> bool {
        !self.version.is_empty() && self.start != 0 && self.end > self.start && self.count != 0
    }
}

/// Reserved opcode buffer the console executes when `enabled` is non-zero.
/// Global across game builds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CodeHandler {
    pub start: u32,
    pub enabled: u32,
}

/// All known per-build offsets plus the global code handler region.
///
/// Kept sorted newest-first so the most recent build is the default when
/// nothing is configured. Built through [`OffsetTable::new`] only, which
/// validates and sorts the entries.
#[derive(Debug, Clone)]
pub struct OffsetTable {
    pub code_handler: CodeHandler,
    versions: Vec<VersionOffsets>,
}

impl OffsetTable {
    pub fn new(code_handler: CodeHandler, mut versions: Vec<VersionOffsets>) -> Result<Self> {
        for entry in &versions {
            if !entry.is_valid() {
                return Err(Error::Config(format!(
                    "invalid offset entry for version '{}'",
                    entry.version
                )));
            }
            entry.version.parse::<GameVersion>()?;
        }
        versions.sort_by(|a, b| {
            let va: GameVersion = a.version.parse().unwrap_or(GameVersion::new(0, 0, 0));
            let vb: GameVersion = b.version.parse().unwrap_or(GameVersion::new(0, 0, 0));
            vb.cmp(&va)
        });
        Ok(Self {
            code_handler,
            versions,
        })
    }

    /// Exact-match lookup; an unknown version is a configuration error and
    /// no memory operation is attempted with it.
    pub fn get(&self, version: &str) -> Result<&VersionOffsets> {
        self.versions
            .iter()
            .find(|v| v.version == version)
            .ok_or_else(|| Error::Config(format!("unknown game version '{version}'")))
    }

    /// Most recent known build, the default when no version is configured.
    pub fn newest(&self) -> Result<&VersionOffsets> {
        self.versions
            .first()
            .ok_or_else(|| Error::Config("offset table is empty".into()))
    }

    /// Known version strings, newest first.
    pub fn versions(&self) -> impl Iterator<Item = &str> {
        self.versions.iter().map(|v| v.version.as_str())
    }

    /// All entries, newest first.
    pub fn entries(&self) -> &[VersionOffsets] {
        &self.versions
    }
}

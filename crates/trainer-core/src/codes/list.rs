use std::fs;
use std::path::Path;

use tracing::info;

use crate::codes::Code;
use crate::error::{Error, Result};

/// Load the persisted cheat-code list (JSON array, order preserved).
pub fn load_codes<P: AsRef<Path>>(path: P) -> Result<Vec<Code>> {
    let data = fs::read_to_string(path.as_ref())?;
    let codes: Vec<Code> = serde_json::from_str(&data)?;
    info!("Loaded {} codes from {:?}", codes.len(), path.as_ref());
    Ok(codes)
}

pub fn save_codes<P: AsRef<Path>>(path: P, codes: &[Code]) -> Result<()> {
    fs::write(path, serde_json::to_string_pretty(codes)?)?;
    Ok(())
}

/// Persist the current enabled flags back into the list file.
///
/// Matches entries by name and rewrites only `enabled`; names and opcode
/// text in the file are never altered, and file entries with no match are
/// left as they are.
pub fn sync_enabled<P: AsRef<Path>>(path: P, codes: &[Code]) -> Result<()> {
    let mut on_disk = load_codes(path.as_ref())?;
    for entry in &mut on_disk {
        if let Some(current) = codes.iter().find(|c| c.name == entry.name) {
            entry.enabled = current.enabled;
        }
    }
    save_codes(path, &on_disk)
}

/// Flip one named code, for callers that address codes by name.
pub fn set_enabled(codes: &mut [Code], name: &str, enabled: bool) -> Result<()> {
    let code = codes
        .iter_mut()
        .find(|c| c.name == name)
        .ok_or_else(|| Error::Config(format!("no code named '{name}'")))?;
    code.enabled = enabled;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Code> {
        vec![
            Code {
                name: "inf stamina".into(),
                block: "076A5DE8 453B8000".into(),
                enabled: false,
            },
            Code {
                name: "moon jump".into(),
                block: "0747B3BC 44160000".into(),
                enabled: true,
            },
        ]
    }

    #[test]
    fn test_list_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("codes.json");
        save_codes(&path, &sample()).unwrap();
        assert_eq!(load_codes(&path).unwrap(), sample());
    }

    #[test]
    fn test_sync_rewrites_only_enabled() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("codes.json");
        save_codes(&path, &sample()).unwrap();

        let mut current = sample();
        set_enabled(&mut current, "inf stamina", true).unwrap();
        // A rogue block edit must not reach the file.
        current[0].block = "FFFFFFFF".into();
        sync_enabled(&path, &current).unwrap();

        let on_disk = load_codes(&path).unwrap();
        assert!(on_disk[0].enabled);
        assert_eq!(on_disk[0].block, "076A5DE8 453B8000");
        assert_eq!(on_disk[1], sample()[1]);
    }

    #[test]
    fn test_set_enabled_unknown_name() {
        let mut codes = sample();
        assert!(set_enabled(&mut codes, "nope", true).is_err());
    }
}

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::inventory::{Decoded, Item, NameLookup, decode_record};
use crate::memory::layout::item as layout;
use crate::memory::RemoteMemory;
use crate::offset::VersionOffsets;

/// Walk the inventory table backward and decode every live slot.
///
/// The table interleaves real records with gaps and placeholders: a record
/// that decodes to `Skip` retreats the cursor one stride without consuming
/// the expected count, so the loop may run more physical iterations than
/// `count` to accept `count` items. Accepted base addresses strictly
/// decrease.
///
/// `progress` fires as `(accepted, total)` after every accepted item.
/// Cancellation is checked once per iteration; already-performed reads are
/// kept, no further round trips are issued.
pub fn scan_inventory<M, F>(
    memory: &mut M,
    offsets: &VersionOffsets,
    names: &dyn NameLookup,
    cancel: &AtomicBool,
    mut progress: F,
) -> Result<Vec<Item>>
where
    M: RemoteMemory,
    F: FnMut(usize, usize),
{
    let total = memory.read_i32(offsets.count)?;
    if total < 0 {
        return Err(Error::Protocol(format!(
            "item count at {:#010x} is negative ({total})",
            offsets.count
        )));
    }
    let total = total as usize;
    info!("Scanning inventory: {total} items expected");

    let mut items = Vec::with_capacity(total);
    let mut cursor = offsets.end;

    while items.len() < total {
        if cancel.load(Ordering::SeqCst) {
            return Err(Error::Cancelled);
        }
        if cursor < offsets.start {
            return Err(Error::Protocol(format!(
                "scan ran past table start {:#010x} with {}/{total} items",
                offsets.start,
                items.len()
            )));
        }

        let bytes = memory.read_bytes(cursor, layout::RECORD_SIZE)?;
        match decode_record(cursor, &bytes)? {
            Decoded::Skip => {
                debug!("Skipping non-item record at {cursor:#010x}");
            }
            Decoded::Item(mut item) => {
                item.name = names.display_name(item.category, &item.id);
                items.push(*item);
                progress(items.len(), total);
            }
        }
        cursor = cursor.wrapping_sub(layout::SLOT_STRIDE);
    }

    info!("Scan complete: {} items", items.len());
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::codec::make_record;
    use crate::inventory::names::testing::StaticNames;
    use crate::inventory::{Category, NoNames};
    use crate::memory::MockMemory;

    const STRIDE: u32 = layout::SLOT_STRIDE;

    fn offsets(end: u32, slots: u32, count_value: u32) -> (MockMemory, VersionOffsets) {
        let offsets = VersionOffsets {
            version: "1.5.0".into(),
            start: end - slots * STRIDE - STRIDE,
            end,
            count: 0x100,
        };
        let mut memory = MockMemory::new();
        memory.load_u32(offsets.count, count_value);
        (memory, offsets)
    }

    #[test]
    fn test_scan_three_consecutive_records() {
        let end = 0x1000 + STRIDE * 3;
        let (mut memory, offsets) = offsets(end, 8, 3);
        memory.load(end, &make_record(0, "Weapon_Sword_070", 2700));
        memory.load(end - STRIDE, &make_record(1, "Weapon_Bow_001", 1200));
        memory.load(end - STRIDE * 2, &make_record(7, "Item_Fruit_A", 23));

        let cancel = AtomicBool::new(false);
        let mut events = Vec::new();
        let items = scan_inventory(&mut memory, &offsets, &NoNames, &cancel, |a, t| {
            events.push((a, t));
        })
        .unwrap();

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].id, "Weapon_Sword_070");
        assert_eq!(items[0].value, 2700);
        assert_eq!(items[1].page, 1);
        assert_eq!(items[2].category, Category::Materials);
        assert!(items.windows(2).all(|w| w[0].base_address > w[1].base_address));
        assert_eq!(events, vec![(1, 3), (2, 3), (3, 3)]);
    }

    #[test]
    fn test_scan_skips_junk_without_consuming_count() {
        let end = 0x8000u32;
        let (mut memory, offsets) = offsets(end, 8, 2);
        // Valid, junk (bad page), gap (zeroes, empty id), valid.
        memory.load(end, &make_record(0, "Weapon_Sword_070", 1));
        memory.load(end - STRIDE, &make_record(11, "Junk", 1));
        // end - 2*STRIDE left as zeroes
        memory.load(end - STRIDE * 3, &make_record(9, "Obj_DungeonClearSeal", 4));

        let cancel = AtomicBool::new(false);
        let items =
            scan_inventory(&mut memory, &offsets, &NoNames, &cancel, |_, _| {}).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[1].id, "Obj_DungeonClearSeal");
        assert_eq!(items[1].base_address, end - STRIDE * 3);
    }

    #[test]
    fn test_scan_attaches_display_names() {
        let end = 0x8000u32;
        let (mut memory, offsets) = offsets(end, 4, 1);
        memory.load(end, &make_record(0, "Weapon_Sword_070", 1));

        let names = StaticNames::default().with(Category::Weapons, "Weapon_Sword_070", "Master Sword");
        let cancel = AtomicBool::new(false);
        let items = scan_inventory(&mut memory, &offsets, &names, &cancel, |_, _| {}).unwrap();
        assert_eq!(items[0].name.as_deref(), Some("Master Sword"));
    }

    #[test]
    fn test_scan_unknown_names_tolerated() {
        let end = 0x8000u32;
        let (mut memory, offsets) = offsets(end, 4, 1);
        memory.load(end, &make_record(0, "Weapon_Sword_070", 1));

        let names = StaticNames::default();
        let cancel = AtomicBool::new(false);
        let items = scan_inventory(&mut memory, &offsets, &names, &cancel, |_, _| {}).unwrap();
        assert_eq!(items[0].name, None);
    }

    #[test]
    fn test_scan_cancellation_stops_round_trips() {
        let end = 0x8000u32;
        let (mut memory, offsets) = offsets(end, 8, 3);
        memory.load(end, &make_record(0, "Weapon_Sword_070", 1));

        let cancel = AtomicBool::new(true);
        let err = scan_inventory(&mut memory, &offsets, &NoNames, &cancel, |_, _| {}).unwrap_err();
        assert!(matches!(err, Error::Cancelled));
    }

    #[test]
    fn test_scan_overrun_is_protocol_error() {
        // Count says 2 but the table only holds junk.
        let end = 0x8000u32;
        let (mut memory, offsets) = offsets(end, 4, 2);
        memory.load(end, &make_record(42, "Junk", 1));

        let cancel = AtomicBool::new(false);
        let err = scan_inventory(&mut memory, &offsets, &NoNames, &cancel, |_, _| {}).unwrap_err();
        assert!(matches!(err, Error::Protocol(_)));
    }
}

use crate::error::{Error, Result};
use crate::inventory::{Category, Item};
use crate::memory::layout::item as layout;

/// Result of decoding one 0x70-byte record.
///
/// `Skip` is routine control flow, not an error: the scanner retreats one
/// stride and retries the same logical slot.
#[derive(Debug)]
pub enum Decoded {
    Item(Box<Item>),
    Skip,
}

fn be_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

/// Decode a raw record at `base_address`.
///
/// A page outside 0..=9 or an empty id marks a gap or placeholder slot and
/// yields `Skip`; nothing is partially populated in that case.
pub fn decode_record(base_address: u32, bytes: &[u8]) -> Result<Decoded> {
    if bytes.len() != layout::RECORD_SIZE {
        return Err(Error::Validation(format!(
            "record at {base_address:#010x} is {} bytes, expected {:#x}",
            bytes.len(),
            layout::RECORD_SIZE
        )));
    }

    let page = be_u32(bytes, layout::PAGE) as i32;
    let Some(category) = Category::from_page(page) else {
        return Ok(Decoded::Skip);
    };

    let id_window = &bytes[layout::ID..layout::ID + layout::ID_LEN];
    let id_len = memchr::memchr(0, id_window).unwrap_or(layout::ID_LEN);
    let id: String = id_window[..id_len].iter().map(|&b| b as char).collect();
    if id.trim().is_empty() {
        return Ok(Decoded::Skip);
    }

    let modifiers = layout::MODIFIERS.map(|offset| format!("{:08x}", be_u32(bytes, offset)));

    Ok(Decoded::Item(Box::new(Item {
        base_address,
        page,
        category,
        unknown: be_u32(bytes, layout::UNKNOWN) as i32,
        value: be_u32(bytes, layout::VALUE),
        equipped: bytes[layout::EQUIPPED] != 0,
        current: bytes[layout::CURRENT] != 0,
        id,
        name: None,
        modifiers,
        name_start: base_address + layout::ID as u32,
    })))
}

/// A single edit to one field of a decoded item.
#[derive(Debug, Clone)]
pub enum FieldEdit {
    /// Rename; the 36-byte window is zeroed before the new id is written.
    Id(String),
    Value(u32),
    Page(i32),
    /// Modifier slot index and its new 8-hex-digit word.
    Modifier(usize, String),
}

/// One remote write, in issue order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOp {
    Bytes { address: u32, data: Vec<u8> },
    Word { address: u32, value: u32 },
}

/// Encode one field edit into its exact remote writes.
///
/// Only the edited field is touched; everything else in the record stays
/// byte-identical. Validation failures withhold the write entirely.
pub fn encode_field(item: &Item, edit: &FieldEdit) -> Result<Vec<WriteOp>> {
    match edit {
        FieldEdit::Id(new_id) => {
            if new_id.is_empty() {
                return Err(Error::Validation("item id cannot be empty".into()));
            }
            if new_id.len() > layout::ID_LEN {
                return Err(Error::Validation(format!(
                    "item id '{new_id}' exceeds {} bytes",
                    layout::ID_LEN
                )));
            }
            if !new_id.is_ascii() {
                return Err(Error::Validation(format!("item id '{new_id}' is not ASCII")));
            }
            // Zero the whole window first so a shorter id leaves no residue
            // of the old one, then write the new bytes one at a time.
            let mut ops = vec![WriteOp::Bytes {
                address: item.name_start,
                data: vec![0u8; layout::ID_LEN],
            }];
            for (i, b) in new_id.bytes().enumerate() {
                ops.push(WriteOp::Bytes {
                    address: item.name_start + i as u32,
                    data: vec![b],
                });
            }
            Ok(ops)
        }
        FieldEdit::Value(value) => Ok(vec![WriteOp::Word {
            address: item.value_address(),
            value: *value,
        }]),
        FieldEdit::Page(page) => {
            if Category::from_page(*page).is_none() {
                return Err(Error::Validation(format!("page {page} out of range 0..=9")));
            }
            Ok(vec![WriteOp::Word {
                address: item.page_address(),
                value: *page as u32,
            }])
        }
        FieldEdit::Modifier(index, hex) => {
            if *index >= layout::MODIFIERS.len() {
                return Err(Error::Validation(format!("modifier index {index} out of range")));
            }
            let trimmed = hex.trim();
            if trimmed.is_empty() || trimmed.len() > 8 {
                return Err(Error::Validation(format!("bad modifier word '{hex}'")));
            }
            let value = u32::from_str_radix(trimmed, 16)
                .map_err(|_| Error::Validation(format!("bad modifier word '{hex}'")))?;
            Ok(vec![WriteOp::Word {
                address: item.modifier_address(*index),
                value,
            }])
        }
    }
}

#[cfg(test)]
pub(crate) fn make_record(page: i32, id: &str, value: u32) -> Vec<u8> {
    let mut bytes = vec![0u8; layout::RECORD_SIZE];
    bytes[layout::PAGE..layout::PAGE + 4].copy_from_slice(&(page as u32).to_be_bytes());
    bytes[layout::VALUE..layout::VALUE + 4].copy_from_slice(&value.to_be_bytes());
    bytes[layout::EQUIPPED] = 1;
    let id_bytes = id.as_bytes();
    bytes[layout::ID..layout::ID + id_bytes.len()].copy_from_slice(id_bytes);
    for (i, offset) in layout::MODIFIERS.into_iter().enumerate() {
        bytes[offset..offset + 4].copy_from_slice(&(0x1111_1111u32 * (i as u32 + 1)).to_be_bytes());
    }
    bytes
}

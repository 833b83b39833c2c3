use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

use crate::memory::layout::item as layout;

/// Inventory category, derived from the record's page index.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
)]
pub enum Category {
    Weapons,
    Bows,
    Arrows,
    Shields,
    Armor,
    Materials,
    Food,
    KeyItems,
}

impl Category {
    /// Map a page index to its category. Pages 4..=6 are the three armor
    /// rows of the in-game inventory. Anything outside 0..=9 is not a real
    /// record.
    pub fn from_page(page: i32) -> Option<Self> {
        match page {
            0 => Some(Self::Weapons),
            1 => Some(Self::Bows),
            2 => Some(Self::Arrows),
            3 => Some(Self::Shields),
            4..=6 => Some(Self::Armor),
            7 => Some(Self::Materials),
            8 => Some(Self::Food),
            9 => Some(Self::KeyItems),
            _ => None,
        }
    }
}

/// One decoded inventory slot.
///
/// Items are transient: the list is rebuilt in full on every scan and never
/// persisted. Addresses are absolute console addresses usable as write keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Origin of the 0x70-byte record in console memory.
    pub base_address: u32,
    pub page: i32,
    pub category: Category,
    pub unknown: i32,
    /// Quantity or durability depending on category.
    pub value: u32,
    pub equipped: bool,
    pub current: bool,
    /// Internal ASCII identifier, e.g. "Weapon_Sword_070".
    pub id: String,
    /// Display name from the external lookup, if known.
    pub name: Option<String>,
    /// Five opaque modifier words, kept as 8-hex-digit strings for
    /// round-trip display and edit.
    pub modifiers: [String; 5],
    /// Address of the id field, the write target for renames.
    pub name_start: u32,
}

impl Item {
    pub fn page_address(&self) -> u32 {
        self.base_address + layout::PAGE as u32
    }

    pub fn value_address(&self) -> u32 {
        self.base_address + layout::VALUE as u32
    }

    pub fn modifier_address(&self, index: usize) -> u32 {
        self.base_address + layout::MODIFIERS[index] as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_mapping_covers_valid_range() {
        for page in 0..=9 {
            assert!(Category::from_page(page).is_some(), "page {page}");
        }
        assert!(Category::from_page(-1).is_none());
        assert!(Category::from_page(10).is_none());
    }

    #[test]
    fn test_armor_rows_collapse() {
        assert_eq!(Category::from_page(4), Some(Category::Armor));
        assert_eq!(Category::from_page(6), Some(Category::Armor));
    }
}

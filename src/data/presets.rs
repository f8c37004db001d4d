//! Preset records
//!
//! Presets are the immutable templates content authors write in RON. Each
//! field that can vary is a range or a list of candidates; spinning a preset
//! resolves those into one concrete entity.

use serde::{Deserialize, Serialize};

use crate::entities::NpcAlliance;
use crate::items::Ability;

/// Anything that can be drawn by rarity
pub trait Weighted {
    /// Selection weight. Higher is more likely, zero is never drawn.
    fn rarity(&self) -> u32;
}

/// A group of abilities of which `number` are drawn
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AbilityOption {
    pub options: Vec<Ability>,
    pub number: usize,
}

/// Variant-specific part of an item preset
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum ItemKind {
    #[default]
    Plain,
    Container {
        /// Inclusive lower bound on generated contents
        min_items: usize,
        /// Exclusive upper bound; at or below `min_items` means exactly `min_items`
        max_items: usize,
        /// Capacity cap
        inventory_size: usize,
    },
    /// Each stat is `base` plus a roll in `[0, spread)`; a spread of zero or
    /// less means the base is fixed.
    Weapon {
        pierce: i32,
        #[serde(default)]
        pierce_range: i32,
        damage: i32,
        #[serde(default)]
        damage_range: i32,
        range: i32,
        #[serde(default)]
        range_range: i32,
    },
}

/// Template for interactables, containers and weapons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemPreset {
    pub names: Vec<String>,
    pub descriptions: Vec<String>,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub can_be_picked_up: bool,
    #[serde(default)]
    pub rarity: u32,
    #[serde(default)]
    pub ability_options: Vec<AbilityOption>,
    #[serde(default)]
    pub kind: ItemKind,
}

impl ItemPreset {
    /// Plain preset with a single name and description
    pub fn plain(name: impl Into<String>, description: impl Into<String>, rarity: u32) -> Self {
        Self {
            names: vec![name.into()],
            descriptions: vec![description.into()],
            size: 1,
            weight: 1,
            can_be_picked_up: true,
            rarity,
            ability_options: Vec::new(),
            kind: ItemKind::Plain,
        }
    }

    pub fn with_kind(mut self, kind: ItemKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_size(mut self, size: u32, weight: u32) -> Self {
        self.size = size;
        self.weight = weight;
        self
    }

    pub fn fixed(mut self) -> Self {
        self.can_be_picked_up = false;
        self
    }

    pub fn with_abilities(mut self, options: Vec<Ability>, number: usize) -> Self {
        self.ability_options.push(AbilityOption { options, number });
        self
    }

    /// A preset without name or description candidates can't be spun
    pub fn is_valid(&self) -> bool {
        !self.names.is_empty() && !self.descriptions.is_empty()
    }

    pub fn is_container(&self) -> bool {
        matches!(self.kind, ItemKind::Container { .. })
    }

    /// First name candidate, for logs
    pub fn label(&self) -> &str {
        self.names.first().map_or("<unnamed>", String::as_str)
    }
}

impl Weighted for ItemPreset {
    fn rarity(&self) -> u32 {
        self.rarity
    }
}

/// `(min, max)` pairs for each NPC stat. `min == max` means fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NpcStatRanges {
    pub armor_class: (i32, i32),
    pub strength: (i32, i32),
    pub dexterity: (i32, i32),
    pub constitution: (i32, i32),
    pub intelligence: (i32, i32),
    pub wisdom: (i32, i32),
    pub charisma: (i32, i32),
    pub noise: (i32, i32),
    pub shield: (i32, i32),
}

/// Template for enemies, bosses and other NPCs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NpcPreset {
    pub names: Vec<String>,
    pub descriptions: Vec<String>,
    #[serde(default)]
    pub rarity: u32,
    #[serde(default)]
    pub alliance: NpcAlliance,
    #[serde(default)]
    pub stats: NpcStatRanges,
    #[serde(default)]
    pub inventory: Vec<ItemPreset>,
}

impl NpcPreset {
    pub fn is_valid(&self) -> bool {
        !self.names.is_empty() && !self.descriptions.is_empty()
    }

    pub fn label(&self) -> &str {
        self.names.first().map_or("<unnamed>", String::as_str)
    }
}

impl Weighted for NpcPreset {
    fn rarity(&self) -> u32 {
        self.rarity
    }
}

/// Template for one room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomPreset {
    /// Identifier for logs and validation, never shown to the player
    #[serde(default)]
    pub name: String,
    pub descriptions: Vec<String>,
    /// Furnishings every room of this kind has
    #[serde(default)]
    pub interactables: Vec<ItemPreset>,
    /// Flavour items mentioned by the descriptions
    #[serde(default)]
    pub description_interactables: Vec<ItemPreset>,
    /// Set on boss rooms only
    #[serde(default)]
    pub boss: Option<NpcPreset>,
    #[serde(default)]
    pub rarity: u32,
}

impl RoomPreset {
    pub fn is_boss_room(&self) -> bool {
        self.boss.is_some()
    }
}

impl Weighted for RoomPreset {
    fn rarity(&self) -> u32 {
        self.rarity
    }
}

/// Any preset record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PresetRecord {
    Item(ItemPreset),
    Room(RoomPreset),
    Npc(NpcPreset),
}

impl PresetRecord {
    pub fn descriptions(&self) -> &[String] {
        match self {
            PresetRecord::Item(preset) => &preset.descriptions,
            PresetRecord::Room(preset) => &preset.descriptions,
            PresetRecord::Npc(preset) => &preset.descriptions,
        }
    }
}

impl Weighted for PresetRecord {
    fn rarity(&self) -> u32 {
        match self {
            PresetRecord::Item(preset) => preset.rarity(),
            PresetRecord::Room(preset) => preset.rarity(),
            PresetRecord::Npc(preset) => preset.rarity(),
        }
    }
}

/// On-disk wrapper for a list of presets
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PresetFile<T> {
    pub presets: Vec<T>,
}

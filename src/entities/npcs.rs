//! NPC definitions
//!
//! Non-player characters: enemies roaming a floor, the floor boss, and any
//! friendly or neutral folk a preset describes.

use serde::{Deserialize, Serialize};

use crate::items::Interactable;

/// Which side an NPC is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NpcAlliance {
    Friend,
    #[default]
    Foe,
    Neutral,
}

impl NpcAlliance {
    pub fn name(&self) -> &'static str {
        match self {
            NpcAlliance::Friend => "Friend",
            NpcAlliance::Foe => "Foe",
            NpcAlliance::Neutral => "Neutral",
        }
    }

    pub fn is_hostile(&self) -> bool {
        matches!(self, NpcAlliance::Foe)
    }
}

/// The nine resolved stats of an NPC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NpcStats {
    pub armor_class: i32,
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
    /// How loud the NPC is when moving
    pub noise: i32,
    pub shield: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Npc {
    pub x: usize,
    pub y: usize,
    pub name: String,
    pub description: String,
    pub alliance: NpcAlliance,
    pub stats: NpcStats,
    pub inventory: Vec<Interactable>,
}

impl Npc {
    pub fn new(
        x: usize,
        y: usize,
        name: impl Into<String>,
        description: impl Into<String>,
        alliance: NpcAlliance,
        stats: NpcStats,
    ) -> Self {
        Self {
            x,
            y,
            name: name.into(),
            description: description.into(),
            alliance,
            stats,
            inventory: Vec::new(),
        }
    }

    pub fn set_coords(&mut self, x: usize, y: usize) {
        self.x = x;
        self.y = y;
    }

    pub fn coords(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    pub fn add_inventory(&mut self, item: Interactable) {
        self.inventory.push(item);
    }
}

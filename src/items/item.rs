//! Item definitions
//!
//! Concrete interactables produced by spinning item presets. Containers and
//! weapons are interactables with extra resolved fields.

use serde::{Deserialize, Serialize};

/// A special property an interactable can carry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Ability {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self { name: name.into(), description: description.into() }
    }
}

/// Resolved combat stats of a weapon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponStats {
    pub pierce: i32,
    /// Minimum damage
    pub damage: i32,
    /// Range in which damage can land
    pub range: i32,
}

/// What specialisation an interactable has
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InteractableKind {
    Plain,
    Container {
        inventory: Vec<Interactable>,
        inventory_size: usize,
    },
    Weapon(WeaponStats),
}

/// Anything in the world the player can look at, take, open or swing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interactable {
    pub name: String,
    pub description: String,
    pub size: u32,
    pub weight: u32,
    pub can_be_picked_up: bool,
    pub abilities: Vec<Ability>,
    pub kind: InteractableKind,
}

impl Interactable {
    /// Create a plain interactable
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        size: u32,
        weight: u32,
        can_be_picked_up: bool,
        abilities: Vec<Ability>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            size,
            weight,
            can_be_picked_up,
            abilities,
            kind: InteractableKind::Plain,
        }
    }

    /// Turn this into a container holding `inventory`
    pub fn into_container(mut self, inventory: Vec<Interactable>, inventory_size: usize) -> Self {
        self.kind = InteractableKind::Container { inventory, inventory_size };
        self
    }

    /// Turn this into a weapon with the given stats
    pub fn into_weapon(mut self, stats: WeaponStats) -> Self {
        self.kind = InteractableKind::Weapon(stats);
        self
    }

    pub fn is_container(&self) -> bool {
        matches!(self.kind, InteractableKind::Container { .. })
    }

    pub fn is_weapon(&self) -> bool {
        matches!(self.kind, InteractableKind::Weapon(_))
    }

    /// Contents, if this is a container
    pub fn inventory(&self) -> Option<&[Interactable]> {
        match &self.kind {
            InteractableKind::Container { inventory, .. } => Some(inventory),
            _ => None,
        }
    }

    pub fn weapon_stats(&self) -> Option<WeaponStats> {
        match self.kind {
            InteractableKind::Weapon(stats) => Some(stats),
            _ => None,
        }
    }

    /// Deepest container nesting below (and including) this item.
    /// A plain item or weapon is 0, an empty container is 1.
    pub fn nesting_depth(&self) -> usize {
        match &self.kind {
            InteractableKind::Container { inventory, .. } => {
                1 + inventory.iter().map(Interactable::nesting_depth).max().unwrap_or(0)
            }
            _ => 0,
        }
    }

    /// Count of this item plus everything nested inside it
    pub fn total_items(&self) -> usize {
        1 + self
            .inventory()
            .map(|inv| inv.iter().map(Interactable::total_items).sum())
            .unwrap_or(0)
    }
}

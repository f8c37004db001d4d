//! Rooms and doors
//!
//! A room is one cell of a floor grid. Doors only ever lead south or east;
//! the neighbouring room's south/east door covers the other two directions.

use serde::{Deserialize, Serialize};

use crate::items::Interactable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Door {
    pub open: bool,
    pub locked: bool,
    pub hidden: bool,
}

impl Door {
    pub fn new(open: bool, locked: bool, hidden: bool) -> Self {
        Self { open, locked, hidden }
    }

    /// The door every generated room gets: open, unlocked, visible
    pub fn open() -> Self {
        Self::new(true, false, false)
    }

    pub fn is_passable(&self) -> bool {
        self.open && !self.locked
    }
}

/// A single room of a floor
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Room {
    /// Contents, fixed furnishings first, then anything generated
    pub items: Vec<Interactable>,
    /// Flavour items tied to the description text
    pub description_items: Vec<Interactable>,
    pub description: String,
    pub south_door: Option<Door>,
    pub east_door: Option<Door>,
    /// The floor's boss lives here
    pub is_boss: bool,
    /// Stairs down to the next floor
    pub has_stairs: bool,
}

impl Room {
    pub fn new(
        items: Vec<Interactable>,
        description_items: Vec<Interactable>,
        description: impl Into<String>,
        south_door: Option<Door>,
        east_door: Option<Door>,
    ) -> Self {
        Self {
            items,
            description_items,
            description: description.into(),
            south_door,
            east_door,
            is_boss: false,
            has_stairs: false,
        }
    }

    /// A room with doors and nothing else
    pub fn shell(south_door: bool, east_door: bool) -> Self {
        Self::new(
            Vec::new(),
            Vec::new(),
            String::new(),
            south_door.then(Door::open),
            east_door.then(Door::open),
        )
    }

    pub fn add_item(&mut self, item: Interactable) {
        self.items.push(item);
    }

    pub fn make_stairs(&mut self) {
        self.has_stairs = true;
    }

    pub fn has_south_door(&self) -> bool {
        self.south_door.is_some()
    }

    pub fn has_east_door(&self) -> bool {
        self.east_door.is_some()
    }
}

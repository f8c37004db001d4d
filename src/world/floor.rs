//! Floor data structure
//!
//! The 2D grid of rooms making up one level of the castle, plus the NPCs
//! wandering it.

use serde::{Deserialize, Serialize};

use super::room::Room;
use crate::entities::Npc;

/// A dungeon floor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Floor {
    /// Column-major: `columns[x][y]`
    columns: Vec<Vec<Room>>,
    npcs: Vec<Npc>,
    boss_cell: (usize, usize),
}

impl Floor {
    /// Build a floor from columns of rooms. Every column must have the same
    /// height.
    pub fn new(columns: Vec<Vec<Room>>, boss_cell: (usize, usize)) -> Self {
        debug_assert!(columns.windows(2).all(|w| w[0].len() == w[1].len()));
        Self { columns, npcs: Vec::new(), boss_cell }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width() && y < self.height()
    }

    pub fn room(&self, x: usize, y: usize) -> Option<&Room> {
        self.columns.get(x).and_then(|column| column.get(y))
    }

    /// Every room with its coordinates, column by column
    pub fn rooms(&self) -> impl Iterator<Item = ((usize, usize), &Room)> {
        self.columns
            .iter()
            .enumerate()
            .flat_map(|(x, column)| column.iter().enumerate().map(move |(y, room)| ((x, y), room)))
    }

    pub fn boss_cell(&self) -> (usize, usize) {
        self.boss_cell
    }

    pub fn boss_room(&self) -> Option<&Room> {
        self.room(self.boss_cell.0, self.boss_cell.1)
    }

    pub fn add_npc(&mut self, npc: Npc) {
        self.npcs.push(npc);
    }

    pub fn npcs(&self) -> &[Npc] {
        &self.npcs
    }

    pub fn npcs_at(&self, x: usize, y: usize) -> impl Iterator<Item = &Npc> {
        self.npcs.iter().filter(move |npc| npc.x == x && npc.y == y)
    }

    /// The NPC standing in the boss room. Ordinary enemies are never placed
    /// there, so this is the boss if one was generated.
    pub fn boss(&self) -> Option<&Npc> {
        let (x, y) = self.boss_cell;
        self.npcs_at(x, y).next()
    }

    /// Total items lying in rooms, counting container contents
    pub fn item_count(&self) -> usize {
        self.rooms()
            .map(|(_, room)| room.items.iter().map(|item| item.total_items()).sum::<usize>())
            .sum()
    }
}

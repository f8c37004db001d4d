//! Non-player characters

pub mod npcs;

pub use npcs::{Npc, NpcAlliance, NpcStats};

//! Procedural content generation
//!
//! Everything flows downward: a floor asks for rooms, rooms ask for items,
//! items and NPCs are spun from presets picked by rarity. All randomness comes
//! from the rng passed into each entry point, so a seeded rng reproduces a
//! whole floor.
//!
//! A `Generator` holds no mutable state. The boss found while laying out
//! rooms travels back to the floor generator in [`GeneratedRoom`], so any
//! number of floors can be generated side by side.

pub mod floor;
pub mod items;
pub mod npcs;
pub mod range;
pub mod rooms;
pub mod selection;

pub use range::{resolve, resolve_between, roll_count};
pub use rooms::GeneratedRoom;
pub use selection::{select_uniform, select_weighted};

use crate::config::GeneratorConfig;
use crate::data::PresetLibrary;

/// Generation engine over a preset library
#[derive(Debug, Clone, Copy)]
pub struct Generator<'a> {
    library: &'a PresetLibrary,
    config: &'a GeneratorConfig,
}

impl<'a> Generator<'a> {
    pub fn new(library: &'a PresetLibrary, config: &'a GeneratorConfig) -> Self {
        Self { library, config }
    }
}

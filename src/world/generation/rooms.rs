//! Room generation
//!
//! A room is spun from a room preset: its description, fixed furnishings and
//! doors. Ordinary rooms then get a random number of generated items on top.
//! The boss room instead hands its boss preset back to the caller.

use rand::Rng;

use super::range::roll_count;
use super::selection::select_uniform;
use super::Generator;
use crate::data::{NpcPreset, RoomPreset};
use crate::world::{Door, Room};

/// A generated room, plus the boss its preset asked for
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedRoom {
    pub room: Room,
    pub boss: Option<NpcPreset>,
}

impl GeneratedRoom {
    fn shell(south_door: bool, east_door: bool) -> Self {
        Self { room: Room::shell(south_door, east_door), boss: None }
    }
}

impl Generator<'_> {
    /// Spin a room preset into a room shell with the requested doors.
    /// Returns `None` when the preset has no description candidates.
    pub fn spin_room(
        &self,
        preset: &RoomPreset,
        south_door: bool,
        east_door: bool,
        rng: &mut impl Rng,
    ) -> Option<GeneratedRoom> {
        let items = preset
            .interactables
            .iter()
            .filter_map(|item| self.spin_item_at(item, 0, rng))
            .collect();

        let Some(description) = select_uniform(&preset.descriptions, rng) else {
            log::debug!("Room preset '{}' has no descriptions", preset.name);
            return None;
        };

        let description_items = preset
            .description_interactables
            .iter()
            .filter_map(|item| self.spin_item_at(item, 0, rng))
            .collect();

        let room = Room::new(
            items,
            description_items,
            description.as_str(),
            south_door.then(Door::open),
            east_door.then(Door::open),
        );

        Some(GeneratedRoom { room, boss: preset.boss.clone() })
    }

    /// Generate a room from `preset`. Unless `is_boss`, between
    /// `interactable_min` (inclusive) and `interactable_max` (exclusive)
    /// random items are added on top of the preset's furnishings.
    #[allow(clippy::too_many_arguments)]
    pub fn generate_room(
        &self,
        preset: &RoomPreset,
        interactable_min: usize,
        interactable_max: usize,
        south_door: bool,
        east_door: bool,
        is_boss: bool,
        rng: &mut impl Rng,
    ) -> Option<GeneratedRoom> {
        let loot_count = roll_count(interactable_min, interactable_max, rng);
        let mut generated = self.spin_room(preset, south_door, east_door, rng)?;
        generated.room.is_boss = is_boss;

        if !is_boss {
            for _ in 0..loot_count {
                if let Some(item) = self.generate_default_interactable(rng) {
                    generated.room.add_item(item);
                }
            }
        }

        Some(generated)
    }

    /// Pick a preset for a floor cell and generate it.
    ///
    /// Boss cells draw from the boss room pool and get stairs; other cells
    /// draw from the ordinary pool with the configured item bounds. The
    /// result is always a room, a bare shell if nothing else could be made.
    pub fn generate_room_for_cell(
        &self,
        south_door: bool,
        east_door: bool,
        is_boss: bool,
        rng: &mut impl Rng,
    ) -> GeneratedRoom {
        let ordinary = self.library.ordinary_rooms();
        let (pool, (min, max)) = if is_boss {
            let bosses = self.library.boss_rooms();
            if bosses.is_empty() {
                log::warn!("No boss room presets; using an ordinary room for the boss cell");
                (ordinary, self.config.boss_room_items)
            } else {
                (bosses, self.config.boss_room_items)
            }
        } else {
            (ordinary, self.config.room_items)
        };

        let generated = select_uniform(&pool, rng)
            .and_then(|preset| self.generate_room(preset, min, max, south_door, east_door, is_boss, rng));

        let mut generated = generated.unwrap_or_else(|| {
            log::debug!("No room preset produced a room; using a bare shell");
            let mut shell = GeneratedRoom::shell(south_door, east_door);
            shell.room.is_boss = is_boss;
            shell
        });

        if is_boss {
            generated.room.make_stairs();
        }
        generated
    }
}

//! Item spinning
//!
//! Resolves item presets into concrete interactables. Containers recurse back
//! into random item generation for their contents, capped by
//! `GeneratorConfig::max_container_depth`.

use rand::seq::SliceRandom;
use rand::Rng;

use super::range::{resolve, roll_count};
use super::selection::{select_uniform, select_weighted};
use super::Generator;
use crate::data::{AbilityOption, ItemKind, ItemPreset};
use crate::items::{Ability, Interactable, WeaponStats};

/// Draw `number` abilities from each option group. Asking for more than a
/// pool holds takes the whole pool.
pub fn draw_abilities(options: &[AbilityOption], rng: &mut impl Rng) -> Vec<Ability> {
    let mut abilities = Vec::new();
    for option in options {
        let mut pool = option.options.clone();
        pool.shuffle(rng);
        pool.truncate(option.number);
        abilities.append(&mut pool);
    }
    abilities
}

impl Generator<'_> {
    /// Generate a random interactable. With probability `container_weight`
    /// it is drawn from the container pool, otherwise from the plain pool.
    pub fn generate_interactable(&self, container_weight: f64, rng: &mut impl Rng) -> Option<Interactable> {
        self.generate_interactable_at(container_weight, 0, rng)
    }

    /// [`generate_interactable`](Self::generate_interactable) with the
    /// configured container weight
    pub fn generate_default_interactable(&self, rng: &mut impl Rng) -> Option<Interactable> {
        self.generate_interactable(self.config.container_weight, rng)
    }

    /// `depth` is the number of containers the new item will sit inside
    fn generate_interactable_at(
        &self,
        container_weight: f64,
        depth: usize,
        rng: &mut impl Rng,
    ) -> Option<Interactable> {
        let roll: f64 = rng.gen();
        let containers_allowed = depth < self.config.max_container_depth;
        let pool = if roll < container_weight && containers_allowed {
            &self.library.containers
        } else {
            &self.library.interactables
        };

        let preset = select_weighted(pool, rng)?;
        self.spin_item_at(preset, depth, rng)
    }

    /// Spin any item preset into an interactable. `None` (or a preset with
    /// no name or description candidates) yields nothing.
    pub fn spin_interactable<'p>(
        &self,
        preset: impl Into<Option<&'p ItemPreset>>,
        rng: &mut impl Rng,
    ) -> Option<Interactable> {
        self.spin_item_at(preset.into()?, 0, rng)
    }

    /// Spin a container preset, filling it with generated items
    pub fn spin_container<'p>(
        &self,
        preset: impl Into<Option<&'p ItemPreset>>,
        rng: &mut impl Rng,
    ) -> Option<Interactable> {
        let preset = preset.into()?;
        if !preset.is_container() {
            log::debug!("'{}' is not a container preset", preset.label());
            return None;
        }
        self.spin_item_at(preset, 0, rng)
    }

    /// Spin a weapon preset
    pub fn spin_weapon<'p>(
        &self,
        preset: impl Into<Option<&'p ItemPreset>>,
        rng: &mut impl Rng,
    ) -> Option<Interactable> {
        let preset = preset.into()?;
        if !matches!(preset.kind, ItemKind::Weapon { .. }) {
            log::debug!("'{}' is not a weapon preset", preset.label());
            return None;
        }
        self.spin_item_at(preset, 0, rng)
    }

    pub(super) fn spin_item_at(&self, preset: &ItemPreset, depth: usize, rng: &mut impl Rng) -> Option<Interactable> {
        if !preset.is_valid() {
            log::debug!("Skipping invalid item preset '{}'", preset.label());
            return None;
        }

        if preset.is_container() && depth >= self.config.max_container_depth {
            log::debug!("'{}' would nest past depth {}; skipped", preset.label(), depth);
            return None;
        }

        let name = select_uniform(&preset.names, rng)?;
        let description = select_uniform(&preset.descriptions, rng)?;
        let abilities = draw_abilities(&preset.ability_options, rng);
        let item = Interactable::new(
            name.as_str(),
            description.as_str(),
            preset.size,
            preset.weight,
            preset.can_be_picked_up,
            abilities,
        );

        let item = match preset.kind {
            ItemKind::Plain => item,
            ItemKind::Weapon { pierce, pierce_range, damage, damage_range, range, range_range } => {
                item.into_weapon(WeaponStats {
                    pierce: resolve(pierce, pierce_range, rng),
                    damage: resolve(damage, damage_range, rng),
                    range: resolve(range, range_range, rng),
                })
            }
            ItemKind::Container { min_items, max_items, inventory_size } => {
                let count = roll_count(min_items, max_items, rng).min(inventory_size);
                let inventory = (0..count)
                    .filter_map(|_| self.generate_interactable_at(self.config.container_weight, depth + 1, rng))
                    .collect();
                item.into_container(inventory, inventory_size)
            }
        };

        Some(item)
    }
}

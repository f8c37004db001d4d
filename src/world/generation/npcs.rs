//! NPC spinning

use rand::Rng;

use super::range::resolve_between;
use super::selection::select_uniform;
use super::Generator;
use crate::data::{NpcPreset, NpcStatRanges};
use crate::entities::{Npc, NpcStats};

fn roll_stats(ranges: &NpcStatRanges, rng: &mut impl Rng) -> NpcStats {
    let mut roll = |(min, max): (i32, i32)| resolve_between(min, max, rng);
    NpcStats {
        armor_class: roll(ranges.armor_class),
        strength: roll(ranges.strength),
        dexterity: roll(ranges.dexterity),
        constitution: roll(ranges.constitution),
        intelligence: roll(ranges.intelligence),
        wisdom: roll(ranges.wisdom),
        charisma: roll(ranges.charisma),
        noise: roll(ranges.noise),
        shield: roll(ranges.shield),
    }
}

impl Generator<'_> {
    /// Spin an NPC preset into a concrete NPC standing at `(x, y)`.
    ///
    /// Inventory entries that fail to spin are dropped. `challenge_rating`
    /// does not affect the result yet.
    pub fn spin_npc<'p>(
        &self,
        x: usize,
        y: usize,
        preset: impl Into<Option<&'p NpcPreset>>,
        _challenge_rating: u32,
        rng: &mut impl Rng,
    ) -> Option<Npc> {
        let preset = preset.into()?;
        if !preset.is_valid() {
            log::debug!("Skipping invalid NPC preset '{}'", preset.label());
            return None;
        }

        let description = select_uniform(&preset.descriptions, rng)?;
        let stats = roll_stats(&preset.stats, rng);
        let name = select_uniform(&preset.names, rng)?;

        let mut npc = Npc::new(x, y, name.as_str(), description.as_str(), preset.alliance, stats);
        for item in &preset.inventory {
            if let Some(item) = self.spin_item_at(item, 0, rng) {
                npc.add_inventory(item);
            }
        }

        log::debug!("Spun {} '{}' at ({}, {})", npc.alliance.name(), npc.name, x, y);
        Some(npc)
    }

    /// Spin a random enemy from the enemy pool at `(x, y)`
    pub fn generate_enemy(&self, x: usize, y: usize, rng: &mut impl Rng) -> Option<Npc> {
        let preset = select_uniform(&self.library.enemies, rng)?;
        self.spin_npc(x, y, preset, self.config.challenge_rating, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::data::{ItemPreset, PresetLibrary};
    use crate::entities::NpcAlliance;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn goblin() -> NpcPreset {
        NpcPreset {
            names: vec!["Goblin".into(), "Hobgoblin".into()],
            descriptions: vec!["Small and mean.".into()],
            rarity: 1,
            alliance: NpcAlliance::Foe,
            stats: NpcStatRanges {
                armor_class: (12, 12),
                strength: (8, 12),
                dexterity: (12, 16),
                noise: (3, 1),
                ..NpcStatRanges::default()
            },
            inventory: vec![
                ItemPreset::plain("Knife", "Nicked and dull.", 1),
                ItemPreset { descriptions: Vec::new(), ..ItemPreset::plain("Ghost", "", 1) },
            ],
        }
    }

    #[test]
    fn test_none_and_invalid_presets() {
        let library = PresetLibrary::empty();
        let config = GeneratorConfig::default();
        let generator = Generator::new(&library, &config);
        let mut rng = StdRng::seed_from_u64(1);

        assert!(generator.spin_npc(0, 0, None::<&NpcPreset>, 0, &mut rng).is_none());

        let silent = NpcPreset { descriptions: Vec::new(), ..goblin() };
        assert!(generator.spin_npc(0, 0, &silent, 0, &mut rng).is_none());
    }

    #[test]
    fn test_stats_and_inventory() {
        let library = PresetLibrary::empty();
        let config = GeneratorConfig::default();
        let generator = Generator::new(&library, &config);
        let mut rng = StdRng::seed_from_u64(2);
        let preset = goblin();

        for _ in 0..100 {
            let npc = generator.spin_npc(3, 4, &preset, 5, &mut rng).expect("goblin spins");
            assert_eq!(npc.coords(), (3, 4));
            assert!(preset.names.contains(&npc.name));
            assert_eq!(npc.description, "Small and mean.");
            assert_eq!(npc.alliance, NpcAlliance::Foe);
            assert_eq!(npc.stats.armor_class, 12);
            assert!((8..12).contains(&npc.stats.strength));
            assert!((12..16).contains(&npc.stats.dexterity));
            assert_eq!(npc.stats.noise, 3);
            assert_eq!(npc.stats.shield, 0);
            // The invalid inventory entry is dropped
            assert_eq!(npc.inventory.len(), 1);
            assert_eq!(npc.inventory[0].name, "Knife");
        }
    }

    #[test]
    fn test_generate_enemy_from_pool() {
        let library = PresetLibrary::new(Vec::new(), Vec::new(), Vec::new(), vec![goblin()]);
        let config = GeneratorConfig::default();
        let generator = Generator::new(&library, &config);
        let mut rng = StdRng::seed_from_u64(3);

        let enemy = generator.generate_enemy(1, 2, &mut rng).expect("pool has a goblin");
        assert_eq!(enemy.coords(), (1, 2));

        let empty = PresetLibrary::empty();
        let generator = Generator::new(&empty, &config);
        assert!(generator.generate_enemy(1, 2, &mut rng).is_none());
    }
}

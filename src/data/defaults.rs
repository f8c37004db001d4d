//! Built-in Castle Summerfall content
//!
//! Hardcoded fallback presets used when no data files are available, and the
//! exporter that writes them out as editable RON files.

use std::fs;
use std::path::Path;

use super::loader::{PathManifest, PresetCategory};
use super::presets::{ItemKind, ItemPreset, NpcPreset, NpcStatRanges, PresetFile, RoomPreset};
use crate::entities::NpcAlliance;
use crate::error::{LoadError, LoadResult};
use crate::items::Ability;

/// File name of the manifest written by [`export_default_data`]
pub const MANIFEST_FILE: &str = "paths.ron";

fn weapon(name: &str, description: &str, rarity: u32, size: u32, damage: i32, damage_range: i32) -> ItemPreset {
    ItemPreset::plain(name, description, rarity)
        .with_size(size, damage.max(1) as u32)
        .with_kind(ItemKind::Weapon {
            pierce: 1,
            pierce_range: 0,
            damage,
            damage_range,
            range: 1,
            range_range: 0,
        })
}

/// Plain items and weapons
pub fn default_interactables() -> Vec<ItemPreset> {
    vec![
        // === Weapons ===
        weapon("Knife", "It's kinda sharp.", 6, 1, 1, 5),
        weapon("Short Sword", "Like a knife, but long.", 4, 2, 2, 6),
        weapon("Sword", "It might hurt someone.", 3, 2, 2, 7),
        weapon("Greatsword", "This is a big sword.", 1, 3, 3, 8),
        weapon("Rapier", "Thin and deadly.", 2, 1, 1, 5).with_kind(ItemKind::Weapon {
            pierce: 2,
            pierce_range: 2,
            damage: 1,
            damage_range: 5,
            range: 1,
            range_range: 0,
        }),
        ItemPreset {
            names: vec!["Shortbow".into(), "Hunting Bow".into()],
            descriptions: vec!["The string is fraying.".into(), "Carved from yew.".into()],
            size: 2,
            weight: 2,
            can_be_picked_up: true,
            rarity: 2,
            ability_options: Vec::new(),
            kind: ItemKind::Weapon {
                pierce: 1,
                pierce_range: 2,
                damage: 1,
                damage_range: 6,
                range: 6,
                range_range: 4,
            },
        },
        // === Trinkets ===
        ItemPreset {
            names: vec!["Candle".into(), "Tallow Candle".into()],
            descriptions: vec!["It's half melted.".into(), "The wick is still warm.".into()],
            rarity: 8,
            ..ItemPreset::plain("", "", 0)
        },
        ItemPreset::plain("Rusty Key", "It doesn't fit anything you've seen yet.", 3),
        ItemPreset::plain("Bread Crust", "Stale, but edible.", 6),
        ItemPreset::plain("Silver Ring", "An inscription reads 'for M.'", 2).with_abilities(
            vec![
                Ability::new("Glimmer", "Sheds a faint light."),
                Ability::new("Warding", "Cold to the touch of the dead."),
                Ability::new("Luck", "Things tend to go your way."),
            ],
            1,
        ),
        ItemPreset::plain("Torn Map", "Half of the castle's east wing.", 1),
    ]
}

/// Chests and other things that hold items
pub fn default_containers() -> Vec<ItemPreset> {
    vec![
        ItemPreset::plain("Chest", "It's a box.", 4)
            .with_size(5, 20)
            .fixed()
            .with_kind(ItemKind::Container { min_items: 0, max_items: 3, inventory_size: 10 }),
        ItemPreset {
            names: vec!["Pouch".into(), "Coin Purse".into()],
            descriptions: vec!["Leather, stitched by hand.".into()],
            ..ItemPreset::plain("", "", 3)
        }
        .with_kind(ItemKind::Container { min_items: 1, max_items: 2, inventory_size: 3 }),
        ItemPreset::plain("Barrel", "Smells of old ale.", 2)
            .with_size(4, 30)
            .fixed()
            .with_kind(ItemKind::Container { min_items: 0, max_items: 4, inventory_size: 6 }),
    ]
}

/// Regular enemies
pub fn default_enemies() -> Vec<NpcPreset> {
    vec![
        NpcPreset {
            names: vec!["Goblin".into(), "Goblin Scout".into()],
            descriptions: vec!["Small, green, and very interested in your boots.".into()],
            rarity: 5,
            alliance: NpcAlliance::Foe,
            stats: NpcStatRanges {
                armor_class: (12, 14),
                strength: (7, 10),
                dexterity: (12, 16),
                constitution: (9, 11),
                intelligence: (8, 11),
                wisdom: (7, 9),
                charisma: (6, 9),
                noise: (2, 5),
                shield: (0, 0),
            },
            inventory: vec![weapon("Knife", "It's kinda sharp.", 1, 1, 1, 5)],
        },
        NpcPreset {
            names: vec!["Skeleton".into()],
            descriptions: vec!["Bones held together by spite.".into()],
            rarity: 4,
            alliance: NpcAlliance::Foe,
            stats: NpcStatRanges {
                armor_class: (13, 13),
                strength: (10, 12),
                dexterity: (12, 14),
                constitution: (14, 16),
                intelligence: (6, 6),
                wisdom: (8, 8),
                charisma: (5, 5),
                noise: (4, 7),
                shield: (0, 2),
            },
            inventory: vec![weapon("Short Sword", "Like a knife, but long.", 1, 2, 2, 6)],
        },
        NpcPreset {
            names: vec!["Castle Rat".into()],
            descriptions: vec!["Fat from the castle kitchens.".into()],
            rarity: 6,
            alliance: NpcAlliance::Foe,
            stats: NpcStatRanges {
                armor_class: (10, 10),
                strength: (2, 3),
                dexterity: (11, 15),
                constitution: (9, 10),
                intelligence: (2, 2),
                wisdom: (10, 12),
                charisma: (4, 4),
                noise: (1, 2),
                shield: (0, 0),
            },
            inventory: Vec::new(),
        },
    ]
}

fn boss_warden() -> NpcPreset {
    NpcPreset {
        names: vec!["The Warden".into(), "Warden of Summerfall".into()],
        descriptions: vec!["Keys jangle from a belt of iron rings.".into()],
        rarity: 1,
        alliance: NpcAlliance::Foe,
        stats: NpcStatRanges {
            armor_class: (16, 18),
            strength: (16, 19),
            dexterity: (10, 12),
            constitution: (16, 18),
            intelligence: (10, 12),
            wisdom: (12, 14),
            charisma: (12, 15),
            noise: (6, 9),
            shield: (2, 4),
        },
        inventory: vec![
            weapon("Greatsword", "This is a big sword.", 1, 3, 3, 8),
            ItemPreset::plain("Warden's Keyring", "Dozens of keys, none labelled.", 1),
        ],
    }
}

fn boss_lich() -> NpcPreset {
    NpcPreset {
        names: vec!["Lady Summerfall".into()],
        descriptions: vec!["The castle's last lady never quite left.".into()],
        rarity: 1,
        alliance: NpcAlliance::Foe,
        stats: NpcStatRanges {
            armor_class: (14, 15),
            strength: (8, 10),
            dexterity: (12, 14),
            constitution: (12, 14),
            intelligence: (18, 20),
            wisdom: (16, 18),
            charisma: (18, 20),
            noise: (0, 1),
            shield: (4, 6),
        },
        inventory: vec![ItemPreset::plain("Silver Ring", "An inscription reads 'for M.'", 1)],
    }
}

/// Room presets, ordinary and boss
pub fn default_rooms() -> Vec<RoomPreset> {
    vec![
        RoomPreset {
            name: "hallway".into(),
            descriptions: vec![
                "A long hallway. Portraits watch you pass.".into(),
                "A draughty corridor lined with suits of armour.".into(),
            ],
            interactables: Vec::new(),
            description_interactables: vec![ItemPreset::plain("Portrait", "Someone's stern grandmother.", 1).fixed()],
            boss: None,
            rarity: 4,
        },
        RoomPreset {
            name: "kitchen".into(),
            descriptions: vec!["Copper pots hang over a cold hearth.".into()],
            interactables: vec![ItemPreset::plain("Table", "Scarred by a thousand knives.", 1)
                .with_size(6, 40)
                .fixed()],
            description_interactables: vec![ItemPreset::plain("Copper Pot", "Dented.", 1)],
            boss: None,
            rarity: 3,
        },
        RoomPreset {
            name: "storeroom".into(),
            descriptions: vec![
                "Shelves of forgotten supplies.".into(),
                "Crates stacked to the ceiling.".into(),
            ],
            interactables: vec![ItemPreset::plain("Barrel", "Smells of old ale.", 1)
                .with_size(4, 30)
                .fixed()
                .with_kind(ItemKind::Container { min_items: 0, max_items: 2, inventory_size: 6 })],
            description_interactables: Vec::new(),
            boss: None,
            rarity: 2,
        },
        RoomPreset {
            name: "chapel".into(),
            descriptions: vec!["Candlelight flickers over empty pews.".into()],
            interactables: Vec::new(),
            description_interactables: vec![ItemPreset::plain("Candle", "It's half melted.", 1)],
            boss: None,
            rarity: 1,
        },
        RoomPreset {
            name: "warden_hall".into(),
            descriptions: vec!["A vaulted hall. Something heavy paces in the dark.".into()],
            interactables: vec![ItemPreset::plain("Iron Throne", "Cold and uncomfortable.", 1)
                .with_size(8, 200)
                .fixed()],
            description_interactables: Vec::new(),
            boss: Some(boss_warden()),
            rarity: 1,
        },
        RoomPreset {
            name: "lady_chambers".into(),
            descriptions: vec!["Dust sheets cover everything but the mirror.".into()],
            interactables: Vec::new(),
            description_interactables: vec![ItemPreset::plain("Mirror", "Your reflection is late.", 1).fixed()],
            boss: Some(boss_lich()),
            rarity: 1,
        },
    ]
}

fn write_ron<T: serde::Serialize>(path: &Path, what: &'static str, value: &T) -> LoadResult<()> {
    let ron = ron::ser::to_string_pretty(value, ron::ser::PrettyConfig::default())
        .map_err(|source| LoadError::Serialize { what, source })?;
    fs::write(path, ron).map_err(|source| LoadError::Write { path: path.to_path_buf(), source })
}

/// Export all built-in presets to `base_path` with a manifest pointing at them
pub fn export_default_data(base_path: &Path) -> LoadResult<()> {
    let presets_dir = base_path.join("presets");
    fs::create_dir_all(&presets_dir)
        .map_err(|source| LoadError::CreateDir { path: presets_dir.clone(), source })?;

    write_ron(
        &presets_dir.join("interactables.ron"),
        "interactables",
        &PresetFile { presets: default_interactables() },
    )?;
    write_ron(
        &presets_dir.join("containers.ron"),
        "containers",
        &PresetFile { presets: default_containers() },
    )?;
    write_ron(&presets_dir.join("rooms.ron"), "rooms", &PresetFile { presets: default_rooms() })?;
    write_ron(&presets_dir.join("enemies.ron"), "enemies", &PresetFile { presets: default_enemies() })?;

    let mut manifest = PathManifest::default();
    for (category, file) in [
        (PresetCategory::Interactables, "presets/interactables.ron"),
        (PresetCategory::Containers, "presets/containers.ron"),
        (PresetCategory::RoomPresets, "presets/rooms.ron"),
        (PresetCategory::EnemyPresets, "presets/enemies.ron"),
    ] {
        manifest.set_sources(category, vec![file.to_string()]);
    }
    write_ron(&base_path.join(MANIFEST_FILE), "manifest", &manifest)?;

    log::info!("Exported default presets to {}", base_path.display());
    Ok(())
}

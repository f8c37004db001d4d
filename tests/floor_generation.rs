//! End-to-end floor generation over hand-built and exported libraries.

use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;

use summerfall::data::{export_default_data, ItemKind, ItemPreset, NpcPreset, RoomPreset, MANIFEST_FILE};
use summerfall::entities::NpcAlliance;
use summerfall::{Generator, GeneratorConfig, PresetLibrary};

fn boss() -> NpcPreset {
    NpcPreset {
        names: vec!["Gatekeeper".into()],
        descriptions: vec!["Blocks the stairs.".into()],
        rarity: 1,
        alliance: NpcAlliance::Foe,
        stats: Default::default(),
        inventory: vec![ItemPreset::plain("Gate Key", "Heavy.", 1)],
    }
}

fn library() -> PresetLibrary {
    let room = |name: &str, boss: Option<NpcPreset>| RoomPreset {
        name: name.into(),
        descriptions: vec![format!("The {}.", name)],
        interactables: Vec::new(),
        description_interactables: Vec::new(),
        boss,
        rarity: 1,
    };
    PresetLibrary::new(
        vec![ItemPreset::plain("Pebble", "Round.", 1)],
        vec![ItemPreset::plain("Sack", "Lumpy.", 1)
            .with_kind(ItemKind::Container { min_items: 1, max_items: 3, inventory_size: 4 })],
        vec![room("cellar", None), room("gate", Some(boss()))],
        vec![NpcPreset { names: vec!["Bat".into()], descriptions: vec!["Squeaks.".into()], ..boss() }],
    )
}

#[test]
fn test_every_size_has_the_right_shape() {
    let library = library();
    let config = GeneratorConfig::default();
    let generator = Generator::new(&library, &config);
    let mut rng = StdRng::seed_from_u64(1);

    for width in 1..=6 {
        for height in 1..=6 {
            let floor = generator.generate_floor(width, height, &mut rng);
            assert_eq!((floor.width(), floor.height()), (width, height));

            let boss_rooms = floor.rooms().filter(|(_, room)| room.is_boss).count();
            assert_eq!(boss_rooms, 1);

            for ((x, y), room) in floor.rooms() {
                assert_eq!(room.has_south_door(), y > 0);
                assert_eq!(room.has_east_door(), x < width - 1);
                if room.is_boss {
                    assert!(room.items.is_empty(), "boss room was populated");
                    assert_eq!(room.description, "The gate.");
                } else {
                    // Default config rolls one or two items, some of which may be empty draws
                    assert!(room.items.len() < 3);
                    assert_eq!(room.description, "The cellar.");
                }
            }

            let boss = floor.boss().expect("boss placed");
            assert_eq!(boss.name, "Gatekeeper");
            assert_eq!(boss.coords(), floor.boss_cell());
            assert_eq!(boss.inventory.len(), 1);

            let factor = width * height / 4;
            let enemies = floor.npcs().len() - 1;
            assert!(enemies <= (2 * factor).saturating_sub(1).max(factor));
            assert!(floor.npcs().iter().filter(|npc| npc.name == "Bat").all(|npc| npc.coords() != floor.boss_cell()));
        }
    }
}

#[test]
fn test_zero_source_two_by_two() {
    let library = library();
    let config = GeneratorConfig::default();
    let generator = Generator::new(&library, &config);
    let mut zero = StepRng::new(0, 0);

    let floor = generator.generate_floor(2, 2, &mut zero);
    assert_eq!(floor.boss_cell(), (0, 0));

    let boss_room = floor.room(0, 0).expect("in bounds");
    assert!(boss_room.is_boss && boss_room.has_stairs);
    assert!(!boss_room.has_south_door() && boss_room.has_east_door());

    let far = floor.room(1, 1).expect("in bounds");
    assert!(far.has_south_door() && !far.has_east_door());
    assert!(!far.is_boss);

    // A zero roll always picks the container pool, so every ordinary room
    // holds exactly one sack
    assert_eq!(far.items.len(), 1);
    assert!(far.items[0].is_container());

    assert_eq!(floor.npcs().len(), 1);
    assert_eq!(floor.boss().map(|b| b.name.as_str()), Some("Gatekeeper"));
}

#[test]
fn test_exported_defaults_drive_generation() {
    let dir = tempfile::tempdir().expect("tempdir");
    export_default_data(dir.path()).expect("export");

    let config = GeneratorConfig::default().with_manifest(dir.path().join(MANIFEST_FILE));
    let library = PresetLibrary::load_or_default(&config.manifest_path);
    assert_eq!(library.manifest_path(), Some(config.manifest_path.as_path()));
    assert!(library.validate().is_empty());

    let generator = Generator::new(&library, &config);
    let floor = generator.generate_floor(3, 3, &mut StdRng::seed_from_u64(5));
    assert!(floor.boss().is_some());
}

#[test]
fn test_missing_sources_mean_fewer_candidates() {
    let dir = tempfile::tempdir().expect("tempdir");
    export_default_data(dir.path()).expect("export");
    std::fs::remove_file(dir.path().join("presets/enemies.ron")).expect("remove enemies");

    let library = PresetLibrary::load(&dir.path().join(MANIFEST_FILE)).expect("manifest still loads");
    assert!(library.enemies.is_empty());

    let config = GeneratorConfig::default();
    let generator = Generator::new(&library, &config);
    let floor = generator.generate_floor(4, 4, &mut StdRng::seed_from_u64(6));
    // Only the boss remains
    assert_eq!(floor.npcs().len(), 1);
}

//! The RON content shipped in assets/ must load and validate cleanly.

use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;

use summerfall::data::{load_path_manifest, PresetCategory};
use summerfall::{Generator, GeneratorConfig, PresetLibrary};

fn manifest_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(summerfall::config::DEFAULT_MANIFEST_PATH)
}

#[test]
fn test_manifest_lists_every_category() {
    let manifest = load_path_manifest(&manifest_path()).expect("manifest parses");
    for category in PresetCategory::ALL {
        let sources = manifest.sources(category);
        assert!(!sources.is_empty(), "no sources for {}", category.key());
        for source in sources {
            assert!(source.exists(), "{} is missing", source.display());
        }
    }
}

#[test]
fn test_shipped_presets_load_without_issues() {
    let library = PresetLibrary::load(&manifest_path()).expect("library loads");

    assert!(!library.interactables.is_empty());
    assert!(!library.containers.is_empty());
    assert!(!library.enemies.is_empty());
    assert!(!library.boss_rooms().is_empty());
    assert!(!library.ordinary_rooms().is_empty());
    assert!(library.containers.iter().all(|c| c.is_container()));

    let issues = library.validate();
    assert!(issues.is_empty(), "shipped content has issues: {:?}", issues);
}

#[test]
fn test_shipped_presets_generate_floors() {
    let library = PresetLibrary::load(&manifest_path()).expect("library loads");
    let config = GeneratorConfig::default();
    let generator = Generator::new(&library, &config);
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..10 {
        let floor = generator.generate_floor(6, 5, &mut rng);
        let boss = floor.boss().expect("shipped boss rooms all have bosses");
        assert!(["The Warden", "Warden of Summerfall", "Lady Summerfall"].contains(&boss.name.as_str()));
    }
}

#[test]
fn test_reload_picks_up_the_same_content() {
    let mut library = PresetLibrary::load(&manifest_path()).expect("library loads");
    let before = library.clone();
    library.reload().expect("reload succeeds");
    assert_eq!(library, before);
}

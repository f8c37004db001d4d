//! RON data loader
//!
//! Resolves the path manifest to preset files and loads them into a
//! [`PresetLibrary`]. Sources that can't be read or parsed are skipped with a
//! warning so that generation simply sees fewer candidates.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::defaults::{default_containers, default_enemies, default_interactables, default_rooms};
use super::presets::{ItemPreset, NpcPreset, PresetFile, RoomPreset};
use crate::error::{LoadError, LoadResult};

/// Categories the manifest can list sources for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresetCategory {
    Containers,
    Interactables,
    RoomPresets,
    EnemyPresets,
}

impl PresetCategory {
    pub const ALL: [PresetCategory; 4] = [
        PresetCategory::Containers,
        PresetCategory::Interactables,
        PresetCategory::RoomPresets,
        PresetCategory::EnemyPresets,
    ];

    /// Key used in the manifest
    pub fn key(&self) -> &'static str {
        match self {
            PresetCategory::Containers => "containers",
            PresetCategory::Interactables => "interactables",
            PresetCategory::RoomPresets => "room-presets",
            PresetCategory::EnemyPresets => "enemy-presets",
        }
    }
}

/// Root manifest: category key -> source locations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathManifest {
    pub categories: BTreeMap<String, Vec<String>>,
    /// Directory relative sources are resolved against
    #[serde(skip)]
    pub base_dir: PathBuf,
}

impl PathManifest {
    /// Raw source strings for a category, unquoted
    pub fn raw_sources(&self, category: PresetCategory) -> Vec<String> {
        self.categories
            .get(category.key())
            .map(|sources| sources.iter().map(|s| unquote(s).to_string()).collect())
            .unwrap_or_default()
    }

    /// Source paths for a category, resolved against the manifest directory
    pub fn sources(&self, category: PresetCategory) -> Vec<PathBuf> {
        self.raw_sources(category)
            .into_iter()
            .map(|source| {
                let path = PathBuf::from(source);
                if path.is_absolute() {
                    path
                } else {
                    self.base_dir.join(path)
                }
            })
            .collect()
    }

    pub fn set_sources(&mut self, category: PresetCategory, sources: Vec<String>) {
        self.categories.insert(category.key().to_string(), sources);
    }
}

/// Strip surrounding whitespace and quote characters
fn unquote(source: &str) -> &str {
    source.trim().trim_matches('"').trim()
}

fn read_source(path: &Path) -> LoadResult<String> {
    fs::read_to_string(path).map_err(|source| LoadError::Read { path: path.to_path_buf(), source })
}

/// Load the root manifest
pub fn load_path_manifest(path: &Path) -> LoadResult<PathManifest> {
    let content = read_source(path)?;
    let mut manifest: PathManifest = ron::from_str(&content)
        .map_err(|source| LoadError::Parse { path: path.to_path_buf(), source })?;
    manifest.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
    Ok(manifest)
}

/// Load every preset in one source file
pub fn load_presets<T: DeserializeOwned>(path: &Path) -> LoadResult<Vec<T>> {
    let content = read_source(path)?;
    let file: PresetFile<T> = ron::from_str(&content)
        .map_err(|source| LoadError::Parse { path: path.to_path_buf(), source })?;
    Ok(file.presets)
}

/// Load all sources of a category. Failing sources are logged and skipped.
fn load_category<T: DeserializeOwned>(manifest: &PathManifest, category: PresetCategory) -> Vec<T> {
    let mut presets = Vec::new();
    for path in manifest.sources(category) {
        match load_presets::<T>(&path) {
            Ok(mut loaded) => {
                log::debug!("Loaded {} {} presets from {}", loaded.len(), category.key(), path.display());
                presets.append(&mut loaded);
            }
            Err(e) => log::warn!("Skipping {} source: {}", category.key(), e),
        }
    }
    presets
}

/// In-memory cache of every preset pool generation draws from.
///
/// Loaded once from a manifest; nothing is re-read until [`reload`] is
/// called explicitly.
///
/// [`reload`]: PresetLibrary::reload
#[derive(Debug, Clone, PartialEq)]
pub struct PresetLibrary {
    /// Plain items and weapons
    pub interactables: Vec<ItemPreset>,
    pub containers: Vec<ItemPreset>,
    pub rooms: Vec<RoomPreset>,
    pub enemies: Vec<NpcPreset>,
    manifest_path: Option<PathBuf>,
}

impl PresetLibrary {
    /// A library with no candidates at all
    pub fn empty() -> Self {
        Self {
            interactables: Vec::new(),
            containers: Vec::new(),
            rooms: Vec::new(),
            enemies: Vec::new(),
            manifest_path: None,
        }
    }

    pub fn new(
        interactables: Vec<ItemPreset>,
        containers: Vec<ItemPreset>,
        rooms: Vec<RoomPreset>,
        enemies: Vec<NpcPreset>,
    ) -> Self {
        Self { interactables, containers, rooms, enemies, manifest_path: None }
    }

    /// Load every category listed in the manifest at `path`
    pub fn load(path: &Path) -> LoadResult<Self> {
        let manifest = load_path_manifest(path)?;
        let mut library = Self::from_manifest(&manifest);
        library.manifest_path = Some(path.to_path_buf());
        Ok(library)
    }

    /// Load from an already parsed manifest
    pub fn from_manifest(manifest: &PathManifest) -> Self {
        let library = Self {
            interactables: load_category(manifest, PresetCategory::Interactables),
            containers: load_category(manifest, PresetCategory::Containers),
            rooms: load_category(manifest, PresetCategory::RoomPresets),
            enemies: load_category(manifest, PresetCategory::EnemyPresets),
            manifest_path: None,
        };
        log::info!(
            "Preset library: {} interactables, {} containers, {} rooms, {} enemies",
            library.interactables.len(),
            library.containers.len(),
            library.rooms.len(),
            library.enemies.len()
        );
        library
    }

    /// Load from files, falling back to the built-in content if the manifest
    /// itself is unusable
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            log::warn!("Failed to load preset manifest: {}. Using built-in presets.", e);
            Self::default()
        })
    }

    /// Re-read every source from the manifest this library was loaded from.
    /// A library without a manifest (built-in or hand-assembled) is left as is.
    pub fn reload(&mut self) -> LoadResult<()> {
        let Some(path) = self.manifest_path.clone() else {
            return Ok(());
        };
        *self = Self::load(&path)?;
        Ok(())
    }

    pub fn manifest_path(&self) -> Option<&Path> {
        self.manifest_path.as_deref()
    }

    /// Room presets that can host a boss
    pub fn boss_rooms(&self) -> Vec<&RoomPreset> {
        self.rooms.iter().filter(|r| r.is_boss_room()).collect()
    }

    /// Room presets for ordinary cells
    pub fn ordinary_rooms(&self) -> Vec<&RoomPreset> {
        self.rooms.iter().filter(|r| !r.is_boss_room()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.interactables.is_empty()
            && self.containers.is_empty()
            && self.rooms.is_empty()
            && self.enemies.is_empty()
    }
}

impl Default for PresetLibrary {
    fn default() -> Self {
        Self::new(default_interactables(), default_containers(), default_rooms(), default_enemies())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).expect("write fixture");
        path
    }

    #[test]
    fn test_unquote() {
        assert_eq!(unquote("\"presets/rooms.ron\""), "presets/rooms.ron");
        assert_eq!(unquote("  plain.ron "), "plain.ron");
    }

    #[test]
    fn test_manifest_resolves_relative_sources() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write(
            dir.path(),
            "paths.ron",
            r#"{ "room-presets": ["\"rooms.ron\""], "containers": ["/abs/chests.ron"] }"#,
        );

        let manifest = load_path_manifest(&path).expect("manifest loads");
        assert_eq!(manifest.sources(PresetCategory::RoomPresets), vec![dir.path().join("rooms.ron")]);
        assert_eq!(manifest.sources(PresetCategory::Containers), vec![PathBuf::from("/abs/chests.ron")]);
        assert!(manifest.sources(PresetCategory::EnemyPresets).is_empty());
    }

    #[test]
    fn test_missing_manifest_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = PresetLibrary::load(&dir.path().join("nope.ron")).unwrap_err();
        assert!(err.is_missing_source());
    }

    #[test]
    fn test_missing_sources_yield_no_candidates() {
        let dir = tempfile::tempdir().expect("tempdir");
        write(
            dir.path(),
            "items.ron",
            r#"(presets: [(names: ["Rock"], descriptions: ["A rock."], rarity: 1)])"#,
        );
        write(dir.path(), "broken.ron", "(presets: [ this is not ron");
        let path = write(
            dir.path(),
            "paths.ron",
            r#"{
                "interactables": ["items.ron", "broken.ron"],
                "enemy-presets": ["missing.ron"],
            }"#,
        );

        let library = PresetLibrary::load(&path).expect("manifest loads");
        assert_eq!(library.interactables.len(), 1);
        assert!(library.enemies.is_empty());
        assert!(library.rooms.is_empty());
        assert_eq!(library.manifest_path(), Some(path.as_path()));
    }

    #[test]
    fn test_reload_picks_up_changes() {
        let dir = tempfile::tempdir().expect("tempdir");
        let items = r#"(presets: [(names: ["Rock"], descriptions: ["A rock."], rarity: 1)])"#;
        write(dir.path(), "items.ron", items);
        let path = write(dir.path(), "paths.ron", r#"{ "interactables": ["items.ron"] }"#);

        let mut library = PresetLibrary::load(&path).expect("manifest loads");
        assert_eq!(library.interactables.len(), 1);

        write(
            dir.path(),
            "items.ron",
            r#"(presets: [
                (names: ["Rock"], descriptions: ["A rock."], rarity: 1),
                (names: ["Stick"], descriptions: ["A stick."], rarity: 1),
            ])"#,
        );
        assert_eq!(library.interactables.len(), 1);
        library.reload().expect("reload");
        assert_eq!(library.interactables.len(), 2);
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let library = PresetLibrary::load_or_default(Path::new("/definitely/not/here.ron"));
        assert_eq!(library, PresetLibrary::default());
        assert!(!library.is_empty());
    }

    #[test]
    fn test_room_pools_partition() {
        let library = PresetLibrary::default();
        let total = library.rooms.len();
        assert_eq!(library.boss_rooms().len() + library.ordinary_rooms().len(), total);
        assert!(!library.boss_rooms().is_empty());
        assert!(!library.ordinary_rooms().is_empty());
    }
}

//! Data loading and external game content
//!
//! This module handles loading presets from external RON files,
//! allowing for data-driven content and easy modding.

pub mod defaults;
pub mod loader;
pub mod presets;
pub mod validation;

pub use defaults::{export_default_data, MANIFEST_FILE};
pub use loader::{load_path_manifest, load_presets, PathManifest, PresetCategory, PresetLibrary};
pub use presets::{
    AbilityOption, ItemKind, ItemPreset, NpcPreset, NpcStatRanges, PresetFile, PresetRecord, RoomPreset, Weighted,
};
pub use validation::PresetIssue;

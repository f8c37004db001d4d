//! Generator tuning
//!
//! Knobs for the generation engine, loadable from a RON file with fallback
//! to defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LoadError, LoadResult};

/// Default location of the preset manifest
pub const DEFAULT_MANIFEST_PATH: &str = "assets/data/paths.ron";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Root manifest listing preset sources
    pub manifest_path: PathBuf,
    /// Chance that a generated interactable is drawn from the container pool
    pub container_weight: f64,
    /// `[min, max)` generated items in an ordinary room
    pub room_items: (usize, usize),
    /// `[min, max)` generated items in the boss room
    pub boss_room_items: (usize, usize),
    /// How many containers deep nesting may go. A container that would sit
    /// inside this many others is not generated.
    pub max_container_depth: usize,
    /// Passed through to NPC spinning
    pub challenge_rating: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            manifest_path: PathBuf::from(DEFAULT_MANIFEST_PATH),
            container_weight: 0.2,
            room_items: (1, 3),
            boss_room_items: (0, 0),
            max_container_depth: 4,
            challenge_rating: 0,
        }
    }
}

impl GeneratorConfig {
    pub fn load(path: &Path) -> LoadResult<Self> {
        let content =
            fs::read_to_string(path).map_err(|source| LoadError::Read { path: path.to_path_buf(), source })?;
        ron::from_str(&content).map_err(|source| LoadError::Parse { path: path.to_path_buf(), source })
    }

    /// Load from `path`, falling back to defaults on any failure
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to load generator config: {}. Using defaults.", e);
                Self::default()
            }
        }
    }

    pub fn with_manifest(mut self, path: impl Into<PathBuf>) -> Self {
        self.manifest_path = path.into();
        self
    }

    pub fn with_container_weight(mut self, weight: f64) -> Self {
        self.container_weight = weight;
        self
    }

    pub fn with_max_container_depth(mut self, depth: usize) -> Self {
        self.max_container_depth = depth;
        self
    }
}

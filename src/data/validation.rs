//! Sanity checks over a loaded preset library.
//!
//! Nothing here blocks generation; invalid presets just spin to nothing. The
//! report exists so content authors find out why a chest is always empty.

use std::fmt;

use super::loader::PresetLibrary;
use super::presets::{ItemKind, ItemPreset, NpcPreset};

/// One problem found in the library
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetIssue {
    /// Which pool the preset lives in
    pub pool: &'static str,
    /// Name of the offending preset
    pub preset: String,
    pub problem: String,
}

impl fmt::Display for PresetIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}': {}", self.pool, self.preset, self.problem)
    }
}

fn issue(pool: &'static str, preset: &str, problem: impl Into<String>) -> PresetIssue {
    PresetIssue { pool, preset: preset.to_string(), problem: problem.into() }
}

fn check_item(pool: &'static str, preset: &ItemPreset, issues: &mut Vec<PresetIssue>) {
    let label = preset.label();
    if preset.names.is_empty() {
        issues.push(issue(pool, label, "no name candidates"));
    }
    if preset.descriptions.is_empty() {
        issues.push(issue(pool, label, "no description candidates"));
    }
    for option in &preset.ability_options {
        if option.number > option.options.len() {
            issues.push(issue(
                pool,
                label,
                format!("draws {} abilities from a pool of {}", option.number, option.options.len()),
            ));
        }
    }
    if let ItemKind::Container { min_items, max_items, inventory_size } = preset.kind {
        if max_items < min_items {
            issues.push(issue(pool, label, format!("max_items {} below min_items {}", max_items, min_items)));
        }
        if inventory_size < min_items {
            issues.push(issue(
                pool,
                label,
                format!("inventory_size {} below min_items {}", inventory_size, min_items),
            ));
        }
    }
}

fn check_npc(pool: &'static str, preset: &NpcPreset, issues: &mut Vec<PresetIssue>) {
    let label = preset.label();
    if preset.names.is_empty() {
        issues.push(issue(pool, label, "no name candidates"));
    }
    if preset.descriptions.is_empty() {
        issues.push(issue(pool, label, "no description candidates"));
    }
    for item in &preset.inventory {
        check_item(pool, item, issues);
    }
}

impl PresetLibrary {
    /// Collect every issue in the library. Empty when all presets are sound.
    pub fn validate(&self) -> Vec<PresetIssue> {
        let mut issues = Vec::new();

        for preset in &self.interactables {
            check_item("interactables", preset, &mut issues);
            if preset.is_container() {
                issues.push(issue("interactables", preset.label(), "container in the plain item pool"));
            }
        }
        for preset in &self.containers {
            check_item("containers", preset, &mut issues);
            if !preset.is_container() {
                issues.push(issue("containers", preset.label(), "not a container"));
            }
        }
        for preset in &self.enemies {
            check_npc("enemy-presets", preset, &mut issues);
        }
        for room in &self.rooms {
            if room.descriptions.is_empty() {
                issues.push(issue("room-presets", &room.name, "no description candidates"));
            }
            for item in room.interactables.iter().chain(&room.description_interactables) {
                check_item("room-presets", item, &mut issues);
            }
            if let Some(boss) = &room.boss {
                check_npc("room-presets", boss, &mut issues);
            }
        }

        if self.boss_rooms().is_empty() {
            issues.push(issue("room-presets", "*", "no boss room presets"));
        }
        if self.ordinary_rooms().is_empty() {
            issues.push(issue("room-presets", "*", "no ordinary room presets"));
        }

        issues
    }
}

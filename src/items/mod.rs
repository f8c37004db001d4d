//! Item system

pub mod item;

pub use item::{Ability, Interactable, InteractableKind, WeaponStats};

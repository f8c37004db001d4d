//! Summerfall - content generation for Castle Summerfall
//!
//! Turns RON preset files into floors of rooms, loot, enemies and a boss.

pub mod config;
pub mod data;
pub mod entities;
pub mod error;
pub mod items;
pub mod world;

// Re-export commonly used types
pub use config::GeneratorConfig;
pub use data::PresetLibrary;
pub use error::{LoadError, LoadResult};
pub use world::{Floor, Generator, Room};

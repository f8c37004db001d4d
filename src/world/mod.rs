//! World module
//!
//! Contains the floor and room data structures, and procedural generation.

pub mod floor;
pub mod generation;
pub mod room;

pub use floor::Floor;
pub use generation::{GeneratedRoom, Generator};
pub use room::{Door, Room};

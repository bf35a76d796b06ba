//! Rooms, doors, items, and the id-indexed campaign arena.
#![forbid(unsafe_code)]

pub mod campaign;
pub mod item;
pub mod planet;
pub mod room;

pub use campaign::{Campaign, ModelError};
pub use item::{Item, ItemConfig, ItemKind};
pub use planet::{Axis, Direction, Planet, ZxColour};
pub use room::{Door, Doors, FloorKind, Room, RoomId, RoomSize, Walls};

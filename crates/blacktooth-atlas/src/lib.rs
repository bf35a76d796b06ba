//! Sprite-sheet addressing: typed texture ids, the frame table, and animations.
#![forbid(unsafe_code)]

pub mod atlas;
pub mod sheet;
pub mod texture_id;

pub use atlas::{AtlasError, SourceRect, TextureAtlas};
pub use texture_id::{ActorFamily, AnimationId, DoorFamily, DoorPart, ItemTexture, TextureId};

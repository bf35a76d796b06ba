//! Drawable node tree: sprites, groups, masks, palette filters, and click-through
//! portals between rooms.
#![forbid(unsafe_code)]

pub mod draw;
pub mod node;
pub mod place;
pub mod portal;

pub use draw::DrawEntry;
pub use node::{Anchor, Animation, Filter, Mask, Node, NodeKind, Rgb, Sprite};
pub use place::{Look, SpriteOptions, place_sprite};
pub use portal::{Navigate, Portal, register_portal};

//! Room composition: floor, walls with doors, and items, assembled into one node
//! tree with portals wired to the caller's navigation callback.
#![forbid(unsafe_code)]

pub mod door;
pub mod error;
pub mod floor;
pub mod items;
pub mod options;
pub mod room;
pub mod walls;

pub use error::RenderError;
pub use floor::{FloorExtent, floor_tile_cells, render_floor};
pub use items::{appearance, render_items};
pub use options::{EdgePalette, HintColours, RenderOptions};
pub use room::render_room;
pub use walls::render_walls;

use blacktooth_atlas::sheet::door_arch_pivot;
use blacktooth_atlas::{AtlasError, DoorFamily, DoorPart, TextureAtlas, TextureId};
use blacktooth_geom::{Xy, Xyz, draw_order};
use blacktooth_model::{Axis, Direction, Door, Room};
use blacktooth_scene::{Node, SpriteOptions, place_sprite};

use super::error::RenderError;

/// Block position `along` the wall's axis, `out` blocks past the wall line.
fn wall_point(room: &Room, side: Direction, along: f32, out: f32) -> Xy {
    match side {
        Direction::Left => Xy::new(room.size.x as f32 + out, along),
        _ => Xy::new(along, room.size.y as f32 + out),
    }
}

/// Doorway on a far wall. A door at ordinal `k` fills slots `k` and `k + 1`: legs
/// at both ends, the arches centred on the gap (back arch half a block outside
/// the room), and the threshold on the wall line.
///
/// The back arch and threshold sort as if half a block outside, the legs and
/// front arch as the middle of the gap, so whatever stands in the doorway draws
/// between the two arches.
pub fn render_door(
    room: &Room,
    atlas: &TextureAtlas,
    door: &Door,
    side: Direction,
) -> Result<Node, RenderError> {
    let axis: Axis = side.axis();
    let family = DoorFamily::for_planet(room.planet);
    let k = door.ordinal as f32;
    let (px, py) = door_arch_pivot(axis);
    let legs = SpriteOptions::anchored(0.5, 1.0);
    let behind = wall_point(room, side, k + 1.0, 0.5);
    let line = wall_point(room, side, k + 1.0, 0.0);

    let parts = [
        (
            "door.legs",
            wall_point(room, side, k + 2.0, 0.0),
            DoorPart::LegsThreshold(axis),
            legs,
            line,
        ),
        ("door.back", behind, DoorPart::Back(family, axis), SpriteOptions::pivot(px, py), behind),
        ("door.threshold", line, DoorPart::Threshold(axis), legs, behind),
        ("door.front", line, DoorPart::Front(family, axis), SpriteOptions::pivot(px, py), line),
        (
            "door.legs",
            wall_point(room, side, k, 0.0),
            DoorPart::LegsThreshold(axis),
            legs,
            line,
        ),
    ];
    let sprites = parts
        .into_iter()
        .map(|(label, at, part, opts, depth)| -> Result<Node, AtlasError> {
            let mut node = place_sprite(atlas, label, at, TextureId::Door(part), opts)?;
            node.z_index = Some(draw_order(Xyz::from(depth)));
            Ok(node)
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(RenderError::art(&room.id))?;
    log::trace!(
        "room {}: {} door at {} -> {}",
        room.id,
        side,
        door.ordinal,
        door.to_room
    );
    Ok(Node::group("door", sprites))
}

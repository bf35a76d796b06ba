use blacktooth_atlas::{TextureAtlas, TextureId};
use blacktooth_geom::{Xy, Xyz, draw_order};
use blacktooth_model::{Direction, Room};
use blacktooth_scene::{Node, SpriteOptions, place_sprite, register_portal};

use super::door::render_door;
use super::error::RenderError;
use super::options::RenderOptions;

/// Far-wall tiles and doorways, farthest first: the left wall walks y down from
/// the back corner, then the away wall walks x the same way.
pub fn render_walls(
    room: &Room,
    atlas: &TextureAtlas,
    options: &RenderOptions,
) -> Result<Vec<Node>, RenderError> {
    let mut out = Vec::new();
    for side in [Direction::Left, Direction::Away] {
        walk_wall(room, atlas, options, side, &mut out)?;
    }
    log::debug!("room {}: {} wall node(s)", room.id, out.len());
    Ok(out)
}

fn walk_wall(
    room: &Room,
    atlas: &TextureAtlas,
    options: &RenderOptions,
    side: Direction,
    out: &mut Vec<Node>,
) -> Result<(), RenderError> {
    let slots = room.slots(side);
    let top = i64::from(slots) - 1;
    let door = room.doors.get(side);
    if let Some(door) = door {
        let k = i64::from(door.ordinal);
        if k < -1 || k > top {
            return Err(RenderError::DoorOutOfRange {
                room: room.id.clone(),
                side,
                ordinal: door.ordinal,
                slots,
            });
        }
        if k == top {
            log::warn!(
                "room {}: {} door at ordinal {} has no gap in a {}-slot wall, drawing plain wall",
                room.id,
                side,
                door.ordinal,
                slots
            );
        }
    }

    let mut i = top;
    while i >= 0 {
        match door {
            Some(door) if i64::from(door.ordinal) == i - 1 => {
                let mut group = [render_door(room, atlas, door, side)?];
                register_portal(&door.to_room, &options.on_navigate, &mut group);
                out.extend(group);
                // The doorway is two slots wide.
                i -= 1;
            }
            _ => out.push(wall_tile(room, atlas, side, i as usize)?),
        }
        i -= 1;
    }
    Ok(())
}

fn wall_tile(
    room: &Room,
    atlas: &TextureAtlas,
    side: Direction,
    slot: usize,
) -> Result<Node, RenderError> {
    let named = room.walls.style_at(side, slot);
    let style = named
        .and_then(|s| room.planet.wall_style(s))
        .ok_or_else(|| RenderError::UnknownWallStyle {
            room: room.id.clone(),
            side,
            slot,
            style: named.map(str::to_string),
        })?;
    // Keyed at the far end of the slot so anything standing in the room draws over it.
    let (at, far_end, anchor) = match side {
        Direction::Left => {
            let y = slot as f32;
            (Xy::new(room.size.x as f32, y), Xy::new(room.size.x as f32, y + 1.0), (0.0, 1.0))
        }
        _ => {
            let x = slot as f32;
            (Xy::new(x, room.size.y as f32), Xy::new(x + 1.0, room.size.y as f32), (1.0, 1.0))
        }
    };
    let texture = TextureId::Wall {
        planet: room.planet,
        style,
        side,
    };
    let mut node = place_sprite(
        atlas,
        "wall",
        at,
        texture,
        SpriteOptions::anchored(anchor.0, anchor.1),
    )
    .map_err(RenderError::art(&room.id))?;
    node.z_index = Some(draw_order(Xyz::from(far_end)));
    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use blacktooth_model::{Planet, RoomId};

    fn options() -> RenderOptions {
        RenderOptions::new(Rc::new(|_: &RoomId| {}))
    }

    fn walls_of(room: &Room) -> Vec<Node> {
        render_walls(room, &TextureAtlas::builtin(), &options()).unwrap()
    }

    fn plain_tiles(nodes: &[Node]) -> usize {
        nodes.iter().filter(|n| n.label == "wall").count()
    }

    #[test]
    fn doorless_room_is_all_tiles() {
        let room = Room::new("r", Planet::Blacktooth, 7, 5);
        let nodes = walls_of(&room);
        assert_eq!(plain_tiles(&nodes), 12);
        assert!(nodes.iter().all(|n| n.portal.is_none()));
    }

    #[test]
    fn door_replaces_two_slots() {
        let room = Room::new("r", Planet::Egyptus, 6, 4).with_door(Direction::Away, 2, "n");
        let nodes = walls_of(&room);
        // 4 left tiles, 6 - 2 away tiles, one door group
        assert_eq!(plain_tiles(&nodes), 8);
        let doors: Vec<&Node> = nodes.iter().filter(|n| n.label == "door").collect();
        assert_eq!(doors.len(), 1);
        assert_eq!(doors[0].portal.as_ref().map(|p| p.target.as_str()), Some("n"));
    }

    #[test]
    fn unknown_style_is_fatal() {
        let mut room = Room::new("r", Planet::Market, 3, 3);
        room.walls.left[1] = "lava".to_string();
        let err = render_walls(&room, &TextureAtlas::builtin(), &options()).unwrap_err();
        assert!(matches!(err, RenderError::UnknownWallStyle { slot: 1, .. }));

        room.walls.left.truncate(1);
        let err = render_walls(&room, &TextureAtlas::builtin(), &options()).unwrap_err();
        assert!(matches!(err, RenderError::UnknownWallStyle { style: None, .. }));
    }

    #[test]
    fn unreachable_ordinals_are_fatal() {
        for ordinal in [-2, 4, 9, i32::MIN, i32::MAX] {
            let room = Room::new("r", Planet::Jail, 5, 4).with_door(Direction::Left, ordinal, "n");
            let err = render_walls(&room, &TextureAtlas::builtin(), &options()).unwrap_err();
            assert!(matches!(err, RenderError::DoorOutOfRange { .. }), "{}", ordinal);
        }
    }

    #[test]
    fn door_on_the_last_slot_leaves_plain_wall() {
        let room = Room::new("r", Planet::Jail, 4, 5).with_door(Direction::Away, 3, "n");
        let nodes = walls_of(&room);
        assert_eq!(plain_tiles(&nodes), 5 + 4);
        assert!(nodes.iter().all(|n| n.label == "wall" && n.portal.is_none()));
    }

    #[test]
    fn huge_walls_do_not_wrap_the_range_check() {
        let mut room = Room::new("r", Planet::Jail, 2, 2).with_door(Direction::Left, 0, "n");
        room.size.y = u32::MAX;
        // Ordinal 0 is in range, so the walk starts and stops at the first missing style.
        let err = render_walls(&room, &TextureAtlas::builtin(), &options()).unwrap_err();
        assert!(matches!(err, RenderError::UnknownWallStyle { .. }), "{}", err);
    }

    #[test]
    fn tiles_sort_behind_the_room() {
        let room = Room::new("r", Planet::Blacktooth, 3, 2);
        let keys: Vec<f32> = walls_of(&room).iter().filter_map(|n| n.z_index).collect();
        // Left wall slots 1, 0 then away wall slots 2, 1, 0, each keyed at its far end.
        assert_eq!(keys, vec![-5.0, -4.0, -5.0, -4.0, -3.0]);
        // Balls standing just in front of a tile draw over it.
        assert!(draw_order(Xyz::new(2.9, 0.5, 0.0)) > keys[1]);
        assert!(draw_order(Xyz::new(2.5, 1.9, 0.0)) > keys[2]);
    }

    #[test]
    fn walls_sit_on_the_far_lines() {
        let room = Room::new("r", Planet::Blacktooth, 2, 1);
        let nodes = walls_of(&room);
        let at: Vec<_> = nodes.iter().map(|n| n.position).collect();
        assert_eq!(
            at,
            vec![
                blacktooth_geom::project(Xy::new(2.0, 0.0)),
                blacktooth_geom::project(Xy::new(1.0, 1.0)),
                blacktooth_geom::project(Xy::new(0.0, 1.0)),
            ]
        );
    }
}

use blacktooth_atlas::TextureId;
use blacktooth_atlas::TextureAtlas;
use blacktooth_geom::{ScreenPoint, Xy, project};
use blacktooth_model::{Direction, FloorKind, Room};
use blacktooth_scene::{Mask, Node, SpriteOptions, place_sprite, register_portal};

use super::error::RenderError;
use super::options::RenderOptions;

/// Tiles reach this far past the clip so the pixel-art edges are covered.
const TILE_MASK_STROKE: f32 = 8.0;
/// Edge strips are drawn taller than the room; the container mask only trims sideways.
const MASK_SKY: f32 = -999.0;
const MASK_DROP: f32 = 16.0;

/// The block area the floor covers. Near doors stick out half a block past the
/// footprint, so the extent grows on those sides.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FloorExtent {
    pub xmin: f32,
    pub xmax: f32,
    pub ymin: f32,
    pub ymax: f32,
}

impl FloorExtent {
    pub fn of(room: &Room) -> Self {
        let half = |side| if room.doors.has(side) { 0.5 } else { 0.0 };
        // The x extent grows for right and left doors; the y extent grows at both
        // ends for a towards door only.
        Self {
            xmin: -half(Direction::Right),
            xmax: room.size.x as f32 + half(Direction::Left),
            ymin: -half(Direction::Towards),
            ymax: room.size.y as f32 + half(Direction::Towards),
        }
    }

    pub fn front(&self) -> Xy {
        Xy::new(self.xmin, self.ymin)
    }

    pub fn right(&self) -> Xy {
        Xy::new(self.xmin, self.ymax)
    }

    pub fn back(&self) -> Xy {
        Xy::new(self.xmax, self.ymax)
    }

    pub fn left(&self) -> Xy {
        Xy::new(self.xmax, self.ymin)
    }
}

/// Grid cells that get a floor sprite. One sprite covers two cells, so only cells
/// with `x + y` odd are used; columns run one past the extent on each side so the
/// diamonds fill the clip.
pub fn floor_tile_cells(room: &Room) -> Vec<Xy> {
    let ext = FloorExtent::of(room);
    let (x0, x1) = (ext.xmin.floor() as i32 - 1, ext.xmax.ceil() as i32);
    let (y0, y1) = (ext.ymin.floor() as i32, ext.ymax.ceil() as i32);
    let mut cells = Vec::new();
    for ix in x0..=x1 {
        let mut iy = y0 + ix % 2;
        if (ix + iy).rem_euclid(2) == 0 {
            iy -= 1;
        }
        while iy <= y1 {
            cells.push(Xy::new(ix as f32, iy as f32));
            iy += 2;
        }
    }
    cells
}

fn floor_texture(room: &Room) -> Option<TextureId> {
    match room.floor {
        FloorKind::Normal => Some(TextureId::Floor(room.planet)),
        FloorKind::Deadly => Some(TextureId::DeadlyFloor),
        FloorKind::None => None,
    }
}

fn half_steps(from: f32, to: f32) -> impl Iterator<Item = f32> {
    let n = ((to - from) * 2.0).floor().max(-1.0) as i32;
    (0..=n).map(move |i| from + i as f32 * 0.5)
}

/// Floor tiles under their diamond clip, plus the two near-edge strips, in one
/// container clipped to the room's horizontal span.
pub fn render_floor(
    room: &Room,
    atlas: &TextureAtlas,
    options: &RenderOptions,
) -> Result<Node, RenderError> {
    let ext = FloorExtent::of(room);
    let mut container = Node::group("floor", Vec::new());

    if let Some(texture) = floor_texture(room) {
        let tiles = floor_tile_cells(room)
            .into_iter()
            .map(|cell| {
                place_sprite(
                    atlas,
                    "floor.tile",
                    cell,
                    texture,
                    SpriteOptions::anchored(0.5, 1.0),
                )
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(RenderError::art(&room.id))?;
        let diamond = [ext.front(), ext.right(), ext.back(), ext.left()]
            .into_iter()
            .map(project)
            .collect();
        log::trace!("room {}: {} floor tile(s)", room.id, tiles.len());
        container.push(
            Node::group("floor.tiles", tiles).with_mask(Mask::new(diamond, TILE_MASK_STROKE)),
        );
    }

    let palette = options.hint_colours.edges(room.color);
    let towards_y = if room.doors.has(Direction::Towards) { -0.5 } else { 0.0 };
    let right_x = if room.doors.has(Direction::Right) { -0.5 } else { 0.0 };

    let mut along_x = half_steps(ext.xmin, room.size.x as f32)
        .map(|x| {
            place_sprite(
                atlas,
                "floor.edge",
                Xy::new(x, towards_y),
                TextureId::Edge(Direction::Towards),
                SpriteOptions::pivot(7.0, 1.0),
            )
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(RenderError::art(&room.id))?;
    let mut along_y = half_steps(ext.ymin, room.size.y as f32)
        .map(|y| {
            place_sprite(
                atlas,
                "floor.edge",
                Xy::new(right_x, y),
                TextureId::Edge(Direction::Right),
                SpriteOptions::pivot(0.0, 1.0),
            )
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(RenderError::art(&room.id))?;

    if let Some(below) = &room.room_below {
        register_portal(below, &options.on_navigate, &mut along_y);
        register_portal(below, &options.on_navigate, &mut along_x);
    }

    container.push(
        Node::group("floor.edge.x", along_x).with_filter(options.hint_colours.swap_to(palette.right)),
    );
    container.push(
        Node::group("floor.edge.y", along_y)
            .with_filter(options.hint_colours.swap_to(palette.towards)),
    );

    let edge_right = project(Xy::new(0.0, room.size.y as f32));
    let edge_left = project(Xy::new(room.size.x as f32, 0.0));
    let front = project(ext.front());
    let drop = ScreenPoint::new(0.0, MASK_DROP);
    let outline = vec![
        front + drop,
        edge_right + drop,
        ScreenPoint::new(edge_right.x, MASK_SKY),
        ScreenPoint::new(edge_left.x, MASK_SKY),
        edge_left + drop,
    ];
    Ok(container.with_mask(Mask::new(outline, 0.0)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use blacktooth_model::{Planet, RoomId, ZxColour};
    use blacktooth_scene::Filter;

    fn floor_of(room: &Room) -> Node {
        let options = RenderOptions::new(Rc::new(|_: &RoomId| {}));
        render_floor(room, &TextureAtlas::builtin(), &options).unwrap()
    }

    fn strip<'a>(floor: &'a Node, label: &str) -> &'a Node {
        floor.find(label).unwrap()
    }

    fn positions(strip: &Node) -> Vec<ScreenPoint> {
        strip.children().iter().map(|n| n.position).collect()
    }

    fn count(room: &Room) -> usize {
        floor_tile_cells(room).len()
    }

    #[test]
    fn seven_by_five_tiles() {
        let room = Room::new("r", Planet::Blacktooth, 7, 5);
        assert_eq!(count(&room), 32);
        for c in floor_tile_cells(&room) {
            assert_eq!((c.x + c.y).rem_euclid(2.0), 1.0);
        }
    }

    #[test]
    fn towards_door_extends_floor() {
        let room = Room::new("r", Planet::Blacktooth, 7, 5).with_door(Direction::Towards, 2, "n");
        assert_eq!(count(&room), 37);
        let ext = FloorExtent::of(&room);
        assert_eq!((ext.ymin, ext.ymax), (-0.5, 5.5));
    }

    #[test]
    fn right_and_left_doors_extend_x() {
        let plain = Room::new("r", Planet::Jail, 4, 4);
        let right = plain.clone().with_door(Direction::Right, 1, "n");
        let left = plain.clone().with_door(Direction::Left, 1, "n");
        assert_eq!(FloorExtent::of(&right).xmin, -0.5);
        assert_eq!(FloorExtent::of(&left).xmax, 4.5);
        assert!(count(&right) > count(&plain));
        assert!(count(&left) > count(&plain));
    }

    #[test]
    fn rows_start_on_odd_parity() {
        let room = Room::new("r", Planet::Jail, 3, 3);
        let firsts: Vec<(f32, f32)> = floor_tile_cells(&room)
            .into_iter()
            .filter(|c| c.y < 0.0)
            .map(|c| (c.x, c.y))
            .collect();
        assert_eq!(firsts, vec![(-1.0, -2.0), (0.0, -1.0), (2.0, -1.0)]);
    }

    #[test]
    fn half_steps_include_both_ends() {
        let v: Vec<f32> = half_steps(-0.5, 2.0).collect();
        assert_eq!(v, vec![-0.5, 0.0, 0.5, 1.0, 1.5, 2.0]);
    }

    #[test]
    fn tiles_clip_to_the_footprint_diamond() {
        let room = Room::new("r", Planet::Blacktooth, 7, 5);
        let floor = floor_of(&room);
        let mask = strip(&floor, "floor.tiles").mask.as_ref().unwrap();
        assert_eq!(
            mask.polygon,
            vec![
                project(Xy::new(0.0, 0.0)),
                project(Xy::new(0.0, 5.0)),
                project(Xy::new(7.0, 5.0)),
                project(Xy::new(7.0, 0.0)),
            ]
        );
        assert_eq!(mask.stroke, 8.0);
    }

    #[test]
    fn container_mask_drops_and_reaches_the_sky() {
        let room = Room::new("r", Planet::Blacktooth, 7, 5).with_door(Direction::Towards, 2, "n");
        let floor = floor_of(&room);
        let mask = floor.mask.as_ref().unwrap();
        let front = project(Xy::new(0.0, -0.5));
        let edge_right = project(Xy::new(0.0, 5.0));
        let edge_left = project(Xy::new(7.0, 0.0));
        assert_eq!(
            mask.polygon,
            vec![
                ScreenPoint::new(front.x, front.y + 16.0),
                ScreenPoint::new(edge_right.x, edge_right.y + 16.0),
                ScreenPoint::new(edge_right.x, -999.0),
                ScreenPoint::new(edge_left.x, -999.0),
                ScreenPoint::new(edge_left.x, edge_left.y + 16.0),
            ]
        );
        assert_eq!(mask.stroke, 0.0);
    }

    #[test]
    fn edges_step_by_half_blocks_along_the_near_sides() {
        let room = Room::new("r", Planet::Market, 3, 2);
        let floor = floor_of(&room);
        let xs: Vec<ScreenPoint> = (0..=6).map(|i| project(Xy::new(i as f32 * 0.5, 0.0))).collect();
        let ys: Vec<ScreenPoint> = (0..=4).map(|i| project(Xy::new(0.0, i as f32 * 0.5))).collect();
        assert_eq!(positions(strip(&floor, "floor.edge.x")), xs);
        assert_eq!(positions(strip(&floor, "floor.edge.y")), ys);
        let first = strip(&floor, "floor.edge.x").children()[0].as_sprite().unwrap();
        assert_eq!(first.texture, TextureId::Edge(Direction::Towards));
        assert_eq!(first.anchor, blacktooth_scene::Anchor::Pivot(7.0, 1.0));
    }

    #[test]
    fn near_doors_push_the_edges_out_half_a_block() {
        let room = Room::new("r", Planet::Market, 3, 2)
            .with_door(Direction::Towards, 0, "t")
            .with_door(Direction::Right, 0, "r");
        let floor = floor_of(&room);
        let xs: Vec<ScreenPoint> = (0..=7)
            .map(|i| project(Xy::new(-0.5 + i as f32 * 0.5, -0.5)))
            .collect();
        let ys: Vec<ScreenPoint> = (0..=5)
            .map(|i| project(Xy::new(-0.5, -0.5 + i as f32 * 0.5)))
            .collect();
        assert_eq!(positions(strip(&floor, "floor.edge.x")), xs);
        assert_eq!(positions(strip(&floor, "floor.edge.y")), ys);
    }

    #[test]
    fn strips_take_their_palette_colours() {
        let mut room = Room::new("r", Planet::Safari, 2, 2);
        room.color = ZxColour::Green;
        let floor = floor_of(&room);
        let colours = RenderOptions::new(Rc::new(|_: &RoomId| {})).hint_colours;
        let palette = colours.edges(ZxColour::Green);
        let swap = |label| strip(&floor, label).filters.clone();
        assert_eq!(
            swap("floor.edge.x"),
            vec![Filter::PaletteSwap {
                from: vec![colours.edge_source],
                to: vec![palette.right],
            }]
        );
        assert_eq!(
            swap("floor.edge.y"),
            vec![Filter::PaletteSwap {
                from: vec![colours.edge_source],
                to: vec![palette.towards],
            }]
        );
        assert_ne!(palette.right, palette.towards);
    }

    #[test]
    fn no_floor_keeps_the_edges() {
        let mut room = Room::new("r", Planet::Jail, 2, 2);
        room.floor = FloorKind::None;
        let floor = floor_of(&room);
        assert!(floor.find("floor.tiles").is_none());
        assert!(floor.find("floor.edge.x").is_some());
    }
}

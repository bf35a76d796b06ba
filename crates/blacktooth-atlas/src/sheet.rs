//! Layout of the shared sprite sheet: tile sizes, per-planet origins, and the
//! hand-placed rectangles for everything that is not generated.

use blacktooth_model::{Axis, Direction, Planet};

use super::atlas::SourceRect;
use super::texture_id::{ActorFamily, AnimationId, DoorFamily, DoorPart, ItemTexture, TextureId};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SpriteSize {
    pub w: u32,
    pub h: u32,
}

pub const FLOOR_TILE: SpriteSize = SpriteSize { w: 32, h: 16 };
pub const WALL_TILE: SpriteSize = SpriteSize { w: 16, h: 55 };
pub const DOOR_ARCH: SpriteSize = SpriteSize { w: 24, h: 56 };
pub const EDGE: SpriteSize = SpriteSize { w: 8, h: 9 };
pub const LARGE_ITEM: SpriteSize = SpriteSize { w: 32, h: 28 };
pub const SMALL_ITEM: SpriteSize = SpriteSize { w: 24, h: 24 };

/// Space left between the four frames of a directional actor.
pub const DIRECTIONAL_GUTTER: u32 = 2;

/// Arch pivots. Arches are placed so the face we can see sits on the given
/// position; the visible face differs per axis.
pub fn door_arch_pivot(axis: Axis) -> (f32, f32) {
    match axis {
        Axis::X => (16.0, 56.0),
        Axis::Y => (8.0, 56.0),
    }
}

/// Sheet position of the first wall tile of each planet's background block.
pub fn planet_origin(planet: Planet) -> (u32, u32) {
    match planet {
        Planet::Blacktooth => (487, 335),
        Planet::Bookworld => (356, 23),
        Planet::Egyptus => (435, 23),
        Planet::Jail => (455, 351),
        Planet::Market => (378, 244),
        Planet::Moonbase => (384, 141),
        Planet::Penitentiary => (513, 23),
        Planet::Safari => (482, 244),
    }
}

#[inline]
const fn rect(x: u32, y: u32, size: SpriteSize) -> SourceRect {
    SourceRect {
        x,
        y,
        w: size.w,
        h: size.h,
    }
}

/// Wall and floor frames for one planet.
///
/// Wall styles are laid out as a staircase: each successive style moves one tile
/// right and half a tile up. Left-facing tiles climb from the origin and the
/// matching away-facing tiles mirror them from the far end of the row. The floor
/// tile hangs under the last left-facing wall.
pub fn background_frames(planet: Planet) -> Vec<(TextureId, SourceRect)> {
    let (ox, oy) = planet_origin(planet);
    let styles = planet.wall_styles();
    let n = styles.len() as u32;
    let y_step = WALL_TILE.w >> 1;

    let mut out = Vec::with_capacity(styles.len() * 2 + 1);
    for (i, &style) in styles.iter().enumerate() {
        let i = i as u32;
        out.push((
            TextureId::Wall {
                planet,
                style,
                side: Direction::Left,
            },
            rect(ox + WALL_TILE.w * i, oy - y_step * i, WALL_TILE),
        ));
        out.push((
            TextureId::Wall {
                planet,
                style,
                side: Direction::Away,
            },
            rect(ox + WALL_TILE.w * ((n << 1) - i - 1), oy - y_step * i, WALL_TILE),
        ));
    }
    let last = n - 1;
    out.push((
        TextureId::Floor(planet),
        rect(
            ox + last * WALL_TILE.w,
            oy - last * y_step + WALL_TILE.h + 1,
            FLOOR_TILE,
        ),
    ));
    out
}

/// Four facings from a 2x2 block: left top-left, away top-right, towards
/// bottom-left, right bottom-right.
pub fn four_directions(
    family: ActorFamily,
    (x, y): (u32, u32),
    size: SpriteSize,
) -> [(TextureId, SourceRect); 4] {
    let dx = size.w + DIRECTIONAL_GUTTER;
    let dy = size.h + DIRECTIONAL_GUTTER;
    let id = |facing| TextureId::Actor { family, facing };
    [
        (id(Direction::Left), rect(x, y, size)),
        (id(Direction::Away), rect(x + dx, y, size)),
        (id(Direction::Towards), rect(x, y + dy, size)),
        (id(Direction::Right), rect(x + dx, y + dy, size)),
    ]
}

pub fn actor_block(family: ActorFamily) -> ((u32, u32), SpriteSize) {
    match family {
        ActorFamily::AmericanFootballHead => ((4, 34), SpriteSize { w: 24, h: 32 }),
        ActorFamily::Charles => ((118, 34), SMALL_ITEM),
        ActorFamily::Cyberman => ((61, 34), SMALL_ITEM),
        ActorFamily::Monkey => ((118, 90), SMALL_ITEM),
        ActorFamily::Elephant => ((118, 146), SMALL_ITEM),
        ActorFamily::ComputerBot => ((173, 146), SMALL_ITEM),
    }
}

/// Frames that do not follow a generated layout.
pub fn fixed_frames() -> Vec<(TextureId, SourceRect)> {
    let mut out = vec![
        (TextureId::Edge(Direction::Right), rect(536, 392, EDGE)),
        (TextureId::Edge(Direction::Towards), rect(527, 392, EDGE)),
        (
            TextureId::WallOverdraw,
            SourceRect {
                x: 210,
                y: 37,
                w: WALL_TILE.w,
                h: FLOOR_TILE.h * 2,
            },
        ),
        (TextureId::DeadlyFloor, rect(379, 444, FLOOR_TILE)),
    ];
    out.extend(door_frames());
    out.extend(
        ItemTexture::all()
            .into_iter()
            .filter_map(|t| item_frame(t).map(|r| (TextureId::Item(t), r))),
    );
    out
}

fn door_frames() -> Vec<(TextureId, SourceRect)> {
    use DoorFamily::{Generic, Moonbase};
    let legs = |h| SourceRect {
        x: 0,
        y: 0,
        w: WALL_TILE.w,
        h,
    };
    let at = |x, y, r: SourceRect| SourceRect { x, y, ..r };
    let door = TextureId::Door;
    vec![
        (door(DoorPart::LegsBase), at(314, 60, legs(9))),
        (door(DoorPart::LegsPillar), at(314, 48, legs(12))),
        (door(DoorPart::LegsThreshold(Axis::Y)), at(331, 30, legs(18))),
        (door(DoorPart::LegsThreshold(Axis::X)), at(314, 30, legs(18))),
        (door(DoorPart::Threshold(Axis::X)), rect(270, 70, SpriteSize { w: 26, h: 19 })),
        (door(DoorPart::Threshold(Axis::Y)), rect(241, 70, SpriteSize { w: 26, h: 19 })),
        (door(DoorPart::Front(Generic, Axis::Y)), rect(227, 13, DOOR_ARCH)),
        (door(DoorPart::Back(Generic, Axis::Y)), rect(243, 5, DOOR_ARCH)),
        (door(DoorPart::Front(Generic, Axis::X)), rect(286, 13, DOOR_ARCH)),
        (door(DoorPart::Back(Generic, Axis::X)), rect(270, 5, DOOR_ARCH)),
        (door(DoorPart::Front(Moonbase, Axis::Y)), rect(344, 161, DOOR_ARCH)),
        (door(DoorPart::Back(Moonbase, Axis::Y)), rect(360, 153, DOOR_ARCH)),
        (door(DoorPart::Front(Moonbase, Axis::X)), rect(528, 161, DOOR_ARCH)),
        (door(DoorPart::Back(Moonbase, Axis::X)), rect(512, 153, DOOR_ARCH)),
        (
            door(DoorPart::Platform(Direction::Towards)),
            rect(270, 144, SpriteSize { w: 32, h: 32 }),
        ),
        (
            door(DoorPart::Platform(Direction::Left)),
            rect(235, 114, SpriteSize { w: 32, h: 28 }),
        ),
    ]
}

/// `None` for frame numbers past the end of an animation strip.
fn item_frame(t: ItemTexture) -> Option<SourceRect> {
    use ItemTexture::*;
    Some(match t {
        Teleporter => rect(4, 450, LARGE_ITEM),
        Barrier(Axis::X) => rect(313, 389, SMALL_ITEM),
        Barrier(Axis::Y) => rect(313, 414, SMALL_ITEM),
        BlockOrganic => rect(172, 388, LARGE_ITEM),
        BlockArtificial => rect(138, 388, LARGE_ITEM),
        BlockTower => rect(286, 414, SMALL_ITEM),
        Volcano => rect(344, 414, LARGE_ITEM),
        Toaster => rect(111, 423, LARGE_ITEM),
        Spikes => rect(379, 414, LARGE_ITEM),
        Conveyor(Axis::X) => rect(259, 440, LARGE_ITEM),
        Conveyor(Axis::Y) => rect(292, 440, LARGE_ITEM),
        Bunny => rect(340, 358, SMALL_ITEM),
        Donuts => rect(313, 358, SMALL_ITEM),
        Hooter => rect(286, 358, SMALL_ITEM),
        Bag => rect(259, 358, SMALL_ITEM),
        Fish1 => rect(259, 388, SMALL_ITEM),
        Fish2 => rect(284, 388, SMALL_ITEM),
        SpringCompressed => rect(4, 421, SMALL_ITEM),
        SpringReleased => rect(29, 421, SMALL_ITEM),
        HeadTowards => rect(29, 266, SMALL_ITEM),
        HeelsTowards => rect(184, 266, SMALL_ITEM),
        // The lift strip runs right to left: frame 4 is leftmost.
        Lift(n @ 1..=4) => rect(259 + 25 * (4 - n as u32), 474, SMALL_ITEM),
        Dalek(n @ 1..=2) => rect(4 + 25 * (n as u32 - 1), 4, SMALL_ITEM),
        HelicopterBug(n @ 1..=4) => rect(4 + 25 * (n as u32 - 1), 167, SMALL_ITEM),
        Lift(_) | Dalek(_) | HelicopterBug(_) => return None,
        Joystick => rect(259, 414, SMALL_ITEM),
        Anvil => rect(144, 423, LARGE_ITEM),
        Book(Axis::X) => rect(184, 450, LARGE_ITEM),
        Book(Axis::Y) => rect(222, 450, LARGE_ITEM),
        Sandwich => rect(4, 356, LARGE_ITEM),
        Sticks => rect(4, 391, SMALL_ITEM),
        Cube => rect(31, 391, SMALL_ITEM),
        Drum => rect(58, 391, SMALL_ITEM),
        SwitchOff => rect(111, 454, SMALL_ITEM),
        SwitchOn => rect(136, 454, SMALL_ITEM),
        HushPuppy => rect(163, 300, LARGE_ITEM),
        Ball => rect(84, 4, SMALL_ITEM),
        Puck => rect(111, 392, SMALL_ITEM),
    })
}

pub fn animation_frames(anim: AnimationId) -> Vec<TextureId> {
    let frames: Vec<ItemTexture> = match anim {
        AnimationId::Fish => vec![ItemTexture::Fish1, ItemTexture::Fish2],
        AnimationId::Lift => (1..=4).map(ItemTexture::Lift).collect(),
        AnimationId::Dalek => (1..=2).map(ItemTexture::Dalek).collect(),
        AnimationId::HelicopterBug => (1..=4).map(ItemTexture::HelicopterBug).collect(),
    };
    frames.into_iter().map(TextureId::Item).collect()
}

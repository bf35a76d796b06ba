use serde::{Deserialize, Serialize};

use super::item::Item;
use super::planet::{Direction, Planet, ZxColour};

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub String);

impl RoomId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RoomId {
    fn from(s: &str) -> Self {
        RoomId(s.to_string())
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Room footprint in whole blocks (not pixels).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSize {
    pub x: u32,
    pub y: u32,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FloorKind {
    #[default]
    Normal,
    Deadly,
    None,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Door {
    /// Slot index along the wall; -1 is the slot nearest the camera.
    pub ordinal: i32,
    pub to_room: RoomId,
}

/// At most one door per side.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away: Option<Door>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub towards: Option<Door>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Door>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Door>,
}

impl Doors {
    pub fn get(&self, side: Direction) -> Option<&Door> {
        match side {
            Direction::Away => self.away.as_ref(),
            Direction::Towards => self.towards.as_ref(),
            Direction::Left => self.left.as_ref(),
            Direction::Right => self.right.as_ref(),
        }
    }

    pub fn set(&mut self, side: Direction, door: Option<Door>) {
        match side {
            Direction::Away => self.away = door,
            Direction::Towards => self.towards = door,
            Direction::Left => self.left = door,
            Direction::Right => self.right = door,
        }
    }

    #[inline]
    pub fn has(&self, side: Direction) -> bool {
        self.get(side).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Direction, &Door)> {
        Direction::ALL
            .into_iter()
            .filter_map(|d| self.get(d).map(|door| (d, door)))
    }
}

/// Per-slot wall style names for the two far walls. `left[i]` is the slot between
/// y = i and y = i + 1; `away[i]` the slot between x = i and x = i + 1.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Walls {
    #[serde(default)]
    pub left: Vec<String>,
    #[serde(default)]
    pub away: Vec<String>,
}

impl Walls {
    /// Style at a far-wall slot. Near sides have no wall and always yield `None`.
    pub fn style_at(&self, side: Direction, slot: usize) -> Option<&str> {
        match side {
            Direction::Left => self.left.get(slot).map(String::as_str),
            Direction::Away => self.away.get(slot).map(String::as_str),
            Direction::Towards | Direction::Right => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: RoomId,
    pub planet: Planet,
    pub size: RoomSize,
    #[serde(default)]
    pub floor: FloorKind,
    #[serde(default)]
    pub doors: Doors,
    #[serde(default)]
    pub walls: Walls,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_above: Option<RoomId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_below: Option<RoomId>,
    pub color: ZxColour,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Room {
    /// Bare room: normal floor, no doors or items, every wall slot in the planet's
    /// first style.
    pub fn new(id: impl Into<RoomId>, planet: Planet, size_x: u32, size_y: u32) -> Self {
        let style = planet.wall_styles()[0].to_string();
        Self {
            id: id.into(),
            planet,
            size: RoomSize { x: size_x, y: size_y },
            floor: FloorKind::Normal,
            doors: Doors::default(),
            walls: Walls {
                left: vec![style.clone(); size_y as usize],
                away: vec![style; size_x as usize],
            },
            room_above: None,
            room_below: None,
            color: ZxColour::White,
            items: Vec::new(),
        }
    }

    pub fn with_door(mut self, side: Direction, ordinal: i32, to_room: impl Into<RoomId>) -> Self {
        self.doors.set(
            side,
            Some(Door {
                ordinal,
                to_room: to_room.into(),
            }),
        );
        self
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Number of slots along a side: far/near walls on x span `size.x`, on y `size.y`.
    #[inline]
    pub fn slots(&self, side: Direction) -> u32 {
        match side {
            Direction::Away | Direction::Towards => self.size.x,
            Direction::Left | Direction::Right => self.size.y,
        }
    }

    /// Every room id this room links to, with the side or item that links it.
    pub fn links(&self) -> Vec<(&'static str, &RoomId)> {
        let mut out = Vec::new();
        for (side, door) in self.doors.iter() {
            out.push((side.name(), &door.to_room));
        }
        if let Some(id) = &self.room_above {
            out.push(("above", id));
        }
        if let Some(id) = &self.room_below {
            out.push(("below", id));
        }
        for item in &self.items {
            if let Some(id) = item.config.teleport_destination() {
                out.push(("teleporter", id));
            }
        }
        out
    }
}

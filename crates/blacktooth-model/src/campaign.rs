use std::error::Error;
use std::fs;
use std::path::Path;

use hashbrown::HashMap;
use serde::Deserialize;

use super::room::{Room, RoomId};

#[derive(Debug)]
pub enum ModelError {
    DuplicateRoom(RoomId),
    UnknownRoom(RoomId),
    EmptyCampaign,
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::DuplicateRoom(id) => write!(f, "room {} is defined twice", id),
            ModelError::UnknownRoom(id) => write!(f, "no room with id {}", id),
            ModelError::EmptyCampaign => write!(f, "campaign has no rooms"),
        }
    }
}

impl std::error::Error for ModelError {}

/// Every room, indexed by id. Links between rooms (doors, lifts, teleporters) are
/// ids into this arena, never references, so cycles in the room graph are fine.
#[derive(Clone, Debug, Default)]
pub struct Campaign {
    rooms: HashMap<RoomId, Room>,
    // Load order, for deterministic iteration.
    order: Vec<RoomId>,
    start: Option<RoomId>,
}

#[derive(Deserialize)]
struct CampaignFile {
    #[serde(default)]
    start: Option<RoomId>,
    rooms: Vec<Room>,
}

impl Campaign {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, room: Room) -> Result<(), ModelError> {
        if self.rooms.contains_key(&room.id) {
            return Err(ModelError::DuplicateRoom(room.id));
        }
        self.order.push(room.id.clone());
        self.rooms.insert(room.id.clone(), room);
        Ok(())
    }

    pub fn from_rooms(rooms: impl IntoIterator<Item = Room>) -> Result<Self, ModelError> {
        let mut campaign = Campaign::new();
        for room in rooms {
            campaign.insert(room)?;
        }
        Ok(campaign)
    }

    pub fn from_json_str(json: &str) -> Result<Self, Box<dyn Error>> {
        let file: CampaignFile = serde_json::from_str(json)?;
        let mut campaign = Campaign::from_rooms(file.rooms)?;
        if let Some(start) = file.start {
            campaign.set_start(start)?;
        }
        for (from, via, to) in campaign.dangling_links() {
            log::warn!("room {} links {} to missing room {}", from, via, to);
        }
        log::debug!("loaded campaign with {} room(s)", campaign.len());
        Ok(campaign)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_json_str(&s)
    }

    pub fn set_start(&mut self, id: RoomId) -> Result<(), ModelError> {
        if !self.rooms.contains_key(&id) {
            return Err(ModelError::UnknownRoom(id));
        }
        self.start = Some(id);
        Ok(())
    }

    /// Declared start room, else the first room loaded.
    pub fn start(&self) -> Result<&Room, ModelError> {
        let id = self
            .start
            .as_ref()
            .or_else(|| self.order.first())
            .ok_or(ModelError::EmptyCampaign)?;
        self.room(id)
    }

    pub fn room(&self, id: &RoomId) -> Result<&Room, ModelError> {
        self.rooms
            .get(id)
            .ok_or_else(|| ModelError::UnknownRoom(id.clone()))
    }

    #[inline]
    pub fn get(&self, id: &RoomId) -> Option<&Room> {
        self.rooms.get(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Room> {
        self.order.iter().filter_map(|id| self.rooms.get(id))
    }

    /// Links whose target room is not in the campaign, as (from, via, to).
    pub fn dangling_links(&self) -> Vec<(RoomId, &'static str, RoomId)> {
        let mut out = Vec::new();
        for room in self.iter() {
            for (via, to) in room.links() {
                if !self.rooms.contains_key(to) {
                    out.push((room.id.clone(), via, to.clone()));
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planet::{Direction, Planet};

    const TWO_ROOMS: &str = r#"{
        "start": "bt2",
        "rooms": [
            {
                "id": "bt1",
                "planet": "blacktooth",
                "size": { "x": 7, "y": 5 },
                "floor": "normal",
                "color": "cyan",
                "roomAbove": "bt2",
                "doors": { "away": { "ordinal": 2, "toRoom": "bt2" } },
                "walls": {
                    "left": ["armour", "armour", "shield", "armour", "armour"],
                    "away": ["plain", "plain", "plain", "plain", "plain", "plain", "plain"]
                },
                "items": [
                    { "type": "lift", "config": { "top": 3, "bottom": 1 }, "position": { "x": 2, "y": 2, "z": 0 } }
                ]
            },
            {
                "id": "bt2",
                "planet": "blacktooth",
                "size": { "x": 4, "y": 4 },
                "color": "yellow",
                "roomBelow": "bt1",
                "doors": { "towards": { "ordinal": -1, "toRoom": "nowhere" } }
            }
        ]
    }"#;

    #[test]
    fn loads_rooms_and_links() {
        let c = Campaign::from_json_str(TWO_ROOMS).unwrap();
        assert_eq!(c.len(), 2);
        assert_eq!(c.start().unwrap().id, RoomId::from("bt2"));
        let bt1 = c.room(&RoomId::from("bt1")).unwrap();
        assert_eq!(bt1.planet, Planet::Blacktooth);
        assert_eq!(bt1.doors.get(Direction::Away).unwrap().ordinal, 2);
        assert_eq!(bt1.room_above, Some(RoomId::from("bt2")));
        assert_eq!(bt1.items.len(), 1);
    }

    #[test]
    fn reports_dangling_links() {
        let c = Campaign::from_json_str(TWO_ROOMS).unwrap();
        let dangling = c.dangling_links();
        assert_eq!(dangling.len(), 1);
        assert_eq!(dangling[0].1, "towards");
        assert_eq!(dangling[0].2, RoomId::from("nowhere"));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let a = Room::new("same", Planet::Safari, 2, 2);
        let b = Room::new("same", Planet::Market, 3, 3);
        assert!(matches!(
            Campaign::from_rooms([a, b]),
            Err(ModelError::DuplicateRoom(_))
        ));
    }

    #[test]
    fn start_defaults_to_first_loaded() {
        let c = Campaign::from_rooms([
            Room::new("first", Planet::Jail, 2, 2),
            Room::new("second", Planet::Jail, 2, 2),
        ])
        .unwrap();
        assert_eq!(c.start().unwrap().id, RoomId::from("first"));
        assert!(Campaign::new().start().is_err());
    }
}

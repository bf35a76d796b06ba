use blacktooth_model::{Campaign, Direction, Planet, Room, RoomId};
use proptest::prelude::*;

fn planet() -> impl Strategy<Value = Planet> {
    proptest::sample::select(Planet::ALL.to_vec())
}

proptest! {
    #[test]
    fn new_room_has_one_style_per_slot(p in planet(), x in 1u32..12, y in 1u32..12) {
        let room = Room::new("r", p, x, y);
        for side in [Direction::Left, Direction::Away] {
            let n = room.slots(side) as usize;
            for slot in 0..n {
                let style = room.walls.style_at(side, slot);
                prop_assert!(style.and_then(|s| p.wall_style(s)).is_some());
            }
            prop_assert_eq!(room.walls.style_at(side, n), None);
        }
    }

    #[test]
    fn campaign_iterates_in_load_order(n in 1usize..20) {
        let rooms = (0..n).map(|i| Room::new(format!("room{}", i).as_str(), Planet::Market, 3, 3));
        let c = Campaign::from_rooms(rooms).unwrap();
        let ids: Vec<RoomId> = c.iter().map(|r| r.id.clone()).collect();
        let expect: Vec<RoomId> = (0..n).map(|i| RoomId(format!("room{}", i))).collect();
        prop_assert_eq!(ids, expect);
    }

    #[test]
    fn rooms_survive_json(p in planet(), x in 1u32..9, y in 1u32..9, ord in -1i32..3) {
        let room = Room::new("a", p, x, y).with_door(Direction::Left, ord, "b");
        let json = serde_json::to_string(&room).unwrap();
        let back: Room = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, room);
    }
}

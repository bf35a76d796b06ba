use blacktooth_atlas::TextureAtlas;
use blacktooth_model::Room;
use blacktooth_scene::Node;

use super::error::RenderError;
use super::floor::render_floor;
use super::items::render_items;
use super::options::RenderOptions;
use super::walls::render_walls;

/// The whole room: floor at the back, then one "scenery" container where wall
/// tiles, door parts and items sort together by draw order. Door groups are
/// spliced in part by part so an item in a doorway lands between the arches.
pub fn render_room(
    room: &Room,
    atlas: &TextureAtlas,
    options: &RenderOptions,
) -> Result<Node, RenderError> {
    let floor = render_floor(room, atlas, options)?;
    let walls = render_walls(room, atlas, options)?;
    let items = render_items(room, atlas, options)?;
    let scenery: Vec<Node> = walls.into_iter().flat_map(Node::ungroup).chain(items).collect();
    let mut root = Node::group("room", Vec::with_capacity(2));
    root.push(floor);
    root.push(Node::group("scenery", scenery));
    log::debug!(
        "composed room {} ({} x {}, {}): {} sprite(s)",
        room.id,
        room.size.x,
        room.size.y,
        room.planet,
        root.sprite_count()
    );
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use blacktooth_geom::Xyz;
    use blacktooth_model::{Direction, Item, ItemConfig, Planet, RoomId};

    fn labels_in_draw_order(node: &Node) -> Vec<&'static str> {
        node.draw_list().iter().map(|e| e.label).collect()
    }

    #[test]
    fn doorway_item_draws_between_the_arches() {
        let room = Room::new("j", Planet::Jail, 4, 4)
            .with_door(Direction::Left, 1, "out")
            .with_item(Item::new(ItemConfig::Ball {}, Xyz::new(4.3, 2.0, 0.0)));
        let options = RenderOptions::new(Rc::new(|_: &RoomId| {}));
        let node = render_room(&room, &TextureAtlas::builtin(), &options).unwrap();
        let order = labels_in_draw_order(&node);
        let at = |label| order.iter().position(|l| *l == label).unwrap();
        assert!(at("door.back") < at("ball"));
        assert!(at("ball") < at("door.front"));
    }

    #[test]
    fn items_in_the_room_draw_over_the_walls() {
        let room = Room::new("b", Planet::Blacktooth, 3, 3)
            .with_item(Item::new(ItemConfig::Spring {}, Xyz::new(2.8, 0.5, 0.0)));
        let options = RenderOptions::new(Rc::new(|_: &RoomId| {}));
        let node = render_room(&room, &TextureAtlas::builtin(), &options).unwrap();
        let order = labels_in_draw_order(&node);
        let last_wall = order.iter().rposition(|l| *l == "wall").unwrap();
        assert!(order.iter().position(|l| *l == "spring").unwrap() > last_wall);
    }

    #[test]
    fn doors_keep_their_portal_when_spliced() {
        let room = Room::new("m", Planet::Market, 4, 4).with_door(Direction::Away, 0, "next");
        let options = RenderOptions::new(Rc::new(|_: &RoomId| {}));
        let node = render_room(&room, &TextureAtlas::builtin(), &options).unwrap();
        let parts: Vec<_> = node
            .draw_list()
            .into_iter()
            .filter(|e| e.label.starts_with("door."))
            .collect();
        assert_eq!(parts.len(), 5);
        assert!(parts.iter().all(|e| e.portal.map(|p| p.target.as_str()) == Some("next")));
    }
}

use blacktooth_atlas::{ActorFamily, AnimationId, ItemTexture, TextureAtlas, TextureId};
use blacktooth_model::item::{
    BaddieKind, BlockStyle, DeadlyStyle, MovableStyle, PickupGives, PortableStyle,
};
use blacktooth_model::{Axis, Direction, ItemConfig, Room};
use blacktooth_scene::{Look, Node, SpriteOptions, place_sprite, register_portal};

use super::error::RenderError;
use super::options::RenderOptions;

const LIFT_FRAMES: i32 = 4;

fn item(t: ItemTexture) -> Look {
    Look::Texture(TextureId::Item(t))
}

fn actor(family: ActorFamily, facing: Direction) -> Look {
    Look::Texture(TextureId::Actor { family, facing })
}

/// What an item looks like. `None` only for kinds the model did not recognise.
pub fn appearance(config: &ItemConfig) -> Option<Look> {
    use ItemTexture as T;
    Some(match config {
        ItemConfig::Teleporter { .. } => item(T::Teleporter),
        ItemConfig::Barrier { axis } => item(T::Barrier(*axis)),
        ItemConfig::Block { style } => item(match style {
            BlockStyle::Organic => T::BlockOrganic,
            BlockStyle::Artificial => T::BlockArtificial,
            BlockStyle::Tower => T::BlockTower,
        }),
        ItemConfig::DeadlyBlock { style } => item(match style {
            DeadlyStyle::Volcano => T::Volcano,
            DeadlyStyle::Toaster => T::Toaster,
            DeadlyStyle::Spikes => T::Spikes,
        }),
        ItemConfig::Conveyor { direction } => item(T::Conveyor(direction.axis())),
        ItemConfig::Pickup { gives } => item(match gives {
            PickupGives::Hooter => T::Hooter,
            PickupGives::Bag => T::Bag,
            PickupGives::Donuts => T::Donuts,
            PickupGives::Jumps | PickupGives::ExtraLife | PickupGives::Shield => T::Bunny,
        }),
        ItemConfig::Fish { alive: true } => Look::Animation(AnimationId::Fish),
        ItemConfig::Fish { alive: false } => item(T::Fish2),
        ItemConfig::Spring {} => item(T::SpringReleased),
        ItemConfig::Lift { top, bottom } => {
            item(T::Lift(top.saturating_sub(*bottom).clamp(1, LIFT_FRAMES) as u8))
        }
        ItemConfig::Joystick {} => item(T::Joystick),
        ItemConfig::MovableBlock { style } => item(match style {
            MovableStyle::Puck => T::Puck,
            MovableStyle::Anvil => T::Anvil,
            MovableStyle::Sandwich => T::Sandwich,
        }),
        ItemConfig::Book { slider } => item(T::Book(if *slider { Axis::X } else { Axis::Y })),
        ItemConfig::PortableBlock { style } => item(match style {
            PortableStyle::Drum => T::Drum,
            PortableStyle::Cube => T::Cube,
            PortableStyle::Sticks => T::Sticks,
        }),
        ItemConfig::Charles {} => actor(ActorFamily::Charles, Direction::Towards),
        ItemConfig::Switch { on } => item(if *on { T::SwitchOn } else { T::SwitchOff }),
        ItemConfig::Baddie {
            which,
            start_direction,
            ..
        } => match which {
            BaddieKind::Dalek => Look::Animation(AnimationId::Dalek),
            BaddieKind::HelicopterBug => Look::Animation(AnimationId::HelicopterBug),
            BaddieKind::Cyberman => actor(ActorFamily::Cyberman, *start_direction),
            BaddieKind::AmericanFootballHead => {
                actor(ActorFamily::AmericanFootballHead, *start_direction)
            }
            BaddieKind::Monkey => actor(ActorFamily::Monkey, *start_direction),
            BaddieKind::Elephant => actor(ActorFamily::Elephant, *start_direction),
            BaddieKind::ComputerBot => actor(ActorFamily::ComputerBot, *start_direction),
        },
        ItemConfig::HushPuppy {} => item(T::HushPuppy),
        ItemConfig::Ball {} => item(T::Ball),
        ItemConfig::Unrecognized { .. } => return None,
    })
}

/// One z-ordered sprite per item. Teleporters lead to their destination; lifts
/// lead up when the room has a room above.
pub fn render_items(
    room: &Room,
    atlas: &TextureAtlas,
    options: &RenderOptions,
) -> Result<Vec<Node>, RenderError> {
    let mut out = Vec::with_capacity(room.items.len());
    for (index, it) in room.items.iter().enumerate() {
        let Some(look) = appearance(&it.config) else {
            log::warn!(
                "room {}: skipping item {} of unrecognised kind \"{}\"",
                room.id,
                index,
                it.config.kind_name()
            );
            continue;
        };
        let target = match &it.config {
            ItemConfig::Teleporter { to_room } => Some(to_room.as_ref().ok_or_else(|| {
                RenderError::TeleporterWithoutDestination {
                    room: room.id.clone(),
                    item: index,
                }
            })?),
            ItemConfig::Lift { .. } => room.room_above.as_ref(),
            _ => None,
        };
        let node = place_sprite(
            atlas,
            it.kind().map_or("item", |k| k.name()),
            it.position,
            look,
            SpriteOptions::anchored(0.5, 1.0).z_ordered(),
        )
        .map_err(RenderError::art(&room.id))?;
        let mut one = [node];
        if let Some(target) = target {
            register_portal(target, &options.on_navigate, &mut one);
        }
        out.extend(one);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use blacktooth_geom::Xyz;
    use blacktooth_model::{Item, Planet, RoomId};

    fn options() -> RenderOptions {
        RenderOptions::new(Rc::new(|_: &RoomId| {}))
    }

    #[test]
    fn lift_frames_clamp() {
        let lift = |top, bottom| appearance(&ItemConfig::Lift { top, bottom });
        assert_eq!(lift(9, 0), Some(item(ItemTexture::Lift(4))));
        assert_eq!(lift(0, 3), Some(item(ItemTexture::Lift(1))));
        assert_eq!(lift(2, 0), Some(item(ItemTexture::Lift(2))));
        assert_eq!(lift(i32::MAX, -1), Some(item(ItemTexture::Lift(4))));
        assert_eq!(lift(i32::MIN, 1), Some(item(ItemTexture::Lift(1))));
        assert_eq!(lift(i32::MAX, i32::MIN), Some(item(ItemTexture::Lift(4))));
    }

    #[test]
    fn axis_variants_follow_config() {
        assert_eq!(
            appearance(&ItemConfig::Conveyor {
                direction: Direction::Left
            }),
            Some(item(ItemTexture::Conveyor(Axis::Y)))
        );
        assert_eq!(
            appearance(&ItemConfig::Book { slider: true }),
            Some(item(ItemTexture::Book(Axis::X)))
        );
    }

    #[test]
    fn baddies_face_their_start_direction() {
        let look = appearance(&ItemConfig::Baddie {
            which: BaddieKind::Monkey,
            start_direction: Direction::Away,
            charging: false,
        });
        assert_eq!(look, Some(actor(ActorFamily::Monkey, Direction::Away)));
    }

    #[test]
    fn teleporter_needs_destination() {
        let room = Room::new("r", Planet::Penitentiary, 3, 3).with_item(Item::new(
            ItemConfig::Teleporter { to_room: None },
            Xyz::new(1.0, 1.0, 0.0),
        ));
        let err = render_items(&room, &TextureAtlas::builtin(), &options()).unwrap_err();
        assert_eq!(
            err,
            RenderError::TeleporterWithoutDestination {
                room: RoomId::from("r"),
                item: 0
            }
        );
    }

    #[test]
    fn unrecognised_kinds_are_skipped() {
        let room = Room::new("r", Planet::Penitentiary, 3, 3)
            .with_item(Item::new(
                ItemConfig::Unrecognized {
                    kind: "mystery".to_string(),
                    config: Default::default(),
                },
                Xyz::default(),
            ))
            .with_item(Item::new(ItemConfig::Ball {}, Xyz::new(1.0, 0.0, 0.0)));
        let nodes = render_items(&room, &TextureAtlas::builtin(), &options()).unwrap();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].label, "ball");
    }

    #[test]
    fn lift_without_room_above_is_not_a_portal() {
        let room = Room::new("r", Planet::Safari, 3, 3)
            .with_item(Item::new(ItemConfig::Lift { top: 2, bottom: 0 }, Xyz::default()));
        let nodes = render_items(&room, &TextureAtlas::builtin(), &options()).unwrap();
        assert!(nodes[0].portal.is_none());
    }
}

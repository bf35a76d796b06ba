use blacktooth_geom::Xyz;
use serde::{Deserialize, Serialize};

use super::planet::{Axis, Direction};
use super::room::RoomId;

/// Every item kind the renderer knows about. Anything else loads as
/// [`ItemConfig::Unrecognized`] and is left out of the render.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Teleporter,
    Barrier,
    Block,
    DeadlyBlock,
    Conveyor,
    Pickup,
    Fish,
    Spring,
    Lift,
    Joystick,
    MovableBlock,
    Book,
    PortableBlock,
    Charles,
    Switch,
    Baddie,
    HushPuppy,
    Ball,
}

impl ItemKind {
    pub const ALL: [ItemKind; 18] = [
        ItemKind::Teleporter,
        ItemKind::Barrier,
        ItemKind::Block,
        ItemKind::DeadlyBlock,
        ItemKind::Conveyor,
        ItemKind::Pickup,
        ItemKind::Fish,
        ItemKind::Spring,
        ItemKind::Lift,
        ItemKind::Joystick,
        ItemKind::MovableBlock,
        ItemKind::Book,
        ItemKind::PortableBlock,
        ItemKind::Charles,
        ItemKind::Switch,
        ItemKind::Baddie,
        ItemKind::HushPuppy,
        ItemKind::Ball,
    ];

    /// Name used for the `type` tag in room data.
    pub fn name(self) -> &'static str {
        match self {
            ItemKind::Teleporter => "teleporter",
            ItemKind::Barrier => "barrier",
            ItemKind::Block => "block",
            ItemKind::DeadlyBlock => "deadly-block",
            ItemKind::Conveyor => "conveyor",
            ItemKind::Pickup => "pickup",
            ItemKind::Fish => "fish",
            ItemKind::Spring => "spring",
            ItemKind::Lift => "lift",
            ItemKind::Joystick => "joystick",
            ItemKind::MovableBlock => "movable-block",
            ItemKind::Book => "book",
            ItemKind::PortableBlock => "portable-block",
            ItemKind::Charles => "charles",
            ItemKind::Switch => "switch",
            ItemKind::Baddie => "baddie",
            ItemKind::HushPuppy => "hush-puppy",
            ItemKind::Ball => "ball",
        }
    }

    pub fn from_name(s: &str) -> Option<ItemKind> {
        ItemKind::ALL.into_iter().find(|k| k.name() == s)
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockStyle {
    Organic,
    Artificial,
    Tower,
}

impl BlockStyle {
    pub const ALL: [BlockStyle; 3] = [BlockStyle::Organic, BlockStyle::Artificial, BlockStyle::Tower];
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeadlyStyle {
    Volcano,
    Toaster,
    Spikes,
}

impl DeadlyStyle {
    pub const ALL: [DeadlyStyle; 3] = [DeadlyStyle::Volcano, DeadlyStyle::Toaster, DeadlyStyle::Spikes];
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PickupGives {
    Hooter,
    Bag,
    Jumps,
    ExtraLife,
    Shield,
    Donuts,
}

impl PickupGives {
    pub const ALL: [PickupGives; 6] = [
        PickupGives::Hooter,
        PickupGives::Bag,
        PickupGives::Jumps,
        PickupGives::ExtraLife,
        PickupGives::Shield,
        PickupGives::Donuts,
    ];
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MovableStyle {
    Puck,
    Anvil,
    Sandwich,
}

impl MovableStyle {
    pub const ALL: [MovableStyle; 3] = [MovableStyle::Puck, MovableStyle::Anvil, MovableStyle::Sandwich];
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PortableStyle {
    Drum,
    Cube,
    Sticks,
}

impl PortableStyle {
    pub const ALL: [PortableStyle; 3] = [PortableStyle::Drum, PortableStyle::Cube, PortableStyle::Sticks];
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BaddieKind {
    HelicopterBug,
    Cyberman,
    Dalek,
    AmericanFootballHead,
    Monkey,
    Elephant,
    ComputerBot,
}

impl BaddieKind {
    pub const ALL: [BaddieKind; 7] = [
        BaddieKind::HelicopterBug,
        BaddieKind::Cyberman,
        BaddieKind::Dalek,
        BaddieKind::AmericanFootballHead,
        BaddieKind::Monkey,
        BaddieKind::Elephant,
        BaddieKind::ComputerBot,
    ];
}

fn default_start_direction() -> Direction {
    Direction::Left
}

/// Kind-specific configuration. Serialized as `{"type": <kind>, "config": {...}}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "config",
    rename_all = "kebab-case",
    rename_all_fields = "camelCase"
)]
pub enum ItemConfig {
    Teleporter {
        #[serde(default)]
        to_room: Option<RoomId>,
    },
    Barrier {
        axis: Axis,
    },
    Block {
        style: BlockStyle,
    },
    DeadlyBlock {
        style: DeadlyStyle,
    },
    Conveyor {
        direction: Direction,
    },
    Pickup {
        gives: PickupGives,
    },
    Fish {
        alive: bool,
    },
    Spring {},
    Lift {
        top: i32,
        bottom: i32,
    },
    Joystick {},
    MovableBlock {
        style: MovableStyle,
    },
    Book {
        slider: bool,
    },
    PortableBlock {
        style: PortableStyle,
    },
    Charles {},
    Switch {
        #[serde(default)]
        on: bool,
    },
    Baddie {
        which: BaddieKind,
        #[serde(default = "default_start_direction")]
        start_direction: Direction,
        #[serde(default)]
        charging: bool,
    },
    HushPuppy {},
    Ball {},
    /// Kind not in [`ItemKind::ALL`]; kept so the renderer can report and skip it.
    #[serde(skip)]
    Unrecognized {
        kind: String,
        config: serde_json::Value,
    },
}

impl ItemConfig {
    pub fn kind(&self) -> Option<ItemKind> {
        Some(match self {
            ItemConfig::Teleporter { .. } => ItemKind::Teleporter,
            ItemConfig::Barrier { .. } => ItemKind::Barrier,
            ItemConfig::Block { .. } => ItemKind::Block,
            ItemConfig::DeadlyBlock { .. } => ItemKind::DeadlyBlock,
            ItemConfig::Conveyor { .. } => ItemKind::Conveyor,
            ItemConfig::Pickup { .. } => ItemKind::Pickup,
            ItemConfig::Fish { .. } => ItemKind::Fish,
            ItemConfig::Spring {} => ItemKind::Spring,
            ItemConfig::Lift { .. } => ItemKind::Lift,
            ItemConfig::Joystick {} => ItemKind::Joystick,
            ItemConfig::MovableBlock { .. } => ItemKind::MovableBlock,
            ItemConfig::Book { .. } => ItemKind::Book,
            ItemConfig::PortableBlock { .. } => ItemKind::PortableBlock,
            ItemConfig::Charles {} => ItemKind::Charles,
            ItemConfig::Switch { .. } => ItemKind::Switch,
            ItemConfig::Baddie { .. } => ItemKind::Baddie,
            ItemConfig::HushPuppy {} => ItemKind::HushPuppy,
            ItemConfig::Ball {} => ItemKind::Ball,
            ItemConfig::Unrecognized { .. } => return None,
        })
    }

    /// The raw `type` tag, including unrecognized ones.
    pub fn kind_name(&self) -> &str {
        match self {
            ItemConfig::Unrecognized { kind, .. } => kind.as_str(),
            other => other.kind().map(ItemKind::name).unwrap_or_default(),
        }
    }

    pub fn teleport_destination(&self) -> Option<&RoomId> {
        match self {
            ItemConfig::Teleporter { to_room } => to_room.as_ref(),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawItem", into = "RawItem")]
pub struct Item {
    pub config: ItemConfig,
    /// Fractional block position; `z` is elevation in blocks.
    pub position: Xyz,
}

impl Item {
    pub fn new(config: ItemConfig, position: Xyz) -> Self {
        Self { config, position }
    }

    #[inline]
    pub fn kind(&self) -> Option<ItemKind> {
        self.config.kind()
    }
}

/// Wire form of an item, before the `type` tag is checked against the known kinds.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct RawItem {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default = "empty_config")]
    config: serde_json::Value,
    position: Xyz,
}

fn empty_config() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

impl TryFrom<RawItem> for Item {
    type Error = String;

    fn try_from(raw: RawItem) -> Result<Self, Self::Error> {
        let config = if ItemKind::from_name(&raw.kind).is_some() {
            let tagged = serde_json::json!({ "type": raw.kind, "config": raw.config });
            serde_json::from_value(tagged)
                .map_err(|e| format!("bad config for {} item: {}", raw.kind, e))?
        } else {
            ItemConfig::Unrecognized {
                kind: raw.kind,
                config: raw.config,
            }
        };
        Ok(Item {
            config,
            position: raw.position,
        })
    }
}

impl From<Item> for RawItem {
    fn from(item: Item) -> Self {
        let (kind, config) = match item.config {
            ItemConfig::Unrecognized { kind, config } => (kind, config),
            known => {
                let kind = known.kind_name().to_string();
                let config = match serde_json::to_value(&known) {
                    Ok(serde_json::Value::Object(mut tagged)) => {
                        tagged.remove("config").unwrap_or_else(empty_config)
                    }
                    _ => empty_config(),
                };
                (kind, config)
            }
        };
        RawItem {
            kind,
            config,
            position: item.position,
        }
    }
}

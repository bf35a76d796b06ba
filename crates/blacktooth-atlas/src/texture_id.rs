use std::fmt;
use std::str::FromStr;

use blacktooth_model::{Axis, Direction, Planet};

/// Symbolic name of one rectangle of the sprite sheet.
///
/// The canonical string form (`Display`/`FromStr`) is the dotted key used in atlas
/// override files and diagnostics, e.g. `blacktooth.wall.armour.left`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TextureId {
    /// Far-wall tile. `side` is `Left` or `Away`; `style` is interned from
    /// [`Planet::wall_styles`].
    Wall {
        planet: Planet,
        style: &'static str,
        side: Direction,
    },
    Floor(Planet),
    DeadlyFloor,
    /// Thin highlight along a near edge; `Towards` or `Right`.
    Edge(Direction),
    WallOverdraw,
    Door(DoorPart),
    Item(ItemTexture),
    /// One facing of a four-way actor sprite.
    Actor {
        family: ActorFamily,
        facing: Direction,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DoorFamily {
    Generic,
    Moonbase,
}

impl DoorFamily {
    pub const ALL: [DoorFamily; 2] = [DoorFamily::Generic, DoorFamily::Moonbase];

    /// Moonbase has its own arches; everyone else shares the generic ones.
    pub fn for_planet(planet: Planet) -> DoorFamily {
        match planet {
            Planet::Moonbase => DoorFamily::Moonbase,
            _ => DoorFamily::Generic,
        }
    }

    fn prefix(self) -> &'static str {
        match self {
            DoorFamily::Generic => "generic",
            DoorFamily::Moonbase => "moonbase",
        }
    }
}

/// Door parts are named after the axis the doorway runs along:
/// x for away/towards walls, y for left/right walls.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DoorPart {
    LegsBase,
    LegsPillar,
    LegsThreshold(Axis),
    Threshold(Axis),
    Front(DoorFamily, Axis),
    Back(DoorFamily, Axis),
    /// `Towards` or `Left`.
    Platform(Direction),
}

/// Hand-placed one-off sprites for items.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ItemTexture {
    Teleporter,
    Barrier(Axis),
    BlockOrganic,
    BlockArtificial,
    BlockTower,
    Volcano,
    Toaster,
    Spikes,
    Conveyor(Axis),
    Bunny,
    Donuts,
    Hooter,
    Bag,
    Fish1,
    Fish2,
    SpringCompressed,
    SpringReleased,
    HeadTowards,
    HeelsTowards,
    /// Frames 1..=4.
    Lift(u8),
    /// Frames 1..=2.
    Dalek(u8),
    /// Frames 1..=4.
    HelicopterBug(u8),
    Joystick,
    Anvil,
    Book(Axis),
    Sandwich,
    Sticks,
    Cube,
    Drum,
    SwitchOff,
    SwitchOn,
    HushPuppy,
    Ball,
    Puck,
}

impl ItemTexture {
    pub fn all() -> Vec<ItemTexture> {
        use ItemTexture::*;
        let mut out = vec![
            Teleporter,
            Barrier(Axis::X),
            Barrier(Axis::Y),
            BlockOrganic,
            BlockArtificial,
            BlockTower,
            Volcano,
            Toaster,
            Spikes,
            Conveyor(Axis::X),
            Conveyor(Axis::Y),
            Bunny,
            Donuts,
            Hooter,
            Bag,
            Fish1,
            Fish2,
            SpringCompressed,
            SpringReleased,
            HeadTowards,
            HeelsTowards,
            Joystick,
            Anvil,
            Book(Axis::X),
            Book(Axis::Y),
            Sandwich,
            Sticks,
            Cube,
            Drum,
            SwitchOff,
            SwitchOn,
            HushPuppy,
            Ball,
            Puck,
        ];
        out.extend((1..=4).map(Lift));
        out.extend((1..=2).map(Dalek));
        out.extend((1..=4).map(HelicopterBug));
        out
    }
}

impl fmt::Display for ItemTexture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ItemTexture::*;
        match self {
            Teleporter => f.write_str("teleporter"),
            Barrier(axis) => write!(f, "barrier.{}", axis.name()),
            BlockOrganic => f.write_str("block.organic"),
            BlockArtificial => f.write_str("block.artificial"),
            BlockTower => f.write_str("block.tower"),
            Volcano => f.write_str("volcano"),
            Toaster => f.write_str("toaster"),
            Spikes => f.write_str("spikes"),
            Conveyor(axis) => write!(f, "conveyor.{}", axis.name()),
            Bunny => f.write_str("bunny"),
            Donuts => f.write_str("donuts"),
            Hooter => f.write_str("hooter"),
            Bag => f.write_str("bag"),
            Fish1 => f.write_str("fish1"),
            Fish2 => f.write_str("fish2"),
            SpringCompressed => f.write_str("spring.compressed"),
            SpringReleased => f.write_str("spring.released"),
            HeadTowards => f.write_str("head.toward1"),
            HeelsTowards => f.write_str("heels.toward1"),
            Lift(n) => write!(f, "lift.{}", n),
            Dalek(n) => write!(f, "baddies.dalek.{}", n),
            HelicopterBug(n) => write!(f, "helicopter-bug.{}", n),
            Joystick => f.write_str("joystick"),
            Anvil => f.write_str("anvil"),
            Book(axis) => write!(f, "book.{}", axis.name()),
            Sandwich => f.write_str("sandwich"),
            Sticks => f.write_str("sticks"),
            Cube => f.write_str("cube"),
            Drum => f.write_str("drum"),
            SwitchOff => f.write_str("switch.off"),
            SwitchOn => f.write_str("switch.on"),
            HushPuppy => f.write_str("hush-puppy"),
            Ball => f.write_str("ball"),
            Puck => f.write_str("puck"),
        }
    }
}

/// Actors drawn from a 2x2 block of facings.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ActorFamily {
    AmericanFootballHead,
    Charles,
    Cyberman,
    Monkey,
    Elephant,
    ComputerBot,
}

impl ActorFamily {
    pub const ALL: [ActorFamily; 6] = [
        ActorFamily::AmericanFootballHead,
        ActorFamily::Charles,
        ActorFamily::Cyberman,
        ActorFamily::Monkey,
        ActorFamily::Elephant,
        ActorFamily::ComputerBot,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ActorFamily::AmericanFootballHead => "american-football-head",
            ActorFamily::Charles => "charles",
            ActorFamily::Cyberman => "cyberman",
            ActorFamily::Monkey => "monkey",
            ActorFamily::Elephant => "elephant",
            ActorFamily::ComputerBot => "computer-bot",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AnimationId {
    Fish,
    Lift,
    Dalek,
    HelicopterBug,
}

impl AnimationId {
    pub const ALL: [AnimationId; 4] = [
        AnimationId::Fish,
        AnimationId::Lift,
        AnimationId::Dalek,
        AnimationId::HelicopterBug,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AnimationId::Fish => "fish",
            AnimationId::Lift => "lift",
            AnimationId::Dalek => "dalek",
            AnimationId::HelicopterBug => "helicopter-bug",
        }
    }
}

impl fmt::Display for AnimationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TextureId {
    /// Every id the sheet layout defines, in a stable order.
    pub fn all() -> Vec<TextureId> {
        let mut out = Vec::new();
        for planet in Planet::ALL {
            for &style in planet.wall_styles() {
                for side in [Direction::Left, Direction::Away] {
                    out.push(TextureId::Wall { planet, style, side });
                }
            }
            out.push(TextureId::Floor(planet));
        }
        out.push(TextureId::DeadlyFloor);
        out.push(TextureId::Edge(Direction::Towards));
        out.push(TextureId::Edge(Direction::Right));
        out.push(TextureId::WallOverdraw);
        out.push(TextureId::Door(DoorPart::LegsBase));
        out.push(TextureId::Door(DoorPart::LegsPillar));
        for axis in Axis::ALL {
            out.push(TextureId::Door(DoorPart::LegsThreshold(axis)));
            out.push(TextureId::Door(DoorPart::Threshold(axis)));
            for family in DoorFamily::ALL {
                out.push(TextureId::Door(DoorPart::Front(family, axis)));
                out.push(TextureId::Door(DoorPart::Back(family, axis)));
            }
        }
        out.push(TextureId::Door(DoorPart::Platform(Direction::Towards)));
        out.push(TextureId::Door(DoorPart::Platform(Direction::Left)));
        out.extend(ItemTexture::all().into_iter().map(TextureId::Item));
        for family in ActorFamily::ALL {
            for facing in Direction::ALL {
                out.push(TextureId::Actor { family, facing });
            }
        }
        out
    }
}

impl fmt::Display for TextureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextureId::Wall {
                planet,
                style,
                side,
            } => write!(f, "{}.wall.{}.{}", planet.name(), style, side.name()),
            TextureId::Floor(planet) => write!(f, "{}.floor", planet.name()),
            TextureId::DeadlyFloor => f.write_str("generic.floor.deadly"),
            TextureId::Edge(side) => write!(f, "generic.edge.{}", side.name()),
            TextureId::WallOverdraw => f.write_str("generic.wall.overdraw"),
            TextureId::Door(part) => match part {
                DoorPart::LegsBase => f.write_str("generic.door.legs.base"),
                DoorPart::LegsPillar => f.write_str("generic.door.legs.pillar"),
                DoorPart::LegsThreshold(axis) => {
                    write!(f, "generic.door.legs.threshold.{}", axis.name())
                }
                DoorPart::Threshold(axis) => write!(f, "generic.door.threshold.{}", axis.name()),
                DoorPart::Front(family, axis) => {
                    write!(f, "{}.door.front.{}", family.prefix(), axis.name())
                }
                DoorPart::Back(family, axis) => {
                    write!(f, "{}.door.back.{}", family.prefix(), axis.name())
                }
                DoorPart::Platform(side) => write!(f, "generic.door.platform.{}", side.name()),
            },
            TextureId::Item(item) => fmt::Display::fmt(item, f),
            TextureId::Actor { family, facing } => {
                write!(f, "{}.{}", family.name(), facing.name())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTextureName(pub String);

impl fmt::Display for UnknownTextureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown texture id \"{}\"", self.0)
    }
}

impl std::error::Error for UnknownTextureName {}

impl FromStr for TextureId {
    type Err = UnknownTextureName;

    // Only used for config files, so a scan over the closed id set is fine.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextureId::all()
            .into_iter()
            .find(|id| id.to_string() == s)
            .ok_or_else(|| UnknownTextureName(s.to_string()))
    }
}

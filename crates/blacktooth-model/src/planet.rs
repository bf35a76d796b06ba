use serde::{Deserialize, Serialize};

/// Themed texture family for a room's walls and floor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Planet {
    Blacktooth,
    Bookworld,
    Egyptus,
    Jail,
    Market,
    Moonbase,
    Penitentiary,
    Safari,
}

impl Planet {
    pub const ALL: [Planet; 8] = [
        Planet::Blacktooth,
        Planet::Bookworld,
        Planet::Egyptus,
        Planet::Jail,
        Planet::Market,
        Planet::Moonbase,
        Planet::Penitentiary,
        Planet::Safari,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Planet::Blacktooth => "blacktooth",
            Planet::Bookworld => "bookworld",
            Planet::Egyptus => "egyptus",
            Planet::Jail => "jail",
            Planet::Market => "market",
            Planet::Moonbase => "moonbase",
            Planet::Penitentiary => "penitentiary",
            Planet::Safari => "safari",
        }
    }

    pub fn from_name(s: &str) -> Option<Planet> {
        Planet::ALL.into_iter().find(|p| p.name() == s)
    }

    /// Wall styles in sprite-sheet order. The order drives where each style's
    /// tiles sit in the sheet, so it must not be re-sorted.
    pub fn wall_styles(self) -> &'static [&'static str] {
        match self {
            Planet::Blacktooth => &["armour", "shield", "plain"],
            Planet::Bookworld => &["cowboy", "book"],
            Planet::Egyptus => &["hieroglyphics", "sarcophagus"],
            Planet::Jail => &["bars", "skeleton"],
            Planet::Market => &["fruits", "baskets", "plain"],
            Planet::Moonbase => &["coil", "window", "computer"],
            Planet::Penitentiary => &["loop", "skeleton"],
            Planet::Safari => &["shield", "wall", "window"],
        }
    }

    /// Interns a wall style name for this planet.
    pub fn wall_style(self, name: &str) -> Option<&'static str> {
        self.wall_styles().iter().copied().find(|s| *s == name)
    }
}

impl std::fmt::Display for Planet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The four facings. Each is its own case; there is no rotation arithmetic.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Away,
    Towards,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Away,
        Direction::Towards,
        Direction::Left,
        Direction::Right,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Direction::Away => "away",
            Direction::Towards => "towards",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    pub fn from_name(s: &str) -> Option<Direction> {
        Direction::ALL.into_iter().find(|d| d.name() == s)
    }

    /// Axis the facing points along: away/towards run along x, left/right along y.
    #[inline]
    pub fn axis(self) -> Axis {
        match self {
            Direction::Away | Direction::Towards => Axis::X,
            Direction::Left | Direction::Right => Axis::Y,
        }
    }

    /// Near sides face the camera and are open unless a door sits there.
    #[inline]
    pub fn is_near(self) -> bool {
        matches!(self, Direction::Towards | Direction::Right)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];

    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
        }
    }

    pub fn from_name(s: &str) -> Option<Axis> {
        Axis::ALL.into_iter().find(|a| a.name() == s)
    }
}

/// Room hue from the Spectrum palette; selects the hint palette entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZxColour {
    Black,
    Blue,
    Red,
    Magenta,
    Green,
    Cyan,
    Yellow,
    White,
}

impl ZxColour {
    pub const ALL: [ZxColour; 8] = [
        ZxColour::Black,
        ZxColour::Blue,
        ZxColour::Red,
        ZxColour::Magenta,
        ZxColour::Green,
        ZxColour::Cyan,
        ZxColour::Yellow,
        ZxColour::White,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ZxColour::Black => "black",
            ZxColour::Blue => "blue",
            ZxColour::Red => "red",
            ZxColour::Magenta => "magenta",
            ZxColour::Green => "green",
            ZxColour::Cyan => "cyan",
            ZxColour::Yellow => "yellow",
            ZxColour::White => "white",
        }
    }
}

//! Block-grid coordinates and the 2:1 isometric projection (no renderer dependency).
#![forbid(unsafe_code)]

use core::ops::{Add, AddAssign, Mul, Sub, SubAssign};

/// Size of one block in sprite-sheet pixels. `w`/`d` are the two horizontal axes,
/// `h` is the vertical rise of one block of elevation.
pub const BLOCK_PX: BlockPx = BlockPx { w: 16.0, d: 16.0, h: 12.0 };

/// Width of a floor diamond; the projection is defined in terms of it.
pub const TILE_W: f32 = 32.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlockPx {
    pub w: f32,
    pub d: f32,
    pub h: f32,
}

/// Position on a room's floor grid, in blocks. Half steps address seams.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Xy {
    pub x: f32,
    pub y: f32,
}

impl Xy {
    pub const ORIGIN: Xy = Xy { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Xy {
    type Output = Xy;
    #[inline]
    fn add(self, rhs: Xy) -> Xy {
        Xy::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Xy {
    type Output = Xy;
    #[inline]
    fn sub(self, rhs: Xy) -> Xy {
        Xy::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Block position plus elevation (`z`, in blocks). Items carry these.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Xyz {
    pub x: f32,
    pub y: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub z: f32,
}

impl Xyz {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn xy(self) -> Xy {
        Xy { x: self.x, y: self.y }
    }
}

impl From<Xy> for Xyz {
    #[inline]
    fn from(v: Xy) -> Self {
        Xyz::new(v.x, v.y, 0.0)
    }
}

/// Screen-space point in pixels. `y` grows down the screen.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for ScreenPoint {
    type Output = ScreenPoint;
    #[inline]
    fn add(self, rhs: ScreenPoint) -> ScreenPoint {
        ScreenPoint::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for ScreenPoint {
    #[inline]
    fn add_assign(&mut self, rhs: ScreenPoint) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for ScreenPoint {
    type Output = ScreenPoint;
    #[inline]
    fn sub(self, rhs: ScreenPoint) -> ScreenPoint {
        ScreenPoint::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for ScreenPoint {
    #[inline]
    fn sub_assign(&mut self, rhs: ScreenPoint) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f32> for ScreenPoint {
    type Output = ScreenPoint;
    #[inline]
    fn mul(self, rhs: f32) -> ScreenPoint {
        ScreenPoint::new(self.x * rhs, self.y * rhs)
    }
}

/// Axis-aligned screen rectangle (sprite bounds, hit areas).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl ScreenRect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Half-open containment: the right and bottom edges belong to the neighbour.
    #[inline]
    pub fn contains(&self, p: ScreenPoint) -> bool {
        p.x >= self.x && p.x < self.x + self.w && p.y >= self.y && p.y < self.y + self.h
    }
}

/// Projects a floor position to the screen. +x recedes up-left, +y recedes up-right;
/// one block moves `TILE_W / 2` across and `TILE_W / 4` up. No rounding: tiles placed
/// from adjacent block positions must butt exactly.
#[inline]
pub fn project(b: Xy) -> ScreenPoint {
    ScreenPoint {
        x: (b.y - b.x) * (TILE_W / 2.0),
        y: -(b.x + b.y) * (TILE_W / 4.0),
    }
}

/// Like [`project`], lifted by `BLOCK_PX.h` per block of elevation.
#[inline]
pub fn project_xyz(b: Xyz) -> ScreenPoint {
    let p = project(b.xy());
    ScreenPoint {
        x: p.x,
        y: p.y - b.z * BLOCK_PX.h,
    }
}

/// Back-to-front ordering key: larger keys draw later. Points nearer the viewer
/// (small `x + y`) and higher up draw over the ones behind and below them.
#[inline]
pub fn draw_order(b: Xyz) -> f32 {
    b.z - (b.x + b.y)
}

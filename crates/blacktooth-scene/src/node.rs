use std::fmt;
use std::str::FromStr;

use blacktooth_atlas::{AnimationId, SourceRect, TextureId};
use blacktooth_geom::{ScreenPoint, ScreenRect};
use serde::Deserialize;

use super::portal::Portal;

/// 24-bit colour, written `#rrggbb` in config files.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Rgb(pub u8, pub u8, pub u8);

impl FromStr for Rgb {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!("colour \"{}\" is not #rrggbb", s));
        }
        let byte = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| format!("colour \"{}\" is not #rrggbb", s))
        };
        Ok(Rgb(byte(0)?, byte(2)?, byte(4)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Which point of the texture lands on the node position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Anchor {
    /// Fraction of the frame size; (0.5, 1) is bottom centre.
    Normalized(f32, f32),
    /// Pixels from the frame's top-left corner.
    Pivot(f32, f32),
}

impl Anchor {
    #[inline]
    pub fn offset(self, w: u32, h: u32) -> ScreenPoint {
        match self {
            Anchor::Normalized(ax, ay) => ScreenPoint::new(ax * w as f32, ay * h as f32),
            Anchor::Pivot(px, py) => ScreenPoint::new(px, py),
        }
    }
}

/// Clip polygon in the owning node's local space. `stroke` widens the clip by
/// that many pixels centred on the outline.
#[derive(Clone, Debug, PartialEq)]
pub struct Mask {
    pub polygon: Vec<ScreenPoint>,
    pub stroke: f32,
}

impl Mask {
    pub fn new(polygon: Vec<ScreenPoint>, stroke: f32) -> Self {
        Self { polygon, stroke }
    }

    /// `p` is in the mask's local space.
    pub fn contains(&self, p: ScreenPoint) -> bool {
        point_in_polygon(&self.polygon, p) || self.near_outline(p, self.stroke / 2.0)
    }

    fn near_outline(&self, p: ScreenPoint, reach: f32) -> bool {
        if reach <= 0.0 || self.polygon.is_empty() {
            return false;
        }
        let n = self.polygon.len();
        (0..n).any(|i| seg_dist_sq(self.polygon[i], self.polygon[(i + 1) % n], p) <= reach * reach)
    }
}

// Even-odd crossing test.
fn point_in_polygon(poly: &[ScreenPoint], p: ScreenPoint) -> bool {
    let mut inside = false;
    let mut j = poly.len().wrapping_sub(1);
    for i in 0..poly.len() {
        let (a, b) = (poly[i], poly[j]);
        if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
            inside = !inside;
        }
        j = i;
    }
    inside
}

fn seg_dist_sq(a: ScreenPoint, b: ScreenPoint, p: ScreenPoint) -> f32 {
    let ab = b - a;
    let ap = p - a;
    let len_sq = ab.x * ab.x + ab.y * ab.y;
    let t = if len_sq > 0.0 {
        ((ap.x * ab.x + ap.y * ab.y) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let d = ap - ab * t;
    d.x * d.x + d.y * d.y
}

/// Non-destructive recolour applied when drawing a subtree.
#[derive(Clone, Debug, PartialEq)]
pub enum Filter {
    /// Replace each `from` colour with the `to` colour at the same index.
    PaletteSwap { from: Vec<Rgb>, to: Vec<Rgb> },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Animation {
    pub id: AnimationId,
    pub frames: Vec<TextureId>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    /// Resting frame; the first frame when animated.
    pub texture: TextureId,
    pub animation: Option<Animation>,
    /// Sheet rectangle of `texture`.
    pub frame: SourceRect,
    pub anchor: Anchor,
}

impl Sprite {
    /// Screen bounds when the anchor sits at `at`.
    pub fn bounds(&self, at: ScreenPoint) -> ScreenRect {
        let top_left = at - self.anchor.offset(self.frame.w, self.frame.h);
        ScreenRect::new(top_left.x, top_left.y, self.frame.w as f32, self.frame.h as f32)
    }
}

#[derive(Debug)]
pub enum NodeKind {
    Sprite(Sprite),
    Group(Vec<Node>),
}

/// One drawable. Positions are relative to the parent node.
#[derive(Debug)]
pub struct Node {
    pub label: &'static str,
    pub position: ScreenPoint,
    /// Sibling draw order; `None` sorts as 0. Ties keep insertion order.
    pub z_index: Option<f32>,
    pub mask: Option<Mask>,
    pub filters: Vec<Filter>,
    pub portal: Option<Portal>,
    pub kind: NodeKind,
}

impl Node {
    pub fn sprite(label: &'static str, position: ScreenPoint, sprite: Sprite) -> Self {
        Self::with_kind(label, position, NodeKind::Sprite(sprite))
    }

    pub fn group(label: &'static str, children: Vec<Node>) -> Self {
        Self::with_kind(label, ScreenPoint::default(), NodeKind::Group(children))
    }

    fn with_kind(label: &'static str, position: ScreenPoint, kind: NodeKind) -> Self {
        Self {
            label,
            position,
            z_index: None,
            mask: None,
            filters: Vec::new(),
            portal: None,
            kind,
        }
    }

    pub fn with_mask(mut self, mask: Mask) -> Self {
        self.mask = Some(mask);
        self
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn children(&self) -> &[Node] {
        match &self.kind {
            NodeKind::Group(children) => children,
            NodeKind::Sprite(_) => &[],
        }
    }

    pub fn as_sprite(&self) -> Option<&Sprite> {
        match &self.kind {
            NodeKind::Sprite(s) => Some(s),
            NodeKind::Group(_) => None,
        }
    }

    /// Appends to a group; sprites take no children and log instead.
    pub fn push(&mut self, child: Node) {
        match &mut self.kind {
            NodeKind::Group(children) => children.push(child),
            NodeKind::Sprite(_) => {
                log::warn!("dropping child {} pushed onto sprite {}", child.label, self.label)
            }
        }
    }

    /// Sprites in this subtree, counted depth-first.
    pub fn sprite_count(&self) -> usize {
        match &self.kind {
            NodeKind::Sprite(_) => 1,
            NodeKind::Group(children) => children.iter().map(Node::sprite_count).sum(),
        }
    }

    /// Splices a group into its parent's child list. Children come back offset by
    /// the group position, with the group's filters and portal applied and its key
    /// where they have none. Sprites, and groups carrying a mask, come back whole.
    pub fn ungroup(self) -> Vec<Node> {
        let Node {
            label,
            position,
            z_index,
            mask,
            filters,
            portal,
            kind,
        } = self;
        match kind {
            NodeKind::Group(children) if mask.is_none() => children
                .into_iter()
                .map(|mut child| {
                    child.position += position;
                    child.z_index = child.z_index.or(z_index);
                    child.filters.extend(filters.iter().cloned());
                    if child.portal.is_none() {
                        child.portal = portal.clone();
                    }
                    child
                })
                .collect(),
            kind => vec![Node {
                label,
                position,
                z_index,
                mask,
                filters,
                portal,
                kind,
            }],
        }
    }

    pub fn find(&self, label: &str) -> Option<&Node> {
        if self.label == label {
            return Some(self);
        }
        self.children().iter().find_map(|c| c.find(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colours() {
        assert_eq!("#ff8000".parse::<Rgb>(), Ok(Rgb(255, 128, 0)));
        assert_eq!("00ff00".parse::<Rgb>(), Ok(Rgb(0, 255, 0)));
        assert!("#fff".parse::<Rgb>().is_err());
        assert!("#gg0000".parse::<Rgb>().is_err());
        assert_eq!(Rgb(1, 2, 255).to_string(), "#0102ff");
    }

    #[test]
    fn anchors_offset_frames() {
        assert_eq!(Anchor::Normalized(0.5, 1.0).offset(32, 16), ScreenPoint::new(16.0, 16.0));
        assert_eq!(Anchor::Pivot(8.0, 56.0).offset(24, 56), ScreenPoint::new(8.0, 56.0));
    }

    fn dot(label: &'static str, x: f32) -> Node {
        Node::sprite(
            label,
            ScreenPoint::new(x, 0.0),
            Sprite {
                texture: TextureId::WallOverdraw,
                animation: None,
                frame: SourceRect { x: 0, y: 0, w: 4, h: 4 },
                anchor: Anchor::Normalized(0.0, 0.0),
            },
        )
    }

    #[test]
    fn ungroup_hands_down_offset_and_portal() {
        let navigate: crate::Navigate = std::rc::Rc::new(|_: &blacktooth_model::RoomId| {});
        let mut keyed = dot("b", 2.0);
        keyed.z_index = Some(-3.0);
        let mut group = Node::group("door", vec![dot("a", 1.0), keyed]);
        group.position = ScreenPoint::new(10.0, 5.0);
        group.z_index = Some(-1.0);
        group.portal = Some(Portal::new("next".into(), navigate));

        let parts = group.ungroup();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].position, ScreenPoint::new(11.0, 5.0));
        assert_eq!(parts[0].z_index, Some(-1.0));
        assert_eq!(parts[1].z_index, Some(-3.0));
        assert!(parts.iter().all(|p| p.portal.as_ref().map(|p| p.target.as_str()) == Some("next")));

        let single = dot("c", 0.0).ungroup();
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].label, "c");
    }

    #[test]
    fn masked_groups_stay_whole() {
        let square = Mask::new(vec![ScreenPoint::new(0.0, 0.0)], 0.0);
        let group = Node::group("clipped", vec![dot("a", 0.0), dot("b", 1.0)]).with_mask(square);
        let kept = group.ungroup();
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].children().len(), 2);
    }

    #[test]
    fn mask_stroke_widens_clip() {
        let square = Mask::new(
            vec![
                ScreenPoint::new(0.0, 0.0),
                ScreenPoint::new(10.0, 0.0),
                ScreenPoint::new(10.0, 10.0),
                ScreenPoint::new(0.0, 10.0),
            ],
            8.0,
        );
        assert!(square.contains(ScreenPoint::new(5.0, 5.0)));
        assert!(square.contains(ScreenPoint::new(13.5, 5.0)));
        assert!(!square.contains(ScreenPoint::new(14.5, 5.0)));
        let thin = Mask::new(square.polygon.clone(), 0.0);
        assert!(!thin.contains(ScreenPoint::new(10.5, 5.0)));
    }
}

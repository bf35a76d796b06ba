use blacktooth_geom::{ScreenPoint, ScreenRect};

use super::node::{Filter, Mask, Node, NodeKind, Sprite};
use super::portal::Portal;

/// One sprite as the compositor should draw it, in absolute screen space.
#[derive(Debug)]
pub struct DrawEntry<'a> {
    pub label: &'static str,
    pub sprite: &'a Sprite,
    pub bounds: ScreenRect,
    /// Filters from this node and every ancestor, innermost first.
    pub filters: Vec<&'a Filter>,
    /// Clip masks with the absolute origin of the node that owns each.
    pub masks: Vec<(ScreenPoint, &'a Mask)>,
    /// Nearest portal on this node or an ancestor.
    pub portal: Option<&'a Portal>,
}

impl DrawEntry<'_> {
    /// Inside the sprite and every clip mask above it.
    pub fn hit(&self, p: ScreenPoint) -> bool {
        self.bounds.contains(p) && self.masks.iter().all(|(origin, m)| m.contains(p - *origin))
    }
}

impl Node {
    /// Every sprite in the tree, back to front. Siblings are ordered by `z_index`
    /// with ties (and unkeyed nodes, as 0) left in insertion order.
    pub fn draw_list(&self) -> Vec<DrawEntry<'_>> {
        let mut out = Vec::new();
        self.flatten(ScreenPoint::default(), &Inherited::default(), &mut out);
        out
    }

    /// Top-most portal under `p`. Sprites that are not portals do not block.
    pub fn portal_at(&self, p: ScreenPoint) -> Option<&Portal> {
        self.draw_list()
            .into_iter()
            .rev()
            .filter(|e| e.portal.is_some())
            .find(|e| e.hit(p))
            .and_then(|e| e.portal)
    }

    /// Activates the portal under `p`, if any, returning whether one fired.
    pub fn click(&self, p: ScreenPoint) -> bool {
        match self.portal_at(p) {
            Some(portal) => {
                portal.activate();
                true
            }
            None => {
                log::trace!("click at ({}, {}) hit no portal", p.x, p.y);
                false
            }
        }
    }

    fn flatten<'a>(&'a self, parent: ScreenPoint, up: &Inherited<'a>, out: &mut Vec<DrawEntry<'a>>) {
        let origin = parent + self.position;
        let mut here = up.clone();
        // Innermost filters apply first.
        here.filters = self.filters.iter().chain(up.filters.iter().copied()).collect();
        if let Some(mask) = &self.mask {
            here.masks.push((origin, mask));
        }
        if let Some(portal) = &self.portal {
            here.portal = Some(portal);
        }
        match &self.kind {
            NodeKind::Sprite(sprite) => out.push(DrawEntry {
                label: self.label,
                sprite,
                bounds: sprite.bounds(origin),
                filters: here.filters,
                masks: here.masks,
                portal: here.portal,
            }),
            NodeKind::Group(children) => {
                let mut ordered: Vec<&Node> = children.iter().collect();
                ordered.sort_by(|a, b| {
                    a.z_index
                        .unwrap_or(0.0)
                        .total_cmp(&b.z_index.unwrap_or(0.0))
                });
                for child in ordered {
                    child.flatten(origin, &here, out);
                }
            }
        }
    }
}

#[derive(Clone, Default)]
struct Inherited<'a> {
    filters: Vec<&'a Filter>,
    masks: Vec<(ScreenPoint, &'a Mask)>,
    portal: Option<&'a Portal>,
}

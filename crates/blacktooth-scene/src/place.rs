use blacktooth_atlas::{AnimationId, AtlasError, TextureAtlas, TextureId};
use blacktooth_geom::{Xyz, draw_order, project_xyz};

use super::node::{Anchor, Animation, Node, Sprite};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpriteOptions {
    pub anchor: Anchor,
    /// Give the node a draw-order key from its block position.
    pub z_order: bool,
}

impl SpriteOptions {
    pub const fn anchored(ax: f32, ay: f32) -> Self {
        Self {
            anchor: Anchor::Normalized(ax, ay),
            z_order: false,
        }
    }

    pub const fn pivot(px: f32, py: f32) -> Self {
        Self {
            anchor: Anchor::Pivot(px, py),
            z_order: false,
        }
    }

    pub const fn z_ordered(mut self) -> Self {
        self.z_order = true;
        self
    }
}

/// What a placed sprite shows.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Look {
    Texture(TextureId),
    Animation(AnimationId),
}

impl From<TextureId> for Look {
    fn from(id: TextureId) -> Self {
        Look::Texture(id)
    }
}

impl From<AnimationId> for Look {
    fn from(id: AnimationId) -> Self {
        Look::Animation(id)
    }
}

/// One sprite whose anchor point sits on the projection of `block`.
pub fn place_sprite(
    atlas: &TextureAtlas,
    label: &'static str,
    block: impl Into<Xyz>,
    look: impl Into<Look>,
    opts: SpriteOptions,
) -> Result<Node, AtlasError> {
    let block = block.into();
    let (texture, animation) = match look.into() {
        Look::Texture(id) => (id, None),
        Look::Animation(id) => {
            let frames = atlas.animation(id)?.to_vec();
            let first = *frames.first().ok_or(AtlasError::MissingAnimation(id))?;
            (first, Some(Animation { id, frames }))
        }
    };
    let frame = atlas.resolve(texture)?;
    let mut node = Node::sprite(
        label,
        project_xyz(block),
        Sprite {
            texture,
            animation,
            frame,
            anchor: opts.anchor,
        },
    );
    if opts.z_order {
        node.z_index = Some(draw_order(block));
    }
    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blacktooth_atlas::ItemTexture;
    use blacktooth_geom::{ScreenPoint, Xy};
    use blacktooth_model::Planet;

    #[test]
    fn floor_tile_lands_on_projection() {
        let atlas = TextureAtlas::builtin();
        let node = place_sprite(
            &atlas,
            "tile",
            Xy::new(1.0, 2.0),
            TextureId::Floor(Planet::Safari),
            SpriteOptions::anchored(0.5, 1.0),
        )
        .unwrap();
        assert_eq!(node.position, ScreenPoint::new(16.0, -24.0));
        assert_eq!(node.z_index, None);
        let bounds = node.as_sprite().unwrap().bounds(node.position);
        assert_eq!((bounds.x, bounds.y, bounds.w, bounds.h), (0.0, -40.0, 32.0, 16.0));
    }

    #[test]
    fn z_ordered_items_get_a_key() {
        let atlas = TextureAtlas::builtin();
        let node = place_sprite(
            &atlas,
            "item",
            Xyz::new(2.0, 2.0, 1.0),
            TextureId::Item(ItemTexture::Ball),
            SpriteOptions::anchored(0.5, 1.0).z_ordered(),
        )
        .unwrap();
        assert_eq!(node.z_index, Some(-3.0));
        assert_eq!(node.position, ScreenPoint::new(0.0, -44.0));
    }

    #[test]
    fn animations_rest_on_first_frame() {
        let atlas = TextureAtlas::builtin();
        let node = place_sprite(
            &atlas,
            "fish",
            Xy::ORIGIN,
            AnimationId::Fish,
            SpriteOptions::anchored(0.5, 1.0),
        )
        .unwrap();
        let sprite = node.as_sprite().unwrap();
        assert_eq!(sprite.texture, TextureId::Item(ItemTexture::Fish1));
        assert_eq!(sprite.animation.as_ref().map(|a| a.frames.len()), Some(2));
    }

    #[test]
    fn missing_frames_are_errors() {
        let atlas = TextureAtlas::new();
        let err = place_sprite(
            &atlas,
            "x",
            Xy::ORIGIN,
            TextureId::WallOverdraw,
            SpriteOptions::anchored(0.0, 0.0),
        );
        assert!(matches!(err, Err(AtlasError::MissingTexture(TextureId::WallOverdraw))));
    }
}

use std::collections::HashMap as StdHashMap;
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

use blacktooth_model::Planet;
use hashbrown::HashMap;
use serde::Deserialize;

use super::sheet;
use super::texture_id::{ActorFamily, AnimationId, TextureId, UnknownTextureName};

/// Pixel rectangle on the sprite sheet.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SourceRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AtlasError {
    MissingTexture(TextureId),
    MissingAnimation(AnimationId),
    UnknownTextureName(UnknownTextureName),
    /// An override rectangle with zero width or height.
    EmptyRect(TextureId),
}

impl fmt::Display for AtlasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AtlasError::MissingTexture(id) => write!(f, "no frame for texture {}", id),
            AtlasError::MissingAnimation(id) => write!(f, "no frames for animation {}", id),
            AtlasError::UnknownTextureName(e) => write!(f, "{}", e),
            AtlasError::EmptyRect(id) => write!(f, "override for {} has an empty rectangle", id),
        }
    }
}

impl Error for AtlasError {}

impl From<UnknownTextureName> for AtlasError {
    fn from(e: UnknownTextureName) -> Self {
        AtlasError::UnknownTextureName(e)
    }
}

/// Frame and animation lookup for the sprite sheet.
#[derive(Clone, Debug, Default)]
pub struct TextureAtlas {
    frames: HashMap<TextureId, SourceRect>,
    animations: HashMap<AnimationId, Vec<TextureId>>,
}

#[derive(Deserialize)]
struct OverridesConfig {
    #[serde(default)]
    frames: StdHashMap<String, SourceRect>,
}

impl TextureAtlas {
    pub fn new() -> Self {
        Self::default()
    }

    /// The full sheet layout: generated backgrounds and actors plus the fixed table.
    pub fn builtin() -> Self {
        let mut atlas = TextureAtlas::new();
        for planet in Planet::ALL {
            for (id, rect) in sheet::background_frames(planet) {
                atlas.insert(id, rect);
            }
        }
        for family in ActorFamily::ALL {
            let (origin, size) = sheet::actor_block(family);
            for (id, rect) in sheet::four_directions(family, origin, size) {
                atlas.insert(id, rect);
            }
        }
        for (id, rect) in sheet::fixed_frames() {
            atlas.insert(id, rect);
        }
        for anim in AnimationId::ALL {
            atlas.animations.insert(anim, sheet::animation_frames(anim));
        }
        atlas
    }

    /// Replaces a frame, returning the previous rectangle.
    pub fn insert(&mut self, id: TextureId, rect: SourceRect) -> Option<SourceRect> {
        self.frames.insert(id, rect)
    }

    pub fn resolve(&self, id: TextureId) -> Result<SourceRect, AtlasError> {
        self.frames
            .get(&id)
            .copied()
            .ok_or(AtlasError::MissingTexture(id))
    }

    #[inline]
    pub fn contains(&self, id: TextureId) -> bool {
        self.frames.contains_key(&id)
    }

    /// Frames of an animation; every frame is checked against the frame table.
    pub fn animation(&self, id: AnimationId) -> Result<&[TextureId], AtlasError> {
        let frames = self
            .animations
            .get(&id)
            .filter(|f| !f.is_empty())
            .ok_or(AtlasError::MissingAnimation(id))?;
        if let Some(missing) = frames.iter().find(|f| !self.contains(**f)) {
            return Err(AtlasError::MissingTexture(*missing));
        }
        Ok(frames)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TextureId, &SourceRect)> {
        self.frames.iter()
    }

    /// Applies a `[frames]` table of `"canonical.id" = { x, y, w, h }` entries.
    /// Returns how many frames were overridden. Nothing changes unless every
    /// entry is valid.
    pub fn apply_overrides_toml(&mut self, toml_str: &str) -> Result<usize, Box<dyn Error>> {
        let cfg: OverridesConfig = toml::from_str(toml_str)?;
        let mut entries: Vec<(String, SourceRect)> = cfg.frames.into_iter().collect();
        // Sort so errors and logs come out in the same order on every run.
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        let mut checked = Vec::with_capacity(entries.len());
        for (key, rect) in entries {
            let id: TextureId = key.parse().map_err(AtlasError::from)?;
            if rect.w == 0 || rect.h == 0 {
                return Err(Box::new(AtlasError::EmptyRect(id)));
            }
            checked.push((id, rect));
        }
        let n = checked.len();
        for (id, rect) in checked {
            if let Some(old) = self.insert(id, rect) {
                log::debug!("atlas override {}: {:?} -> {:?}", id, old, rect);
            }
        }
        Ok(n)
    }

    pub fn with_overrides_path(mut self, path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path.as_ref())?;
        let n = self.apply_overrides_toml(&s)?;
        log::info!(
            "applied {} atlas override(s) from {}",
            n,
            path.as_ref().display()
        );
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture_id::ItemTexture;

    #[test]
    fn builtin_covers_animations() {
        let atlas = TextureAtlas::builtin();
        let lift = atlas.animation(AnimationId::Lift).unwrap();
        assert_eq!(lift.len(), 4);
        assert_eq!(lift[0], TextureId::Item(ItemTexture::Lift(1)));
    }

    #[test]
    fn empty_atlas_reports_missing() {
        let atlas = TextureAtlas::new();
        assert_eq!(
            atlas.resolve(TextureId::DeadlyFloor),
            Err(AtlasError::MissingTexture(TextureId::DeadlyFloor))
        );
        assert_eq!(
            atlas.animation(AnimationId::Fish),
            Err(AtlasError::MissingAnimation(AnimationId::Fish))
        );
    }

    #[test]
    fn overrides_replace_frames() {
        let mut atlas = TextureAtlas::builtin();
        let n = atlas
            .apply_overrides_toml(
                r#"
                [frames]
                "teleporter" = { x = 1, y = 2, w = 32, h = 28 }
                "#,
            )
            .unwrap();
        assert_eq!(n, 1);
        assert_eq!(
            atlas.resolve(TextureId::Item(ItemTexture::Teleporter)),
            Ok(SourceRect { x: 1, y: 2, w: 32, h: 28 })
        );
    }

    #[test]
    fn overrides_reject_unknown_and_empty() {
        let mut atlas = TextureAtlas::builtin();
        assert!(atlas
            .apply_overrides_toml("[frames]\n\"lava\" = { x = 0, y = 0, w = 1, h = 1 }\n")
            .is_err());
        assert!(atlas
            .apply_overrides_toml("[frames]\n\"ball\" = { x = 0, y = 0, w = 0, h = 4 }\n")
            .is_err());
    }

    #[test]
    fn rejected_overrides_leave_the_atlas_alone() {
        let mut atlas = TextureAtlas::builtin();
        let before = atlas.resolve(TextureId::Item(ItemTexture::Ball)).unwrap();
        // "ball" sorts before "zzz", so it would be applied first if entries went in one by one.
        let err = atlas.apply_overrides_toml(
            r#"
            [frames]
            "ball" = { x = 1, y = 1, w = 8, h = 8 }
            "zzz" = { x = 0, y = 0, w = 1, h = 1 }
            "#,
        );
        assert!(err.is_err());
        assert_eq!(atlas.resolve(TextureId::Item(ItemTexture::Ball)), Ok(before));

        let err = atlas.apply_overrides_toml(
            r#"
            [frames]
            "ball" = { x = 1, y = 1, w = 8, h = 8 }
            "teleporter" = { x = 0, y = 0, w = 0, h = 1 }
            "#,
        );
        assert!(err.is_err());
        assert_eq!(atlas.resolve(TextureId::Item(ItemTexture::Ball)), Ok(before));
    }
}

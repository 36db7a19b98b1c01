//! Sprite rectangles and the atlas image they point into.
//!
//! Emitters only carry [`Sprite`] rectangles; the pixels live in a shared
//! [`SpriteAtlas`] owned by the rendering side. The atlas can be loaded
//! from disk or painted procedurally with [`SpriteAtlas::builtin`].
//!
//! # Built-in sheet
//!
//! | Name | Rect |
//! |------|------|
//! | `blue_circle` | `{ x: 0, y: 0, w: 4, h: 4 }` |
//! | `smoke_1` .. `smoke_4` | `{ x: 8 * (n - 1), y: 4, w: 8, h: 8 }` |

use std::collections::BTreeMap;
use std::path::Path;

use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::error::AtlasError;

/// A source rectangle inside the sprite atlas, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Sprite {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Sprite {
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
}

/// Sprites of the built-in sheet.
pub mod sprites {
    use super::Sprite;

    pub const BLUE_CIRCLE: Sprite = Sprite::new(0, 0, 4, 4);
    pub const SMOKE_1: Sprite = Sprite::new(0, 4, 8, 8);
    pub const SMOKE_2: Sprite = Sprite::new(8, 4, 8, 8);
    pub const SMOKE_3: Sprite = Sprite::new(16, 4, 8, 8);
    pub const SMOKE_4: Sprite = Sprite::new(24, 4, 8, 8);

    /// Every built-in sprite with its name.
    pub const ALL: [(&str, Sprite); 5] = [
        ("blue_circle", BLUE_CIRCLE),
        ("smoke_1", SMOKE_1),
        ("smoke_2", SMOKE_2),
        ("smoke_3", SMOKE_3),
        ("smoke_4", SMOKE_4),
    ];
}

/// Atlas image plus a name table of the sprites inside it.
#[derive(Debug, Clone)]
pub struct SpriteAtlas {
    image: RgbaImage,
    sprites: BTreeMap<String, Sprite>,
}

impl SpriteAtlas {
    /// Wrap an already decoded image with an empty name table.
    pub fn from_image(image: RgbaImage) -> Self {
        Self {
            image,
            sprites: BTreeMap::new(),
        }
    }

    /// Load an atlas image from disk.
    ///
    /// Supports PNG and JPEG.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, AtlasError> {
        let image = image::open(path.as_ref())?.into_rgba8();
        log::debug!(
            "loaded sprite atlas {} ({}x{})",
            path.as_ref().display(),
            image.width(),
            image.height()
        );
        Ok(Self::from_image(image))
    }

    /// Paint the built-in sheet: a blue dot and four fading smoke puffs.
    pub fn builtin() -> Self {
        let mut image = RgbaImage::new(32, 12);

        paint_disc(&mut image, sprites::BLUE_CIRCLE, 2.0, Rgba([80, 140, 255, 255]));
        let smoke = [
            (sprites::SMOKE_1, 2.0, 230),
            (sprites::SMOKE_2, 3.0, 190),
            (sprites::SMOKE_3, 3.5, 140),
            (sprites::SMOKE_4, 4.0, 90),
        ];
        for (sprite, radius, alpha) in smoke {
            paint_disc(&mut image, sprite, radius, Rgba([200, 200, 210, alpha]));
        }

        let mut atlas = Self::from_image(image);
        for (name, sprite) in sprites::ALL {
            atlas.insert(name, sprite);
        }
        atlas
    }

    /// Register a sprite under `name`, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, sprite: Sprite) {
        self.sprites.insert(name.into(), sprite);
    }

    /// Look up a sprite by name.
    pub fn get(&self, name: &str) -> Option<Sprite> {
        self.sprites.get(name).copied()
    }

    /// Look up a sprite by name, failing if it is missing.
    pub fn sprite(&self, name: &str) -> Result<Sprite, AtlasError> {
        self.get(name)
            .ok_or_else(|| AtlasError::UnknownSprite(name.to_string()))
    }

    /// Whether `sprite` lies entirely inside the atlas image.
    pub fn contains(&self, sprite: &Sprite) -> bool {
        let right = u64::from(sprite.x) + u64::from(sprite.w);
        let bottom = u64::from(sprite.y) + u64::from(sprite.h);
        right <= u64::from(self.image.width()) && bottom <= u64::from(self.image.height())
    }

    /// The atlas pixels.
    #[inline]
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Registered sprite names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sprites.keys().map(String::as_str)
    }
}

fn paint_disc(image: &mut RgbaImage, cell: Sprite, radius: f32, color: Rgba<u8>) {
    let cx = cell.w as f32 / 2.0;
    let cy = cell.h as f32 / 2.0;
    for py in 0..cell.h {
        for px in 0..cell.w {
            let dx = px as f32 + 0.5 - cx;
            let dy = py as f32 + 0.5 - cy;
            if dx * dx + dy * dy <= radius * radius {
                image.put_pixel(cell.x + px, cell.y + py, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_sheet() {
        let atlas = SpriteAtlas::builtin();
        assert_eq!(atlas.get("blue_circle"), Some(Sprite::new(0, 0, 4, 4)));
        for (_, sprite) in sprites::ALL {
            assert!(atlas.contains(&sprite));
        }

        // Dot center is painted, corner is transparent
        assert_eq!(atlas.image().get_pixel(1, 1)[3], 255);
        assert_eq!(atlas.image().get_pixel(0, 0)[3], 0);
    }

    #[test]
    fn test_unknown_sprite() {
        let atlas = SpriteAtlas::builtin();
        let err = atlas.sprite("fire_1").unwrap_err();
        assert!(matches!(err, AtlasError::UnknownSprite(name) if name == "fire_1"));
    }

    #[test]
    fn test_contains_rejects_overflowing_rect() {
        let atlas = SpriteAtlas::from_image(RgbaImage::new(8, 8));
        assert!(atlas.contains(&Sprite::new(4, 4, 4, 4)));
        assert!(!atlas.contains(&Sprite::new(4, 4, 5, 4)));
        assert!(!atlas.contains(&Sprite::new(u32::MAX, 0, 2, 2)));
    }

    #[test]
    fn test_names_sorted() {
        let atlas = SpriteAtlas::builtin();
        let names: Vec<_> = atlas.names().collect();
        assert_eq!(names[0], "blue_circle");
        assert_eq!(names.len(), 5);
    }
}

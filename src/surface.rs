//! Drawing surface for a particle system.
//!
//! A raster surface owns an RGBA backing store at the simulation
//! resolution; hosts display it scaled up by `scale` with nearest
//! filtering so sprites stay crisp. Static renders have no pixels at
//! all and use the headless stand-in, which only reports its size.

use image::imageops;
use image::{GenericImageView, Rgba, RgbaImage};

use crate::sprite::{Sprite, SpriteAtlas};

/// On-screen box the surface is displayed in, in host coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayBounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl DisplayBounds {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
}

/// Something a surface can be attached to, such as a window.
pub trait SurfaceHost {
    fn attach(&mut self, surface: &Surface);
}

/// The pixels particles are drawn into.
#[derive(Debug, Clone)]
pub struct Surface {
    width: u32,
    height: u32,
    scale: u32,
    /// `None` for the headless stand-in.
    pixels: Option<RgbaImage>,
}

impl Surface {
    /// A drawable surface of `width × height` pixels shown at `scale`.
    pub fn raster(width: u32, height: u32, scale: u32) -> Self {
        Self {
            width,
            height,
            scale: scale.max(1),
            pixels: Some(RgbaImage::new(width, height)),
        }
    }

    /// A size-only stand-in for contexts that never draw.
    pub fn headless(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            scale: 1,
            pixels: None,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Device pixels per simulation pixel.
    #[inline]
    pub fn scale(&self) -> u32 {
        self.scale
    }

    #[inline]
    pub fn is_headless(&self) -> bool {
        self.pixels.is_none()
    }

    /// The backing store, if this surface has one.
    #[inline]
    pub fn pixels(&self) -> Option<&RgbaImage> {
        self.pixels.as_ref()
    }

    /// Where the surface sits when displayed at its natural scale.
    pub fn natural_bounds(&self) -> DisplayBounds {
        DisplayBounds::new(
            0.0,
            0.0,
            self.width as f32 * self.scale as f32,
            self.height as f32 * self.scale as f32,
        )
    }

    /// Clear every pixel to transparent.
    pub fn clear(&mut self) {
        if let Some(pixels) = &mut self.pixels {
            for pixel in pixels.pixels_mut() {
                *pixel = Rgba([0, 0, 0, 0]);
            }
        }
    }

    /// Draw `sprite` from `atlas` centered on `(x, y)`.
    ///
    /// The destination is snapped to whole pixels and clipped at the
    /// surface edges. Rectangles outside the atlas are skipped.
    pub fn blit(&mut self, atlas: &SpriteAtlas, sprite: &Sprite, x: f32, y: f32) {
        let Some(pixels) = &mut self.pixels else {
            return;
        };
        if !atlas.contains(sprite) {
            log::warn!("sprite {:?} lies outside the atlas, skipping", sprite);
            return;
        }

        let source = atlas.image().view(sprite.x, sprite.y, sprite.w, sprite.h);
        let dx = (x - sprite.w as f32 / 2.0).floor() as i64;
        let dy = (y - sprite.h as f32 / 2.0).floor() as i64;
        imageops::overlay(pixels, &*source, dx, dy);
    }

    /// Convert a host-space point into simulation pixels.
    ///
    /// Scales by the ratio of backing resolution to displayed size. A
    /// zero-sized box (not laid out yet) maps with a scale of one.
    pub fn map_coords(&self, bounds: &DisplayBounds, screen_x: f32, screen_y: f32) -> (f32, f32) {
        let scale_x = ratio(self.width, bounds.width);
        let scale_y = ratio(self.height, bounds.height);
        (
            (screen_x - bounds.x) * scale_x,
            (screen_y - bounds.y) * scale_y,
        )
    }
}

fn ratio(resolution: u32, displayed: f32) -> f32 {
    if displayed > 0.0 {
        resolution as f32 / displayed
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprite::sprites;

    #[test]
    fn test_headless_reports_size() {
        let mut surface = Surface::headless(120, 30);
        assert!(surface.is_headless());
        assert_eq!((surface.width(), surface.height()), (120, 30));

        // Drawing is a no-op
        surface.clear();
        surface.blit(&SpriteAtlas::builtin(), &sprites::BLUE_CIRCLE, 5.0, 5.0);
        assert!(surface.pixels().is_none());
    }

    #[test]
    fn test_blit_centers_and_snaps() {
        let atlas = SpriteAtlas::builtin();
        let mut surface = Surface::raster(16, 16, 3);
        surface.blit(&atlas, &sprites::BLUE_CIRCLE, 8.7, 8.2);

        // floor(8.7 - 2) = 6, floor(8.2 - 2) = 6 → sprite covers 6..10
        let pixels = surface.pixels().unwrap();
        assert_eq!(pixels.get_pixel(7, 7)[3], 255);
        assert_eq!(pixels.get_pixel(6, 6)[3], 0); // transparent corner
        assert_eq!(pixels.get_pixel(5, 7)[3], 0);
        assert_eq!(pixels.get_pixel(10, 7)[3], 0);
    }

    #[test]
    fn test_blit_clips_at_edges() {
        let atlas = SpriteAtlas::builtin();
        let mut surface = Surface::raster(8, 8, 1);
        surface.blit(&atlas, &sprites::BLUE_CIRCLE, 0.0, 0.0);
        surface.blit(&atlas, &sprites::BLUE_CIRCLE, 8.0, 8.0);
        surface.blit(&atlas, &sprites::BLUE_CIRCLE, -50.0, 500.0);

        let pixels = surface.pixels().unwrap();
        assert_eq!(pixels.get_pixel(0, 0)[3], 255);
        assert_eq!(pixels.get_pixel(7, 7)[3], 255);
    }

    #[test]
    fn test_blit_skips_out_of_atlas_sprite() {
        let atlas = SpriteAtlas::builtin();
        let mut surface = Surface::raster(8, 8, 1);
        surface.blit(&atlas, &Sprite::new(30, 10, 8, 8), 4.0, 4.0);
        assert!(surface.pixels().unwrap().pixels().all(|p| p[3] == 0));
    }

    #[test]
    fn test_clear() {
        let atlas = SpriteAtlas::builtin();
        let mut surface = Surface::raster(8, 8, 1);
        surface.blit(&atlas, &sprites::BLUE_CIRCLE, 4.0, 4.0);
        surface.clear();
        assert!(surface.pixels().unwrap().pixels().all(|p| p[3] == 0));
    }

    #[test]
    fn test_map_coords() {
        let surface = Surface::raster(100, 50, 3);
        let bounds = DisplayBounds::new(20.0, 10.0, 300.0, 150.0);
        assert_eq!(surface.map_coords(&bounds, 20.0, 10.0), (0.0, 0.0));
        assert_eq!(surface.map_coords(&bounds, 320.0, 160.0), (100.0, 50.0));
        assert_eq!(surface.map_coords(&bounds, 170.0, 85.0), (50.0, 25.0));
    }

    #[test]
    fn test_map_coords_unlaid_out() {
        let surface = Surface::raster(100, 100, 3);
        let bounds = DisplayBounds::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(surface.map_coords(&bounds, 12.0, 7.0), (12.0, 7.0));
    }

    #[test]
    fn test_natural_bounds() {
        let surface = Surface::raster(100, 30, 3);
        assert_eq!(surface.natural_bounds(), DisplayBounds::new(0.0, 0.0, 300.0, 90.0));
    }

    #[test]
    fn test_natural_bounds_past_u32() {
        let surface = Surface::raster(70_000, 1, 70_000);
        let bounds = surface.natural_bounds();
        assert_eq!(bounds.width, 70_000.0 * 70_000.0);
        assert_eq!(bounds.height, 70_000.0);
    }
}

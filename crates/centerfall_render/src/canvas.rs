//! CPU drawing surface
//!
//! Circles are rasterized point by point: every pixel offset whose squared
//! distance from the center is within the squared radius gets plotted.

use bytemuck::{Pod, Zeroable};

/// An 8-bit RGBA color
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgba(0, 0, 0, 255);
    pub const WHITE: Self = Self::rgba(255, 255, 255, 255);

    /// Create a new color
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// A surface that can be cleared and plotted point by point
pub trait Canvas {
    /// Set the color used by `clear`, `draw_point` and `fill_circle`
    fn set_draw_color(&mut self, color: Color);

    /// Fill the whole surface with the draw color
    fn clear(&mut self);

    /// Plot a single pixel in the draw color
    fn draw_point(&mut self, x: i32, y: i32);

    /// Draw a filled disk centered on `(cx, cy)`
    ///
    /// Points whose coordinates overflow `i32` are skipped.
    fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32) {
        let r2 = radius * radius;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy > r2 {
                    continue;
                }
                if let (Some(x), Some(y)) = (cx.checked_add(dx), cy.checked_add(dy)) {
                    self.draw_point(x, y);
                }
            }
        }
    }
}

/// Row-major RGBA pixel buffer
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
    draw_color: Color,
}

impl FrameBuffer {
    /// Create a buffer filled with black; the draw color starts as white
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; width as usize * height as usize],
            draw_color: Color::WHITE,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Color at `(x, y)`, or `None` outside the buffer
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Raw RGBA bytes for texture upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Number of pixels currently set to `color`
    pub fn count_color(&self, color: Color) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }
}

impl Canvas for FrameBuffer {
    fn set_draw_color(&mut self, color: Color) {
        self.draw_color = color;
    }

    fn clear(&mut self) {
        self.pixels.fill(self.draw_color);
    }

    fn draw_point(&mut self, x: i32, y: i32) {
        // Off-buffer points are clipped
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = self.draw_color;
        }
    }
}

use crate::doc::PoemFont;

/// Axis-aligned rectangle in buffer pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Rect { x, y, w, h }
    }

    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x as f64
            && px < (self.x + self.w) as f64
            && py >= self.y as f64
            && py < (self.y + self.h) as f64
    }
}

/// A single text span to draw. `y` is the top of the line box; the renderer
/// positions the baseline from the font's ascent.
#[derive(Clone, Debug, PartialEq)]
pub struct TextCmd {
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub font: PoemFont,
    pub size: f32,
    pub color: u32,
    pub opacity: f32,
}

/// A flat (non-rounded) rectangle command.
#[derive(Clone, Debug, PartialEq)]
pub struct FlatRectCmd {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub color: u32,
    pub opacity: f32,
}

/// A rounded rectangle command.
#[derive(Clone, Debug, PartialEq)]
pub struct RoundedRectCmd {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub radius: f32,
    pub color: u32,
    pub opacity: f32,
}

/// Background fill for the preview surface or a template grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackgroundFill {
    Solid(u32),
    /// Vertical gradient from `top` to `bottom`.
    Gradient { top: u32, bottom: u32 },
    /// Cream sheet with faint rule lines.
    Paper,
}

pub(in crate::gui) struct GlyphBitmap {
    pub(in crate::gui) data: Vec<u8>,
    pub(in crate::gui) width: usize,
    pub(in crate::gui) height: usize,
    pub(in crate::gui) left: i32,
    pub(in crate::gui) top: i32,
}

/// Scales a base pixel value by the given UI scale factor.
pub fn scaled_px(base: u32, ui_scale: f64) -> u32 {
    if base == 0 {
        0
    } else {
        ((base as f64 * ui_scale).round() as u32).max(1)
    }
}

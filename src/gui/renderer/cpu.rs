use std::collections::HashMap;

use crate::doc::PoemFont;

use super::fonts::FontStore;
use super::types::{
    BackgroundFill, FlatRectCmd, GlyphBitmap, Rect, RoundedRectCmd, TextCmd, scaled_px,
};
use super::{PAPER_BASE, PAPER_RULE, blend_rgb};

/// Destination pixel buffer for one frame (or one offscreen export).
pub struct RenderTarget<'a> {
    pub buffer: &'a mut [u32],
    pub width: usize,
    pub height: usize,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
struct GlyphKey {
    family: PoemFont,
    /// Font size quantized to quarter pixels.
    size_q: u32,
    ch: char,
}

/// CPU rasterizer: fontdue glyphs and rectangle primitives blended into a
/// softbuffer pixel buffer.
pub struct CpuRenderer {
    pub fonts: FontStore,
    ui_scale: f64,
    glyph_cache: HashMap<GlyphKey, GlyphBitmap>,
}

impl CpuRenderer {
    pub fn new(fonts: FontStore) -> Self {
        CpuRenderer {
            fonts,
            ui_scale: 1.0,
            glyph_cache: HashMap::new(),
        }
    }

    pub fn set_scale(&mut self, scale_factor: f64) {
        let scale = if scale_factor.is_finite() {
            scale_factor.clamp(0.75, 4.0)
        } else {
            1.0
        };
        if (self.ui_scale - scale).abs() < 1e-6 {
            return;
        }
        self.ui_scale = scale;
        self.glyph_cache.clear();
    }

    pub fn ui_scale(&self) -> f64 {
        self.ui_scale
    }

    pub fn scaled_px(&self, base: u32) -> u32 {
        scaled_px(base, self.ui_scale)
    }

    /// Draws one text span. `cmd.y` is the top of the line box.
    pub fn draw_text_cmd(&mut self, target: &mut RenderTarget<'_>, cmd: &TextCmd) {
        if cmd.opacity <= 0.0 {
            return;
        }
        let ascent = self.fonts.ascent(cmd.font, cmd.size);
        let fg_r = (cmd.color >> 16) & 0xFF;
        let fg_g = (cmd.color >> 8) & 0xFF;
        let fg_b = cmd.color & 0xFF;

        let mut pen_x = cmd.x;
        for ch in cmd.text.chars() {
            let key = GlyphKey {
                family: cmd.font,
                size_q: (cmd.size * 4.0).round() as u32,
                ch,
            };
            let font = self.fonts.get(cmd.font);
            let advance = font.metrics(ch, cmd.size).advance_width;
            let glyph = match self.glyph_cache.entry(key) {
                std::collections::hash_map::Entry::Occupied(entry) => entry.into_mut(),
                std::collections::hash_map::Entry::Vacant(entry) => {
                    let (metrics, bitmap) = font.rasterize(ch, cmd.size);
                    entry.insert(GlyphBitmap {
                        data: bitmap,
                        width: metrics.width,
                        height: metrics.height,
                        left: metrics.xmin,
                        top: metrics.height as i32 + metrics.ymin,
                    })
                }
            };

            for gy in 0..glyph.height {
                for gx in 0..glyph.width {
                    let coverage = glyph.data[gy * glyph.width + gx];
                    if coverage == 0 {
                        continue;
                    }
                    let sx = pen_x as i32 + glyph.left + gx as i32;
                    let sy = cmd.y as i32 + (ascent as i32 - glyph.top) + gy as i32;
                    if sx < 0
                        || sy < 0
                        || sx as usize >= target.width
                        || sy as usize >= target.height
                    {
                        continue;
                    }

                    let idx = sy as usize * target.width + sx as usize;
                    let a = (coverage as f32 * cmd.opacity) as u32;
                    let inv_a = 255 - a;
                    let bg_pixel = target.buffer[idx];
                    let bg_r = (bg_pixel >> 16) & 0xFF;
                    let bg_g = (bg_pixel >> 8) & 0xFF;
                    let bg_b = bg_pixel & 0xFF;
                    let r = (fg_r * a + bg_r * inv_a) / 255;
                    let g = (fg_g * a + bg_g * inv_a) / 255;
                    let b = (fg_b * a + bg_b * inv_a) / 255;
                    target.buffer[idx] = (r << 16) | (g << 8) | b;
                }
            }

            pen_x += advance;
        }
    }

    /// Draws a flat rectangle with per-pixel blending.
    pub fn draw_flat_rect_cmd(&self, target: &mut RenderTarget<'_>, cmd: &FlatRectCmd) {
        let alpha = (cmd.opacity * 255.0).round().clamp(0.0, 255.0) as u8;
        if alpha == 0 {
            return;
        }
        let x = cmd.x.max(0.0) as usize;
        let y = cmd.y.max(0.0) as usize;
        let w = cmd.w as usize;
        let h = cmd.h as usize;
        for dy in 0..h {
            let py = y + dy;
            if py >= target.height {
                break;
            }
            for dx in 0..w {
                let px = x + dx;
                if px >= target.width {
                    break;
                }
                let idx = py * target.width + px;
                target.buffer[idx] = blend_rgb(target.buffer[idx], cmd.color, alpha);
            }
        }
    }

    /// Draws an antialiased rounded rectangle.
    pub fn draw_rounded_rect_cmd(&self, target: &mut RenderTarget<'_>, cmd: &RoundedRectCmd) {
        let alpha = (cmd.opacity * 255.0).round().clamp(0.0, 255.0) as u8;
        let w = cmd.w as i32;
        let h = cmd.h as i32;
        if alpha == 0 || w <= 0 || h <= 0 || target.width == 0 || target.height == 0 {
            return;
        }
        let r = (cmd.radius as i32).min(w / 2).min(h / 2);
        let max_x = target.width as i32 - 1;
        let max_y = target.height as i32 - 1;

        for py in 0..h {
            let sy = cmd.y as i32 + py;
            if sy < 0 || sy > max_y {
                continue;
            }
            for px in 0..w {
                let sx = cmd.x as i32 + px;
                if sx < 0 || sx > max_x {
                    continue;
                }
                let coverage = rounded_coverage(px, py, w, h, r);
                if coverage <= 0.0 {
                    continue;
                }
                let aa_alpha = ((alpha as f32) * coverage).round().clamp(0.0, 255.0) as u8;
                if aa_alpha == 0 {
                    continue;
                }
                let idx = sy as usize * target.width + sx as usize;
                target.buffer[idx] = blend_rgb(target.buffer[idx], cmd.color, aa_alpha);
            }
        }
    }

    /// Fills `rect` with a preview background: solid color, vertical gradient
    /// or ruled paper.
    pub fn draw_background_fill(
        &self,
        target: &mut RenderTarget<'_>,
        rect: Rect,
        fill: BackgroundFill,
    ) {
        match fill {
            BackgroundFill::Solid(color) => {
                self.draw_flat_rect_cmd(
                    target,
                    &FlatRectCmd {
                        x: rect.x,
                        y: rect.y,
                        w: rect.w,
                        h: rect.h,
                        color,
                        opacity: 1.0,
                    },
                );
            }
            BackgroundFill::Gradient { top, bottom } => {
                let h = rect.h.max(1.0);
                for row in 0..rect.h as u32 {
                    let t = row as f32 / h;
                    let color = lerp_rgb(top, bottom, t);
                    self.draw_flat_rect_cmd(
                        target,
                        &FlatRectCmd {
                            x: rect.x,
                            y: rect.y + row as f32,
                            w: rect.w,
                            h: 1.0,
                            color,
                            opacity: 1.0,
                        },
                    );
                }
            }
            BackgroundFill::Paper => {
                self.draw_flat_rect_cmd(
                    target,
                    &FlatRectCmd {
                        x: rect.x,
                        y: rect.y,
                        w: rect.w,
                        h: rect.h,
                        color: PAPER_BASE,
                        opacity: 1.0,
                    },
                );
                let gap = self.scaled_px(28) as f32;
                let mut line_y = rect.y + gap;
                while line_y < rect.y + rect.h {
                    self.draw_flat_rect_cmd(
                        target,
                        &FlatRectCmd {
                            x: rect.x,
                            y: line_y,
                            w: rect.w,
                            h: 1.0,
                            color: PAPER_RULE,
                            opacity: 0.5,
                        },
                    );
                    line_y += gap;
                }
            }
        }
    }
}

fn rounded_coverage(px: i32, py: i32, w: i32, h: i32, r: i32) -> f32 {
    if px < 0 || py < 0 || px >= w || py >= h {
        return 0.0;
    }
    if r <= 0 {
        return 1.0;
    }

    let in_tl = px < r && py < r;
    let in_tr = px >= w - r && py < r;
    let in_bl = px < r && py >= h - r;
    let in_br = px >= w - r && py >= h - r;
    if !(in_tl || in_tr || in_bl || in_br) {
        return 1.0;
    }

    let cx = if in_tl || in_bl {
        r as f32 - 0.5
    } else {
        (w - r) as f32 - 0.5
    };
    let cy = if in_tl || in_tr {
        r as f32 - 0.5
    } else {
        (h - r) as f32 - 0.5
    };

    let dx = px as f32 + 0.5 - cx;
    let dy = py as f32 + 0.5 - cy;
    let rr = r as f32;
    let dist = (dx * dx + dy * dy).sqrt();
    (rr + 0.5 - dist).clamp(0.0, 1.0)
}

fn lerp_rgb(from: u32, to: u32, t: f32) -> u32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |a: u32, b: u32| -> u32 {
        let a = a as f32;
        let b = b as f32;
        (a + (b - a) * t).round() as u32
    };
    let r = lerp((from >> 16) & 0xFF, (to >> 16) & 0xFF);
    let g = lerp((from >> 8) & 0xFF, (to >> 8) & 0xFF);
    let b = lerp(from & 0xFF, to & 0xFF);
    (r << 16) | (g << 8) | b
}

mod cpu;
pub mod fonts;
pub mod types;

pub use cpu::{CpuRenderer, RenderTarget};
pub use fonts::{FontStore, TextMeasure};
pub use types::*;

// -- Chrome palette (editor shell around the preview) --

/// Control-panel background.
pub(in crate::gui) const PANEL_BG: u32 = 0xFFFFFF;

/// Panel label / body text.
pub(in crate::gui) const PANEL_TEXT: u32 = 0x374151;

/// Muted text (placeholders, hints).
pub(in crate::gui) const PANEL_TEXT_MUTED: u32 = 0x9CA3AF;

/// Input field fill and border.
pub(in crate::gui) const FIELD_BG: u32 = 0xF9FAFB;
pub(in crate::gui) const FIELD_BORDER: u32 = 0xD1D5DB;

/// Focused field border accent.
pub(in crate::gui) const FIELD_BORDER_FOCUS: u32 = 0x6366F1;

/// Button fill and label.
pub(in crate::gui) const BUTTON_BG: u32 = 0x6366F1;
pub(in crate::gui) const BUTTON_TEXT: u32 = 0xFFFFFF;

/// Destructive button (Reset).
pub(in crate::gui) const BUTTON_DANGER_BG: u32 = 0xEF4444;

/// Area behind the preview sheet.
pub(in crate::gui) const WORKSPACE_BG: u32 = 0xE5E7EB;

/// Context menu panel.
pub(in crate::gui) const MENU_BG: u32 = 0xFFFFFF;
pub(in crate::gui) const MENU_HOVER_BG: u32 = 0xE5E7EB;

/// Paper template sheet and rule-line colors.
pub(in crate::gui) const PAPER_BASE: u32 = 0xFDF6E3;
pub(in crate::gui) const PAPER_RULE: u32 = 0xD8CBB0;

/// Blends `src` over `dst` with `alpha` in 0..=255 (both colors are 0xRRGGBB).
pub(in crate::gui) fn blend_rgb(dst: u32, src: u32, alpha: u8) -> u32 {
    if alpha == 255 {
        return src;
    }
    if alpha == 0 {
        return dst;
    }

    let a = alpha as u32;
    let inv = 255 - a;

    let dr = (dst >> 16) & 0xFF;
    let dg = (dst >> 8) & 0xFF;
    let db = dst & 0xFF;

    let sr = (src >> 16) & 0xFF;
    let sg = (src >> 8) & 0xFF;
    let sb = src & 0xFF;

    let r = (sr * a + dr * inv + 127) / 255;
    let g = (sg * a + dg * inv + 127) / 255;
    let b = (sb * a + db * inv + 127) / 255;

    (r << 16) | (g << 8) | b
}

use std::time::Instant;

use crate::doc::PoemFont;

use super::renderer::types::{RoundedRectCmd, TextCmd, scaled_px};
use super::renderer::{MENU_BG, MENU_HOVER_BG, PANEL_TEXT};

/// Actions offered by the preview's right-click menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(in crate::gui) enum MenuAction {
    CopyText,
    ExportImage,
    ExportText,
    ShareX,
    ShareWhatsApp,
}

/// Custom-drawn context menu anchored at the click position.
pub(in crate::gui) struct ContextMenu {
    pub x: u32,
    pub y: u32,
    pub items: Vec<(MenuAction, &'static str)>,
    pub hover_index: Option<usize>,
    pub opened_at: Instant,
}

/// Pre-computed layout for the entire context menu overlay.
pub(in crate::gui) struct ContextMenuLayout {
    pub bg: RoundedRectCmd,
    pub border: RoundedRectCmd,
    pub items: Vec<ContextMenuItemLayout>,
}

pub(in crate::gui) struct ContextMenuItemLayout {
    pub hover_rect: Option<RoundedRectCmd>,
    pub text: TextCmd,
}

impl ContextMenu {
    pub fn at(x: u32, y: u32) -> Self {
        ContextMenu {
            x,
            y,
            items: vec![
                (MenuAction::CopyText, "Copy Text"),
                (MenuAction::ExportImage, "Download Image"),
                (MenuAction::ExportText, "Export as Text"),
                (MenuAction::ShareX, "Share on X"),
                (MenuAction::ShareWhatsApp, "Share on WhatsApp"),
            ],
            hover_index: None,
            opened_at: Instant::now(),
        }
    }

    pub fn width(&self, ui_scale: f64) -> u32 {
        scaled_px(190, ui_scale)
    }

    pub fn item_height(&self, ui_scale: f64) -> u32 {
        scaled_px(28, ui_scale)
    }

    pub fn height(&self, ui_scale: f64) -> u32 {
        self.item_height(ui_scale) * self.items.len() as u32 + scaled_px(4, ui_scale)
    }

    /// Pure hit-test: the hovered item index for a pointer position.
    pub fn hit_test(&self, x: f64, y: f64, ui_scale: f64) -> Option<usize> {
        let mw = self.width(ui_scale);
        let ih = self.item_height(ui_scale);
        let mh = self.height(ui_scale);

        if x < self.x as f64
            || x >= (self.x + mw) as f64
            || y < self.y as f64
            || y >= (self.y + mh) as f64
        {
            return None;
        }

        let rel_y = (y - self.y as f64 - 2.0).max(0.0) as u32;
        let idx = (rel_y / ih) as usize;
        if idx < self.items.len() { Some(idx) } else { None }
    }

    /// Computes every rect and text span needed to draw the menu.
    pub fn layout(&self, ui_scale: f64, font_size: f32) -> ContextMenuLayout {
        let mw = self.width(ui_scale) as f32;
        let ih = self.item_height(ui_scale) as f32;
        let mh = self.height(ui_scale) as f32;
        let mx = self.x as f32;
        let my = self.y as f32;
        let radius = scaled_px(6, ui_scale) as f32;

        let open_t = (self.opened_at.elapsed().as_secs_f32() / 0.14).clamp(0.0, 1.0);
        let open_ease = 1.0 - (1.0 - open_t) * (1.0 - open_t);
        let panel_opacity = (0.9 + open_ease * 0.1).clamp(0.0, 1.0);

        let bg = RoundedRectCmd {
            x: mx,
            y: my,
            w: mw,
            h: mh,
            radius,
            color: MENU_BG,
            opacity: panel_opacity,
        };
        let border = RoundedRectCmd {
            x: mx,
            y: my,
            w: mw,
            h: mh,
            radius,
            color: 0x000000,
            opacity: 0.08,
        };

        let pad2 = scaled_px(2, ui_scale) as f32;
        let pad4 = scaled_px(4, ui_scale) as f32;
        let pad8 = scaled_px(8, ui_scale) as f32;
        let pad12 = scaled_px(12, ui_scale) as f32;

        let items = self
            .items
            .iter()
            .enumerate()
            .map(|(i, (_, label))| {
                let item_y = my + pad2 + i as f32 * ih;
                let hover_rect = if self.hover_index == Some(i) {
                    Some(RoundedRectCmd {
                        x: mx + pad4,
                        y: item_y,
                        w: mw - pad8,
                        h: ih - 1.0,
                        radius,
                        color: MENU_HOVER_BG,
                        opacity: 0.8,
                    })
                } else {
                    None
                };

                ContextMenuItemLayout {
                    hover_rect,
                    text: TextCmd {
                        x: mx + pad12,
                        y: item_y + (ih - font_size * 1.2) / 2.0,
                        text: (*label).to_string(),
                        font: PoemFont::Sans,
                        size: font_size,
                        color: PANEL_TEXT,
                        opacity: 1.0,
                    },
                }
            })
            .collect();

        ContextMenuLayout { bg, border, items }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gui_context_menu.rs"]
mod tests;

use std::num::NonZeroU32;
use std::time::Instant;

use super::super::panel::compute_panel_layout;
use super::super::preview::layout_preview;
use super::super::renderer::{RenderTarget, WORKSPACE_BG};
use super::super::state::QuillWindow;

impl QuillWindow {
    /// Lays out every layer, then rasterizes and presents the frame.
    pub(in crate::gui) fn on_redraw_requested(&mut self) {
        let size = self.window.inner_size();
        let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return;
        };
        let (bw, bh) = (size.width as usize, size.height as usize);
        let ui_scale = self.renderer.ui_scale();
        let font_size = self.ui_font_size();
        let now = Instant::now();

        // Layouts first; drawing below only touches the surface and renderer.
        let sheet = self.preview_sheet_rect(size.width as f32, size.height as f32);
        let doc = self.snapshot();
        let preview = layout_preview(
            &doc,
            sheet,
            self.preview_padding_px(),
            ui_scale as f32,
            &self.renderer.fonts,
        );
        let panel = (!self.fullscreen_preview).then(|| {
            let view = self.panel_view();
            compute_panel_layout(
                &view,
                self.panel_width_px(),
                size.height as f32,
                self.panel_scroll,
                ui_scale,
                font_size,
                &self.renderer.fonts,
            )
        });
        let menu = self
            .context_menu
            .as_ref()
            .map(|menu| menu.layout(ui_scale, font_size));
        let toasts = self.notifications.layout(size.width, ui_scale, now);

        if self.surface.resize(w, h).is_err() {
            return;
        }
        let Ok(mut buffer) = self.surface.buffer_mut() else {
            return;
        };
        buffer.fill(WORKSPACE_BG);
        let mut target = RenderTarget {
            buffer: &mut buffer[..],
            width: bw,
            height: bh,
        };

        // Preview sheet.
        self.renderer
            .draw_background_fill(&mut target, sheet, preview.background);
        for cmd in preview.text_cmds() {
            self.renderer.draw_text_cmd(&mut target, cmd);
        }

        // Control panel.
        if let Some(panel) = &panel {
            self.renderer.draw_flat_rect_cmd(&mut target, &panel.bg);
            for cmd in &panel.rounded {
                self.renderer.draw_rounded_rect_cmd(&mut target, cmd);
            }
            for (rect, fill) in &panel.fills {
                self.renderer.draw_background_fill(&mut target, *rect, *fill);
            }
            for cmd in &panel.flats {
                self.renderer.draw_flat_rect_cmd(&mut target, cmd);
            }
            for cmd in &panel.texts {
                self.renderer.draw_text_cmd(&mut target, cmd);
            }
            self.renderer.draw_flat_rect_cmd(&mut target, &panel.divider);
            for cmd in &panel.overlay_rounded {
                self.renderer.draw_rounded_rect_cmd(&mut target, cmd);
            }
            for cmd in &panel.overlay_texts {
                self.renderer.draw_text_cmd(&mut target, cmd);
            }
        }

        // Context menu above both.
        if let Some(menu) = &menu {
            self.renderer.draw_rounded_rect_cmd(&mut target, &menu.border);
            self.renderer.draw_rounded_rect_cmd(&mut target, &menu.bg);
            for item in &menu.items {
                if let Some(hover) = &item.hover_rect {
                    self.renderer.draw_rounded_rect_cmd(&mut target, hover);
                }
                self.renderer.draw_text_cmd(&mut target, &item.text);
            }
        }

        // Toast stack on top.
        for toast in &toasts {
            self.renderer.draw_rounded_rect_cmd(&mut target, &toast.bg);
            self.renderer.draw_flat_rect_cmd(&mut target, &toast.accent);
            self.renderer.draw_text_cmd(&mut target, &toast.text);
        }

        let _ = buffer.present();
    }
}

use std::time::Instant;

use winit::event::{ElementState, MouseButton, MouseScrollDelta};

use super::super::context_menu::ContextMenu;
use super::super::panel::compute_panel_layout;
use super::super::state::QuillWindow;

/// Wheel lines map to this many unscaled pixels.
const WHEEL_LINE_PX: f64 = 40.0;

impl QuillWindow {
    pub(in crate::gui) fn on_cursor_moved(&mut self, x: f64, y: f64) {
        self.mouse_pos = (x, y);
        if let Some(menu) = &mut self.context_menu {
            let hover = menu.hit_test(x, y, self.renderer.ui_scale());
            if hover != menu.hover_index {
                menu.hover_index = hover;
                self.window.request_redraw();
            }
        }
    }

    pub(in crate::gui) fn on_mouse_input(&mut self, state: ElementState, button: MouseButton) {
        if state != ElementState::Pressed {
            return;
        }
        match button {
            MouseButton::Left => self.on_left_click(),
            MouseButton::Right => self.on_right_click(),
            _ => {}
        }
    }

    fn on_left_click(&mut self) {
        let (x, y) = self.mouse_pos;
        let now = Instant::now();
        let size = self.window.inner_size();
        let ui_scale = self.renderer.ui_scale();

        // Toasts stack above everything else.
        if let Some(index) = self
            .notifications
            .hit_test(x, y, size.width, ui_scale, now)
        {
            self.notifications.dismiss(index, now);
            self.window.request_redraw();
            return;
        }

        if let Some(menu) = self.context_menu.take() {
            if let Some(index) = menu.hit_test(x, y, ui_scale) {
                let (action, _) = menu.items[index];
                self.apply_menu_action(action);
            }
            self.window.request_redraw();
            return;
        }

        if self.fullscreen_preview {
            self.toggle_fullscreen_preview();
            return;
        }

        let panel_w = self.panel_width_px();
        if x < panel_w as f64 {
            let hit = {
                let view = self.panel_view();
                let layout = compute_panel_layout(
                    &view,
                    panel_w,
                    size.height as f32,
                    self.panel_scroll,
                    ui_scale,
                    self.ui_font_size(),
                    &self.renderer.fonts,
                );
                layout.hit_test(x, y)
            };
            match hit {
                Some(hit) => self.apply_panel_hit(hit),
                None => {
                    self.focus = None;
                    self.open_dropdown = None;
                    self.window.request_redraw();
                }
            }
        } else {
            self.focus = None;
            self.open_dropdown = None;
            self.window.request_redraw();
        }
    }

    /// Right-clicking the preview area opens the context menu at the pointer.
    fn on_right_click(&mut self) {
        let (x, y) = self.mouse_pos;
        if x < self.panel_width_px() as f64 {
            return;
        }

        let size = self.window.inner_size();
        let ui_scale = self.renderer.ui_scale();
        let mut menu = ContextMenu::at(x as u32, y as u32);

        // Keep the whole menu on screen.
        let mw = menu.width(ui_scale);
        let mh = menu.height(ui_scale);
        if menu.x + mw > size.width {
            menu.x = size.width.saturating_sub(mw);
        }
        if menu.y + mh > size.height {
            menu.y = size.height.saturating_sub(mh);
        }

        self.context_menu = Some(menu);
        self.window.request_redraw();
    }

    pub(in crate::gui) fn on_mouse_wheel(&mut self, delta: MouseScrollDelta) {
        let panel_w = self.panel_width_px();
        if self.fullscreen_preview || self.mouse_pos.0 >= panel_w as f64 {
            return;
        }

        let dy = match delta {
            MouseScrollDelta::LineDelta(_, lines) => {
                lines as f64 * WHEEL_LINE_PX * self.renderer.ui_scale()
            }
            MouseScrollDelta::PixelDelta(pos) => pos.y,
        };

        let size = self.window.inner_size();
        let content_height = {
            let view = self.panel_view();
            compute_panel_layout(
                &view,
                panel_w,
                size.height as f32,
                self.panel_scroll,
                self.renderer.ui_scale(),
                self.ui_font_size(),
                &self.renderer.fonts,
            )
            .content_height
        };
        let max_scroll = (content_height - size.height as f32).max(0.0);
        let next = (self.panel_scroll - dy as f32).clamp(0.0, max_scroll);
        if (next - self.panel_scroll).abs() > f32::EPSILON {
            self.panel_scroll = next;
            self.window.request_redraw();
        }
    }
}

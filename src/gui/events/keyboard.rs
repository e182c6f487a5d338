use log::warn;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{Key, NamedKey};

use crate::export;

use super::super::fields::{FieldState, FocusField};
use super::super::state::QuillWindow;

impl QuillWindow {
    pub(in crate::gui) fn on_keyboard_input(&mut self, event: &KeyEvent) {
        if event.state != ElementState::Pressed {
            return;
        }

        if self.modifiers.control_key() && self.handle_ctrl_shortcut(&event.logical_key) {
            return;
        }

        match &event.logical_key {
            Key::Named(NamedKey::F11) => {
                self.toggle_fullscreen_preview();
                return;
            }
            Key::Named(NamedKey::Escape) => {
                self.handle_escape();
                return;
            }
            Key::Named(NamedKey::Tab) => {
                self.focus = Some(match self.focus {
                    Some(field) if self.modifiers.shift_key() => field.prev(),
                    Some(field) => field.next(),
                    None => FocusField::Title,
                });
                self.open_dropdown = None;
                self.window.request_redraw();
                return;
            }
            _ => {}
        }

        self.handle_field_key(&event.logical_key);
    }

    fn handle_ctrl_shortcut(&mut self, key: &Key) -> bool {
        let Key::Character(text) = key else {
            return false;
        };
        match text.to_lowercase().as_str() {
            "s" => {
                self.save_draft();
                true
            }
            "o" => {
                self.load_draft();
                true
            }
            "d" => {
                self.export_image();
                true
            }
            "v" => {
                self.paste_into_focused();
                true
            }
            _ => false,
        }
    }

    /// One dismissal per press: context menu, then dropdown, then fullscreen
    /// preview, then field focus.
    fn handle_escape(&mut self) {
        if self.context_menu.is_some() {
            self.context_menu = None;
        } else if self.open_dropdown.is_some() {
            self.open_dropdown = None;
        } else if self.fullscreen_preview {
            self.fullscreen_preview = false;
        } else if self.focus.is_some() {
            self.focus = None;
        } else {
            return;
        }
        self.window.request_redraw();
    }

    fn paste_into_focused(&mut self) {
        let Some(which) = self.focus else {
            return;
        };
        match export::paste_text() {
            Ok(pasted) => {
                let sanitized = sanitize_paste(&pasted, which.multiline());
                self.field_mut(which).insert_str(&sanitized);
                self.window.request_redraw();
            }
            Err(err) => warn!("clipboard paste: {err}"),
        }
    }

    fn handle_field_key(&mut self, key: &Key) {
        let Some(which) = self.focus else {
            return;
        };
        let by_word = self.modifiers.control_key();
        if apply_field_key(self.field_mut(which), key, by_word, which.multiline()) {
            self.window.request_redraw();
        }
    }
}

/// Strips carriage returns and control characters from pasted text; newlines
/// become spaces in single-line fields.
fn sanitize_paste(pasted: &str, multiline: bool) -> String {
    pasted
        .chars()
        .filter_map(|ch| match ch {
            '\r' => None,
            '\n' if !multiline => Some(' '),
            '\n' => Some('\n'),
            ch if ch.is_control() => None,
            ch => Some(ch),
        })
        .collect()
}

/// Applies one key press to the field. Returns whether the press was
/// consumed. Character keys held under Ctrl are chord remainders, never text.
fn apply_field_key(field: &mut FieldState, key: &Key, by_word: bool, multiline: bool) -> bool {
    match key {
        Key::Named(NamedKey::Backspace) => field.backspace(),
        Key::Named(NamedKey::Delete) => field.delete(),
        Key::Named(NamedKey::ArrowLeft) => field.left(by_word),
        Key::Named(NamedKey::ArrowRight) => field.right(by_word),
        Key::Named(NamedKey::ArrowUp) => field.up(),
        Key::Named(NamedKey::ArrowDown) => field.down(),
        Key::Named(NamedKey::Home) => field.home(),
        Key::Named(NamedKey::End) => field.end(),
        Key::Named(NamedKey::Space) => field.insert_char(' '),
        Key::Named(NamedKey::Enter) => {
            if multiline {
                field.insert_char('\n');
            } else {
                return false;
            }
        }
        Key::Character(text) => {
            if by_word {
                return false;
            }
            for ch in text.chars() {
                if !ch.is_control() {
                    field.insert_char(ch);
                }
            }
        }
        _ => return false,
    }
    true
}

#[cfg(test)]
#[path = "../../../tests/unit/gui_events_keyboard.rs"]
mod tests;

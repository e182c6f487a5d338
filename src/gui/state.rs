use std::sync::Arc;
use std::time::{Duration, Instant};

use softbuffer::{Context, Surface};
use winit::event_loop::OwnedDisplayHandle;
use winit::keyboard::ModifiersState;
use winit::window::Window;

use crate::config::AppConfig;
use crate::doc::PoemDocument;
use crate::storage::DraftStore;

use super::context_menu::ContextMenu;
use super::fields::{FieldState, FocusField};
use super::notify::NotificationCenter;
use super::panel::{DropdownKind, PanelView};
use super::renderer::CpuRenderer;
use super::renderer::types::Rect;

/// The autosave timer fires this often regardless of dirty state.
pub(super) const AUTOSAVE_INTERVAL: Duration = Duration::from_secs(30);

/// Single-window application shell.
pub(super) struct App {
    pub(super) window: Option<QuillWindow>,
    pub(super) context: Option<Context<OwnedDisplayHandle>>,
    pub(super) config: AppConfig,
}

/// All per-window state: the document, form fields, transient UI state and
/// the CPU render surface.
pub(super) struct QuillWindow {
    pub(super) window: Arc<Window>,
    pub(super) surface: Surface<OwnedDisplayHandle, Arc<Window>>,
    pub(super) renderer: CpuRenderer,
    pub(super) config: AppConfig,
    pub(super) store: Option<DraftStore>,
    /// Style state. The text fields below are the live editing buffers;
    /// `snapshot` merges them into a full document.
    pub(super) doc: PoemDocument,
    pub(super) title_field: FieldState,
    pub(super) body_field: FieldState,
    pub(super) author_field: FieldState,
    pub(super) focus: Option<FocusField>,
    pub(super) open_dropdown: Option<DropdownKind>,
    pub(super) panel_scroll: f32,
    pub(super) modifiers: ModifiersState,
    pub(super) mouse_pos: (f64, f64),
    pub(super) context_menu: Option<ContextMenu>,
    pub(super) notifications: NotificationCenter,
    pub(super) fullscreen_preview: bool,
    /// Busy flag while an image export is rendering.
    pub(super) exporting: bool,
    pub(super) next_autosave: Instant,
}

impl QuillWindow {
    /// The complete current document: style fields plus the live field texts.
    pub(super) fn snapshot(&self) -> PoemDocument {
        let mut doc = self.doc.clone();
        doc.title = self.title_field.text.clone();
        doc.text = self.body_field.text.clone();
        doc.author = self.author_field.text.clone();
        doc
    }

    /// Replaces every field from a loaded document at once.
    pub(super) fn apply_document(&mut self, doc: PoemDocument) {
        self.title_field.set_text(doc.title.clone());
        self.body_field.set_text(doc.text.clone());
        self.author_field.set_text(doc.author.clone());
        self.doc = doc;
        self.open_dropdown = None;
    }

    pub(super) fn field_mut(&mut self, which: FocusField) -> &mut FieldState {
        match which {
            FocusField::Title => &mut self.title_field,
            FocusField::Body => &mut self.body_field,
            FocusField::Author => &mut self.author_field,
        }
    }

    pub(super) fn panel_view(&self) -> PanelView<'_> {
        PanelView {
            doc: &self.doc,
            title: &self.title_field,
            body: &self.body_field,
            author: &self.author_field,
            focus: self.focus,
            open_dropdown: self.open_dropdown,
            exporting: self.exporting,
        }
    }

    pub(super) fn panel_width_px(&self) -> f32 {
        if self.fullscreen_preview {
            0.0
        } else {
            self.config.ui.panel_width * self.renderer.ui_scale() as f32
        }
    }

    pub(super) fn ui_font_size(&self) -> f32 {
        self.config.ui.font_size * self.renderer.ui_scale() as f32
    }

    pub(super) fn preview_padding_px(&self) -> f32 {
        self.config.ui.preview_padding * self.renderer.ui_scale() as f32
    }

    /// The white poem sheet inside the workspace area right of the panel.
    /// In fullscreen preview mode it covers the whole buffer.
    pub(super) fn preview_sheet_rect(&self, buf_w: f32, buf_h: f32) -> Rect {
        if self.fullscreen_preview {
            return Rect::new(0.0, 0.0, buf_w, buf_h);
        }
        let inset = self.preview_padding_px();
        let x = self.panel_width_px() + inset;
        let w = (buf_w - x - inset).max(1.0);
        let h = (buf_h - inset * 2.0).max(1.0);
        Rect::new(x, inset, w, h)
    }
}

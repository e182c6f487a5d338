use std::path::PathBuf;
use std::time::Instant;

use chrono::Utc;
use log::{error, info, warn};

use crate::doc::{
    FONT_SIZE_MAX, FONT_SIZE_MIN, LINE_HEIGHT_MAX, LINE_HEIGHT_MIN, LINE_HEIGHT_STEP,
    PoemDocument, PoemFont, Rgb, Template, TextAlign, plain_text,
};
use crate::export::{self, ImageOptions, ShareTarget, encode_png, image_export_path};
use crate::storage::StorageError;

use super::context_menu::MenuAction;
use super::notify::Severity;
use super::panel::{DropdownKind, PanelButton, PanelHit, StepperKind};
use super::preview::layout_preview;
use super::renderer::RenderTarget;
use super::renderer::types::{BackgroundFill, Rect};
use super::state::{AUTOSAVE_INTERVAL, QuillWindow};

impl QuillWindow {
    pub(super) fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        self.notifications.push(message, severity, Instant::now());
        self.window.request_redraw();
    }

    pub(super) fn save_draft(&mut self) {
        let mut doc = self.snapshot();
        doc.timestamp = Utc::now().timestamp_millis();
        match self.store.as_ref().map(|store| store.save_draft(&doc)) {
            Some(Ok(())) => {
                self.doc.timestamp = doc.timestamp;
                self.notify("Poem saved as draft!", Severity::Success);
            }
            Some(Err(err)) => {
                error!("saving draft: {err}");
                self.notify("Failed to save draft.", Severity::Error);
            }
            None => self.notify("Failed to save draft.", Severity::Error),
        }
    }

    pub(super) fn load_draft(&mut self) {
        match self.store.as_ref().map(|store| store.load_draft()) {
            Some(Ok(doc)) => {
                self.apply_document(doc);
                self.notify("Draft loaded successfully!", Severity::Success);
            }
            Some(Err(StorageError::NotFound)) | None => {
                self.notify("No saved draft found.", Severity::Warning);
            }
            Some(Err(err)) => {
                error!("loading draft: {err}");
                self.notify("Failed to load draft.", Severity::Error);
            }
        }
    }

    /// Periodic autosave. Best-effort: failures are logged, never surfaced.
    pub(super) fn autosave_tick(&mut self, now: Instant) {
        if now < self.next_autosave {
            return;
        }
        self.next_autosave = now + AUTOSAVE_INTERVAL;
        let doc = self.snapshot();
        if let Some(store) = &self.store
            && let Err(err) = store.autosave(&doc, Utc::now())
        {
            warn!("autosave: {err}");
        }
    }

    pub(super) fn copy_poem(&mut self) {
        let doc = self.snapshot();
        match export::copy_text(&plain_text(&doc)) {
            Ok(()) => self.notify("Poem copied to clipboard!", Severity::Success),
            Err(err) => {
                error!("clipboard copy: {err}");
                self.notify("Failed to copy poem.", Severity::Error);
            }
        }
    }

    pub(super) fn export_image(&mut self) {
        let doc = self.snapshot();
        if doc.text.trim().is_empty() {
            self.notify("Please write a poem first!", Severity::Warning);
            return;
        }
        self.exporting = true;
        let result = self.render_image_export(&doc);
        self.exporting = false;
        match result {
            Ok(path) => {
                info!("image exported to {}", path.display());
                self.notify("Poem downloaded successfully!", Severity::Success);
            }
            Err(err) => {
                error!("image export: {err}");
                self.notify("Download failed. Please try again.", Severity::Error);
            }
        }
    }

    /// Re-renders the preview offscreen at export resolution and encodes it.
    fn render_image_export(&mut self, doc: &PoemDocument) -> anyhow::Result<PathBuf> {
        let opts = ImageOptions::default();
        let size = self.window.inner_size();
        let sheet = self.preview_sheet_rect(size.width as f32, size.height as f32);

        let width = ((sheet.w * opts.scale as f32) as u32).max(1);
        let height = ((sheet.h * opts.scale as f32) as u32).max(1);
        let padding = self.preview_padding_px() * opts.scale as f32;
        let scale = self.renderer.ui_scale() as f32 * opts.scale as f32;
        let rect = Rect::new(0.0, 0.0, width as f32, height as f32);

        let layout = layout_preview(doc, rect, padding, scale, &self.renderer.fonts);
        let mut pixels = vec![0u32; width as usize * height as usize];
        let mut target = RenderTarget {
            buffer: &mut pixels,
            width: width as usize,
            height: height as usize,
        };
        self.renderer.draw_background_fill(&mut target, rect, layout.background);
        for cmd in layout.text_cmds() {
            self.renderer.draw_text_cmd(&mut target, cmd);
        }

        let key = match (opts.transparent_background, layout.background) {
            (true, BackgroundFill::Solid(color)) => Some(color),
            _ => None,
        };
        let path = image_export_path(Utc::now().timestamp_millis());
        encode_png(&pixels, width, height, key, &path)?;
        Ok(path)
    }

    pub(super) fn export_text_file(&mut self) {
        let doc = self.snapshot();
        if doc.text.trim().is_empty() {
            self.notify("Please write a poem first!", Severity::Warning);
            return;
        }
        match export::export_text(&doc, Utc::now().timestamp_millis()) {
            Ok(path) => {
                info!("text exported to {}", path.display());
                self.notify("Poem exported as text file!", Severity::Success);
            }
            Err(err) => {
                error!("text export: {err}");
                self.notify("Export failed. Please try again.", Severity::Error);
            }
        }
    }

    pub(super) fn share(&mut self, target: ShareTarget) {
        let doc = self.snapshot();
        if doc.text.trim().is_empty() {
            self.notify("Please write a poem first!", Severity::Warning);
            return;
        }
        if let Err(err) = export::open_share(target, &doc) {
            error!("opening share link: {err}");
            self.notify("Failed to open share link.", Severity::Error);
        }
    }

    /// Restores every content and style field to its default.
    pub(super) fn reset(&mut self) {
        self.apply_document(PoemDocument::default());
        self.focus = None;
        self.context_menu = None;
        self.panel_scroll = 0.0;
        self.notify("Content cleared successfully!", Severity::Success);
    }

    pub(super) fn toggle_fullscreen_preview(&mut self) {
        self.fullscreen_preview = !self.fullscreen_preview;
        if self.fullscreen_preview {
            self.focus = None;
            self.open_dropdown = None;
            self.context_menu = None;
        }
        self.window.request_redraw();
    }

    pub(super) fn apply_menu_action(&mut self, action: MenuAction) {
        match action {
            MenuAction::CopyText => self.copy_poem(),
            MenuAction::ExportImage => self.export_image(),
            MenuAction::ExportText => self.export_text_file(),
            MenuAction::ShareX => self.share(ShareTarget::X),
            MenuAction::ShareWhatsApp => self.share(ShareTarget::WhatsApp),
        }
    }

    pub(super) fn apply_panel_hit(&mut self, hit: PanelHit) {
        match hit {
            PanelHit::Field(which) => {
                self.focus = Some(which);
                self.open_dropdown = None;
            }
            PanelHit::StepperMinus(kind) => self.step(kind, -1.0),
            PanelHit::StepperPlus(kind) => self.step(kind, 1.0),
            PanelHit::DropdownButton(kind) => {
                self.open_dropdown = if self.open_dropdown == Some(kind) {
                    None
                } else {
                    Some(kind)
                };
            }
            PanelHit::DropdownOption(DropdownKind::Font, index) => {
                if let Some(font) = PoemFont::ALL.get(index) {
                    self.doc.font = *font;
                }
                self.open_dropdown = None;
            }
            PanelHit::DropdownOption(DropdownKind::Align, index) => {
                if let Some(align) = TextAlign::ALL.get(index) {
                    self.doc.text_align = *align;
                }
                self.open_dropdown = None;
            }
            PanelHit::TextSwatch(index) => {
                if let Some(color) = Rgb::TEXT_SWATCHES.get(index) {
                    self.doc.font_color = *color;
                }
            }
            PanelHit::BackgroundSwatch(index) => {
                if let Some(color) = Rgb::BACKGROUND_SWATCHES.get(index) {
                    self.doc.background_color = *color;
                }
            }
            PanelHit::TemplateCell(index) => {
                if let Some(template) = Template::ALL.get(index) {
                    self.doc.template = *template;
                }
            }
            PanelHit::Button(button) => self.apply_button(button),
        }
        self.window.request_redraw();
    }

    fn apply_button(&mut self, button: PanelButton) {
        match button {
            PanelButton::SaveDraft => self.save_draft(),
            PanelButton::LoadDraft => self.load_draft(),
            PanelButton::CopyText => self.copy_poem(),
            PanelButton::DownloadImage => self.export_image(),
            PanelButton::ExportText => self.export_text_file(),
            PanelButton::Reset => self.reset(),
        }
    }

    fn step(&mut self, kind: StepperKind, direction: f32) {
        match kind {
            StepperKind::FontSize => {
                let next = self.doc.font_size_px as i64 + direction as i64;
                self.doc.font_size_px =
                    next.clamp(FONT_SIZE_MIN as i64, FONT_SIZE_MAX as i64) as u32;
            }
            StepperKind::LineHeight => {
                let next = self.doc.line_height + LINE_HEIGHT_STEP * direction;
                // Steps accumulate float error without requantizing.
                self.doc.line_height =
                    ((next * 10.0).round() / 10.0).clamp(LINE_HEIGHT_MIN, LINE_HEIGHT_MAX);
            }
        }
    }
}

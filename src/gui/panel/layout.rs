use crate::doc::{PoemDocument, PoemFont, Rgb, Template, TextAlign};

use super::super::fields::{FieldState, FocusField};
use super::super::preview::background_fill;
use super::super::renderer::types::{
    BackgroundFill, FlatRectCmd, Rect, RoundedRectCmd, TextCmd, scaled_px,
};
use super::super::renderer::{
    BUTTON_BG, BUTTON_DANGER_BG, BUTTON_TEXT, FIELD_BG, FIELD_BORDER, FIELD_BORDER_FOCUS,
    MENU_BG, PANEL_BG, PANEL_TEXT, PANEL_TEXT_MUTED, TextMeasure,
};
use super::{DropdownKind, PanelButton, PanelHit, StepperKind};

/// Everything the panel layout reads. Style comes from the document, text
/// from the field states, the rest is transient UI state.
pub(in crate::gui) struct PanelView<'a> {
    pub doc: &'a PoemDocument,
    pub title: &'a FieldState,
    pub body: &'a FieldState,
    pub author: &'a FieldState,
    pub focus: Option<FocusField>,
    pub open_dropdown: Option<DropdownKind>,
    pub exporting: bool,
}

/// Pre-computed draw commands and hit targets for the control panel.
/// Commands are grouped by primitive and drawn in group order; the overlay
/// groups (an open dropdown's option list) draw above everything else.
pub(in crate::gui) struct PanelLayout {
    pub bg: FlatRectCmd,
    pub divider: FlatRectCmd,
    pub rounded: Vec<RoundedRectCmd>,
    pub flats: Vec<FlatRectCmd>,
    pub texts: Vec<TextCmd>,
    /// Template cell fills (solid, gradient or paper).
    pub fills: Vec<(Rect, BackgroundFill)>,
    pub overlay_rounded: Vec<RoundedRectCmd>,
    pub overlay_texts: Vec<TextCmd>,
    hits: Vec<(Rect, PanelHit)>,
    overlay_hits: Vec<(Rect, PanelHit)>,
    /// Total scrollable content height, for clamping the scroll offset.
    pub content_height: f32,
}

impl PanelLayout {
    /// Overlay items win over the controls they cover.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<PanelHit> {
        self.overlay_hits
            .iter()
            .chain(self.hits.iter())
            .find(|(rect, _)| rect.contains(x, y))
            .map(|(_, hit)| *hit)
    }
}

struct Builder<'a> {
    view: &'a PanelView<'a>,
    measure: &'a dyn TextMeasure,
    ui_scale: f64,
    font_size: f32,
    /// Left edge and width of the content column.
    x: f32,
    w: f32,
    y: f32,
    out: PanelLayout,
}

impl<'a> Builder<'a> {
    fn px(&self, base: u32) -> f32 {
        scaled_px(base, self.ui_scale) as f32
    }

    fn line_h(&self) -> f32 {
        self.font_size * 1.4
    }

    fn label(&mut self, text: &str) {
        self.out.texts.push(TextCmd {
            x: self.x,
            y: self.y,
            text: text.to_string(),
            font: PoemFont::Sans,
            size: self.font_size,
            color: PANEL_TEXT,
            opacity: 1.0,
        });
        self.y += self.line_h() + self.px(4);
    }

    fn field(&mut self, which: FocusField, state: &FieldState, placeholder: &str, height: f32) {
        let focused = self.view.focus == Some(which);
        let rect = Rect::new(self.x, self.y, self.w, height);
        let radius = self.px(6);
        self.out.rounded.push(RoundedRectCmd {
            x: rect.x,
            y: rect.y,
            w: rect.w,
            h: rect.h,
            radius,
            color: if focused { FIELD_BORDER_FOCUS } else { FIELD_BORDER },
            opacity: 1.0,
        });
        self.out.rounded.push(RoundedRectCmd {
            x: rect.x + 1.0,
            y: rect.y + 1.0,
            w: rect.w - 2.0,
            h: rect.h - 2.0,
            radius,
            color: FIELD_BG,
            opacity: 1.0,
        });

        let pad = self.px(8);
        let text_x = rect.x + pad;
        let line_h = self.line_h();

        if state.text.is_empty() {
            self.out.texts.push(TextCmd {
                x: text_x,
                y: rect.y + pad,
                text: placeholder.to_string(),
                font: PoemFont::Sans,
                size: self.font_size,
                color: PANEL_TEXT_MUTED,
                opacity: 1.0,
            });
        } else {
            let max_lines = ((height - pad * 2.0) / line_h).max(1.0) as usize;
            for (i, line) in state.text.split('\n').take(max_lines).enumerate() {
                self.out.texts.push(TextCmd {
                    x: text_x,
                    y: rect.y + pad + i as f32 * line_h,
                    text: line.to_string(),
                    font: PoemFont::Sans,
                    size: self.font_size,
                    color: PANEL_TEXT,
                    opacity: 1.0,
                });
            }
        }

        if focused {
            let line_idx = state.text[..state.cursor].matches('\n').count();
            let line_start = state.line_start();
            let cursor_w = self.measure.text_width(
                PoemFont::Sans,
                self.font_size,
                &state.text[line_start..state.cursor],
            );
            self.out.flats.push(FlatRectCmd {
                x: text_x + cursor_w,
                y: rect.y + pad + line_idx as f32 * line_h,
                w: 1.0,
                h: self.font_size * 1.2,
                color: PANEL_TEXT,
                opacity: 1.0,
            });
        }

        self.out.hits.push((rect, PanelHit::Field(which)));
        self.y += height + self.px(12);
    }

    fn stepper(&mut self, kind: StepperKind, label: &str, value: &str) {
        let h = self.px(28);
        let btn = self.px(28);
        let radius = self.px(6);
        let value_w = self.px(52);

        self.out.texts.push(TextCmd {
            x: self.x,
            y: self.y + (h - self.line_h()) / 2.0,
            text: label.to_string(),
            font: PoemFont::Sans,
            size: self.font_size,
            color: PANEL_TEXT,
            opacity: 1.0,
        });

        let plus_rect = Rect::new(self.x + self.w - btn, self.y, btn, h);
        let value_x = plus_rect.x - value_w;
        let minus_rect = Rect::new(value_x - btn, self.y, btn, h);

        for (rect, glyph, hit) in [
            (minus_rect, "-", PanelHit::StepperMinus(kind)),
            (plus_rect, "+", PanelHit::StepperPlus(kind)),
        ] {
            self.out.rounded.push(RoundedRectCmd {
                x: rect.x,
                y: rect.y,
                w: rect.w,
                h: rect.h,
                radius,
                color: FIELD_BORDER,
                opacity: 1.0,
            });
            let glyph_w = self.measure.text_width(PoemFont::Sans, self.font_size, glyph);
            self.out.texts.push(TextCmd {
                x: rect.x + (rect.w - glyph_w) / 2.0,
                y: rect.y + (h - self.line_h()) / 2.0,
                text: glyph.to_string(),
                font: PoemFont::Sans,
                size: self.font_size,
                color: PANEL_TEXT,
                opacity: 1.0,
            });
            self.out.hits.push((rect, hit));
        }

        let value_width = self.measure.text_width(PoemFont::Sans, self.font_size, value);
        self.out.texts.push(TextCmd {
            x: value_x + (value_w - value_width) / 2.0,
            y: self.y + (h - self.line_h()) / 2.0,
            text: value.to_string(),
            font: PoemFont::Sans,
            size: self.font_size,
            color: PANEL_TEXT,
            opacity: 1.0,
        });

        self.y += h + self.px(10);
    }

    fn dropdown(&mut self, kind: DropdownKind, label: &str, current: &str, options: &[&str]) {
        self.label(label);
        let h = self.px(30);
        let radius = self.px(6);
        let rect = Rect::new(self.x, self.y, self.w, h);

        self.out.rounded.push(RoundedRectCmd {
            x: rect.x,
            y: rect.y,
            w: rect.w,
            h: rect.h,
            radius,
            color: FIELD_BORDER,
            opacity: 1.0,
        });
        self.out.rounded.push(RoundedRectCmd {
            x: rect.x + 1.0,
            y: rect.y + 1.0,
            w: rect.w - 2.0,
            h: rect.h - 2.0,
            radius,
            color: FIELD_BG,
            opacity: 1.0,
        });
        let pad = self.px(8);
        self.out.texts.push(TextCmd {
            x: rect.x + pad,
            y: rect.y + (h - self.line_h()) / 2.0,
            text: current.to_string(),
            font: PoemFont::Sans,
            size: self.font_size,
            color: PANEL_TEXT,
            opacity: 1.0,
        });
        let arrow = "v";
        let arrow_w = self.measure.text_width(PoemFont::Sans, self.font_size, arrow);
        self.out.texts.push(TextCmd {
            x: rect.x + rect.w - pad - arrow_w,
            y: rect.y + (h - self.line_h()) / 2.0,
            text: arrow.to_string(),
            font: PoemFont::Sans,
            size: self.font_size,
            color: PANEL_TEXT_MUTED,
            opacity: 1.0,
        });
        self.out.hits.push((rect, PanelHit::DropdownButton(kind)));

        if self.view.open_dropdown == Some(kind) {
            let opt_h = self.px(26);
            let list_rect = Rect::new(
                rect.x,
                rect.y + h + 2.0,
                rect.w,
                opt_h * options.len() as f32 + 4.0,
            );
            self.out.overlay_rounded.push(RoundedRectCmd {
                x: list_rect.x,
                y: list_rect.y,
                w: list_rect.w,
                h: list_rect.h,
                radius,
                color: MENU_BG,
                opacity: 1.0,
            });
            self.out.overlay_rounded.push(RoundedRectCmd {
                x: list_rect.x,
                y: list_rect.y,
                w: list_rect.w,
                h: list_rect.h,
                radius,
                color: 0x000000,
                opacity: 0.08,
            });
            for (i, option) in options.iter().enumerate() {
                let opt_rect = Rect::new(list_rect.x, list_rect.y + 2.0 + i as f32 * opt_h, list_rect.w, opt_h);
                let selected = *option == current;
                self.out.overlay_texts.push(TextCmd {
                    x: opt_rect.x + pad,
                    y: opt_rect.y + (opt_h - self.line_h()) / 2.0,
                    text: (*option).to_string(),
                    font: PoemFont::Sans,
                    size: self.font_size,
                    color: if selected { FIELD_BORDER_FOCUS } else { PANEL_TEXT },
                    opacity: 1.0,
                });
                self.out
                    .overlay_hits
                    .push((opt_rect, PanelHit::DropdownOption(kind, i)));
            }
        }

        self.y += h + self.px(12);
    }

    fn swatch_row(&mut self, label: &str, swatches: &[Rgb], selected: Rgb, background: bool) {
        self.label(label);
        let cell = self.px(24);
        let gap = self.px(6);
        let radius = self.px(5);
        for (i, color) in swatches.iter().enumerate() {
            let rect = Rect::new(self.x + i as f32 * (cell + gap), self.y, cell, cell);
            if *color == selected {
                self.out.rounded.push(RoundedRectCmd {
                    x: rect.x - 2.0,
                    y: rect.y - 2.0,
                    w: rect.w + 4.0,
                    h: rect.h + 4.0,
                    radius: radius + 2.0,
                    color: FIELD_BORDER_FOCUS,
                    opacity: 1.0,
                });
            }
            self.out.rounded.push(RoundedRectCmd {
                x: rect.x,
                y: rect.y,
                w: rect.w,
                h: rect.h,
                radius,
                color: color.to_pixel(),
                opacity: 1.0,
            });
            let hit = if background {
                PanelHit::BackgroundSwatch(i)
            } else {
                PanelHit::TextSwatch(i)
            };
            self.out.hits.push((rect, hit));
        }
        self.y += cell + self.px(12);
    }

    fn template_grid(&mut self) {
        self.label("Template");
        let gap = self.px(8);
        let cols = 3.0;
        let cell_w = (self.w - gap * (cols - 1.0)) / cols;
        let cell_h = self.px(44);
        let radius = self.px(6);
        let label_size = self.font_size * 0.85;

        for (i, template) in Template::ALL.iter().enumerate() {
            let col = (i % 3) as f32;
            let row = (i / 3) as f32;
            let rect = Rect::new(
                self.x + col * (cell_w + gap),
                self.y + row * (cell_h + gap),
                cell_w,
                cell_h,
            );
            if *template == self.view.doc.template {
                self.out.rounded.push(RoundedRectCmd {
                    x: rect.x - 2.0,
                    y: rect.y - 2.0,
                    w: rect.w + 4.0,
                    h: rect.h + 4.0,
                    radius: radius + 2.0,
                    color: FIELD_BORDER_FOCUS,
                    opacity: 1.0,
                });
            }
            // The `None` cell previews the manual color.
            let fill = background_fill(*template, self.view.doc.background_color);
            self.out.fills.push((rect, fill));
            let text_w = self.measure.text_width(PoemFont::Sans, label_size, template.label());
            self.out.texts.push(TextCmd {
                x: rect.x + (rect.w - text_w) / 2.0,
                y: rect.y + rect.h - label_size * 1.4,
                text: template.label().to_string(),
                font: PoemFont::Sans,
                size: label_size,
                color: PANEL_TEXT,
                opacity: 1.0,
            });
            self.out.hits.push((rect, PanelHit::TemplateCell(i)));
        }
        self.y += cell_h * 2.0 + gap + self.px(14);
    }

    fn button(&mut self, which: PanelButton) {
        let h = self.px(32);
        let radius = self.px(6);
        let rect = Rect::new(self.x, self.y, self.w, h);
        let color = match which {
            PanelButton::Reset => BUTTON_DANGER_BG,
            PanelButton::DownloadImage => 0x10B981,
            _ => BUTTON_BG,
        };
        self.out.rounded.push(RoundedRectCmd {
            x: rect.x,
            y: rect.y,
            w: rect.w,
            h: rect.h,
            radius,
            color,
            opacity: 1.0,
        });
        let label = which.label(self.view.exporting);
        let label_w = self.measure.text_width(PoemFont::Sans, self.font_size, label);
        self.out.texts.push(TextCmd {
            x: rect.x + (rect.w - label_w) / 2.0,
            y: rect.y + (h - self.line_h()) / 2.0,
            text: label.to_string(),
            font: PoemFont::Sans,
            size: self.font_size,
            color: BUTTON_TEXT,
            opacity: 1.0,
        });
        self.out.hits.push((rect, PanelHit::Button(which)));
        self.y += h + self.px(8);
    }
}

/// Computes the full panel layout for one frame. Pure; scrolling shifts every
/// command and hit rect together via `scroll`.
pub(in crate::gui) fn compute_panel_layout(
    view: &PanelView<'_>,
    panel_w: f32,
    panel_h: f32,
    scroll: f32,
    ui_scale: f64,
    font_size: f32,
    measure: &dyn TextMeasure,
) -> PanelLayout {
    let margin = scaled_px(16, ui_scale) as f32;
    let mut builder = Builder {
        view,
        measure,
        ui_scale,
        font_size,
        x: margin,
        w: panel_w - margin * 2.0,
        y: margin - scroll,
        out: PanelLayout {
            bg: FlatRectCmd {
                x: 0.0,
                y: 0.0,
                w: panel_w,
                h: panel_h,
                color: PANEL_BG,
                opacity: 1.0,
            },
            divider: FlatRectCmd {
                x: panel_w - 1.0,
                y: 0.0,
                w: 1.0,
                h: panel_h,
                color: FIELD_BORDER,
                opacity: 1.0,
            },
            rounded: Vec::new(),
            flats: Vec::new(),
            texts: Vec::new(),
            fills: Vec::new(),
            overlay_rounded: Vec::new(),
            overlay_texts: Vec::new(),
            hits: Vec::new(),
            overlay_hits: Vec::new(),
            content_height: 0.0,
        },
    };

    builder.label("Title");
    let single_h = builder.px(32);
    builder.field(FocusField::Title, view.title, "Poem title...", single_h);
    builder.label("Poem");
    let body_h = builder.px(130);
    builder.field(FocusField::Body, view.body, "Write your poem here...", body_h);
    builder.label("Poet");
    builder.field(FocusField::Author, view.author, "Your name...", single_h);

    builder.stepper(
        StepperKind::FontSize,
        "Font Size",
        &view.doc.font_size_display(),
    );
    builder.stepper(
        StepperKind::LineHeight,
        "Line Height",
        &view.doc.line_height_display(),
    );

    let font_labels: Vec<&str> = PoemFont::ALL.iter().map(|f| f.label()).collect();
    builder.dropdown(
        DropdownKind::Font,
        "Font",
        view.doc.font.label(),
        &font_labels,
    );
    let align_labels: Vec<&str> = TextAlign::ALL.iter().map(|a| a.label()).collect();
    builder.dropdown(
        DropdownKind::Align,
        "Alignment",
        view.doc.text_align.label(),
        &align_labels,
    );

    builder.swatch_row("Text Color", &Rgb::TEXT_SWATCHES, view.doc.font_color, false);
    builder.swatch_row(
        "Background Color",
        &Rgb::BACKGROUND_SWATCHES,
        view.doc.background_color,
        true,
    );

    builder.template_grid();

    for button in [
        PanelButton::SaveDraft,
        PanelButton::LoadDraft,
        PanelButton::CopyText,
        PanelButton::DownloadImage,
        PanelButton::ExportText,
        PanelButton::Reset,
    ] {
        builder.button(button);
    }

    builder.out.content_height = builder.y + scroll + margin;
    builder.out
}

#[cfg(test)]
#[path = "../../../tests/unit/gui_panel.rs"]
mod tests;

use crate::doc::{PoemDocument, Rgb, Template, TextAlign};

use super::renderer::types::{BackgroundFill, Rect, TextCmd};
use super::renderer::{PANEL_TEXT_MUTED, TextMeasure};

/// Shown in place of the body while the poem text is empty. Never persisted.
pub(in crate::gui) const PLACEHOLDER: &str = "Start writing to see your beautiful poem here...";

/// Title renders at this multiple of the body font size.
const TITLE_SCALE: f32 = 1.5;

/// Everything needed to paint one preview surface. Pure data; the renderer
/// just executes it.
#[derive(Clone, Debug, PartialEq)]
pub(in crate::gui) struct PreviewLayout {
    pub background: BackgroundFill,
    /// Absent entirely when the title field is empty.
    pub title: Option<Vec<TextCmd>>,
    pub body: Vec<TextCmd>,
    /// `"~ "` + author; absent when the author field is empty.
    pub signature: Option<TextCmd>,
    /// True when the body shows the placeholder instead of poem text.
    pub placeholder: bool,
}

impl PreviewLayout {
    pub fn text_cmds(&self) -> impl Iterator<Item = &TextCmd> {
        self.title
            .iter()
            .flatten()
            .chain(self.body.iter())
            .chain(self.signature.iter())
    }
}

/// Resolves the active background. Any template other than `None` overrides
/// the manual color; reselecting `None` restores it exactly.
pub(in crate::gui) fn background_fill(template: Template, manual: Rgb) -> BackgroundFill {
    match template {
        Template::None => BackgroundFill::Solid(manual.to_pixel()),
        Template::Gradient1 => BackgroundFill::Gradient {
            top: 0xFFECD2,
            bottom: 0xFCB69F,
        },
        Template::Gradient2 => BackgroundFill::Gradient {
            top: 0x667EEA,
            bottom: 0x764BA2,
        },
        Template::Gradient3 => BackgroundFill::Gradient {
            top: 0xD4FC79,
            bottom: 0x96E6A1,
        },
        Template::Gradient4 => BackgroundFill::Gradient {
            top: 0x89F7FE,
            bottom: 0x66A6FF,
        },
        Template::Paper => BackgroundFill::Paper,
    }
}

/// Lays out the full preview for one document snapshot.
///
/// Pure and deterministic: equal inputs produce equal layouts. `scale`
/// multiplies every font size (2.0 for image export), `padding` is the inset
/// from the surface edge in buffer pixels.
pub(in crate::gui) fn layout_preview(
    doc: &PoemDocument,
    rect: Rect,
    padding: f32,
    scale: f32,
    measure: &dyn TextMeasure,
) -> PreviewLayout {
    let size = doc.font_size_px as f32 * scale;
    let step = size * doc.line_height;
    let content_x = rect.x + padding;
    let content_w = (rect.w - padding * 2.0).max(1.0);
    let color = doc.font_color.to_pixel();
    let mut y = rect.y + padding;

    let title = if doc.title.is_empty() {
        None
    } else {
        let title_size = size * TITLE_SCALE;
        let cmds = layout_block(
            &doc.title,
            doc,
            title_size,
            title_size * doc.line_height,
            content_x,
            content_w,
            &mut y,
            color,
            measure,
        );
        y += step;
        Some(cmds)
    };

    let placeholder = doc.text.is_empty();
    let (body_text, body_color) = if placeholder {
        (PLACEHOLDER, PANEL_TEXT_MUTED)
    } else {
        (doc.text.as_str(), color)
    };
    let body = layout_block(
        body_text, doc, size, step, content_x, content_w, &mut y, body_color, measure,
    );

    let signature = if doc.author.is_empty() {
        None
    } else {
        y += step;
        let text = format!("~ {}", doc.author);
        let width = measure.text_width(doc.font, size, &text);
        let x = aligned_x(doc.text_align, content_x, content_w, width);
        let cmd = TextCmd {
            x,
            y,
            text,
            font: doc.font,
            size,
            color,
            opacity: 1.0,
        };
        Some(cmd)
    };

    PreviewLayout {
        background: background_fill(doc.template, doc.background_color),
        title,
        body,
        signature,
        placeholder,
    }
}

/// Wraps and aligns one multi-paragraph block of text, advancing `y`.
#[allow(clippy::too_many_arguments)]
fn layout_block(
    text: &str,
    doc: &PoemDocument,
    size: f32,
    step: f32,
    content_x: f32,
    content_w: f32,
    y: &mut f32,
    color: u32,
    measure: &dyn TextMeasure,
) -> Vec<TextCmd> {
    let mut cmds = Vec::new();
    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            *y += step;
            continue;
        }
        let lines = wrap_words(paragraph, doc, size, content_w, measure);
        let last = lines.len() - 1;
        for (i, words) in lines.iter().enumerate() {
            let justify_this =
                doc.text_align == TextAlign::Justify && i != last && words.len() > 1;
            if justify_this {
                cmds.extend(justified_line(
                    words, doc, size, content_x, content_w, *y, color, measure,
                ));
            } else {
                let text = words.join(" ");
                let width = measure.text_width(doc.font, size, &text);
                let x = aligned_x(doc.text_align, content_x, content_w, width);
                cmds.push(TextCmd {
                    x,
                    y: *y,
                    text,
                    font: doc.font,
                    size,
                    color,
                    opacity: 1.0,
                });
            }
            *y += step;
        }
    }
    cmds
}

/// Greedy word wrap. Words wider than the content width get a line of their
/// own rather than being broken mid-word.
fn wrap_words<'a>(
    paragraph: &'a str,
    doc: &PoemDocument,
    size: f32,
    content_w: f32,
    measure: &dyn TextMeasure,
) -> Vec<Vec<&'a str>> {
    let space_w = measure.text_width(doc.font, size, " ");
    let mut lines: Vec<Vec<&str>> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_w = 0.0;

    for word in paragraph.split_whitespace() {
        let word_w = measure.text_width(doc.font, size, word);
        let needed = if current.is_empty() {
            word_w
        } else {
            current_w + space_w + word_w
        };
        if !current.is_empty() && needed > content_w {
            lines.push(std::mem::take(&mut current));
            current_w = word_w;
        } else {
            current_w = needed;
        }
        current.push(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(Vec::new());
    }
    lines
}

/// One justified visual line: words spread so the first touches the left edge
/// and the last touches the right edge.
#[allow(clippy::too_many_arguments)]
fn justified_line(
    words: &[&str],
    doc: &PoemDocument,
    size: f32,
    content_x: f32,
    content_w: f32,
    y: f32,
    color: u32,
    measure: &dyn TextMeasure,
) -> Vec<TextCmd> {
    let total: f32 = words
        .iter()
        .map(|word| measure.text_width(doc.font, size, word))
        .sum();
    let gap = (content_w - total).max(0.0) / (words.len() - 1) as f32;

    let mut x = content_x;
    let mut cmds = Vec::with_capacity(words.len());
    for word in words {
        cmds.push(TextCmd {
            x,
            y,
            text: (*word).to_string(),
            font: doc.font,
            size,
            color,
            opacity: 1.0,
        });
        x += measure.text_width(doc.font, size, word) + gap;
    }
    cmds
}

fn aligned_x(align: TextAlign, content_x: f32, content_w: f32, line_w: f32) -> f32 {
    match align {
        // A justified block's final (or single-word) line starts at the left
        // edge, same as the placeholder single lines.
        TextAlign::Left | TextAlign::Justify => content_x,
        TextAlign::Center => content_x + (content_w - line_w) / 2.0,
        TextAlign::Right => content_x + content_w - line_w,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gui_preview.rs"]
mod tests;

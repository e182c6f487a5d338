use super::*;
use crate::doc::{PoemDocument, PoemFont, Template, TextAlign};
use crate::gui::renderer::TextMeasure;

/// Deterministic measurer: every char is `0` units wide regardless of font
/// and size, so wrap points depend only on the text.
struct FixedMeasure(f32);

impl TextMeasure for FixedMeasure {
    fn text_width(&self, _font: PoemFont, _size: f32, text: &str) -> f32 {
        text.chars().count() as f32 * self.0
    }
}

fn doc(text: &str) -> PoemDocument {
    PoemDocument {
        text: text.into(),
        font_size_px: 20,
        line_height: 1.5,
        ..PoemDocument::default()
    }
}

const RECT: Rect = Rect {
    x: 0.0,
    y: 0.0,
    w: 400.0,
    h: 600.0,
};
const PADDING: f32 = 40.0;
const CONTENT_W: f32 = 320.0;

fn layout(doc: &PoemDocument) -> PreviewLayout {
    layout_preview(doc, RECT, PADDING, 1.0, &FixedMeasure(10.0))
}

#[test]
fn empty_title_produces_no_title_region() {
    let layout = layout(&doc("Roses are red"));
    assert!(layout.title.is_none());

    let first_body_y = layout.body[0].y;
    assert_eq!(first_body_y, RECT.y + PADDING);
}

#[test]
fn title_renders_larger_than_body() {
    let mut d = doc("Roses are red");
    d.title = "Colors".into();
    let layout = layout(&d);

    let title = layout.title.as_ref().unwrap();
    assert_eq!(title[0].size, 30.0);
    assert_eq!(layout.body[0].size, 20.0);
    assert!(layout.body[0].y > title[0].y);
}

#[test]
fn layout_is_deterministic() {
    let mut d = doc("Roses are red\nViolets are blue");
    d.title = "Colors".into();
    d.author = "Ada".into();
    d.text_align = TextAlign::Justify;
    assert_eq!(layout(&d), layout(&d));
}

#[test]
fn empty_text_shows_placeholder_in_muted_color() {
    let layout = layout(&doc(""));
    assert!(layout.placeholder);
    assert!(!layout.body.is_empty());
    assert_eq!(layout.body[0].color, PANEL_TEXT_MUTED);

    let joined: String = layout
        .body
        .iter()
        .map(|cmd| cmd.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    assert_eq!(joined, PLACEHOLDER);
}

#[test]
fn center_alignment_centers_each_line() {
    let mut d = doc("hi");
    d.text_align = TextAlign::Center;
    let layout = layout(&d);

    // "hi" is 20 units wide in a 320-unit column.
    assert_eq!(layout.body[0].x, PADDING + (CONTENT_W - 20.0) / 2.0);
}

#[test]
fn right_alignment_touches_the_right_edge() {
    let mut d = doc("hi");
    d.text_align = TextAlign::Right;
    let layout = layout(&d);
    assert_eq!(layout.body[0].x + 20.0, PADDING + CONTENT_W);
}

#[test]
fn long_lines_wrap_at_the_content_width() {
    let mut d = doc("aaaa bbbb cccc dddd eeee ffff gggg");
    d.text_align = TextAlign::Left;
    let layout = layout(&d);

    // Six 40-unit words and five spaces fit in 320 units; the seventh wraps.
    let first_y = layout.body[0].y;
    let wrapped: Vec<_> = layout.body.iter().filter(|cmd| cmd.y > first_y).collect();
    assert_eq!(wrapped.len(), 1);
    assert_eq!(wrapped[0].text, "gggg");
}

#[test]
fn justified_lines_are_flush_with_both_edges() {
    let mut d = doc("aaaa bbbb cccc dddd eeee ffff gggg");
    d.text_align = TextAlign::Justify;
    let layout = layout(&d);

    let first_y = layout.body[0].y;
    let line: Vec<_> = layout.body.iter().filter(|cmd| cmd.y == first_y).collect();
    assert_eq!(line.len(), 6);
    assert_eq!(line[0].x, PADDING);
    let last = line[5];
    assert!((last.x + 40.0 - (PADDING + CONTENT_W)).abs() < 0.5);
}

#[test]
fn justified_final_line_stays_left() {
    let mut d = doc("aaaa bbbb cccc dddd eeee ffff gggg");
    d.text_align = TextAlign::Justify;
    let layout = layout(&d);

    let last_y = layout.body.iter().map(|cmd| cmd.y).fold(f32::MIN, f32::max);
    let line: Vec<_> = layout.body.iter().filter(|cmd| cmd.y == last_y).collect();
    assert_eq!(line.len(), 1);
    assert_eq!(line[0].x, PADDING);
}

#[test]
fn blank_lines_advance_vertical_position() {
    let layout = layout(&doc("one\n\ntwo"));
    assert_eq!(layout.body.len(), 2);
    // step = 20 * 1.5; the blank paragraph adds one extra step.
    assert_eq!(layout.body[1].y - layout.body[0].y, 60.0);
}

#[test]
fn signature_appears_below_the_body() {
    let mut d = doc("Roses are red");
    d.author = "Ada".into();
    let layout = layout(&d);

    let signature = layout.signature.as_ref().unwrap();
    assert_eq!(signature.text, "~ Ada");
    assert!(signature.y > layout.body[0].y);
}

#[test]
fn no_author_means_no_signature() {
    assert!(layout(&doc("Roses are red")).signature.is_none());
}

#[test]
fn export_scale_multiplies_font_sizes() {
    let d = doc("Roses are red");
    let layout = layout_preview(&d, RECT, PADDING, 2.0, &FixedMeasure(10.0));
    assert_eq!(layout.body[0].size, 40.0);
}

#[test]
fn template_overrides_manual_background() {
    let mut d = doc("hi");
    d.template = Template::Gradient2;
    assert_eq!(
        layout(&d).background,
        BackgroundFill::Gradient {
            top: 0x667EEA,
            bottom: 0x764BA2,
        }
    );
}

#[test]
fn template_none_restores_the_manual_color() {
    let mut d = doc("hi");
    d.template = Template::Paper;
    assert_eq!(layout(&d).background, BackgroundFill::Paper);

    d.template = Template::None;
    assert_eq!(
        layout(&d).background,
        BackgroundFill::Solid(d.background_color.to_pixel())
    );
}

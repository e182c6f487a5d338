use super::*;
use crate::doc::PoemDocument;
use crate::gui::fields::FieldState;

struct FixedMeasure(f32);

impl TextMeasure for FixedMeasure {
    fn text_width(&self, _font: PoemFont, _size: f32, text: &str) -> f32 {
        text.chars().count() as f32 * self.0
    }
}

const PANEL_W: f32 = 340.0;
const PANEL_H: f32 = 2000.0;

struct Fixture {
    doc: PoemDocument,
    title: FieldState,
    body: FieldState,
    author: FieldState,
}

impl Fixture {
    fn new() -> Self {
        Fixture {
            doc: PoemDocument::default(),
            title: FieldState::default(),
            body: FieldState::default(),
            author: FieldState::default(),
        }
    }

    fn view(&self) -> PanelView<'_> {
        PanelView {
            doc: &self.doc,
            title: &self.title,
            body: &self.body,
            author: &self.author,
            focus: None,
            open_dropdown: None,
            exporting: false,
        }
    }

    fn layout(&self, view: &PanelView<'_>, scroll: f32) -> PanelLayout {
        compute_panel_layout(view, PANEL_W, PANEL_H, scroll, 1.0, 14.0, &FixedMeasure(7.0))
    }
}

/// Every distinct hit found by scanning the panel on a coarse grid.
fn scan(layout: &PanelLayout) -> Vec<PanelHit> {
    let mut hits = Vec::new();
    let mut y = 0.0;
    while y < PANEL_H {
        let mut x = 0.0;
        while x < PANEL_W {
            if let Some(hit) = layout.hit_test(x as f64, y as f64)
                && !hits.contains(&hit)
            {
                hits.push(hit);
            }
            x += 2.0;
        }
        y += 2.0;
    }
    hits
}

#[test]
fn every_control_is_reachable_by_pointer() {
    let fixture = Fixture::new();
    let layout = fixture.layout(&fixture.view(), 0.0);
    let hits = scan(&layout);

    for field in [FocusField::Title, FocusField::Body, FocusField::Author] {
        assert!(hits.contains(&PanelHit::Field(field)), "{field:?}");
    }
    for kind in [StepperKind::FontSize, StepperKind::LineHeight] {
        assert!(hits.contains(&PanelHit::StepperMinus(kind)), "{kind:?}");
        assert!(hits.contains(&PanelHit::StepperPlus(kind)), "{kind:?}");
    }
    for kind in [DropdownKind::Font, DropdownKind::Align] {
        assert!(hits.contains(&PanelHit::DropdownButton(kind)), "{kind:?}");
    }
    for i in 0..8 {
        assert!(hits.contains(&PanelHit::TextSwatch(i)), "text swatch {i}");
        assert!(
            hits.contains(&PanelHit::BackgroundSwatch(i)),
            "background swatch {i}"
        );
    }
    for i in 0..6 {
        assert!(hits.contains(&PanelHit::TemplateCell(i)), "template {i}");
    }
    for button in [
        PanelButton::SaveDraft,
        PanelButton::LoadDraft,
        PanelButton::CopyText,
        PanelButton::DownloadImage,
        PanelButton::ExportText,
        PanelButton::Reset,
    ] {
        assert!(hits.contains(&PanelHit::Button(button)), "{button:?}");
    }
}

#[test]
fn open_dropdown_exposes_its_options() {
    let fixture = Fixture::new();
    let mut view = fixture.view();
    view.open_dropdown = Some(DropdownKind::Font);
    let layout = fixture.layout(&view, 0.0);
    let hits = scan(&layout);

    for i in 0..PoemFont::ALL.len() {
        assert!(
            hits.contains(&PanelHit::DropdownOption(DropdownKind::Font, i)),
            "option {i}"
        );
    }
    assert!(!layout.overlay_texts.is_empty());
}

#[test]
fn scrolling_shifts_hit_targets_up() {
    let fixture = Fixture::new();
    let at_rest = fixture.layout(&fixture.view(), 0.0);
    let scrolled = fixture.layout(&fixture.view(), 100.0);

    let find_reset_y = |layout: &PanelLayout| -> f64 {
        let mut y = 0.0_f64;
        while y < PANEL_H as f64 {
            if layout.hit_test(PANEL_W as f64 / 2.0, y) == Some(PanelHit::Button(PanelButton::Reset))
            {
                return y;
            }
            y += 1.0;
        }
        panic!("reset button not found");
    };
    assert_eq!(find_reset_y(&at_rest) - find_reset_y(&scrolled), 100.0);
}

#[test]
fn content_height_is_scroll_invariant() {
    let fixture = Fixture::new();
    let a = fixture.layout(&fixture.view(), 0.0);
    let b = fixture.layout(&fixture.view(), 150.0);
    assert!(a.content_height > 0.0);
    assert_eq!(a.content_height, b.content_height);
}

#[test]
fn empty_fields_show_placeholders() {
    let fixture = Fixture::new();
    let layout = fixture.layout(&fixture.view(), 0.0);
    let texts: Vec<_> = layout.texts.iter().map(|cmd| cmd.text.as_str()).collect();
    assert!(texts.contains(&"Poem title..."));
    assert!(texts.contains(&"Write your poem here..."));
    assert!(texts.contains(&"Your name..."));
}

#[test]
fn typed_text_replaces_the_placeholder() {
    let mut fixture = Fixture::new();
    fixture.title.set_text("Colors".into());
    let layout = fixture.layout(&fixture.view(), 0.0);
    let texts: Vec<_> = layout.texts.iter().map(|cmd| cmd.text.as_str()).collect();
    assert!(texts.contains(&"Colors"));
    assert!(!texts.contains(&"Poem title..."));
}

#[test]
fn focused_field_uses_the_accent_border() {
    let fixture = Fixture::new();
    let mut view = fixture.view();
    view.focus = Some(FocusField::Title);
    let focused = fixture.layout(&view, 0.0);
    assert!(focused.rounded.iter().any(|cmd| cmd.color == FIELD_BORDER_FOCUS));

    let blurred = fixture.layout(&fixture.view(), 0.0);
    assert!(
        blurred
            .rounded
            .iter()
            .all(|cmd| cmd.color != FIELD_BORDER_FOCUS)
    );
}

#[test]
fn exporting_swaps_the_download_label() {
    let fixture = Fixture::new();
    let mut view = fixture.view();
    view.exporting = true;
    let layout = fixture.layout(&view, 0.0);
    let texts: Vec<_> = layout.texts.iter().map(|cmd| cmd.text.as_str()).collect();
    assert!(texts.contains(&"Generating..."));
    assert!(!texts.contains(&"Download as Image"));
}

#[test]
fn stepper_values_render_current_settings() {
    let fixture = Fixture::new();
    let layout = fixture.layout(&fixture.view(), 0.0);
    let texts: Vec<_> = layout.texts.iter().map(|cmd| cmd.text.as_str()).collect();
    assert!(texts.contains(&"18px"));
    assert!(texts.contains(&"1.6"));
}

#[test]
fn points_outside_the_panel_hit_nothing() {
    let fixture = Fixture::new();
    let layout = fixture.layout(&fixture.view(), 0.0);
    assert_eq!(layout.hit_test(PANEL_W as f64 + 50.0, 100.0), None);
    assert_eq!(layout.hit_test(-5.0, 100.0), None);
}

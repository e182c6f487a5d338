use super::*;

fn field(text: &str, cursor: usize) -> FieldState {
    FieldState {
        text: text.into(),
        cursor,
    }
}

#[test]
fn character_keys_type_into_the_field() {
    let mut f = FieldState::default();
    assert!(apply_field_key(&mut f, &Key::Character("h".into()), false, false));
    assert!(apply_field_key(&mut f, &Key::Character("i".into()), false, false));
    assert_eq!(f.text, "hi");
}

#[test]
fn ctrl_chords_never_type_their_letter() {
    let mut f = field("draft", 5);
    assert!(!apply_field_key(&mut f, &Key::Character("d".into()), true, false));
    assert_eq!(f.text, "draft");
    assert_eq!(f.cursor, 5);
}

#[test]
fn ctrl_arrows_still_move_by_word() {
    let mut f = field("roses are red", 13);
    assert!(apply_field_key(
        &mut f,
        &Key::Named(NamedKey::ArrowLeft),
        true,
        false
    ));
    assert_eq!(f.cursor, 10);
}

#[test]
fn enter_only_breaks_lines_in_multiline_fields() {
    let mut title = field("ode", 3);
    assert!(!apply_field_key(&mut title, &Key::Named(NamedKey::Enter), false, false));
    assert_eq!(title.text, "ode");

    let mut body = field("ode", 3);
    assert!(apply_field_key(&mut body, &Key::Named(NamedKey::Enter), false, true));
    assert_eq!(body.text, "ode\n");
}

#[test]
fn backspace_edits_through_the_handler() {
    let mut f = field("hello", 5);
    assert!(apply_field_key(&mut f, &Key::Named(NamedKey::Backspace), false, false));
    assert_eq!(f.text, "hell");
}

#[test]
fn paste_flattens_newlines_for_single_line_fields() {
    assert_eq!(sanitize_paste("roses\r\nare red", false), "roses are red");
    assert_eq!(sanitize_paste("roses\r\nare red", true), "roses\nare red");
}

#[test]
fn paste_drops_control_characters() {
    assert_eq!(sanitize_paste("po\u{7}em\t", true), "poem");
}

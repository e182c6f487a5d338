use super::*;

fn field(text: &str, cursor: usize) -> FieldState {
    FieldState {
        text: text.into(),
        cursor,
    }
}

#[test]
fn insert_char_advances_cursor() {
    let mut f = FieldState::default();
    f.insert_char('h');
    f.insert_char('i');
    assert_eq!(f.text, "hi");
    assert_eq!(f.cursor, 2);
}

#[test]
fn insert_in_the_middle() {
    let mut f = field("hllo", 1);
    f.insert_char('e');
    assert_eq!(f.text, "hello");
    assert_eq!(f.cursor, 2);
}

#[test]
fn insert_str_moves_past_the_insertion() {
    let mut f = field("ad", 1);
    f.insert_str("bc");
    assert_eq!(f.text, "abcd");
    assert_eq!(f.cursor, 3);
}

#[test]
fn backspace_removes_the_previous_char() {
    let mut f = field("hello", 5);
    f.backspace();
    assert_eq!(f.text, "hell");
    assert_eq!(f.cursor, 4);
}

#[test]
fn backspace_at_start_is_a_no_op() {
    let mut f = field("hello", 0);
    f.backspace();
    assert_eq!(f.text, "hello");
    assert_eq!(f.cursor, 0);
}

#[test]
fn backspace_handles_multibyte_chars() {
    let mut f = FieldState::default();
    f.set_text("poésie".into());
    for _ in 0..4 {
        f.backspace();
    }
    assert_eq!(f.text, "po");
    assert_eq!(f.cursor, 2);
}

#[test]
fn delete_removes_the_char_under_the_cursor() {
    let mut f = field("hello", 0);
    f.delete();
    assert_eq!(f.text, "ello");
    assert_eq!(f.cursor, 0);
}

#[test]
fn delete_at_end_is_a_no_op() {
    let mut f = field("hi", 2);
    f.delete();
    assert_eq!(f.text, "hi");
}

#[test]
fn left_and_right_step_by_chars() {
    let mut f = field("héllo", 0);
    f.right(false);
    f.right(false);
    assert_eq!(f.cursor, 3); // past the two-byte é
    f.left(false);
    assert_eq!(f.cursor, 1);
}

#[test]
fn word_motion_jumps_word_boundaries() {
    let mut f = field("roses are red", 13);
    f.left(true);
    assert_eq!(f.cursor, 10);
    f.left(true);
    assert_eq!(f.cursor, 6);
    f.right(true);
    assert_eq!(f.cursor, 9);
}

#[test]
fn home_and_end_use_the_current_line() {
    let mut f = field("one\ntwo\nthree", 5);
    f.home();
    assert_eq!(f.cursor, 4);
    f.end();
    assert_eq!(f.cursor, 7);
}

#[test]
fn up_preserves_the_column() {
    let mut f = field("roses\nviolets", 6 + 3);
    f.up();
    assert_eq!(f.cursor, 3);
}

#[test]
fn up_clamps_to_a_shorter_line() {
    let mut f = field("hi\nviolets", 3 + 6);
    f.up();
    assert_eq!(f.cursor, 2);
}

#[test]
fn down_moves_to_the_next_line() {
    let mut f = field("roses\nviolets", 2);
    f.down();
    assert_eq!(f.cursor, 6 + 2);
}

#[test]
fn down_on_the_last_line_is_a_no_op() {
    let mut f = field("roses", 2);
    f.down();
    assert_eq!(f.cursor, 2);
}

#[test]
fn set_text_places_the_cursor_at_the_end() {
    let mut f = FieldState::default();
    f.set_text("hello".into());
    assert_eq!(f.cursor, 5);
    f.clear();
    assert_eq!(f.cursor, 0);
    assert!(f.text.is_empty());
}

#[test]
fn focus_cycle_visits_every_field() {
    let mut field = FocusField::Title;
    let mut seen = vec![field];
    for _ in 0..2 {
        field = field.next();
        seen.push(field);
    }
    assert_eq!(seen, vec![FocusField::Title, FocusField::Body, FocusField::Author]);
    assert_eq!(field.next(), FocusField::Title);
    assert_eq!(FocusField::Title.prev(), FocusField::Author);
}

#[test]
fn only_the_body_is_multiline() {
    assert!(FocusField::Body.multiline());
    assert!(!FocusField::Title.multiline());
    assert!(!FocusField::Author.multiline());
}

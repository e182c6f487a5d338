/// Editable form fields in the control panel, cycled with Tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::gui) enum FocusField {
    Title,
    Body,
    Author,
}

impl FocusField {
    pub fn next(self) -> FocusField {
        match self {
            FocusField::Title => FocusField::Body,
            FocusField::Body => FocusField::Author,
            FocusField::Author => FocusField::Title,
        }
    }

    pub fn prev(self) -> FocusField {
        match self {
            FocusField::Title => FocusField::Author,
            FocusField::Body => FocusField::Title,
            FocusField::Author => FocusField::Body,
        }
    }

    /// Only the body field accepts newlines.
    pub fn multiline(self) -> bool {
        self == FocusField::Body
    }
}

/// One editable text field: its contents plus a cursor byte index, always at
/// a valid UTF-8 char boundary.
#[derive(Clone, Debug, Default, PartialEq)]
pub(in crate::gui) struct FieldState {
    pub text: String,
    pub cursor: usize,
}

impl FieldState {
    pub fn set_text(&mut self, text: String) {
        self.cursor = text.len();
        self.text = text;
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, ch: char) {
        self.text.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    pub fn insert_str(&mut self, s: &str) {
        self.text.insert_str(self.cursor, s);
        self.cursor += s.len();
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = prev_char_boundary(&self.text, self.cursor);
        self.text.replace_range(start..self.cursor, "");
        self.cursor = start;
    }

    pub fn delete(&mut self) {
        if self.cursor >= self.text.len() {
            return;
        }
        let end = next_char_boundary(&self.text, self.cursor);
        self.text.replace_range(self.cursor..end, "");
    }

    pub fn left(&mut self, by_word: bool) {
        self.cursor = if by_word {
            word_left_boundary(&self.text, self.cursor)
        } else {
            prev_char_boundary(&self.text, self.cursor)
        };
    }

    pub fn right(&mut self, by_word: bool) {
        self.cursor = if by_word {
            word_right_boundary(&self.text, self.cursor)
        } else {
            next_char_boundary(&self.text, self.cursor)
        };
    }

    /// Start of the current line (after the previous newline).
    pub fn line_start(&self) -> usize {
        self.text[..self.cursor]
            .rfind('\n')
            .map_or(0, |idx| idx + 1)
    }

    /// End of the current line (before the next newline).
    pub fn line_end(&self) -> usize {
        self.text[self.cursor..]
            .find('\n')
            .map_or(self.text.len(), |idx| self.cursor + idx)
    }

    pub fn home(&mut self) {
        self.cursor = self.line_start();
    }

    pub fn end(&mut self) {
        self.cursor = self.line_end();
    }

    /// Moves to the same column on the previous line, clamped to its length.
    pub fn up(&mut self) {
        let line_start = self.line_start();
        if line_start == 0 {
            return;
        }
        let column = self.text[line_start..self.cursor].chars().count();
        let prev_start = self.text[..line_start - 1]
            .rfind('\n')
            .map_or(0, |idx| idx + 1);
        self.cursor = advance_chars(&self.text, prev_start, line_start - 1, column);
    }

    /// Moves to the same column on the next line, clamped to its length.
    pub fn down(&mut self) {
        let line_end = self.line_end();
        if line_end >= self.text.len() {
            return;
        }
        let column = self.text[self.line_start()..self.cursor].chars().count();
        let next_start = line_end + 1;
        let next_end = self.text[next_start..]
            .find('\n')
            .map_or(self.text.len(), |idx| next_start + idx);
        self.cursor = advance_chars(&self.text, next_start, next_end, column);
    }
}

/// Byte index `column` chars into `[start, end)`, clamped to `end`.
fn advance_chars(s: &str, start: usize, end: usize, column: usize) -> usize {
    let mut idx = start;
    for _ in 0..column {
        if idx >= end {
            break;
        }
        idx = next_char_boundary(s, idx);
    }
    idx.min(end)
}

fn prev_char_boundary(s: &str, idx: usize) -> usize {
    let idx = idx.min(s.len());
    if idx == 0 {
        return 0;
    }

    let mut prev = 0;
    for (i, _) in s[..idx].char_indices() {
        prev = i;
    }
    prev
}

fn next_char_boundary(s: &str, idx: usize) -> usize {
    let idx = idx.min(s.len());
    if idx >= s.len() {
        return s.len();
    }
    idx + s[idx..].chars().next().map_or(0, char::len_utf8)
}

fn word_left_boundary(s: &str, mut idx: usize) -> usize {
    idx = idx.min(s.len());

    while idx > 0 {
        let prev = prev_char_boundary(s, idx);
        let ch = s[prev..idx].chars().next().unwrap_or(' ');
        if !ch.is_whitespace() {
            break;
        }
        idx = prev;
    }

    while idx > 0 {
        let prev = prev_char_boundary(s, idx);
        let ch = s[prev..idx].chars().next().unwrap_or(' ');
        if ch.is_whitespace() {
            break;
        }
        idx = prev;
    }

    idx
}

fn word_right_boundary(s: &str, mut idx: usize) -> usize {
    idx = idx.min(s.len());

    while idx < s.len() {
        let next = next_char_boundary(s, idx);
        let ch = s[idx..next].chars().next().unwrap_or(' ');
        if !ch.is_whitespace() {
            break;
        }
        idx = next;
    }

    while idx < s.len() {
        let next = next_char_boundary(s, idx);
        let ch = s[idx..next].chars().next().unwrap_or(' ');
        if ch.is_whitespace() {
            break;
        }
        idx = next;
    }

    idx
}

#[cfg(test)]
#[path = "../../tests/unit/gui_fields.rs"]
mod tests;

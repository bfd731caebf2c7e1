/// Single-line text entry backing the form's input control.
///
/// `cursor_pos` is a byte offset that always sits on a char boundary.
#[derive(Debug, Default)]
pub struct InputField {
    pub buffer: String,
    pub cursor_pos: usize,
}

impl InputField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor_pos, c);
        self.cursor_pos += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.cursor_pos > 0 {
            let prev = self.prev_boundary();
            self.buffer.remove(prev);
            self.cursor_pos = prev;
        }
    }

    /// Remove the char under the cursor.
    pub fn delete(&mut self) {
        if self.cursor_pos < self.buffer.len() {
            self.buffer.remove(self.cursor_pos);
        }
    }

    pub fn cursor_left(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos = self.prev_boundary();
        }
    }

    pub fn cursor_right(&mut self) {
        if self.cursor_pos < self.buffer.len() {
            self.cursor_pos = self.buffer[self.cursor_pos..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_pos + i)
                .unwrap_or(self.buffer.len());
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor_pos = self.buffer.len();
    }

    /// Text left of the cursor, for cursor placement when drawing.
    pub fn before_cursor(&self) -> &str {
        &self.buffer[..self.cursor_pos]
    }

    /// Return the current text and clear the field.
    pub fn take(&mut self) -> String {
        self.cursor_pos = 0;
        std::mem::take(&mut self.buffer)
    }

    fn prev_boundary(&self) -> usize {
        self.buffer[..self.cursor_pos]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> InputField {
        let mut field = InputField::new();
        for c in text.chars() {
            field.insert_char(c);
        }
        field
    }

    #[test]
    fn take_returns_and_clears() {
        let mut field = typed("hi");
        assert_eq!(field.take(), "hi");
        assert!(field.buffer.is_empty());
        assert_eq!(field.cursor_pos, 0);
    }

    #[test]
    fn editing_in_the_middle() {
        let mut field = typed("abc");
        assert_eq!(field.cursor_pos, 3);

        field.backspace();
        assert_eq!(field.buffer, "ab");

        field.cursor_left();
        field.insert_char('x');
        assert_eq!(field.buffer, "axb");
        assert_eq!(field.cursor_pos, 2);

        field.delete();
        assert_eq!(field.buffer, "ax");

        field.cursor_home();
        field.insert_char('>');
        assert_eq!(field.buffer, ">ax");

        field.cursor_end();
        assert_eq!(field.cursor_pos, 3);
    }

    #[test]
    fn multibyte_chars_move_by_char() {
        let mut field = typed("Zoë");
        assert_eq!(field.cursor_pos, "Zoë".len());
        field.cursor_left();
        assert_eq!(field.before_cursor(), "Zo");
        field.cursor_right();
        assert_eq!(field.before_cursor(), "Zoë");
        field.backspace();
        assert_eq!(field.buffer, "Zo");
    }

    #[test]
    fn edges_are_noops() {
        let mut field = InputField::new();
        field.backspace();
        field.cursor_left();
        field.delete();
        assert_eq!(field.buffer, "");
        assert_eq!(field.cursor_pos, 0);

        let mut field = typed("a");
        field.cursor_right();
        field.delete();
        assert_eq!(field.buffer, "a");
        assert_eq!(field.cursor_pos, 1);
    }
}

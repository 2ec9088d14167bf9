use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Single-line edit buffer with a byte cursor that always sits on a
/// grapheme boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prompt {
    pub buffer: String,
    pub cursor: usize,
}

impl Prompt {
    /// Buffer prefilled with `initial`, cursor at the end
    pub fn new(initial: &str) -> Self {
        Prompt {
            buffer: initial.to_string(),
            cursor: initial.len(),
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the grapheme before the cursor
    pub fn backspace(&mut self) -> bool {
        match self.prev_boundary() {
            Some(start) => {
                self.buffer.replace_range(start..self.cursor, "");
                self.cursor = start;
                true
            }
            None => false,
        }
    }

    /// Delete the grapheme under the cursor
    pub fn delete(&mut self) -> bool {
        match self.next_boundary() {
            Some(end) => {
                self.buffer.replace_range(self.cursor..end, "");
                true
            }
            None => false,
        }
    }

    pub fn move_left(&mut self) {
        if let Some(pos) = self.prev_boundary() {
            self.cursor = pos;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(pos) = self.next_boundary() {
            self.cursor = pos;
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.buffer.len();
    }

    /// Terminal column of the cursor, relative to the buffer start
    pub fn cursor_col(&self) -> usize {
        UnicodeWidthStr::width(&self.buffer[..self.cursor])
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.buffer[..self.cursor]
            .grapheme_indices(true)
            .next_back()
            .map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.buffer[self.cursor..]
            .graphemes(true)
            .next()
            .map(|g| self.cursor + g.len())
    }
}

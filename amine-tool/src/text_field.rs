//! Cursor editing over a form string owned elsewhere.

use unicode_segmentation::UnicodeSegmentation;

/// Byte offset of the edit cursor, always on a grapheme boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextCursor {
    pos: usize,
}

impl TextCursor {
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Number of graphemes left of the cursor, for placing the terminal cursor.
    pub fn column(&self, text: &str) -> usize {
        text[..self.clamped(text)].graphemes(true).count()
    }

    fn clamped(&self, text: &str) -> usize {
        let mut pos = self.pos.min(text.len());
        while !text.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    }

    pub fn insert(&mut self, text: &mut String, c: char) {
        let pos = self.clamped(text);
        text.insert(pos, c);
        self.pos = pos + c.len_utf8();
    }

    pub fn backspace(&mut self, text: &mut String) {
        let pos = self.clamped(text);
        if let Some((start, _)) = text[..pos].grapheme_indices(true).next_back() {
            text.replace_range(start..pos, "");
            self.pos = start;
        } else {
            self.pos = 0;
        }
    }

    pub fn delete(&mut self, text: &mut String) {
        let pos = self.clamped(text);
        if let Some(g) = text[pos..].graphemes(true).next() {
            let end = pos + g.len();
            text.replace_range(pos..end, "");
        }
        self.pos = pos;
    }

    pub fn left(&mut self, text: &str) {
        let pos = self.clamped(text);
        self.pos = text[..pos]
            .grapheme_indices(true)
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0);
    }

    pub fn right(&mut self, text: &str) {
        let pos = self.clamped(text);
        self.pos = text[pos..]
            .graphemes(true)
            .next()
            .map(|g| pos + g.len())
            .unwrap_or(text.len());
    }

    pub fn home(&mut self) {
        self.pos = 0;
    }

    pub fn end(&mut self, text: &str) {
        self.pos = text.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> (String, TextCursor) {
        let mut text = String::new();
        let mut cursor = TextCursor::default();
        for c in s.chars() {
            cursor.insert(&mut text, c);
        }
        (text, cursor)
    }

    #[test]
    fn insert_in_middle() {
        let (mut text, mut cursor) = typed("Pn");
        cursor.left(&text);
        cursor.insert(&mut text, 'e');
        assert_eq!(text, "Pen");
        assert_eq!(cursor.column(&text), 2);
    }

    #[test]
    fn backspace_and_delete() {
        let (mut text, mut cursor) = typed("Mugs");
        cursor.backspace(&mut text);
        assert_eq!(text, "Mug");

        cursor.home();
        cursor.delete(&mut text);
        assert_eq!(text, "ug");
        assert_eq!(cursor.pos(), 0);

        cursor.backspace(&mut text);
        assert_eq!(text, "ug");
    }

    #[test]
    fn moves_over_multibyte_graphemes() {
        let (mut text, mut cursor) = typed("café");
        cursor.left(&text);
        assert_eq!(cursor.column(&text), 3);
        cursor.right(&text);
        cursor.right(&text);
        assert_eq!(cursor.pos(), text.len());

        cursor.backspace(&mut text);
        assert_eq!(text, "caf");
    }

    #[test]
    fn clamps_after_external_clear() {
        let (mut text, mut cursor) = typed("Kettle");
        text.clear();
        cursor.insert(&mut text, 'K');
        assert_eq!(text, "K");
        cursor.end(&text);
        assert_eq!(cursor.pos(), 1);
    }
}

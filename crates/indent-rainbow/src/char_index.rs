//! Byte/char offset conversion for regex matches.
//!
//! `regex` reports byte offsets, while every public range in this crate is expressed in
//! characters. ASCII documents (the common case for source code) convert with the identity.

#[derive(Debug)]
pub(crate) struct CharIndex {
    /// `None` for pure ASCII text, where byte and char offsets coincide.
    char_to_byte: Option<Vec<usize>>,
    text_len: usize,
}

impl CharIndex {
    pub(crate) fn new(text: &str) -> Self {
        let char_to_byte = if text.is_ascii() {
            None
        } else {
            let mut offsets: Vec<usize> = text.char_indices().map(|(b, _)| b).collect();
            offsets.push(text.len());
            Some(offsets)
        };
        Self {
            char_to_byte,
            text_len: text.len(),
        }
    }

    pub(crate) fn char_count(&self) -> usize {
        match &self.char_to_byte {
            Some(offsets) => offsets.len().saturating_sub(1),
            None => self.text_len,
        }
    }

    pub(crate) fn byte_to_char(&self, byte_offset: usize) -> usize {
        let clamped = byte_offset.min(self.text_len);
        match &self.char_to_byte {
            Some(offsets) => offsets.binary_search(&clamped).unwrap_or_else(|idx| idx),
            None => clamped,
        }
    }
}

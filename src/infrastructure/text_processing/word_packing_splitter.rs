use crate::application::ports::TextSplitter;

/// Greedy word packing: accumulate whitespace-separated words into the
/// current segment while it stays within `max_len` characters, counting the
/// joining space. Words are never split; a single word longer than the
/// maximum becomes its own oversized segment and is passed through as-is.
pub struct WordPackingSplitter {
    max_len: usize,
}

impl WordPackingSplitter {
    pub fn new(max_len: usize) -> Self {
        Self { max_len }
    }
}

impl TextSplitter for WordPackingSplitter {
    fn split(&self, text: &str) -> Vec<String> {
        let mut segments = Vec::new();
        let mut current = String::new();

        for word in text.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
            } else if current.len() + word.len() + 1 <= self.max_len {
                current.push(' ');
                current.push_str(word);
            } else {
                segments.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        }

        if !current.is_empty() {
            segments.push(current);
        }

        segments
    }
}

//! Single-pass reader over a token sequence, driven by grammar rules.

/// Sequential token reader.
///
/// Nothing is loaded until the first [`advance`](Reader::advance), so
/// [`token`](Reader::token) is `None` until then. Once every token has been
/// consumed `token` is `None` again and further advances are no-ops.
#[derive(Debug)]
pub struct Reader<'a, T> {
    tokens: &'a [T],
    position: usize,
    loaded: bool,
}

impl<'a, T> Reader<'a, T> {
    pub fn new(tokens: &'a [T]) -> Self {
        Reader {
            tokens,
            position: 0,
            loaded: false,
        }
    }

    /// Whether tokens remain to be read.
    pub fn has_tokens(&self) -> bool {
        self.position < self.tokens.len()
    }

    /// The loaded token, if it has not been consumed yet.
    pub fn token(&self) -> Option<&'a T> {
        if self.loaded {
            self.tokens.get(self.position)
        } else {
            None
        }
    }

    /// Load the next token.
    pub fn advance(&mut self) {
        if !self.loaded {
            self.loaded = true;
        } else if self.position < self.tokens.len() {
            self.position += 1;
        }
    }

    /// Index of the loaded token.
    pub fn position(&self) -> usize {
        self.position
    }
}

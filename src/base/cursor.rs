use memchr::{memchr, memchr_iter};

/// Byte cursor over a single template source.
///
/// The source is held as UTF-8 text. Every delimiter the scanner stops at is
/// ASCII, so positions produced by `advance()` after a successful ASCII check,
/// or by the `*_until` helpers, always fall on character boundaries.
#[derive(Debug)]
pub struct Cursor {
    input: String,
    pos: usize,
}

impl Cursor {
    pub fn new(input: String) -> Self {
        Cursor { input, pos: 0 }
    }

    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn seek(&mut self, pos: usize) {
        debug_assert!(self.input.is_char_boundary(pos));

        self.pos = pos.min(self.input.len());
    }

    #[inline]
    pub fn rest(&self) -> &[u8] {
        &self.input.as_bytes()[self.pos..]
    }

    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.lookahead(0)
    }

    #[inline]
    pub fn lookahead(&self, offset: usize) -> Option<u8> {
        self.input.as_bytes().get(self.pos + offset).copied()
    }

    /// Character at the cursor, for error reporting.
    pub fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    #[inline]
    pub fn check(&self, byte: u8) -> bool {
        self.peek() == Some(byte)
    }

    #[inline]
    pub fn check_str(&self, value: &str) -> bool {
        self.rest().starts_with(value.as_bytes())
    }

    /// Checks that the next `count` bytes are all `byte`.
    pub fn check_run(&self, byte: u8, count: usize) -> bool {
        let rest = self.rest();

        rest.len() >= count && rest[..count].iter().all(|&b| b == byte)
    }

    #[inline]
    pub fn advance(&mut self, count: usize) {
        self.pos = (self.pos + count).min(self.input.len());
    }

    pub fn skip_inline_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t')) {
            self.pos += 1;
        }
    }

    pub fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n')) {
            self.pos += 1;
        }
    }

    /// Position of the next `\n` at or after the cursor, or the end of input.
    pub fn line_end(&self) -> usize {
        memchr(b'\n', self.rest()).map_or(self.input.len(), |offset| self.pos + offset)
    }

    /// Moves the cursor onto the `\n` terminating the current line.
    pub fn skip_line(&mut self) {
        self.pos = self.line_end();
    }

    /// Consumes input up to the end of the current line and returns it.
    pub fn take_line(&mut self) -> &str {
        let start = self.pos;

        self.pos = self.line_end();

        &self.input[start..self.pos]
    }

    /// Consumes bytes while `predicate` holds. `predicate` must only accept
    /// ASCII bytes.
    pub fn take_while(&mut self, predicate: impl Fn(u8) -> bool) -> &str {
        let start = self.pos;

        while self.peek().is_some_and(&predicate) {
            self.pos += 1;
        }

        &self.input[start..self.pos]
    }

    /// Consumes input up to (not including) `byte` on the current position
    /// and returns it, or `None` if `byte` never occurs.
    pub fn take_until(&mut self, byte: u8) -> Option<&str> {
        let offset = memchr(byte, self.rest())?;
        let start = self.pos;

        self.pos += offset;

        Some(&self.input[start..self.pos])
    }

    pub fn slice(&self, start: usize, end: usize) -> &str {
        &self.input[start..end]
    }

    /// 1-based line and column of `pos`.
    pub fn line_col(&self, pos: usize) -> (usize, usize) {
        let pos = pos.min(self.input.len());
        let prefix = &self.input.as_bytes()[..pos];
        let line = memchr_iter(b'\n', prefix).count() + 1;
        let line_start = prefix
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |idx| idx + 1);
        let column = self.input[line_start..pos].chars().count() + 1;

        (line, column)
    }
}

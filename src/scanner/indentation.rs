use super::{ScanError, ScanErrorKind, Scanner};
use crate::token::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelKind {
    /// Opened by a more indented line.
    Default,
    /// Opened by `:` after a tag.
    BlockExpansion,
    /// Opened by `#[`.
    TagInterpolation,
    /// Body of a taken conditional branch. Its size is adopted from the
    /// first body line.
    Conditional,
}

impl LevelKind {
    /// Whether closing a level of this kind is visible to the parser.
    #[inline]
    pub fn emits_dedent(self) -> bool {
        self != LevelKind::Conditional
    }

    /// Levels that only live as long as the line that opened them.
    #[inline]
    fn is_inline(self) -> bool {
        matches!(self, LevelKind::BlockExpansion | LevelKind::TagInterpolation)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Level {
    pub kind: LevelKind,
    /// Count of indentation characters this level adds.
    pub size: usize,
}

#[derive(Debug, Default)]
pub(super) struct Levels {
    stack: Vec<Level>,
    /// Inferred from the first indented line of the source.
    indent_char: Option<u8>,
}

impl Levels {
    #[inline]
    pub fn as_slice(&self) -> &[Level] {
        &self.stack
    }

    #[inline]
    pub fn push(&mut self, kind: LevelKind, size: usize) {
        self.stack.push(Level { kind, size });
    }

    fn pop(&mut self, tokens: &mut Vec<Token>) {
        if let Some(level) = self.stack.pop() {
            if level.kind.emits_dedent() {
                tokens.push(Token::Dedent);
            }
        }
    }

    fn truncate(&mut self, len: usize, tokens: &mut Vec<Token>) {
        while self.stack.len() > len {
            self.pop(tokens);
        }
    }

    pub fn pop_all(&mut self, tokens: &mut Vec<Token>) {
        self.truncate(0, tokens);
    }

    /// Closes block expansions and interpolations left open by the previous
    /// line.
    pub fn pop_inline(&mut self, tokens: &mut Vec<Token>) {
        while self.stack.last().is_some_and(|level| level.kind.is_inline()) {
            self.pop(tokens);
        }
    }

    /// Pops trailing interpolation levels until at most `keep` remain.
    pub fn pop_interpolations_beyond(&mut self, keep: usize, tokens: &mut Vec<Token>) {
        let trailing = self
            .stack
            .iter()
            .rev()
            .take_while(|level| level.kind == LevelKind::TagInterpolation)
            .count();

        for _ in keep..trailing {
            self.pop(tokens);
        }
    }

    pub fn total_size(&self) -> usize {
        self.stack.iter().map(|level| level.size).sum()
    }
}

#[inline]
fn is_inline_whitespace(byte: u8) -> bool {
    byte == b' ' || byte == b'\t'
}

impl Scanner<'_> {
    /// Skips lines holding nothing but whitespace. The cursor must be at the
    /// start of a line.
    pub(super) fn skip_blank_lines(&mut self) {
        loop {
            let rest = self.cursor.rest();
            let blank = rest.iter().take_while(|&&b| is_inline_whitespace(b)).count();

            match rest.get(blank) {
                Some(b'\n') => self.cursor.advance(blank + 1),
                None => {
                    self.cursor.advance(blank);

                    return;
                }
                Some(_) => return,
            }
        }
    }

    pub(super) fn scan_line_indentation(
        &mut self,
        tokens: &mut Vec<Token>,
    ) -> Result<(), ScanError> {
        if self.cursor.peek().is_some_and(is_inline_whitespace) {
            self.scan_indentation(tokens)?;
            self.levels.pop_inline(tokens);
        } else {
            self.levels.pop_all(tokens);
        }

        Ok(())
    }

    fn scan_indentation(&mut self, tokens: &mut Vec<Token>) -> Result<(), ScanError> {
        let Some(first) = self.cursor.peek() else {
            return Ok(());
        };

        let indent_char = *self.levels.indent_char.get_or_insert(first);
        let mut matched = 0;

        while let Some(level) = self.levels.stack.get(matched) {
            if !self.cursor.check_run(indent_char, level.size) {
                break;
            }

            self.cursor.advance(level.size);
            matched += 1;
        }

        if !self.cursor.check(indent_char) {
            self.levels.truncate(matched, tokens);

            // A conditional whose body never started.
            if self
                .levels
                .stack
                .last()
                .is_some_and(|level| level.kind == LevelKind::Conditional && level.size == 0)
            {
                self.levels.pop(tokens);
            }
        } else if matched == self.levels.stack.len() {
            let size = self.cursor.take_while(|b| b == indent_char).len();

            match self.levels.stack.last_mut() {
                Some(level) if level.kind == LevelKind::Conditional && level.size == 0 => {
                    level.size = size;
                }
                _ => {
                    self.levels.push(LevelKind::Default, size);
                    tokens.push(Token::Indent);
                }
            }
        } else {
            return Err(self.error(ScanErrorKind::WrongIndentationAmount));
        }

        match self.cursor.peek() {
            Some(ch) if is_inline_whitespace(ch) => Err(self.error(
                ScanErrorKind::WrongIndentationCharacter(char::from(ch)),
            )),
            _ => Ok(()),
        }
    }

    /// Looks past the `\n` at the cursor and any blank lines for the next
    /// line with content. Returns its start and its run of indentation
    /// characters.
    pub(super) fn peek_next_line(&mut self) -> Option<(usize, usize)> {
        if !self.cursor.check(b'\n') {
            return None;
        }

        let base = self.cursor.pos() + 1;
        let rest = &self.cursor.rest()[1..];
        let mut offset = 0;

        loop {
            let line = &rest[offset..];
            let blank = line.iter().take_while(|&&b| is_inline_whitespace(b)).count();

            match line.get(blank) {
                None => return None,
                Some(b'\n') => offset += blank + 1,
                Some(_) => {
                    let indent = match line.first() {
                        Some(&first) if is_inline_whitespace(first) => {
                            let ch = *self.levels.indent_char.get_or_insert(first);

                            line.iter().take_while(|&&b| b == ch).count()
                        }
                        _ => 0,
                    };

                    return Some((base + offset, indent));
                }
            }
        }
    }

    /// Whether the next line with content is indented past every open level.
    pub(super) fn next_line_is_deeper(&mut self) -> bool {
        match self.peek_next_line() {
            Some((_, indent)) => indent > self.levels.total_size(),
            None => false,
        }
    }

    /// Skips every following line nested under the current one. The cursor
    /// must be at the end of the current line.
    pub(super) fn skip_deeper_lines(&mut self) {
        while self.next_line_is_deeper() {
            self.cursor.advance(1);
            self.cursor.skip_line();
        }
    }
}

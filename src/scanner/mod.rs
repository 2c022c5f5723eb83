//! Part-by-part tokenizer for template source.
//!
//! Each call to [`Scanner::scan_part`] produces a run of `Indent`/`Dedent`
//! tokens, at most one content token and exactly one terminator. Conditionals
//! are evaluated here and never reach the parser; GPIO references are
//! resolved against the [`Hardware`] as they are scanned.

mod conditional;
mod error;
mod expression;
mod indentation;
mod tag;
mod text;

pub use self::error::{ScanError, ScanErrorKind};
pub use self::expression::{Expr, Literal};
pub use self::indentation::{Level, LevelKind};

use self::indentation::Levels;
use crate::base::Cursor;
use crate::io::Hardware;
use crate::token::Token;
use std::collections::VecDeque;

const KEYWORD_FOLLOWERS: &[u8] = b" \t\n";

pub struct Scanner<'h> {
    cursor: Cursor,
    hardware: &'h dyn Hardware,
    levels: Levels,
    interpolation_depth: usize,
    // NOTE: set when block text stopped at a `#[`, so the text following the
    // matching `]` continues the block.
    in_block_in_tag: bool,
    at_line_start: bool,
    finished: bool,
    pending: VecDeque<Token>,
}

impl<'h> Scanner<'h> {
    pub fn new(source: impl Into<String>, hardware: &'h dyn Hardware) -> Self {
        let mut source = source.into();

        if source.contains('\r') {
            source = source.replace("\r\n", "\n");
        }

        Scanner {
            cursor: Cursor::new(source),
            hardware,
            levels: Levels::default(),
            interpolation_depth: 0,
            in_block_in_tag: false,
            at_line_start: true,
            finished: false,
            pending: VecDeque::new(),
        }
    }

    /// Currently open indentation levels, outermost first.
    #[inline]
    pub fn levels(&self) -> &[Level] {
        self.levels.as_slice()
    }

    #[inline]
    pub fn interpolation_depth(&self) -> usize {
        self.interpolation_depth
    }

    /// Appends the next part to `tokens`.
    ///
    /// On error `tokens` is left as it was and the scanner is exhausted.
    pub fn scan_part(&mut self, tokens: &mut Vec<Token>) -> Result<(), ScanError> {
        if self.finished {
            tokens.push(Token::EndOfSource);

            return Ok(());
        }

        let initial_len = tokens.len();
        let result = self.scan_part_tokens(tokens);

        match result {
            Ok(()) => {
                log::trace!(target: "flash_pug::scanner", "part: {:?}", &tokens[initial_len..]);
            }
            Err(ref err) => {
                log::trace!(target: "flash_pug::scanner", "scan failed: {err}");

                tokens.truncate(initial_len);
                self.finished = true;
            }
        }

        result
    }

    fn scan_part_tokens(&mut self, tokens: &mut Vec<Token>) -> Result<(), ScanError> {
        let content = if self.at_line_start {
            self.at_line_start = false;
            self.skip_blank_lines();
            self.scan_line_indentation(tokens)?;
            self.scan_content()?
        } else if self.cursor.check(b':') {
            self.enter_block_expansion(tokens);
            self.scan_content()?
        } else if self.cursor.check_str("#[") {
            self.enter_tag_interpolation(tokens);
            self.scan_content()?
        } else if self.cursor.check(b']') && self.interpolation_depth > 0 {
            Some(self.leave_tag_interpolation(tokens)?.into())
        } else {
            self.scan_content()?
        };

        tokens.extend(content);

        self.scan_terminator(tokens)
    }

    fn enter_block_expansion(&mut self, tokens: &mut Vec<Token>) {
        self.cursor.advance(1);
        self.cursor.skip_inline_whitespace();
        self.levels.push(LevelKind::BlockExpansion, 0);
        tokens.push(Token::Indent);
    }

    fn enter_tag_interpolation(&mut self, tokens: &mut Vec<Token>) {
        // NOTE: a sibling interpolation on the same line replaces the previous
        // one instead of nesting inside the text that followed it.
        self.levels
            .pop_interpolations_beyond(self.interpolation_depth, tokens);

        self.cursor.advance(2);
        self.levels.push(LevelKind::TagInterpolation, 0);
        tokens.push(Token::Indent);
        self.interpolation_depth += 1;
    }

    fn leave_tag_interpolation(
        &mut self,
        tokens: &mut Vec<Token>,
    ) -> Result<crate::token::TextData, ScanError> {
        self.cursor.advance(1);
        self.interpolation_depth -= 1;
        self.levels
            .pop_interpolations_beyond(self.interpolation_depth + 1, tokens);

        self.scan_inner_text()
    }

    fn scan_content(&mut self) -> Result<Option<Token>, ScanError> {
        if self.check_keyword("doctype", KEYWORD_FOLLOWERS) {
            return Ok(Some(self.scan_doctype().into()));
        }

        if self.check_keyword("include", KEYWORD_FOLLOWERS) {
            return Ok(Some(self.scan_include().into()));
        }

        if self.at_guard() {
            self.scan_conditional()?;

            return Ok(None);
        }

        let token = match self.cursor.peek() {
            Some(b'<') => self.scan_literal_html().into(),
            Some(b'|') => self.scan_piped_text()?.into(),
            Some(b'/') if self.cursor.check_str("//-") => {
                self.skip_comment();

                return Ok(None);
            }
            Some(b'/') if self.cursor.check_str("//") => self.scan_comment().into(),
            Some(b'#') if !self.cursor.check_str("#[") => self.scan_tag()?.into(),
            Some(b'.') => self.scan_tag()?.into(),
            Some(byte) if tag::is_identifier_byte(byte) => self.scan_tag()?.into(),
            _ => return Ok(None),
        };

        Ok(Some(token))
    }

    fn scan_terminator(&mut self, tokens: &mut Vec<Token>) -> Result<(), ScanError> {
        match self.cursor.peek() {
            None => {
                self.ensure_interpolation_closed()?;
                self.levels.pop_all(tokens);
                self.finished = true;
                tokens.push(Token::EndOfSource);
            }
            Some(b'\n') => {
                self.ensure_interpolation_closed()?;
                self.cursor.advance(1);
                self.at_line_start = true;
                tokens.push(Token::EndOfPart);
            }
            Some(b':') => tokens.push(Token::EndOfPart),
            Some(b'#') if self.cursor.check_str("#[") => tokens.push(Token::EndOfPart),
            Some(b']') if self.interpolation_depth > 0 => tokens.push(Token::EndOfPart),
            Some(_) => return Err(self.unexpected()),
        }

        Ok(())
    }

    fn ensure_interpolation_closed(&self) -> Result<(), ScanError> {
        if self.interpolation_depth > 0 {
            Err(self.error(ScanErrorKind::UnterminatedInterpolation))
        } else {
            Ok(())
        }
    }

    /// `word` at the cursor, followed by end of source or one of `followers`.
    fn check_keyword(&self, word: &str, followers: &[u8]) -> bool {
        self.cursor.check_str(word)
            && self
                .cursor
                .lookahead(word.len())
                .is_none_or(|byte| followers.contains(&byte))
    }

    #[inline]
    fn error(&self, kind: ScanErrorKind) -> ScanError {
        self.error_at(self.cursor.pos(), kind)
    }

    fn error_at(&self, pos: usize, kind: ScanErrorKind) -> ScanError {
        let (line, column) = self.cursor.line_col(pos);

        ScanError::new(kind, line, column)
    }

    fn unexpected(&self) -> ScanError {
        match self.cursor.peek_char() {
            Some(ch) => self.error(ScanErrorKind::UnexpectedCharacter(ch)),
            None => self.error(ScanErrorKind::UnexpectedEndOfSource),
        }
    }

    fn expect(&mut self, byte: u8) -> Result<(), ScanError> {
        if self.cursor.check(byte) {
            self.cursor.advance(1);

            Ok(())
        } else {
            Err(self.unexpected())
        }
    }
}

/// Tokens of a template, pulled one part at a time.
///
/// Ends after `EndOfSource` or the first error.
impl Iterator for Scanner<'_> {
    type Item = Result<Token, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(Ok(token));
            }

            if self.finished {
                return None;
            }

            let mut part = Vec::new();

            if let Err(err) = self.scan_part(&mut part) {
                return Some(Err(err));
            }

            self.pending.extend(part);
        }
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}

use super::{ScanError, Scanner};
use crate::token::{CommentData, DoctypeData, IncludeData, TextData, TextKind};
use memchr::memchr3;

impl Scanner<'_> {
    pub(super) fn scan_doctype(&mut self) -> DoctypeData {
        self.cursor.advance("doctype".len());
        self.cursor.skip_inline_whitespace();

        DoctypeData::new(self.cursor.take_line().trim_end())
    }

    pub(super) fn scan_include(&mut self) -> IncludeData {
        self.cursor.advance("include".len());

        IncludeData::new(self.cursor.take_line().trim())
    }

    pub(super) fn scan_literal_html(&mut self) -> TextData {
        TextData::new(self.cursor.take_line(), TextKind::LiteralHtml)
    }

    pub(super) fn scan_piped_text(&mut self) -> Result<TextData, ScanError> {
        let mut value = String::new();

        self.cursor.advance(1);
        self.cursor.skip_inline_whitespace();
        self.scan_inline_text(&mut value)?;

        Ok(TextData::new(value, TextKind::PipedText))
    }

    /// Text following the `]` of a tag interpolation.
    pub(super) fn scan_inner_text(&mut self) -> Result<TextData, ScanError> {
        let mut value = String::new();

        if self.in_block_in_tag && self.interpolation_depth == 0 {
            self.scan_block_text(&mut value, true)?;
        } else {
            self.scan_inline_text(&mut value)?;
        }

        Ok(TextData::new(value, TextKind::InnerText))
    }

    pub(super) fn scan_comment(&mut self) -> CommentData {
        self.cursor.advance("//".len());

        let mut value = self.cursor.take_line().to_owned();

        while self.next_line_is_deeper() {
            if !value.is_empty() {
                value.push('\n');
            }

            self.cursor.advance(1);
            self.cursor.skip_inline_whitespace();
            value.push_str(self.cursor.take_line());
        }

        CommentData::new(value)
    }

    /// Skips an unbuffered `//-` comment with everything nested under it.
    pub(super) fn skip_comment(&mut self) {
        self.cursor.skip_line();
        self.skip_deeper_lines();
    }

    /// Appends text up to the end of the line, a `#[` or, inside an
    /// interpolation, the closing `]`. GPIO interpolations are replaced with
    /// their reading.
    pub(super) fn scan_inline_text(&mut self, value: &mut String) -> Result<(), ScanError> {
        loop {
            match self.cursor.peek() {
                None | Some(b'\n') => return Ok(()),
                Some(b']') if self.interpolation_depth > 0 => return Ok(()),
                Some(b'#') if self.cursor.check_str("#[") => return Ok(()),
                Some(b'#') if self.cursor.check_str("#{IO_") => {
                    let reading = self.scan_gpio_interpolation()?;

                    value.push_str(&reading.to_string());
                }
                Some(byte @ (b'#' | b']')) => {
                    value.push(char::from(byte));
                    self.cursor.advance(1);
                }
                Some(_) => {
                    let rest = self.cursor.rest();
                    let len = memchr3(b'\n', b'#', b']', rest).unwrap_or(rest.len());
                    let start = self.cursor.pos();

                    self.cursor.advance(len);
                    value.push_str(self.cursor.slice(start, start + len));
                }
            }
        }
    }

    /// Appends the text of a `.` block: the rest of the current line and
    /// every following line indented past the open levels.
    ///
    /// `continuation` is set when resuming a block after a tag interpolation,
    /// in which case each following line is separated even if nothing has
    /// been collected yet.
    pub(super) fn scan_block_text(
        &mut self,
        value: &mut String,
        continuation: bool,
    ) -> Result<(), ScanError> {
        self.scan_inline_text(value)?;

        while !self.cursor.check_str("#[") && self.next_line_is_deeper() {
            if continuation || !value.is_empty() {
                value.push('\n');
            }

            self.cursor.advance(1);
            self.cursor.skip_inline_whitespace();

            if !self.cursor.check(b'\n') {
                self.scan_inline_text(value)?;
            }
        }

        self.in_block_in_tag = self.cursor.check_str("#[");

        Ok(())
    }

    fn scan_gpio_interpolation(&mut self) -> Result<u32, ScanError> {
        self.cursor.advance("#{".len());

        let reading = self.scan_gpio_value()?;

        self.expect(b'}')?;

        Ok(reading)
    }
}

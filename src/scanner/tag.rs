use super::{ScanError, ScanErrorKind, Scanner};
use crate::html::escape_attribute_value;
use crate::token::{Attribute, TagData};

#[inline]
pub(super) fn is_identifier_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-'
}

impl Scanner<'_> {
    pub(super) fn scan_tag(&mut self) -> Result<TagData, ScanError> {
        let mut tag = TagData::new(self.cursor.take_while(is_identifier_byte));
        let mut classes = Vec::new();
        let mut id = None;

        loop {
            match self.cursor.peek() {
                Some(b'#') if !matches!(self.cursor.lookahead(1), Some(b'[' | b'{')) => {
                    self.cursor.advance(1);
                    id = Some(self.cursor.take_while(is_identifier_byte).to_owned());
                }
                Some(b'.') if !self.at_block_text_start() => {
                    self.cursor.advance(1);

                    let class = self.cursor.take_while(is_identifier_byte);

                    if !class.is_empty() {
                        classes.push(class.to_owned());
                    }
                }
                _ => break,
            }
        }

        if tag.name.is_empty() {
            tag.name.push_str("div");
        }

        if !classes.is_empty() {
            tag.attributes
                .push(Attribute::with_value("class", classes.join(" ")));
        }

        if let Some(id) = id.filter(|id| !id.is_empty()) {
            tag.attributes.push(Attribute::with_value("id", id));
        }

        if self.cursor.check(b'(') {
            self.scan_attributes(&mut tag.attributes)?;
        }

        match self.cursor.peek() {
            Some(b'/') => {
                self.cursor.advance(1);
                tag.forced_void = true;
            }
            Some(b' ') => {
                self.cursor.advance(1);
                self.scan_inline_text(&mut tag.text)?;
            }
            Some(b'.') if self.at_block_text_start() => {
                self.cursor.advance(1);
                self.scan_block_text(&mut tag.text, false)?;
            }
            None | Some(b':' | b'\n') => (),
            Some(b']') if self.interpolation_depth > 0 => (),
            Some(_) => return Err(self.unexpected()),
        }

        Ok(tag)
    }

    /// A `.` closing the line, which opens block text rather than a class.
    fn at_block_text_start(&self) -> bool {
        self.cursor.check(b'.') && matches!(self.cursor.lookahead(1), None | Some(b'\n'))
    }

    fn scan_attributes(&mut self, attributes: &mut Vec<Attribute>) -> Result<(), ScanError> {
        self.cursor.advance(1);

        loop {
            self.cursor.skip_whitespace();

            match self.cursor.peek() {
                None => return Err(self.error(ScanErrorKind::UnexpectedEndOfSource)),
                Some(b')') => {
                    self.cursor.advance(1);

                    return Ok(());
                }
                _ => (),
            }

            let (key, quoted) = match self.cursor.peek() {
                Some(quote @ (b'"' | b'\'')) => (self.scan_quoted(quote)?, true),
                _ => (self.cursor.take_while(is_identifier_byte).to_owned(), false),
            };

            self.cursor.skip_whitespace();

            if key.is_empty() && !quoted {
                // NOTE: stray commas leave a placeholder the writer skips.
                if self.cursor.check(b',') {
                    self.cursor.advance(1);
                    attributes.push(Attribute::empty());

                    continue;
                }

                return Err(self.unexpected());
            }

            let escaped = if self.cursor.check(b'!') {
                self.cursor.advance(1);
                false
            } else {
                true
            };

            let attribute = if self.cursor.check(b'=') {
                self.cursor.advance(1);
                self.cursor.skip_whitespace();

                match self.cursor.peek() {
                    Some(quote @ (b'"' | b'\'')) => {
                        let raw = self.scan_quoted(quote)?;
                        let value = if escaped {
                            escape_attribute_value(&raw).into_owned()
                        } else {
                            raw
                        };

                        Attribute::with_value(key, value)
                    }
                    _ if self.at_expression_start() => {
                        Attribute::boolean(key, self.scan_expression()?.evaluate())
                    }
                    _ => return Err(self.unexpected()),
                }
            } else {
                Attribute::boolean(key, true)
            };

            attributes.push(attribute);

            self.cursor.skip_whitespace();

            if self.cursor.check(b',') {
                self.cursor.advance(1);
            }
        }
    }

    /// Consumes a string delimited by `quote`, which may span lines.
    fn scan_quoted(&mut self, quote: u8) -> Result<String, ScanError> {
        self.cursor.advance(1);

        match self.cursor.take_until(quote) {
            Some(value) => {
                let value = value.to_owned();

                self.cursor.advance(1);

                Ok(value)
            }
            None => {
                self.cursor.advance(self.cursor.rest().len());

                Err(self.error(ScanErrorKind::UnexpectedEndOfSource))
            }
        }
    }
}

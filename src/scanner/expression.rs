use super::tag::is_identifier_byte;
use super::{ScanError, ScanErrorKind, Scanner};
use crate::io::GpioPin;

/// Operand of a guard or attribute expression. GPIO references are resolved
/// to their reading while scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Literal {
    /// `True` or `False`.
    Keyword(bool),
    Number(u32),
}

impl Literal {
    #[inline]
    pub fn is_truthy(self) -> bool {
        match self {
            Literal::Keyword(value) => value,
            Literal::Number(value) => value != 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expr {
    /// A bare literal, equal to itself.
    Literal(Literal),
    /// `(lhs = rhs)`.
    Equality(Literal, Literal),
}

impl Expr {
    pub fn evaluate(self) -> bool {
        match self {
            Expr::Literal(literal) => literal.is_truthy(),
            Expr::Equality(Literal::Keyword(lhs), Literal::Keyword(rhs)) => lhs && rhs,
            Expr::Equality(Literal::Keyword(keyword), Literal::Number(number))
            | Expr::Equality(Literal::Number(number), Literal::Keyword(keyword)) => {
                keyword || number != 0
            }
            Expr::Equality(Literal::Number(lhs), Literal::Number(rhs)) => lhs == rhs,
        }
    }
}

impl Scanner<'_> {
    pub(super) fn at_expression_start(&self) -> bool {
        match self.cursor.peek() {
            Some(b'(') => true,
            Some(byte) if byte.is_ascii_digit() => true,
            _ => {
                self.cursor.check_str("True")
                    || self.cursor.check_str("False")
                    || self.cursor.check_str("IO_")
            }
        }
    }

    pub(super) fn scan_expression(&mut self) -> Result<Expr, ScanError> {
        if !self.cursor.check(b'(') {
            return Ok(Expr::Literal(self.scan_literal()?));
        }

        self.cursor.advance(1);
        self.cursor.skip_inline_whitespace();

        let lhs = self.scan_literal()?;

        self.cursor.skip_inline_whitespace();
        self.expect(b'=')?;
        self.cursor.skip_inline_whitespace();

        let rhs = self.scan_literal()?;

        self.cursor.skip_inline_whitespace();
        self.expect(b')')?;

        Ok(Expr::Equality(lhs, rhs))
    }

    fn scan_literal(&mut self) -> Result<Literal, ScanError> {
        let literal = if self.cursor.check_str("True") {
            self.cursor.advance("True".len());
            Literal::Keyword(true)
        } else if self.cursor.check_str("False") {
            self.cursor.advance("False".len());
            Literal::Keyword(false)
        } else if self.cursor.check_str("IO_") {
            Literal::Number(self.scan_gpio_value()?)
        } else if self.cursor.peek().is_some_and(|b| b.is_ascii_digit()) {
            let start = self.cursor.pos();
            let digits = self.cursor.take_while(|b| b.is_ascii_digit()).to_owned();

            match digits.parse() {
                Ok(number) => Literal::Number(number),
                Err(_) => {
                    return Err(self.error_at(start, ScanErrorKind::MalformedExpression(digits)));
                }
            }
        } else {
            return Err(self.unexpected());
        };

        // `Truex` or `12ab` would otherwise leave a dangling identifier.
        if self.cursor.peek().is_some_and(is_identifier_byte) {
            return Err(self.unexpected());
        }

        Ok(literal)
    }

    /// Reads the `IO_*` identifier at the cursor and queries its pin.
    pub(super) fn scan_gpio_value(&mut self) -> Result<u32, ScanError> {
        let start = self.cursor.pos();
        let identifier = self
            .cursor
            .take_while(|b| b.is_ascii_alphanumeric() || b == b'_')
            .to_owned();

        match GpioPin::from_identifier(&identifier) {
            Some(pin) => Ok(pin.read(self.hardware)),
            None => Err(self.error_at(start, ScanErrorKind::UnknownGpio(identifier))),
        }
    }
}

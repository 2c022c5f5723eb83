use super::{LevelKind, ScanError, ScanErrorKind, Scanner};

const GUARD_FOLLOWERS: &[u8] = b" \t(\n";
const ELSE_FOLLOWERS: &[u8] = b" \t:\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Branch {
    If,
    Unless,
    Else,
}

impl Scanner<'_> {
    /// `if`, `unless` or `else` as a keyword at the cursor. Tags such as
    /// `iframe` or `elsewhere` are not guards.
    pub(super) fn at_guard(&self) -> bool {
        self.check_keyword("if", GUARD_FOLLOWERS)
            || self.check_keyword("unless", GUARD_FOLLOWERS)
            || self.check_keyword("else", ELSE_FOLLOWERS)
    }

    /// Evaluates a conditional chain in place.
    ///
    /// The body of the first taken branch stays in the token stream under a
    /// silent [`LevelKind::Conditional`] level. Every other branch, with the
    /// lines nested under it, is skipped without being scanned.
    pub(super) fn scan_conditional(&mut self) -> Result<(), ScanError> {
        if self.check_keyword("else", ELSE_FOLLOWERS) {
            // Rest of a chain whose taken branch already ended. Headers are
            // checked but their guards never decide anything.
            loop {
                self.scan_skipped_branch()?;
                self.skip_deeper_lines();

                if !self.advance_to_chained_else() {
                    return Ok(());
                }
            }
        }

        let mut chained = false;

        loop {
            let taken = match self.scan_branch(chained)? {
                Branch::If => self.scan_expression()?.evaluate(),
                Branch::Unless => !self.scan_expression()?.evaluate(),
                Branch::Else => true,
            };

            self.scan_guard_terminator()?;

            log::trace!(target: "flash_pug::scanner", "conditional branch taken: {taken}");

            if taken {
                self.levels.push(LevelKind::Conditional, 0);

                return Ok(());
            }

            self.skip_deeper_lines();

            if !self.advance_to_chained_else() {
                return Ok(());
            }

            chained = true;
        }
    }

    fn scan_branch(&mut self, chained: bool) -> Result<Branch, ScanError> {
        if chained {
            self.cursor.advance("else".len());
            self.cursor.skip_inline_whitespace();
        }

        if self.check_keyword("if", GUARD_FOLLOWERS) {
            self.cursor.advance("if".len());
            self.cursor.skip_inline_whitespace();

            Ok(Branch::If)
        } else if self.check_keyword("unless", GUARD_FOLLOWERS) {
            self.cursor.advance("unless".len());
            self.cursor.skip_inline_whitespace();

            Ok(Branch::Unless)
        } else if chained {
            Ok(Branch::Else)
        } else {
            Err(self.unexpected())
        }
    }

    fn scan_skipped_branch(&mut self) -> Result<(), ScanError> {
        if self.scan_branch(true)? != Branch::Else {
            self.scan_expression()?;
        }

        self.scan_guard_terminator()
    }

    fn scan_guard_terminator(&mut self) -> Result<(), ScanError> {
        self.cursor.skip_inline_whitespace();

        if self.cursor.check(b':') && matches!(self.cursor.lookahead(1), None | Some(b'\n')) {
            self.cursor.advance(1);

            Ok(())
        } else {
            Err(self.error(ScanErrorKind::MissingGuardTerminator))
        }
    }

    /// Moves onto the `else` of the next line if that line continues the
    /// current chain. Leaves the cursor untouched otherwise.
    fn advance_to_chained_else(&mut self) -> bool {
        let Some((start, indent)) = self.peek_next_line() else {
            return false;
        };

        if indent != self.levels.total_size() {
            return false;
        }

        let saved = self.cursor.pos();

        self.cursor.seek(start + indent);

        if self.check_keyword("else", ELSE_FOLLOWERS) {
            true
        } else {
            self.cursor.seek(saved);
            false
        }
    }
}

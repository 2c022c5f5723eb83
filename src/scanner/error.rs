use thiserror::Error;

/// The ways template source can be malformed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanErrorKind {
    #[error("Wrong indentation character {0:?}.")]
    WrongIndentationCharacter(char),
    #[error("Indentation does not match any enclosing level.")]
    WrongIndentationAmount,
    #[error("Unexpected character {0:?}.")]
    UnexpectedCharacter(char),
    #[error("Unexpected end of source.")]
    UnexpectedEndOfSource,
    #[error("Unknown GPIO identifier `{0}`.")]
    UnknownGpio(String),
    #[error("Malformed expression literal `{0}`.")]
    MalformedExpression(String),
    #[error("Conditional guard must end with `:` and a line break.")]
    MissingGuardTerminator,
    #[error("Tag interpolation is not closed before the end of the line.")]
    UnterminatedInterpolation,
}

/// A scan failure with its 1-based source location.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at {line}:{column}")]
pub struct ScanError {
    pub kind: ScanErrorKind,
    pub line: usize,
    pub column: usize,
}

impl ScanError {
    pub fn new(kind: ScanErrorKind, line: usize, column: usize) -> Self {
        ScanError { kind, line, column }
    }
}

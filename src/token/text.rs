#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKind {
    /// A line starting with `<`, passed through untouched.
    LiteralHtml,
    /// A line starting with `|`.
    PipedText,
    /// Text continuing after a closing `]` of a tag interpolation.
    InnerText,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextData {
    pub value: String,
    pub kind: TextKind,
}

impl TextData {
    pub fn new(value: impl Into<String>, kind: TextKind) -> Self {
        TextData {
            value: value.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentData {
    pub value: String,
}

impl CommentData {
    pub fn new(value: impl Into<String>) -> Self {
        CommentData {
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeData {
    /// Unresolved path as written in the template.
    pub path: String,
}

impl IncludeData {
    pub fn new(path: impl Into<String>) -> Self {
        IncludeData { path: path.into() }
    }
}

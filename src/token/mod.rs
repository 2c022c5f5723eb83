mod doctype;
mod tag;
mod text;

pub use self::doctype::{DoctypeData, DoctypeShorthand};
pub use self::tag::{Attribute, AttributeValue, TagData};
pub use self::text::{CommentData, IncludeData, TextData, TextKind};

/// A single unit produced by the [`Scanner`](crate::Scanner).
///
/// `Indent`, `Dedent`, `EndOfPart` and `EndOfSource` carry no payload; every
/// content kind carries its own record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Indent,
    Dedent,
    EndOfPart,
    EndOfSource,
    Doctype(DoctypeData),
    Tag(TagData),
    Text(TextData),
    Comment(CommentData),
    Include(IncludeData),
}

impl Token {
    /// Whether the token carries content rather than structure.
    #[inline]
    pub fn is_content(&self) -> bool {
        !matches!(
            self,
            Token::Indent | Token::Dedent | Token::EndOfPart | Token::EndOfSource
        )
    }

    /// Whether the token terminates a part.
    #[inline]
    pub fn is_terminator(&self) -> bool {
        matches!(self, Token::EndOfPart | Token::EndOfSource)
    }
}

macro_rules! impl_from {
    ($($Variant:ident($Data:ident)),+) => {
        $(
            impl From<$Data> for Token {
                #[inline]
                fn from(data: $Data) -> Self {
                    Token::$Variant(data)
                }
            }
        )+
    };
}

impl_from!(
    Doctype(DoctypeData),
    Tag(TagData),
    Text(TextData),
    Comment(CommentData),
    Include(IncludeData)
);

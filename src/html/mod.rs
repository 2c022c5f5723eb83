mod escape;
mod void_element;

pub use self::escape::escape_attribute_value;
pub use self::void_element::is_void_element;

/// The active doctype family of a compile unit.
///
/// Controls how void elements and boolean attributes are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    /// No `doctype html`/`doctype xml` seen (yet).
    #[default]
    Unspecified,
    Html,
    Xml,
}

impl Dialect {
    #[inline]
    pub fn is_determined(self) -> bool {
        self != Dialect::Unspecified
    }
}

impl std::str::FromStr for Dialect {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "html" => Ok(Dialect::Html),
            "xml" => Ok(Dialect::Xml),
            "none" | "" => Ok(Dialect::Unspecified),
            _ => Err(format!("unknown dialect `{value}`")),
        }
    }
}

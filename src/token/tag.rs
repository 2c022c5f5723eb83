#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// `key="value"`. Escaping has already been applied by the scanner.
    Text(String),
    /// Boolean attribute, either bare or `key=<expression>`.
    Boolean { checked: bool },
    /// Synthesized from a stray comma; carries nothing.
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub key: String,
    pub value: AttributeValue,
}

impl Attribute {
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        Attribute {
            key: key.into(),
            value: AttributeValue::Text(value.into()),
        }
    }

    pub fn boolean(key: impl Into<String>, checked: bool) -> Self {
        Attribute {
            key: key.into(),
            value: AttributeValue::Boolean { checked },
        }
    }

    pub fn empty() -> Self {
        Attribute {
            key: String::new(),
            value: AttributeValue::Empty,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value == AttributeValue::Empty
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagData {
    pub name: String,
    pub attributes: Vec<Attribute>,
    /// Set by a trailing `/`.
    pub forced_void: bool,
    /// Inline or block text following the tag.
    pub text: String,
}

impl TagData {
    pub fn new(name: impl Into<String>) -> Self {
        TagData {
            name: name.into(),
            ..TagData::default()
        }
    }

    pub fn attribute(&self, key: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|attr| attr.key == key)
    }
}

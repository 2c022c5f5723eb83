use crate::html::Dialect;
use std::borrow::Cow;

/// Shorthand used on a `doctype` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoctypeShorthand {
    Html,
    Xml,
    Transitional,
    Strict,
    Frameset,
    OneDotOne,
    Basic,
    Mobile,
    Plist,
    Other,
}

impl DoctypeShorthand {
    /// Classifies the raw doctype value. A bare `doctype` is `Html`.
    pub fn classify(value: &str) -> Self {
        match value {
            "" | "html" => DoctypeShorthand::Html,
            "xml" => DoctypeShorthand::Xml,
            "transitional" => DoctypeShorthand::Transitional,
            "strict" => DoctypeShorthand::Strict,
            "frameset" => DoctypeShorthand::Frameset,
            "1.1" => DoctypeShorthand::OneDotOne,
            "basic" => DoctypeShorthand::Basic,
            "mobile" => DoctypeShorthand::Mobile,
            "plist" => DoctypeShorthand::Plist,
            _ => DoctypeShorthand::Other,
        }
    }

    /// Dialect fixed by this shorthand. Only `html` and `xml` determine one.
    #[inline]
    pub fn dialect(self) -> Dialect {
        match self {
            DoctypeShorthand::Html => Dialect::Html,
            DoctypeShorthand::Xml => Dialect::Xml,
            _ => Dialect::Unspecified,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctypeData {
    pub value: String,
    pub shorthand: DoctypeShorthand,
}

impl DoctypeData {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let shorthand = DoctypeShorthand::classify(&value);

        DoctypeData { value, shorthand }
    }

    /// The canonical preamble written for this doctype.
    pub fn preamble(&self) -> Cow<'static, str> {
        let preamble = match self.shorthand {
            DoctypeShorthand::Html => "<!DOCTYPE html>",
            DoctypeShorthand::Xml => r#"<?xml version="1.0" encoding="utf-8" ?>"#,
            DoctypeShorthand::Transitional => {
                r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Transitional//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd">"#
            }
            DoctypeShorthand::Strict => {
                r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Strict//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd">"#
            }
            DoctypeShorthand::Frameset => {
                r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Frameset//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-frameset.dtd">"#
            }
            DoctypeShorthand::OneDotOne => {
                r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.1//EN" "http://www.w3.org/TR/xhtml11/DTD/xhtml11.dtd">"#
            }
            DoctypeShorthand::Basic => {
                r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML Basic 1.1//EN" "http://www.w3.org/TR/xhtml-basic/xhtml-basic11.dtd">"#
            }
            DoctypeShorthand::Mobile => {
                r#"<!DOCTYPE html PUBLIC "-//WAPFORUM//DTD XHTML Mobile 1.2//EN" "http://www.openmobilealliance.org/tech/DTD/xhtml-mobile12.dtd">"#
            }
            DoctypeShorthand::Plist => {
                r#"<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">"#
            }
            DoctypeShorthand::Other => return Cow::Owned(format!("<!DOCTYPE {}>", self.value)),
        };

        Cow::Borrowed(preamble)
    }
}

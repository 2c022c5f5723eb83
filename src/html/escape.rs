use std::borrow::Cow;

#[inline]
fn replacement(ch: char) -> Option<&'static str> {
    match ch {
        '"' => Some("&quot;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        _ => None,
    }
}

/// Escapes `"`, `<`, `>` and `&` in a quoted attribute value.
pub fn escape_attribute_value(value: &str) -> Cow<'_, str> {
    let Some(first) = value.find(|ch| replacement(ch).is_some()) else {
        return Cow::Borrowed(value);
    };

    let mut escaped = String::with_capacity(value.len() + 8);

    escaped.push_str(&value[..first]);

    for ch in value[first..].chars() {
        match replacement(ch) {
            Some(repl) => escaped.push_str(repl),
            None => escaped.push(ch),
        }
    }

    Cow::Owned(escaped)
}

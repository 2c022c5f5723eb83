/// Elements rendered without a closing tag or children.
const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

#[inline]
pub fn is_void_element(name: &str) -> bool {
    // NOTE: fast path for the most commonly used elements
    if matches!(name, "div" | "a" | "span" | "li" | "p") {
        return false;
    }

    VOID_ELEMENTS.contains(&name)
}

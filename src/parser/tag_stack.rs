#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackItem {
    /// An open element awaiting its closing tag.
    Element(String),
    /// Keeps stack depth in step with indentation for content that has
    /// nothing to close.
    Placeholder,
}

/// Open-tag stack of one compile unit. Every item pushed is popped exactly
/// once, either by a close or by the final drain.
#[derive(Debug, Default)]
pub struct TagStack(Vec<StackItem>);

impl TagStack {
    #[inline]
    pub fn push_element(&mut self, name: impl Into<String>) {
        self.0.push(StackItem::Element(name.into()));
    }

    #[inline]
    pub fn push_placeholder(&mut self) {
        self.0.push(StackItem::Placeholder);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<StackItem> {
        self.0.pop()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Names of the open elements, outermost first.
    #[cfg(test)]
    pub fn open_elements(&self) -> impl Iterator<Item = &str> {
        self.0.iter().filter_map(|item| match item {
            StackItem::Element(name) => Some(name.as_str()),
            StackItem::Placeholder => None,
        })
    }
}

use std::collections::BTreeMap;

/// What a type name maps to in the markup framework.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    /// A tagged element; props become attributes.
    Element(String),
    /// Text taken from the named prop. Children are ignored.
    Text(String),
    /// A comment naming the type of the descriptor it stands for, for use as fallback.
    Placeholder,
}

impl Tag {
    /// A tagged element.
    pub fn element(name: impl Into<String>) -> Self {
        Self::Element(name.into())
    }

    /// Text read from `prop`.
    pub fn text(prop: impl Into<String>) -> Self {
        Self::Text(prop.into())
    }
}

/// Hydrated markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Renders nothing.
    Empty,
    /// Plain text.
    Text(String),
    /// A comment.
    Comment(String),
    /// Children without a wrapper.
    Fragment(Vec<Node>),
    /// A tagged element.
    Element {
        /// Tag name.
        tag: String,
        /// Attributes, sorted by name.
        attrs: BTreeMap<String, String>,
        /// Children in order.
        children: Vec<Node>,
    },
}

impl Node {
    /// Whether the node renders nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Fragment(children) => children.iter().all(Self::is_empty),
            Self::Text(_) | Self::Comment(_) | Self::Element { .. } => false,
        }
    }

    /// Text content of the subtree, concatenated in order.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text),
            Self::Fragment(children) | Self::Element { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
            Self::Empty | Self::Comment(_) => {}
        }
    }
}

//! The descriptor tree node and its sentinel types.

use core::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Type of the sentinel that renders nothing.
pub const NULL_TYPE: &str = "__null__";

/// Type of the sentinel that renders its children without a wrapper.
pub const FRAGMENT_TYPE: &str = "__fragment__";

/// Props attached to a descriptor.
///
/// Keys are kept sorted so the serialized form is canonical.
pub type Props = Map<String, Value>;

/// Reserved descriptor types with engine-defined semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentinel {
    /// `__null__`: renders nothing.
    Null,
    /// `__fragment__`: a transparent wrapper around its children.
    Fragment,
}

impl Sentinel {
    /// Returns the sentinel denoted by `ty`, if any.
    #[must_use]
    pub fn from_type(ty: &str) -> Option<Self> {
        match ty {
            NULL_TYPE => Some(Self::Null),
            FRAGMENT_TYPE => Some(Self::Fragment),
            _ => None,
        }
    }

    /// Returns the reserved type string of this sentinel.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => NULL_TYPE,
            Self::Fragment => FRAGMENT_TYPE,
        }
    }
}

/// Reconciliation key of a descriptor, either a string or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    /// A string key.
    String(String),
    /// A numeric key.
    Number(Number),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(key) => f.write_str(key),
            Self::Number(key) => write!(f, "{key}"),
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<u64> for Key {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        Self::Number(value.into())
    }
}

/// A serializable node describing one renderable unit.
///
/// Descriptors are plain values: cloning one copies the whole subtree and no node ever
/// refers back to its parent. The `type` is never empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Descriptor {
    #[serde(rename = "type")]
    ty: String,
    props: Props,
    #[serde(skip_serializing_if = "Option::is_none")]
    children: Option<Vec<Descriptor>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<Key>,
}

impl Descriptor {
    /// Creates a descriptor of the given type with no props and no children.
    ///
    /// # Panics
    ///
    /// Panics if `ty` is empty.
    #[must_use]
    pub fn new(ty: impl Into<String>) -> Self {
        let ty = ty.into();
        assert!(!ty.is_empty(), "descriptor type must not be empty");
        Self {
            ty,
            props: Props::new(),
            children: None,
            key: None,
        }
    }

    /// Assembles a descriptor from already validated parts.
    pub(crate) const fn from_parts(
        ty: String,
        props: Props,
        children: Option<Vec<Self>>,
        key: Option<Key>,
    ) -> Self {
        Self {
            ty,
            props,
            children,
            key,
        }
    }

    /// Creates the `__null__` sentinel.
    #[must_use]
    pub fn null() -> Self {
        Self::new(NULL_TYPE)
    }

    /// Creates a `__fragment__` sentinel wrapping `children`.
    #[must_use]
    pub fn fragment(children: impl IntoIterator<Item = Self>) -> Self {
        Self::new(FRAGMENT_TYPE).with_children(children)
    }

    /// Sets a prop, replacing any previous value under the same name.
    ///
    /// # Panics
    ///
    /// Panics on a sentinel; sentinels carry no props.
    #[must_use]
    pub fn with_prop(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        assert!(!self.is_sentinel(), "sentinel `{}` carries no props", self.ty);
        self.props.insert(name.into(), value.into());
        self
    }

    /// Replaces all props.
    ///
    /// # Panics
    ///
    /// Panics if `props` is not empty and this is a sentinel.
    #[must_use]
    pub fn with_props(mut self, props: Props) -> Self {
        assert!(
            props.is_empty() || !self.is_sentinel(),
            "sentinel `{}` carries no props",
            self.ty
        );
        self.props = props;
        self
    }

    /// Appends a child, creating the children list if needed.
    ///
    /// # Panics
    ///
    /// Panics on `__null__`, which has no children.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        assert!(!self.is_null(), "`{NULL_TYPE}` has no children");
        self.children.get_or_insert_with(Vec::new).push(child);
        self
    }

    /// Replaces the children list.
    ///
    /// # Panics
    ///
    /// Panics if `children` is not empty and this is `__null__`.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        let children: Vec<Self> = children.into_iter().collect();
        assert!(
            children.is_empty() || !self.is_null(),
            "`{NULL_TYPE}` has no children"
        );
        self.children = Some(children);
        self
    }

    /// Removes the children list entirely.
    #[must_use]
    pub fn without_children(mut self) -> Self {
        self.children = None;
        self
    }

    /// Sets the reconciliation key.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<Key>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// The component type.
    #[must_use]
    pub fn ty(&self) -> &str {
        &self.ty
    }

    /// The props of this node.
    #[must_use]
    pub const fn props(&self) -> &Props {
        &self.props
    }

    /// Looks up a single prop.
    #[must_use]
    pub fn prop(&self, name: &str) -> Option<&Value> {
        self.props.get(name)
    }

    /// The children of this node; empty when none were declared.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Whether a children list was declared, even an empty one.
    #[must_use]
    pub const fn has_children_list(&self) -> bool {
        self.children.is_some()
    }

    /// The reconciliation key, if any.
    #[must_use]
    pub const fn key(&self) -> Option<&Key> {
        self.key.as_ref()
    }

    /// The sentinel this node denotes, if any.
    #[must_use]
    pub fn sentinel(&self) -> Option<Sentinel> {
        Sentinel::from_type(&self.ty)
    }

    /// Whether this node is the `__null__` sentinel.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.ty == NULL_TYPE
    }

    /// Whether this node is a `__fragment__` sentinel.
    #[must_use]
    pub fn is_fragment(&self) -> bool {
        self.ty == FRAGMENT_TYPE
    }

    /// Whether this node is either sentinel.
    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        self.sentinel().is_some()
    }

    /// Total number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Self::node_count).sum::<usize>()
    }

    /// Number of levels in this subtree; a leaf has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.children().iter().map(Self::depth).max().unwrap_or(0)
    }

    /// Mutable access to the props, used by [`crate::compact`].
    pub(crate) fn props_mut(&mut self) -> &mut Props {
        &mut self.props
    }

    /// Detaches the children list so it can be rebuilt.
    pub(crate) fn take_children(&mut self) -> Option<Vec<Self>> {
        self.children.take()
    }

    /// Reattaches a children list taken with [`Self::take_children`].
    pub(crate) fn set_children(&mut self, children: Option<Vec<Self>>) {
        self.children = children;
    }

    /// Splits the descriptor into `(type, props, children, key)`.
    #[must_use]
    pub fn into_parts(self) -> (String, Props, Option<Vec<Self>>, Option<Key>) {
        (self.ty, self.props, self.children, self.key)
    }
}

impl<'de> Deserialize<'de> for Descriptor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        crate::codec::from_value(value).map_err(serde::de::Error::custom)
    }
}

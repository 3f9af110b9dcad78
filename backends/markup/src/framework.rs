use std::collections::BTreeMap;

use splay_core::{Key, Props, Value};
use splay_hydration::{DESCRIPTOR_PROP, Framework, FrameworkHydrator, FrameworkHydratorBuilder};

use crate::{Node, Tag};

/// Attribute carrying an element's key.
const KEY_ATTR: &str = "data-key";

/// The markup framework.
#[derive(Debug, Default, Clone, Copy)]
pub struct Markup;

impl Markup {
    /// Starts a hydrator builder targeting markup.
    pub fn hydrator() -> FrameworkHydratorBuilder<Self> {
        FrameworkHydrator::builder(Self)
    }
}

impl Framework for Markup {
    type Component = Tag;
    type Element = Node;

    fn create_element(
        &self,
        component: &Tag,
        props: &Props,
        key: Option<&Key>,
        children: Vec<Node>,
    ) -> Node {
        match component {
            Tag::Element(tag) => {
                let mut attrs: BTreeMap<String, String> = props
                    .iter()
                    .filter_map(|(name, value)| attribute(value).map(|v| (name.clone(), v)))
                    .collect();
                if let Some(key) = key {
                    attrs.insert(KEY_ATTR.to_owned(), key.to_string());
                }
                Node::Element {
                    tag: tag.clone(),
                    attrs,
                    children,
                }
            }
            Tag::Text(prop) => Node::Text(props.get(prop).and_then(attribute).unwrap_or_default()),
            Tag::Placeholder => {
                let ty = props
                    .get(DESCRIPTOR_PROP)
                    .and_then(|descriptor| descriptor.get("type"))
                    .and_then(Value::as_str)
                    .unwrap_or("?");
                Node::Comment(format!("unknown component {ty}"))
            }
        }
    }

    fn fragment(&self, _key: Option<&Key>, children: Vec<Node>) -> Node {
        Node::Fragment(children)
    }

    fn empty(&self) -> Node {
        Node::Empty
    }
}

/// Attribute text for a prop value; `None` drops the attribute.
fn attribute(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        Value::Bool(_) | Value::Number(_) | Value::Array(_) | Value::Object(_) => {
            Some(value.to_string())
        }
    }
}

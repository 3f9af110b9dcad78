//! Pruning of empty props.

use serde_json::Value;

use crate::Descriptor;

/// Whether a prop value counts as empty for [`compact`].
///
/// Null, `""`, `{}` and `[]` are empty. `0` and `false` are not.
#[must_use]
pub fn is_empty_prop(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Removes empty prop entries from every node of the tree.
///
/// Children lists are kept as they are, even when empty; only each node's own props are
/// pruned. Applying `compact` twice gives the same tree as applying it once.
#[must_use]
pub fn compact(descriptor: &Descriptor) -> Descriptor {
    let mut node = descriptor.clone();
    compact_in_place(&mut node);
    node
}

fn compact_in_place(node: &mut Descriptor) {
    node.props_mut().retain(|_, value| !is_empty_prop(value));
    if let Some(mut children) = node.take_children() {
        children.iter_mut().for_each(compact_in_place);
        node.set_children(Some(children));
    }
}

//! JSON interchange for descriptors.
//!
//! The wire shape is `{type, props, children?, key?}`. Encoding is canonical: prop keys are
//! sorted and absent `children`/`key` fields are omitted, so equal descriptors always encode
//! to the same bytes. Decoding checks every node and reports the first offending one.

use serde_json::Value;
use thiserror::Error;

use crate::{Descriptor, Key, NodePath, Props, Sentinel};

/// Errors produced when decoding a serialized descriptor.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The input is not valid JSON.
    #[error("invalid descriptor JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// A node is not a JSON object.
    #[error("descriptor at {path} is not an object")]
    NotAnObject {
        /// Location of the node.
        path: NodePath,
    },
    /// A node has no `type` field.
    #[error("descriptor at {path} is missing `type`")]
    MissingType {
        /// Location of the node.
        path: NodePath,
    },
    /// The `type` field is not a string.
    #[error("`type` of descriptor at {path} is not a string")]
    InvalidType {
        /// Location of the node.
        path: NodePath,
    },
    /// The `type` field is an empty string.
    #[error("`type` of descriptor at {path} is empty")]
    EmptyType {
        /// Location of the node.
        path: NodePath,
    },
    /// The `props` field is not an object.
    #[error("`props` of descriptor at {path} is not an object")]
    InvalidProps {
        /// Location of the node.
        path: NodePath,
    },
    /// The `children` field is not an array.
    #[error("`children` of descriptor at {path} is not an array")]
    InvalidChildren {
        /// Location of the node.
        path: NodePath,
    },
    /// A sentinel node carries props, or `__null__` carries children.
    #[error("sentinel `{ty}` at {path} carries props or children")]
    InvalidSentinel {
        /// The sentinel type.
        ty: String,
        /// Location of the node.
        path: NodePath,
    },
    /// The `key` field is neither a string nor a number.
    #[error("`key` of descriptor at {path} is neither a string nor a number")]
    InvalidKey {
        /// Location of the node.
        path: NodePath,
    },
}

/// Encodes a descriptor as compact canonical JSON.
#[must_use]
pub fn serialize(descriptor: &Descriptor) -> String {
    // Keys are strings and values are JSON already, so encoding cannot fail.
    serde_json::to_string(descriptor).unwrap_or_default()
}

/// Encodes a descriptor as indented JSON, for logs and diagnostics.
#[must_use]
pub fn serialize_pretty(descriptor: &Descriptor) -> String {
    serde_json::to_string_pretty(descriptor).unwrap_or_default()
}

/// Converts a descriptor into a JSON value with the wire shape.
#[must_use]
pub fn to_value(descriptor: &Descriptor) -> Value {
    serde_json::to_value(descriptor).unwrap_or(Value::Null)
}

/// Decodes a descriptor from JSON text.
///
/// # Errors
///
/// Returns [`FormatError`] when the text is not JSON or any node breaks the wire shape.
pub fn parse(input: &str) -> Result<Descriptor, FormatError> {
    let value: Value = serde_json::from_str(input)?;
    from_value(value)
}

/// Decodes a descriptor from a JSON value.
///
/// A missing `props` field decodes as empty props; unknown fields are ignored.
///
/// # Errors
///
/// Returns [`FormatError`] naming the first node that breaks the wire shape.
pub fn from_value(value: Value) -> Result<Descriptor, FormatError> {
    decode(value, &NodePath::root())
}

fn decode(value: Value, path: &NodePath) -> Result<Descriptor, FormatError> {
    let Value::Object(mut object) = value else {
        return Err(FormatError::NotAnObject { path: path.clone() });
    };

    let ty = match object.remove("type") {
        None => return Err(FormatError::MissingType { path: path.clone() }),
        Some(Value::String(ty)) if ty.is_empty() => {
            return Err(FormatError::EmptyType { path: path.clone() });
        }
        Some(Value::String(ty)) => ty,
        Some(_) => return Err(FormatError::InvalidType { path: path.clone() }),
    };

    let props = match object.remove("props") {
        None | Some(Value::Null) => Props::new(),
        Some(Value::Object(props)) => props,
        Some(_) => return Err(FormatError::InvalidProps { path: path.clone() }),
    };

    let children = match object.remove("children") {
        None | Some(Value::Null) => None,
        Some(Value::Array(items)) => Some(
            items
                .into_iter()
                .enumerate()
                .map(|(index, item)| decode(item, &path.child(index)))
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Some(_) => return Err(FormatError::InvalidChildren { path: path.clone() }),
    };

    let has_children = children.as_ref().is_some_and(|items| !items.is_empty());
    let misused = match Sentinel::from_type(&ty) {
        Some(Sentinel::Null) => !props.is_empty() || has_children,
        Some(Sentinel::Fragment) => !props.is_empty(),
        None => false,
    };
    if misused {
        return Err(FormatError::InvalidSentinel {
            ty,
            path: path.clone(),
        });
    }

    let key = match object.remove("key") {
        None | Some(Value::Null) => None,
        Some(Value::String(key)) => Some(Key::String(key)),
        Some(Value::Number(key)) => Some(Key::Number(key)),
        Some(_) => return Err(FormatError::InvalidKey { path: path.clone() }),
    };

    Ok(Descriptor::from_parts(ty, props, children, key))
}

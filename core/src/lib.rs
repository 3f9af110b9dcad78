//! Core data model for Splay.
//!
//! A [`Descriptor`] is a serializable description of something to render: a component
//! `type`, its `props`, optional ordered `children` and an optional reconciliation `key`.
//! Descriptors are computed remotely, shipped over RPC as JSON and materialized locally
//! by a hydrator.
//!
//! This crate holds the model plus the pure utilities that operate over it:
//!
//! - traversal: [`walk`], [`transform`], [`find`], [`used_types`],
//! - checking: [`validate`] returning a structured [`ValidationReport`],
//! - interchange: [`serialize`] and [`parse`] (with [`FormatError`]),
//! - cleanup: [`compact`].
//!
//! # Example
//!
//! ```rust
//! use splay_core::{Descriptor, parse, serialize};
//!
//! let card = Descriptor::new("user-card")
//!     .with_prop("name", "Ada")
//!     .with_child(Descriptor::new("avatar").with_prop("size", 32))
//!     .with_key("ada");
//!
//! let wire = serialize(&card);
//! assert_eq!(parse(&wire).unwrap(), card);
//! ```

#[cfg(test)]
mod arbitrary;
mod codec;
mod compact;
mod context;
mod descriptor;
mod path;
mod validate;
mod visit;

pub use codec::{FormatError, from_value, parse, serialize, serialize_pretty, to_value};
pub use compact::{compact, is_empty_prop};
pub use context::{Context, Size};
pub use descriptor::{Descriptor, FRAGMENT_TYPE, Key, NULL_TYPE, Props, Sentinel};
pub use path::NodePath;
pub use validate::{ValidationReport, validate};
pub use visit::{find, transform, used_types, walk};

#[doc(inline)]
pub use serde_json::{Map, Value};

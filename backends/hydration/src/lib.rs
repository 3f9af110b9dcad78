//! Hydration: turning descriptor trees into concrete elements.
//!
//! Every node is classified exactly once through a [`Components`] map:
//!
//! - `__null__` renders nothing,
//! - `__fragment__` contributes its hydrated children without a wrapper,
//! - a mapped type renders through its component after its children are hydrated,
//! - anything else goes to the configured fallback.
//!
//! Without a fallback, an unmapped type fails the whole hydration with
//! [`HydrateError::UnknownComponent`], naming the type and where it sits in the tree. Both
//! engines apply that rule.
//!
//! Two engines share the classification:
//!
//! - [`Hydrator`] works with plain render closures producing any element type,
//! - [`FrameworkHydrator`] drives a [`Framework`] through its `create_element`-style
//!   primitive.
//!
//! Hydration is synchronous and performs no I/O. Component maps belong to one engine
//! instance; nothing is registered globally.
//!
//! ```
//! use splay_core::Descriptor;
//! use splay_hydration::Hydrator;
//!
//! let hydrator = Hydrator::builder()
//!     .component("text", |props, _children, _key| {
//!         props["value"].as_str().unwrap_or_default().to_owned()
//!     })
//!     .component("row", |_props, children: Vec<String>, _key| children.join(" "))
//!     .build();
//!
//! let tree = Descriptor::new("row").with_children([
//!     Descriptor::new("text").with_prop("value", "hello"),
//!     Descriptor::null(),
//!     Descriptor::new("text").with_prop("value", "world"),
//! ]);
//!
//! let out = hydrator.hydrate(&tree).unwrap();
//! assert_eq!(out.into_element().as_deref(), Some("hello world"));
//! ```

mod classify;
mod engine;
mod error;
mod framework;

pub use classify::{Classification, Components};
pub use engine::{Hydrated, Hydrator, HydratorBuilder, RenderFn};
pub use error::HydrateError;
pub use framework::{DESCRIPTOR_PROP, Framework, FrameworkHydrator, FrameworkHydratorBuilder};

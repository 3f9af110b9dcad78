//! A small markup [`Framework`](splay_hydration::Framework) for Splay.
//!
//! [`Markup`] hydrates descriptors into a [`Node`] tree of tagged elements and text, and
//! [`Renderer`] prints that tree as indented markup lines. It is handy for logging what a
//! remote component produced, for snapshot tests and as a reference adapter.
//!
//! ```
//! use splay_core::Descriptor;
//! use splay_markup::{Markup, Renderer, Tag};
//!
//! let hydrator = Markup::hydrator()
//!     .component("card", Tag::element("section"))
//!     .component("title", Tag::text("value"))
//!     .build();
//!
//! let tree = Descriptor::new("card")
//!     .with_prop("id", "ada")
//!     .with_child(Descriptor::new("title").with_prop("value", "Ada <3"));
//!
//! let node = hydrator.hydrate(&tree).unwrap();
//! assert_eq!(
//!     Renderer::new().render(&node).to_string(),
//!     "<section id=\"ada\">\n  Ada &lt;3\n</section>\n"
//! );
//! ```

mod framework;
mod node;
mod renderer;

pub use framework::Markup;
pub use node::{Node, Tag};
pub use renderer::{RenderFrame, RenderLine, Renderer};

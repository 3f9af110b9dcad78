#![doc = include_str!("../README.md")]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::future_not_send)]

pub mod bridge;
mod error;
pub mod logging;

pub use error::{Error, Result};

#[doc(inline)]
pub use splay_core::*;

/// Registries resolving component names over RPC.
pub use splay_registry as registry;

/// Descriptor hydration engines.
pub use splay_hydration as hydration;

/// Combinators over descriptor streams.
pub use splay_stream as stream;

/// Reference markup framework.
pub use splay_markup as markup;

pub mod prelude {
    //! A collection of commonly used types and traits for easy importing.
    //!
    //! ```rust
    //! use splay_bridge::prelude::*;
    //!
    //! let tree = Descriptor::fragment([Descriptor::new("label"), Descriptor::null()]);
    //! assert!(validate(&tree, ["label"]).is_valid());
    //! ```
    pub use splay_core::{
        Context, Descriptor, Key, NodePath, Props, Size, ValidationReport, Value, compact, find,
        parse, serialize, transform, used_types, validate, walk,
    };
    pub use splay_hydration::{
        Framework, FrameworkHydrator, HydrateError, Hydrated, Hydrator,
    };
    pub use splay_markup::{Markup, Node, Renderer, Tag};
    pub use splay_registry::{
        Call, ClientRegistry, DualRegistry, DualResolver, ProcedurePath, RegistryConfig,
        StreamCall, StreamingRegistry,
    };
    pub use splay_stream::{DescriptorStreamExt, debounce_stream, merge_streams, throttle_stream};
}

//! Registries that turn a logical component name into a remote resolution.
//!
//! A registry is built once from a [`RegistryConfig`], the list of procedure names it
//! serves and an RPC primitive. It never changes afterwards. Looking a name up with `get`
//! yields a resolver that forwards a [`Context`](splay_core::Context) to the primitive
//! under the procedure path `[namespace?, name]`.
//!
//! | Registry | Primitive | Resolver output |
//! |---|---|---|
//! | [`ClientRegistry`] | [`Call`] | `Future<Output = Result<Descriptor, E>>` |
//! | [`StreamingRegistry`] | [`StreamCall`] | [`DescriptorStream`] |
//! | [`DualRegistry`] | both | [`DualResolver`] |
//!
//! Transport errors are never wrapped: the primitive's own error type flows through
//! unchanged.
//!
//! ```
//! use splay_core::{Context, Descriptor};
//! use splay_registry::{ClientRegistry, ProcedurePath, RegistryConfig};
//!
//! let config = RegistryConfig::default().with_namespace("ui");
//! let registry = ClientRegistry::new(
//!     |path: ProcedurePath, _ctx: Context| async move {
//!         Ok::<_, std::io::Error>(Descriptor::new(path.name()))
//!     },
//!     &config,
//!     ["user-card"],
//! );
//!
//! let resolver = registry.get("user-card").unwrap();
//! let tree = futures::executor::block_on(resolver.resolve(Context::new())).unwrap();
//! assert_eq!(tree.ty(), "user-card");
//! assert!(registry.get("missing").is_none());
//! ```

mod catalog;
mod client;
mod config;
mod dual;
mod path;
mod streaming;
mod transport;

pub use client::{ClientRegistry, ClientResolver};
pub use config::{ConfigError, DEFAULT_BUFFER_SIZE, RegistryConfig};
pub use dual::{DualRegistry, DualResolver};
pub use path::ProcedurePath;
pub use streaming::{DescriptorStream, StreamingRegistry, StreamingResolver};
pub use transport::{Call, StreamCall};

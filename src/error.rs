use splay_core::FormatError;
use splay_hydration::HydrateError;
use splay_registry::ConfigError;

/// Any error raised by the bridge itself.
///
/// Transport errors are not part of it: they keep the transport's own type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A serialized descriptor could not be parsed.
    #[error(transparent)]
    Format(#[from] FormatError),
    /// A descriptor could not be hydrated.
    #[error(transparent)]
    Hydrate(#[from] HydrateError),
    /// The registry configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result alias defaulting to [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

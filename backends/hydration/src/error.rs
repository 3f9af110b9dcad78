use splay_core::NodePath;

/// Errors raised while hydrating a descriptor tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HydrateError {
    /// A node's type is neither a sentinel nor mapped, and no fallback is configured.
    #[error("no component registered for type `{ty}` at {path}")]
    UnknownComponent {
        /// The unmapped type.
        ty: String,
        /// Where the node sits in the tree.
        path: NodePath,
    },
}

pub(crate) fn unknown_component(ty: &str, path: &[usize]) -> HydrateError {
    let path = NodePath::from(path);
    tracing::debug!(ty, %path, "unknown component without fallback");
    HydrateError::UnknownComponent {
        ty: ty.to_owned(),
        path,
    }
}

use core::fmt;

use serde::{Deserialize, Serialize};

/// Procedure path handed to the RPC primitive: `[namespace?, name]`.
///
/// Serializes as a sequence of segments and displays dotted (`ui.user-card`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProcedurePath(Vec<String>);

impl ProcedurePath {
    /// Builds the path of `name`, prefixed by `namespace` when there is one.
    #[must_use]
    pub fn new(namespace: Option<&str>, name: &str) -> Self {
        let mut segments = Vec::with_capacity(2);
        if let Some(namespace) = namespace {
            segments.push(namespace.to_owned());
        }
        segments.push(name.to_owned());
        Self(segments)
    }

    /// The segments, namespace first.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// The procedure name, i.e. the last segment.
    #[must_use]
    pub fn name(&self) -> &str {
        self.0.last().map_or("", String::as_str)
    }

    /// The namespace segment, if the path has one.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        match self.0.as_slice() {
            [namespace, _] => Some(namespace),
            _ => None,
        }
    }
}

impl fmt::Display for ProcedurePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

impl<S: AsRef<str>> PartialEq<[S]> for ProcedurePath {
    fn eq(&self, other: &[S]) -> bool {
        self.0.len() == other.len() && self.0.iter().zip(other).all(|(a, b)| a == b.as_ref())
    }
}

impl<S: AsRef<str>, const N: usize> PartialEq<[S; N]> for ProcedurePath {
    fn eq(&self, other: &[S; N]) -> bool {
        *self == other[..]
    }
}

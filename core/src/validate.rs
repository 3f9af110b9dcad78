//! Checking a tree against the component types a hydrator knows.
//!
//! Sentinels are always valid; every other type must be listed.

use std::collections::{BTreeSet, HashSet};

use serde::Serialize;

use crate::{Descriptor, walk};

/// Outcome of [`validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// Whether every non-sentinel type is known.
    pub valid: bool,
    /// The distinct unknown types, sorted.
    pub unknown_types: BTreeSet<String>,
}

impl ValidationReport {
    /// Whether the tree only uses known types.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }
}

/// Checks that every non-sentinel type in the tree is one of `known_types`.
///
/// The result is a report rather than an error: callers decide whether unknown types are
/// fatal, for instance when a hydrator has a fallback configured.
pub fn validate<I, S>(descriptor: &Descriptor, known_types: I) -> ValidationReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let known: HashSet<String> = known_types
        .into_iter()
        .map(|ty| ty.as_ref().to_owned())
        .collect();

    let mut unknown_types = BTreeSet::new();
    walk(descriptor, |node, _| {
        if !node.is_sentinel() && !known.contains(node.ty()) {
            unknown_types.insert(node.ty().to_owned());
        }
    });

    ValidationReport {
        valid: unknown_types.is_empty(),
        unknown_types,
    }
}

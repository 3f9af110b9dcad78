//! Name bookkeeping shared by every registry.

use std::collections::BTreeSet;

use crate::ProcedurePath;

#[derive(Debug, Clone)]
pub(crate) struct Catalog {
    namespace: Option<String>,
    names: BTreeSet<String>,
}

impl Catalog {
    pub(crate) fn new<I, N>(namespace: Option<&str>, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        Self {
            namespace: namespace.map(str::to_owned),
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub(crate) fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub(crate) fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub(crate) fn len(&self) -> usize {
        self.names.len()
    }

    /// Path of a registered name; `None` for anything else.
    pub(crate) fn path(&self, name: &str) -> Option<ProcedurePath> {
        self.contains(name)
            .then(|| ProcedurePath::new(self.namespace(), name))
    }
}

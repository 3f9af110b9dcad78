use std::rc::Rc;

use splay_core::Context;
use tracing::debug;

use crate::catalog::Catalog;
use crate::{Call, ProcedurePath, RegistryConfig};

/// Registry whose resolvers make one request and await one descriptor.
#[derive(Debug)]
pub struct ClientRegistry<C> {
    primitive: Rc<C>,
    catalog: Catalog,
}

impl<C: Call> ClientRegistry<C> {
    /// Builds a registry serving `names` through `call`.
    pub fn new<I, N>(call: C, config: &RegistryConfig, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        let catalog = Catalog::new(config.namespace(), names);
        debug!(
            namespace = config.namespace().unwrap_or_default(),
            procedures = catalog.len(),
            "client registry ready"
        );
        Self {
            primitive: Rc::new(call),
            catalog,
        }
    }

    /// Looks up the resolver of `name`.
    ///
    /// Returns `None` if `name` was not registered.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<ClientResolver<C>> {
        self.catalog.path(name).map(|path| ClientResolver {
            primitive: self.primitive.clone(),
            path,
        })
    }
}

impl<C> ClientRegistry<C> {
    /// The namespace prefix of every path.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.catalog.namespace()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.catalog.names()
    }

    /// Whether `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.catalog.contains(name)
    }

    /// Number of registered names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    /// Whether no name is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Resolver of one registered name.
#[derive(Debug)]
pub struct ClientResolver<C> {
    primitive: Rc<C>,
    path: ProcedurePath,
}

impl<C> Clone for ClientResolver<C> {
    fn clone(&self) -> Self {
        Self {
            primitive: self.primitive.clone(),
            path: self.path.clone(),
        }
    }
}

impl<C: Call> ClientResolver<C> {
    /// Calls the primitive once and returns its pending response unmodified.
    pub fn resolve(&self, ctx: Context) -> C::Future {
        debug!(path = %self.path, "resolving");
        self.primitive.call(self.path.clone(), ctx)
    }
}

impl<C> ClientResolver<C> {
    /// The path this resolver calls.
    #[must_use]
    pub const fn path(&self) -> &ProcedurePath {
        &self.path
    }
}

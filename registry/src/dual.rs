use tracing::debug;

use crate::{
    Call, ClientRegistry, ClientResolver, RegistryConfig, StreamCall, StreamingRegistry,
    StreamingResolver,
};

/// Registry serving both request/response and streaming names.
///
/// Which style a name resolves with is decided by the `is_streaming` predicate, asked
/// again on every [`get`](Self::get).
pub struct DualRegistry<C, S, P> {
    client: ClientRegistry<C>,
    streaming: StreamingRegistry<S>,
    is_streaming: P,
}

impl<C, S, P> core::fmt::Debug for DualRegistry<C, S, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DualRegistry")
            .field("namespace", &self.namespace())
            .field("procedures", &self.len())
            .finish_non_exhaustive()
    }
}

/// Resolver picked by a [`DualRegistry`].
#[derive(Debug)]
pub enum DualResolver<C, S> {
    /// One request, one descriptor.
    Call(ClientResolver<C>),
    /// One request, a stream of descriptors.
    Stream(StreamingResolver<S>),
}

impl<C, S> DualResolver<C, S> {
    /// Whether this resolves to a stream.
    #[must_use]
    pub const fn is_stream(&self) -> bool {
        matches!(self, Self::Stream(_))
    }
}

impl<C, S, P> DualRegistry<C, S, P>
where
    C: Call,
    S: StreamCall,
    P: Fn(&str) -> bool,
{
    /// Builds a registry serving `names` through both primitives.
    pub fn new<I, N>(
        call: C,
        stream: S,
        is_streaming: P,
        config: &RegistryConfig,
        names: I,
    ) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        Self {
            client: ClientRegistry::new(call, config, names.iter().cloned()),
            streaming: StreamingRegistry::new(stream, config, names),
            is_streaming,
        }
    }

    /// Looks up the resolver of `name`, streaming or not per the predicate.
    ///
    /// Returns `None` if `name` was not registered.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<DualResolver<C, S>> {
        if (self.is_streaming)(name) {
            debug!(procedure = name, "dual lookup picked streaming");
            self.streaming.get(name).map(DualResolver::Stream)
        } else {
            self.client.get(name).map(DualResolver::Call)
        }
    }
}

impl<C, S, P> DualRegistry<C, S, P> {
    /// The namespace prefix of every path.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.client.namespace()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.client.names()
    }

    /// Whether `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.client.contains(name)
    }

    /// Number of registered names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.client.len()
    }

    /// Whether no name is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProcedurePath;
    use core::cell::Cell;
    use futures::{StreamExt, future, stream};
    use splay_core::{Context, Descriptor};

    fn call(path: ProcedurePath, _ctx: Context) -> future::Ready<Result<Descriptor, ()>> {
        future::ready(Ok(Descriptor::new("once").with_prop("path", path.to_string())))
    }

    fn feed(
        _path: ProcedurePath,
        _ctx: Context,
    ) -> stream::Iter<std::vec::IntoIter<Result<Descriptor, ()>>> {
        stream::iter(vec![Ok(Descriptor::new("tick")), Ok(Descriptor::new("tick"))])
    }

    #[test]
    fn predicate_selects_style() {
        let registry = DualRegistry::new(
            call,
            feed,
            |name: &str| name.ends_with("-live"),
            &RegistryConfig::default().with_namespace("ui"),
            ["card", "card-live"],
        );

        match registry.get("card").unwrap() {
            DualResolver::Call(resolver) => {
                let tree = smol::block_on(resolver.resolve(Context::new())).unwrap();
                assert_eq!(tree.prop("path"), Some(&"ui.card".into()));
            }
            DualResolver::Stream(_) => panic!("expected a call resolver"),
        }

        match registry.get("card-live").unwrap() {
            DualResolver::Stream(resolver) => {
                let items: Vec<_> = smol::block_on(resolver.resolve(Context::new()).collect());
                assert_eq!(items.len(), 2);
            }
            DualResolver::Call(_) => panic!("expected a stream resolver"),
        }

        assert!(registry.get("other").is_none());
    }

    #[test]
    fn predicate_is_asked_on_every_lookup() {
        let live = Cell::new(false);
        let asked = Cell::new(0);
        let registry = DualRegistry::new(
            call,
            feed,
            |_: &str| {
                asked.set(asked.get() + 1);
                live.get()
            },
            &RegistryConfig::default(),
            ["card"],
        );

        assert!(!registry.get("card").unwrap().is_stream());
        live.set(true);
        assert!(registry.get("card").unwrap().is_stream());
        assert_eq!(asked.get(), 2);
    }
}

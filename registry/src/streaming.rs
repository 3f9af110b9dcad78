use core::pin::Pin;
use core::task::{Context as TaskContext, Poll};
use std::rc::Rc;

use async_channel::{Receiver, Sender};
use futures::future::LocalBoxFuture;
use futures::{FutureExt, Stream, StreamExt};
use splay_core::{Context, Descriptor};
use pin_project_lite::pin_project;
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::{ProcedurePath, RegistryConfig, StreamCall};

/// Registry whose resolvers open a remote stream of descriptors.
#[derive(Debug)]
pub struct StreamingRegistry<S> {
    primitive: Rc<S>,
    catalog: Catalog,
    buffer_size: usize,
}

impl<S: StreamCall> StreamingRegistry<S> {
    /// Builds a registry serving `names` through `stream`.
    pub fn new<I, N>(stream: S, config: &RegistryConfig, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        let catalog = Catalog::new(config.namespace(), names);
        debug!(
            namespace = config.namespace().unwrap_or_default(),
            procedures = catalog.len(),
            buffer_size = config.buffer_size(),
            "streaming registry ready"
        );
        Self {
            primitive: Rc::new(stream),
            catalog,
            buffer_size: config.buffer_size(),
        }
    }

    /// Looks up the resolver of `name`.
    ///
    /// Returns `None` if `name` was not registered.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<StreamingResolver<S>> {
        self.catalog.path(name).map(|path| StreamingResolver {
            primitive: self.primitive.clone(),
            path,
            buffer_size: self.buffer_size,
        })
    }
}

impl<S> StreamingRegistry<S> {
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

/// Resolver of one registered streaming name.
#[derive(Debug)]
pub struct StreamingResolver<S> {
    primitive: Rc<S>,
    path: ProcedurePath,
    buffer_size: usize,
}

impl<S> Clone for StreamingResolver<S> {
    fn clone(&self) -> Self {
        Self {
            primitive: self.primitive.clone(),
            path: self.path.clone(),
            buffer_size: self.buffer_size,
        }
    }
}

impl<S> StreamingResolver<S>
where
    S: StreamCall + 'static,
    S::Error: 'static,
    S::Stream: 'static,
{
    /// Returns a fresh stream for `ctx`.
    ///
    /// Nothing is sent until the stream is first polled. Each call opens its own remote
    /// stream with its own buffer.
    pub fn resolve(&self, ctx: Context) -> DescriptorStream<S::Error> {
        let (sender, receiver) = async_channel::bounded(self.buffer_size);
        let pump = pump(self.primitive.clone(), self.path.clone(), ctx, sender);
        DescriptorStream {
            pump: Some(pump.boxed_local()),
            receiver,
            capacity: self.buffer_size,
        }
    }
}

impl<S> StreamingResolver<S> {
    /// The path this resolver opens.
    #[must_use]
    pub const fn path(&self) -> &ProcedurePath {
        &self.path
    }
}

/// Moves items from the remote stream into the bounded buffer.
///
/// `send` waits while the buffer is full, which is where the producer suspends.
async fn pump<S: StreamCall>(
    primitive: Rc<S>,
    path: ProcedurePath,
    ctx: Context,
    sender: Sender<Result<Descriptor, S::Error>>,
) {
    debug!(path = %path, "opening stream");
    let mut upstream = core::pin::pin!(primitive.stream(path.clone(), ctx));
    while let Some(item) = upstream.next().await {
        let failed = item.is_err();
        if failed {
            warn!(path = %path, "stream failed");
        }
        if sender.send(item).await.is_err() {
            debug!(path = %path, "stream abandoned by consumer");
            return;
        }
        if failed {
            return;
        }
    }
    debug!(path = %path, "stream completed");
}

pin_project! {
    /// Descriptor stream produced by a [`StreamingResolver`].
    ///
    /// Holds at most [`capacity`](Self::capacity) unconsumed items. Dropping it closes the
    /// remote stream.
    #[must_use = "streams do nothing unless polled"]
    pub struct DescriptorStream<E> {
        pump: Option<LocalBoxFuture<'static, ()>>,
        #[pin]
        receiver: Receiver<Result<Descriptor, E>>,
        capacity: usize,
    }
}

impl<E> core::fmt::Debug for DescriptorStream<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DescriptorStream")
            .field("open", &self.pump.is_some())
            .field("buffered", &self.buffered_len())
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl<E> DescriptorStream<E> {
    /// Items received but not yet consumed.
    #[must_use]
    pub fn buffered_len(&self) -> usize {
        self.receiver.len()
    }

    /// The buffer bound.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<E> Stream for DescriptorStream<E> {
    type Item = Result<Descriptor, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut TaskContext<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();
        if let Some(pump) = this.pump.as_mut() {
            if pump.poll_unpin(cx).is_ready() {
                *this.pump = None;
            }
        }

        assert!(
            this.receiver.len() <= *this.capacity,
            "resource invariant violated: {} items buffered, bound is {}",
            this.receiver.len(),
            this.capacity
        );

        this.receiver.poll_next(cx)
    }
}

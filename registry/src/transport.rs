//! The RPC primitives a registry drives.
//!
//! Both traits are implemented for plain closures taking `(ProcedurePath, Context)`, so a
//! transport can be plugged in without a wrapper type.

use core::future::Future;

use futures::Stream;
use splay_core::{Context, Descriptor};

use crate::ProcedurePath;

/// Request/response primitive: one call, one descriptor.
pub trait Call {
    /// Transport error, passed through untouched.
    type Error;
    /// Pending response.
    type Future: Future<Output = Result<Descriptor, Self::Error>>;

    /// Invokes the remote procedure at `path`.
    fn call(&self, path: ProcedurePath, ctx: Context) -> Self::Future;
}

impl<F, Fut, E> Call for F
where
    F: Fn(ProcedurePath, Context) -> Fut,
    Fut: Future<Output = Result<Descriptor, E>>,
{
    type Error = E;
    type Future = Fut;

    fn call(&self, path: ProcedurePath, ctx: Context) -> Fut {
        self(path, ctx)
    }
}

/// Subscription primitive: one call, a sequence of descriptors.
pub trait StreamCall {
    /// Transport error, passed through untouched.
    type Error;
    /// The remote sequence.
    type Stream: Stream<Item = Result<Descriptor, Self::Error>>;

    /// Opens the remote stream at `path`.
    fn stream(&self, path: ProcedurePath, ctx: Context) -> Self::Stream;
}

impl<F, St, E> StreamCall for F
where
    F: Fn(ProcedurePath, Context) -> St,
    St: Stream<Item = Result<Descriptor, E>>,
{
    type Error = E;
    type Stream = St;

    fn stream(&self, path: ProcedurePath, ctx: Context) -> St {
        self(path, ctx)
    }
}

use std::time::Duration;

use futures::Stream;

use crate::{Debounce, Merge, Throttle, debounce_stream, merge_streams, throttle_stream};

/// Method-call forms of the combinators for any fallible stream.
pub trait DescriptorStreamExt<T, E>: Stream<Item = Result<T, E>> + Sized {
    /// See [`throttle_stream`].
    fn throttle(self, interval: Duration) -> Throttle<Self, T> {
        throttle_stream(self, interval)
    }

    /// See [`debounce_stream`].
    fn debounce(self, quiet: Duration) -> Debounce<Self, T> {
        debounce_stream(self, quiet)
    }

    /// Merges this stream with `others` of the same type. See [`merge_streams`].
    fn merge_with<I>(self, others: I) -> Merge<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        merge_streams(core::iter::once(self).chain(others))
    }
}

impl<S, T, E> DescriptorStreamExt<T, E> for S where S: Stream<Item = Result<T, E>> {}

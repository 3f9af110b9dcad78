use core::pin::Pin;
use core::task::{Context, Poll};

use futures::stream::{FusedStream, SelectAll};
use futures::{Stream, StreamExt};

/// Stream returned by [`merge_streams`].
#[must_use = "streams do nothing unless polled"]
pub struct Merge<S> {
    inner: Option<SelectAll<Pin<Box<S>>>>,
}

impl<S: Stream> core::fmt::Debug for Merge<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Merge")
            .field("active", &self.inner.as_ref().map_or(0, SelectAll::len))
            .finish()
    }
}

/// Fans several fallible streams into one.
///
/// Items are forwarded as soon as any source produces them. Each source keeps its own
/// order; there is no ordering between sources. The output ends once every source has
/// ended. If a source yields an error, the error is forwarded, every other source is
/// dropped on the spot and the output ends.
pub fn merge_streams<I, S, T, E>(streams: I) -> Merge<S>
where
    I: IntoIterator<Item = S>,
    S: Stream<Item = Result<T, E>>,
{
    Merge {
        inner: Some(streams.into_iter().map(Box::pin).collect()),
    }
}

impl<S, T, E> Stream for Merge<S>
where
    S: Stream<Item = Result<T, E>>,
{
    type Item = Result<T, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        let Some(inner) = this.inner.as_mut() else {
            return Poll::Ready(None);
        };

        match inner.poll_next_unpin(cx) {
            Poll::Ready(Some(Err(err))) => {
                this.inner = None;
                Poll::Ready(Some(Err(err)))
            }
            Poll::Ready(None) => {
                this.inner = None;
                Poll::Ready(None)
            }
            other => other,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.as_ref().map_or((0, Some(0)), |inner| (0, inner.size_hint().1))
    }
}

impl<S, T, E> FusedStream for Merge<S>
where
    S: Stream<Item = Result<T, E>>,
{
    fn is_terminated(&self) -> bool {
        self.inner.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{timed, tracked};
    use futures::stream;
    use std::time::Instant;

    #[test]
    fn fast_source_interleaves_and_completion_waits_for_all() {
        smol::block_on(async {
            let start = Instant::now();
            let slow = timed(start, vec![(10, 1), (80, 2)]);
            let fast = timed(start, vec![(30, 9)]);
            let seen: Vec<u32> = merge_streams([slow.boxed_local(), fast.boxed_local()])
                .map(Result::unwrap)
                .collect()
                .await;
            assert_eq!(seen, [1, 9, 2]);
        });
    }

    #[test]
    fn keeps_per_source_order() {
        smol::block_on(async {
            let a = stream::iter([Ok::<_, ()>(1), Ok(2), Ok(3)]);
            let b = stream::iter([Ok(10), Ok(20)]);
            let seen: Vec<i32> = merge_streams([a.boxed_local(), b.boxed_local()])
                .map(Result::unwrap)
                .collect()
                .await;
            let from_a: Vec<_> = seen.iter().copied().filter(|v| *v < 10).collect();
            let from_b: Vec<_> = seen.iter().copied().filter(|v| *v >= 10).collect();
            assert_eq!(from_a, [1, 2, 3]);
            assert_eq!(from_b, [10, 20]);
        });
    }

    #[test]
    fn error_ends_merge_and_releases_other_sources() {
        smol::block_on(async {
            let failing = stream::iter([Ok(1), Err("boom")]);
            let (idle, idle_dropped) = tracked(stream::pending::<Result<i32, &str>>());
            let mut merged = merge_streams([failing.boxed_local(), idle.boxed_local()]);

            assert_eq!(merged.next().await, Some(Ok(1)));
            assert!(!idle_dropped.get());
            assert_eq!(merged.next().await, Some(Err("boom")));
            assert!(idle_dropped.get());
            assert!(merged.is_terminated());
            assert_eq!(merged.next().await, None);
        });
    }

    #[test]
    fn empty_input_completes_immediately() {
        smol::block_on(async {
            let mut merged = merge_streams(Vec::<stream::Empty<Result<u8, ()>>>::new());
            assert_eq!(merged.next().await, None);
        });
    }

    #[test]
    fn dropping_output_releases_sources() {
        let (a, a_dropped) = tracked(stream::pending::<Result<u8, ()>>());
        let (b, b_dropped) = tracked(stream::pending::<Result<u8, ()>>());
        let merged = merge_streams([a.boxed_local(), b.boxed_local()]);
        drop(merged);
        assert!(a_dropped.get() && b_dropped.get());
    }
}

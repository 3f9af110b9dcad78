use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::time::Duration;

use futures::Stream;
use futures::stream::FusedStream;
use pin_project_lite::pin_project;
use smol::Timer;

use crate::{DRAIN_BUDGET, yield_pending};

pin_project! {
    /// Stream returned by [`debounce_stream`].
    #[must_use = "streams do nothing unless polled"]
    pub struct Debounce<S, T> {
        #[pin]
        upstream: S,
        quiet: Duration,
        pending: Option<T>,
        timer: Timer,
        upstream_done: bool,
        terminated: bool,
    }
}

impl<S, T> core::fmt::Debug for Debounce<S, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Debounce")
            .field("quiet", &self.quiet)
            .field("pending", &self.pending.is_some())
            .finish_non_exhaustive()
    }
}

/// Emits a value only once `quiet` has passed without a newer one.
///
/// Every arrival restarts the quiet period. When the upstream completes with a value still
/// pending, the stream waits out the quiet period and then emits it before ending.
///
/// An upstream error is forwarded immediately and ends the stream; the pending value of a
/// failed stream is dropped.
pub fn debounce_stream<S, T, E>(stream: S, quiet: Duration) -> Debounce<S, T>
where
    S: Stream<Item = Result<T, E>>,
{
    Debounce {
        upstream: stream,
        quiet,
        pending: None,
        timer: Timer::never(),
        upstream_done: false,
        terminated: false,
    }
}

impl<S, T, E> Stream for Debounce<S, T>
where
    S: Stream<Item = Result<T, E>>,
{
    type Item = Result<T, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        if *this.terminated {
            return Poll::Ready(None);
        }

        let mut budget = DRAIN_BUDGET;
        let mut saturated = false;
        while !*this.upstream_done {
            if budget == 0 {
                saturated = true;
                break;
            }
            budget -= 1;
            match this.upstream.as_mut().poll_next(cx) {
                Poll::Ready(Some(Ok(value))) => {
                    *this.pending = Some(value);
                    this.timer.set_after(*this.quiet);
                }
                Poll::Ready(Some(Err(err))) => {
                    *this.terminated = true;
                    *this.pending = None;
                    *this.timer = Timer::never();
                    return Poll::Ready(Some(Err(err)));
                }
                Poll::Ready(None) => *this.upstream_done = true,
                Poll::Pending => break,
            }
        }

        if this.pending.is_some() {
            if Pin::new(&mut *this.timer).poll(cx).is_pending() {
                return yield_pending(saturated, cx);
            }
            *this.timer = Timer::never();
            return Poll::Ready(this.pending.take().map(Ok));
        }

        if *this.upstream_done {
            *this.terminated = true;
            return Poll::Ready(None);
        }
        yield_pending(saturated, cx)
    }
}

impl<S, T, E> FusedStream for Debounce<S, T>
where
    S: Stream<Item = Result<T, E>>,
{
    fn is_terminated(&self) -> bool {
        self.terminated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{timed, tracked};
    use futures::{StreamExt, stream};
    use std::time::Instant;

    const QUIET: Duration = Duration::from_millis(50);

    #[test]
    fn burst_emits_last_value_after_quiet_period() {
        smol::block_on(async {
            let start = Instant::now();
            let source = timed(start, vec![(0, "a"), (10, "b"), (20, "c")]);
            let emitted: Vec<_> = debounce_stream(source, QUIET)
                .map(|item| (item.unwrap(), start.elapsed()))
                .collect()
                .await;
            assert_eq!(emitted.len(), 1);
            assert_eq!(emitted[0].0, "c");
            assert!(emitted[0].1 >= Duration::from_millis(70));
        });
    }

    #[test]
    fn separated_values_each_emit() {
        smol::block_on(async {
            let start = Instant::now();
            let source = timed(start, vec![(0, 1), (100, 2)]);
            let emitted: Vec<_> = debounce_stream(source, QUIET)
                .map(Result::unwrap)
                .collect()
                .await;
            assert_eq!(emitted, [1, 2]);
        });
    }

    #[test]
    fn error_discards_pending_value() {
        smol::block_on(async {
            let source = stream::iter([Ok(1), Ok(2), Err("gone")]);
            let emitted: Vec<_> = debounce_stream(source, QUIET).collect().await;
            assert_eq!(emitted, [Err("gone")]);
        });
    }

    #[test]
    fn always_ready_upstream_yields_to_executor() {
        smol::block_on(async {
            let (source, dropped) = tracked(stream::repeat(Ok::<_, ()>(1)));
            let mut debounced = Box::pin(debounce_stream(source, QUIET));
            assert!(futures::poll!(debounced.next()).is_pending());
            drop(debounced);
            assert!(dropped.get());
        });
    }

    #[test]
    fn long_ready_burst_settles_on_last_value() {
        smol::block_on(async {
            let source = stream::iter(0..1_000).map(Ok::<_, ()>);
            let emitted: Vec<_> = debounce_stream(source, QUIET).collect().await;
            assert_eq!(emitted, [Ok(999)]);
        });
    }

    #[test]
    fn dropping_before_quiet_period_releases_upstream() {
        smol::block_on(async {
            let (source, dropped) = tracked(stream::iter([Ok::<_, ()>(1)]).chain(stream::pending()));
            let mut debounced = Box::pin(debounce_stream(source, QUIET));
            assert!(futures::poll!(debounced.next()).is_pending());
            drop(debounced);
            assert!(dropped.get());
        });
    }
}

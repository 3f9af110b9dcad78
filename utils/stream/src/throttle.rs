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
    /// Stream returned by [`throttle_stream`].
    #[must_use = "streams do nothing unless polled"]
    pub struct Throttle<S, T> {
        #[pin]
        upstream: S,
        interval: Duration,
        pending: Option<T>,
        window: Option<Timer>,
        upstream_done: bool,
        terminated: bool,
    }
}

impl<S, T> core::fmt::Debug for Throttle<S, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Throttle")
            .field("interval", &self.interval)
            .field("pending", &self.pending.is_some())
            .field("window_open", &self.window.is_some())
            .finish_non_exhaustive()
    }
}

/// Emits at most one value per `interval`, keeping the latest one.
///
/// Trailing edge: the first value of a burst opens a window of `interval`, later values in
/// the window replace it, and the latest value is emitted when the window closes. Two
/// emissions are therefore never closer than `interval`. When the upstream completes with
/// a value still pending, that value is emitted at the end of its window before the
/// stream ends.
///
/// An upstream error is forwarded immediately and ends the stream; the pending value of a
/// failed stream is dropped.
pub fn throttle_stream<S, T, E>(stream: S, interval: Duration) -> Throttle<S, T>
where
    S: Stream<Item = Result<T, E>>,
{
    Throttle {
        upstream: stream,
        interval,
        pending: None,
        window: None,
        upstream_done: false,
        terminated: false,
    }
}

impl<S, T, E> Stream for Throttle<S, T>
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
                    if this.window.is_none() {
                        *this.window = Some(Timer::after(*this.interval));
                    }
                }
                Poll::Ready(Some(Err(err))) => {
                    *this.terminated = true;
                    *this.pending = None;
                    *this.window = None;
                    return Poll::Ready(Some(Err(err)));
                }
                Poll::Ready(None) => *this.upstream_done = true,
                Poll::Pending => break,
            }
        }

        if let Some(window) = this.window.as_mut() {
            if Pin::new(window).poll(cx).is_pending() {
                return yield_pending(saturated, cx);
            }
            *this.window = None;
            if let Some(value) = this.pending.take() {
                return Poll::Ready(Some(Ok(value)));
            }
        }

        if *this.upstream_done {
            *this.terminated = true;
            return Poll::Ready(None);
        }
        yield_pending(saturated, cx)
    }
}

impl<S, T, E> FusedStream for Throttle<S, T>
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

    const INTERVAL: Duration = Duration::from_millis(50);

    #[test]
    fn burst_collapses_to_latest_value_flushed_at_window_end() {
        smol::block_on(async {
            let start = Instant::now();
            let source = timed(start, vec![(0, 0), (10, 10), (20, 20), (30, 30)]);
            let emitted: Vec<_> = throttle_stream(source, INTERVAL)
                .map(|item| (item.unwrap(), start.elapsed()))
                .collect()
                .await;
            assert_eq!(emitted.len(), 1);
            assert_eq!(emitted[0].0, 30);
            assert!(emitted[0].1 >= INTERVAL);
        });
    }

    #[test]
    fn emissions_keep_the_minimum_gap() {
        smol::block_on(async {
            let start = Instant::now();
            let source = timed(start, vec![(0, 1), (60, 2), (70, 3), (130, 4)]);
            let emitted: Vec<_> = throttle_stream(source, INTERVAL)
                .map(|item| (item.unwrap(), Instant::now()))
                .collect()
                .await;
            let values: Vec<_> = emitted.iter().map(|(v, _)| *v).collect();
            assert_eq!(values, [1, 3, 4]);
            for pair in emitted.windows(2) {
                assert!(pair[1].1 - pair[0].1 >= INTERVAL);
            }
        });
    }

    #[test]
    fn error_passes_through_and_ends_stream() {
        smol::block_on(async {
            let source = stream::iter([Ok(1), Err("down"), Ok(2)]);
            let mut throttled = throttle_stream(source, INTERVAL);
            assert_eq!(throttled.next().await, Some(Err("down")));
            assert!(throttled.is_terminated());
            assert_eq!(throttled.next().await, None);
        });
    }

    #[test]
    fn empty_upstream_completes_without_waiting() {
        smol::block_on(async {
            let start = Instant::now();
            let mut throttled = throttle_stream(stream::empty::<Result<u8, ()>>(), INTERVAL);
            assert_eq!(throttled.next().await, None);
            assert!(start.elapsed() < INTERVAL);
        });
    }

    #[test]
    fn always_ready_upstream_still_emits_per_window() {
        smol::block_on(async {
            let start = Instant::now();
            let mut throttled = throttle_stream(stream::repeat(Ok::<_, ()>(7u8)), INTERVAL);
            assert_eq!(throttled.next().await, Some(Ok(7)));
            let first = start.elapsed();
            assert!(first >= INTERVAL);
            assert_eq!(throttled.next().await, Some(Ok(7)));
            assert!(start.elapsed() >= first + INTERVAL);
        });
    }

    #[test]
    fn dropping_mid_window_releases_upstream() {
        smol::block_on(async {
            let (source, dropped) = tracked(stream::iter([Ok::<_, ()>(1)]).chain(stream::pending()));
            let mut throttled = Box::pin(throttle_stream(source, INTERVAL));
            assert!(futures::poll!(throttled.next()).is_pending());
            assert!(!dropped.get());
            drop(throttled);
            assert!(dropped.get());
        });
    }
}

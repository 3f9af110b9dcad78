//! Stream combinators for coordinating descriptor sources.
//!
//! All combinators here work on fallible streams (`Stream<Item = Result<T, E>>`), the shape
//! produced by streaming registries:
//!
//! - [`merge_streams`] fans several sources into one,
//! - [`throttle_stream`] limits emissions to one per interval, keeping the latest value,
//! - [`debounce_stream`] waits for a quiet period before emitting.
//!
//! They are lazy and single-pass. Errors are never coalesced away: an `Err` item is
//! forwarded as soon as it is seen and ends the output stream.
//!
//! Cancellation is drop. Dropping an output stream drops its upstream streams and its
//! pending timer, so nothing fires after the consumer walks away.
//!
//! ```text
//! source A ─┐
//!           ├─▶ merge_streams ─▶ throttle_stream ─▶ consumer
//! source B ─┘
//! ```

mod debounce;
mod ext;
mod merge;
mod throttle;

#[cfg(test)]
mod testing;

use core::task::{Context, Poll};

/// Upstream items taken by one `poll_next` before control goes back to the executor.
const DRAIN_BUDGET: usize = 32;

/// `Pending`, rescheduled right away when the upstream was still ready at the end of the
/// budget.
fn yield_pending<T>(saturated: bool, cx: &Context<'_>) -> Poll<T> {
    if saturated {
        cx.waker().wake_by_ref();
    }
    Poll::Pending
}

pub use debounce::{Debounce, debounce_stream};
pub use ext::DescriptorStreamExt;
pub use merge::{Merge, merge_streams};
pub use throttle::{Throttle, throttle_stream};

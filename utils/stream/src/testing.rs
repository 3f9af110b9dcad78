//! Helpers shared by the combinator tests.

use std::cell::Cell;
use std::convert::Infallible;
use std::rc::Rc;
use std::time::{Duration, Instant};

use futures::{Stream, StreamExt, stream};
use smol::Timer;

/// Emits each `(offset_ms, value)` once `start + offset_ms` has passed, then completes.
pub fn timed<T: 'static>(
    start: Instant,
    events: Vec<(u64, T)>,
) -> impl Stream<Item = Result<T, Infallible>> {
    stream::iter(events).then(move |(at, value)| async move {
        Timer::at(start + Duration::from_millis(at)).await;
        Ok(value)
    })
}

struct DropFlag(Rc<Cell<bool>>);

impl Drop for DropFlag {
    fn drop(&mut self) {
        self.0.set(true);
    }
}

/// Wraps a stream so the returned flag flips once the stream is dropped.
pub fn tracked<S: Stream>(inner: S) -> (impl Stream<Item = S::Item>, Rc<Cell<bool>>) {
    let flag = Rc::new(Cell::new(false));
    let guard = DropFlag(flag.clone());
    let stream = inner.map(move |item| {
        let _alive = &guard;
        item
    });
    (stream, flag)
}

//! Console output for the bridge's `tracing` events.
//!
//! Library crates only emit events. Applications that want them printed call
//! [`install`] once; the filter comes from `SPLAY_LOG` using `EnvFilter` directives
//! (`info` when unset or invalid).

use std::io::{self, Write};
use std::sync::Once;

use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::writer::MakeWriter;
use tracing_subscriber::fmt::{self, FormatEvent, FormatFields};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "SPLAY_LOG";

const TRACING_PREFIX: &str = "[splay]";
const DEFAULT_DIRECTIVES: &str = "info";

static TRACING_INSTALLED: Once = Once::new();

/// Installs the stderr subscriber (idempotent).
///
/// Does nothing beyond a warning on stderr if another global subscriber is already set.
pub fn install() {
    TRACING_INSTALLED.call_once(|| {
        let directives = std::env::var(LOG_ENV).ok();
        let console = fmt::layer()
            .event_format(LevelTargetFormatter)
            .with_writer(Prefixed {
                make: io::stderr,
                prefix: TRACING_PREFIX,
            })
            .with_ansi(false)
            .with_filter(filter(directives.as_deref()));

        if tracing_subscriber::registry().with(console).try_init().is_err() {
            eprintln!("{TRACING_PREFIX} a global tracing subscriber is already installed");
        }
    });
}

fn filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Wraps a [`MakeWriter`] so every line it receives starts with `prefix`.
#[derive(Clone)]
struct Prefixed<M> {
    make: M,
    prefix: &'static str,
}

impl<'a, M: MakeWriter<'a>> MakeWriter<'a> for Prefixed<M> {
    type Writer = LinePrefixer<M::Writer>;

    fn make_writer(&'a self) -> Self::Writer {
        LinePrefixer {
            inner: self.make.make_writer(),
            prefix: self.prefix,
            line_start: true,
        }
    }
}

struct LinePrefixer<W> {
    inner: W,
    prefix: &'static str,
    line_start: bool,
}

impl<W: Write> Write for LinePrefixer<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for line in buf.split_inclusive(|byte| *byte == b'\n') {
            if self.line_start {
                write!(self.inner, "{} ", self.prefix)?;
            }
            self.inner.write_all(line)?;
            self.line_start = line.ends_with(b"\n");
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// `LEVEL target: fields`, one event per line.
#[derive(Clone, Default)]
struct LevelTargetFormatter;

impl<S, N> FormatEvent<S, N> for LevelTargetFormatter
where
    S: tracing::Subscriber + for<'span> LookupSpan<'span>,
    N: for<'writer> FormatFields<'writer> + 'static,
{
    fn format_event(
        &self,
        ctx: &fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        write!(writer, "{} {}: ", metadata.level(), metadata.target())?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

//! Opt-in JSONL trace output (feature `trace`).
//!
//! Conversion runs are short-lived one-shot invocations, so instead of a
//! process-global fire-and-forget subscriber the initializer hands back a
//! guard; dropping it at the end of the run flushes the non-blocking writer
//! so the tail of the trace is not lost.

#[cfg(feature = "trace")]
mod enabled {
    use std::path::Path;

    use tracing_appender::non_blocking::WorkerGuard;

    /// Flushes buffered trace output when dropped.
    pub struct TraceGuard(#[allow(dead_code)] WorkerGuard);

    /// Start writing JSONL trace events to `<log_dir>/spellphone-trace.jsonl`.
    ///
    /// Returns `None` if a global subscriber is already installed. Hold the
    /// guard for the duration of the run.
    #[must_use]
    pub fn init_tracing(log_dir: &Path) -> Option<TraceGuard> {
        let appender = tracing_appender::rolling::never(log_dir, "spellphone-trace.jsonl");
        let (writer, guard) = tracing_appender::non_blocking(appender);

        tracing_subscriber::fmt()
            .json()
            .with_writer(writer)
            .with_target(true)
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("spellphone=debug")),
            )
            .try_init()
            .ok()?;
        Some(TraceGuard(guard))
    }
}

#[cfg(feature = "trace")]
pub use enabled::{init_tracing, TraceGuard};

#[cfg(not(feature = "trace"))]
#[must_use]
pub fn init_tracing(_log_dir: &std::path::Path) -> Option<()> {
    None
}

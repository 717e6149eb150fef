//! Diagnostic logging on stderr, kept apart from the variant stream on stdout.

use tracing::{subscriber::set_global_default, Subscriber};
use tracing_log::LogTracer;
use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    EnvFilter, Registry,
};

use crate::error::CliError;

/// Returns a subscriber writing human-readable events to `sink`.
/// `RUST_LOG` wins over `default_filter` when it is set.
pub fn get_subscriber<T>(default_filter: &str, sink: T) -> impl Subscriber + Send + Sync
where
    T: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let formatting_layer = fmt::layer()
        .with_writer(sink)
        .with_target(false)
        .without_time();

    Registry::default().with(env_filter).with(formatting_layer)
}

/// Installs `subscriber` globally and routes `log` records into it.
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) -> Result<(), CliError> {
    LogTracer::init().map_err(|e| CliError::Logging(format!("failed to set logger: {}", e)))?;
    set_global_default(subscriber)
        .map_err(|e| CliError::Logging(format!("failed to set subscriber: {}", e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn filter_drops_events_below_level() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let captured = Captured::default();
        let subscriber = get_subscriber("warn", captured.clone());

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("quiet");
            tracing::warn!(kept = 3, "word truncated");
        });

        let text = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(!text.contains("quiet"), "info should be filtered: {}", text);
        assert!(text.contains("word truncated"), "warn should pass: {}", text);
    }
}

#![forbid(unsafe_code)]

//! `tracing` subscriber setup.
//!
//! Browsers have no stdout and no wall clock usable by the formatter, so the
//! subscriber drops timestamps and ANSI colors and writes through whatever
//! [`MakeWriter`] the caller supplies (the console on wasm).

use folio_core::FolioError;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Build the subscriber for a filter directive such as `"info"` or
/// `"folio_core=debug"`.
pub fn build_subscriber<W>(
    directive: &str,
    make_writer: W,
) -> Result<impl tracing::Subscriber + Send + Sync + 'static, FolioError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_new(directive).map_err(|err| {
        FolioError::InvalidConfig(format!("log_level `{directive}`: {err}"))
    })?;
    Ok(tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(make_writer)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .finish())
}

/// Install the subscriber globally.
///
/// Returns `Ok(false)` when a global subscriber already exists (a second
/// `FolioWeb` on the same page); the existing one keeps receiving events.
pub fn install<W>(directive: &str, make_writer: W) -> Result<bool, FolioError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let subscriber = build_subscriber(directive, make_writer)?;
    Ok(tracing::subscriber::set_global_default(subscriber).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0
                .lock()
                .map_err(|_| io::Error::other("poisoned"))?
                .extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'w> MakeWriter<'w> for Capture {
        type Writer = Capture;

        fn make_writer(&'w self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn invalid_directive_is_a_config_error() {
        let err = build_subscriber("folio_core=loud", Capture::default()).err();
        assert!(matches!(err, Some(FolioError::InvalidConfig(_))));
    }

    #[test]
    fn lines_are_plain_and_filtered() {
        let capture = Capture::default();
        let subscriber = build_subscriber("info", capture.clone()).unwrap();
        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!("hidden");
            tracing::info!(index = 2, "navigate");
        });
        let out = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
        assert!(out.contains("INFO"), "{out}");
        assert!(out.contains("navigate index=2"), "{out}");
        assert!(!out.contains("hidden"));
        assert!(!out.contains('\u{1b}'));
    }
}

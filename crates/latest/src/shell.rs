//! Host-shell services a view talks to besides the content API.

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::watch;
use tracing::{debug, error};

use super::error::Error;

/// Declares the canonical identity of the current view to the host shell.
pub trait Canonical: Send + Sync {
    fn set(&self);
}

/// Modal spinner shown while a view is waiting on content.
pub trait LoadingOverlay: Send + Sync {
    fn show(&self);
    fn hide(&self);
}

/// Sink for failures that are swallowed rather than surfaced to the user.
pub trait ErrorReporter: Send + Sync {
    fn error(&self, err: &Error);
}

/// Canonical URL for a single page, published on a watch channel the host
/// shell can follow.
#[derive(Debug)]
pub struct PageCanonical {
    url: String,
    current: watch::Sender<Option<String>>,
}

impl PageCanonical {
    pub fn new(site_url: &str, path: &str) -> Self {
        let url = format!(
            "{}/{}",
            site_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        let (current, _) = watch::channel(None);
        Self { url, current }
    }

    pub fn url(&self) -> Option<String> {
        self.current.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<String>> {
        self.current.subscribe()
    }
}

impl Canonical for PageCanonical {
    fn set(&self) {
        debug!("Setting canonical url: {}", self.url);
        self.current.send_replace(Some(self.url.clone()));
    }
}

#[derive(Debug, Default)]
pub struct Spinner {
    visible: AtomicBool,
}

static GLOBAL_SPINNER: Spinner = Spinner::new();

impl Spinner {
    pub const fn new() -> Self {
        Self {
            visible: AtomicBool::new(false),
        }
    }

    /// The process-wide overlay.
    pub fn global() -> &'static Spinner {
        &GLOBAL_SPINNER
    }

    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }
}

impl LoadingOverlay for Spinner {
    fn show(&self) {
        debug!("Showing loading overlay");
        self.visible.store(true, Ordering::SeqCst);
    }

    fn hide(&self) {
        debug!("Hiding loading overlay");
        self.visible.store(false, Ordering::SeqCst);
    }
}

impl LoadingOverlay for &'static Spinner {
    fn show(&self) {
        (**self).show()
    }

    fn hide(&self) {
        (**self).hide()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn error(&self, err: &Error) {
        error!("{}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_canonical() {
        let canonical = PageCanonical::new("https://blog.test/", "/latest");
        let rx = canonical.subscribe();
        assert_eq!(canonical.url(), None);
        canonical.set();
        assert_eq!(canonical.url().as_deref(), Some("https://blog.test/latest"));
        assert_eq!(rx.borrow().as_deref(), Some("https://blog.test/latest"));
    }

    #[test]
    fn test_spinner() {
        let spinner = Spinner::new();
        assert!(!spinner.is_visible());
        spinner.show();
        assert!(spinner.is_visible());
        spinner.hide();
        assert!(!spinner.is_visible());
    }

    #[tracing_test::traced_test]
    #[test]
    fn test_tracing_reporter() {
        TracingReporter.error(&Error::InvalidData);
        assert!(logs_contain("error fetching posts or categories"));
    }
}

use std::time::Duration;

/// Default spacing between consecutive lookups against the public
/// geocoding service, chosen to stay below its rate limit of one
/// request per second.
pub const DEFAULT_LOOKUP_SPACING: Duration = Duration::from_millis(800);

/// Spaces consecutive requests against a rate-limited service.
///
/// Callers await [`Pacer::pace`] between consecutive requests, not
/// before the first and not after the last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacer {
    spacing: Duration,
}

impl Pacer {
    pub const fn new(spacing: Duration) -> Self {
        Self { spacing }
    }

    /// No spacing at all, e.g. for tests.
    pub const fn none() -> Self {
        Self {
            spacing: Duration::ZERO,
        }
    }

    pub const fn spacing(&self) -> Duration {
        self.spacing
    }

    pub async fn pace(&self) {
        if !self.spacing.is_zero() {
            tokio::time::sleep(self.spacing).await;
        }
    }
}

impl Default for Pacer {
    fn default() -> Self {
        Self::new(DEFAULT_LOOKUP_SPACING)
    }
}

//! Per-call cancellation and timeout context.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

/// Bounds a single gateway call.
///
/// The default context is unbounded: no timeout and no cancellation token.
/// Clones share the same token, so cancelling one cancels every call made
/// with any clone.
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    timeout: Option<Duration>,
    cancellation: Option<CancellationToken>,
}

impl CallContext {
    /// Returns the unbounded context.
    pub fn background() -> Self {
        Self::default()
    }

    /// Returns a copy of this context that gives up after `timeout`.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns a copy of this context that is cancelled together with `token`.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Returns the call timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the cancellation token, if any.
    pub fn cancellation(&self) -> Option<&CancellationToken> {
        self.cancellation.as_ref()
    }

    /// Returns `true` if the attached token has already been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_context_is_unbounded() {
        let context = CallContext::background();
        assert_eq!(context.timeout(), None);
        assert!(context.cancellation().is_none());
        assert!(!context.is_cancelled());
    }

    #[test]
    fn clones_share_cancellation() {
        let token = CancellationToken::new();
        let context = CallContext::background()
            .with_timeout(Duration::from_millis(250))
            .with_cancellation(token.clone());
        let copy = context.clone();

        token.cancel();

        assert!(context.is_cancelled());
        assert!(copy.is_cancelled());
        assert_eq!(copy.timeout(), Some(Duration::from_millis(250)));
    }
}

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

#[derive(Debug, Default)]
struct Inner {
    cancelled: AtomicBool,
    notify: Notify,
}

/// Owns the right to cancel. The host creates one per keystroke and cancels
/// it as soon as the input changes again.
#[derive(Debug, Default)]
pub struct CancellationTokenSource {
    inner: Arc<Inner>,
}

impl CancellationTokenSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(&self) -> CancellationToken {
        CancellationToken {
            inner: Some(self.inner.clone()),
        }
    }

    pub fn cancel(&self) {
        if !self.inner.cancelled.swap(true, Ordering::SeqCst) {
            self.inner.notify.notify_waiters();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::SeqCst)
    }
}

/// Read side of a [`CancellationTokenSource`]. Cloned freely into async work.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    inner: Option<Arc<Inner>>,
}

impl CancellationToken {
    /// A token that is never cancelled.
    pub fn none() -> Self {
        Self { inner: None }
    }

    pub fn is_cancellation_requested(&self) -> bool {
        self.inner
            .as_ref()
            .is_some_and(|inner| inner.cancelled.load(Ordering::SeqCst))
    }

    /// Resolves once cancellation is requested. Never resolves for
    /// [`CancellationToken::none`].
    pub async fn cancelled(&self) {
        let Some(inner) = &self.inner else {
            return std::future::pending().await;
        };
        loop {
            // Register before checking the flag so a concurrent cancel is not missed.
            let notified = inner.notify.notified();
            if inner.cancelled.load(Ordering::SeqCst) {
                return;
            }
            notified.await;
        }
    }
}

/// Error returned by collaborators that stopped early because their token fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Canceled")
    }
}

impl std::error::Error for Cancelled {}

pub fn is_cancelled_error(error: &anyhow::Error) -> bool {
    error.is::<Cancelled>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_token_observes_cancel() {
        let source = CancellationTokenSource::new();
        let token = source.token();
        assert!(!token.is_cancellation_requested());
        source.cancel();
        assert!(token.is_cancellation_requested());
        assert!(source.is_cancelled());
    }

    #[test]
    fn test_none_token_never_cancelled() {
        assert!(!CancellationToken::none().is_cancellation_requested());
    }

    #[tokio::test]
    async fn test_cancelled_future_wakes_waiter() {
        let source = CancellationTokenSource::new();
        let token = source.token();
        let waiter = tokio::spawn(async move { token.cancelled().await });
        tokio::time::sleep(Duration::from_millis(10)).await;
        source.cancel();
        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter should wake")
            .unwrap();
    }

    #[tokio::test]
    async fn test_cancelled_future_ready_when_already_cancelled() {
        let source = CancellationTokenSource::new();
        source.cancel();
        tokio::time::timeout(Duration::from_millis(100), source.token().cancelled())
            .await
            .expect("already-cancelled token resolves immediately");
    }

    #[test]
    fn test_cancelled_error_is_recognised() {
        let err: anyhow::Error = Cancelled.into();
        assert!(is_cancelled_error(&err));
        assert!(!is_cancelled_error(&anyhow::anyhow!("network down")));
    }
}

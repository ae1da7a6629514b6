use std::time::Duration;

use tokio::time::Instant;

/// Upper bound used when a requested timeout does not fit the clock.
const FAR_FUTURE: Duration = Duration::from_secs(60 * 60 * 24 * 365);

/// Deadline shared by every call of one client session.
///
/// Calls started after the deadline fail immediately; calls in flight when
/// it passes are abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallContext {
    deadline: Instant,
}

impl CallContext {
    /// Context expiring `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        let now = Instant::now();
        let deadline = now
            .checked_add(timeout)
            .unwrap_or_else(|| now + FAR_FUTURE);
        Self::with_deadline(deadline)
    }

    pub fn with_deadline(deadline: Instant) -> Self {
        Self { deadline }
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Time left before the deadline, zero once it has passed.
    pub fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.deadline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn zero_timeout_is_expired() {
        let ctx = CallContext::with_timeout(Duration::ZERO);
        assert!(ctx.is_expired());
        assert_eq!(ctx.remaining(), Duration::ZERO);
    }

    #[tokio::test]
    async fn remaining_counts_down_from_timeout() {
        let ctx = CallContext::with_timeout(Duration::from_secs(60));
        assert!(!ctx.is_expired());
        assert!(ctx.remaining() <= Duration::from_secs(60));
        assert!(ctx.remaining() > Duration::from_secs(59));
    }

    #[tokio::test]
    async fn huge_timeout_does_not_overflow() {
        let ctx = CallContext::with_timeout(Duration::MAX);
        assert!(!ctx.is_expired());
        assert!(ctx.remaining() > Duration::from_secs(60 * 60));
    }

    #[tokio::test]
    async fn past_deadline_is_expired() {
        let earlier = Instant::now();
        tokio::time::sleep(Duration::from_millis(5)).await;
        let ctx = CallContext::with_deadline(earlier);
        assert!(ctx.is_expired());
        assert_eq!(ctx.remaining(), Duration::ZERO);
    }
}

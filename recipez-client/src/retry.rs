//! Retry and timeout policies for API requests.

use std::ops::RangeInclusive;
use std::time::Duration;

/// Path fragment that marks AI generation endpoints, which are given a
/// longer timeout than the rest of the API.
const AI_PATH_MARKER: &str = "/api/ai/";

// ============================================================================
// Retry policy
// ============================================================================

/// Policy for retrying requests that fail with a server error.
///
/// Server errors (5xx) are retried up to `max_attempts` times total,
/// sleeping through `backoff` between attempts. Network-level failures
/// such as connection refused or reset get a single fast retry after
/// `network_retry_delay`, counted separately from the server-error
/// attempts. Transport timeouts are never retried.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of attempts for retryable statuses.
    pub max_attempts: u32,
    /// Delays slept between consecutive attempts. Only the first
    /// `max_attempts - 1` entries are ever consumed.
    pub backoff: Vec<Duration>,
    /// Delay before the single retry of a network failure.
    pub network_retry_delay: Duration,
    /// Status codes that trigger a retry.
    pub retryable: RangeInclusive<u16>,
}

impl RetryPolicy {
    /// Returns the delay to sleep before re-issuing the request after
    /// the given failed attempt (1-based). The last backoff entry is
    /// reused if attempts outnumber entries.
    pub fn backoff_before(&self, failed_attempt: u32) -> Duration {
        let index = (failed_attempt as usize).saturating_sub(1);
        self.backoff
            .get(index)
            .or_else(|| self.backoff.last())
            .copied()
            .unwrap_or(Duration::ZERO)
    }

    /// Returns true if the given status code should be retried.
    pub fn is_retryable_status(&self, status: u16) -> bool {
        self.retryable.contains(&status)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff: vec![
                Duration::from_secs(1),
                Duration::from_secs(2),
                Duration::from_secs(4),
            ],
            network_retry_delay: Duration::from_secs(1),
            retryable: 500..=599,
        }
    }
}

// ============================================================================
// Timeout policy
// ============================================================================

/// Per-request timeout selection.
///
/// Requests use `default` unless the path contains the AI endpoint
/// marker, in which case `elevated` applies. An explicit timeout on
/// the request itself overrides both.
#[derive(Debug, Clone)]
pub struct TimeoutPolicy {
    /// Timeout for regular endpoints.
    pub default: Duration,
    /// Timeout for AI generation endpoints.
    pub elevated: Duration,
}

impl TimeoutPolicy {
    /// Resolves the timeout for a request to the given path.
    pub fn timeout_for(&self, path: &str, explicit: Option<Duration>) -> Duration {
        if let Some(timeout) = explicit {
            return timeout;
        }
        if path.contains(AI_PATH_MARKER) {
            self.elevated
        } else {
            self.default
        }
    }
}

impl Default for TimeoutPolicy {
    fn default() -> Self {
        Self {
            default: Duration::from_secs(30),
            elevated: Duration::from_secs(120),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_backoff_schedule() {
        let policy = RetryPolicy::default();

        assert_eq!(policy.max_attempts, 3);
        assert_eq!(policy.backoff_before(1), Duration::from_secs(1));
        assert_eq!(policy.backoff_before(2), Duration::from_secs(2));
        // Third entry exists but a 3-attempt run only sleeps twice
        assert_eq!(policy.backoff_before(3), Duration::from_secs(4));
        assert_eq!(policy.network_retry_delay, Duration::from_secs(1));
    }

    #[test]
    fn test_backoff_reuses_last_entry_when_exhausted() {
        let policy = RetryPolicy {
            max_attempts: 5,
            ..RetryPolicy::default()
        };

        assert_eq!(policy.backoff_before(4), Duration::from_secs(4));
        assert_eq!(policy.backoff_before(9), Duration::from_secs(4));
    }

    #[test]
    fn test_retryable_statuses() {
        let policy = RetryPolicy::default();

        assert!(policy.is_retryable_status(500));
        assert!(policy.is_retryable_status(503));
        assert!(policy.is_retryable_status(599));
        assert!(!policy.is_retryable_status(400));
        assert!(!policy.is_retryable_status(404));
        assert!(!policy.is_retryable_status(429));
    }

    #[test]
    fn test_timeout_selection() {
        let policy = TimeoutPolicy::default();

        assert_eq!(policy.timeout_for("/api/recipe/all", None), Duration::from_secs(30));
        assert_eq!(policy.timeout_for("/api/ai/create", None), Duration::from_secs(120));
        assert_eq!(policy.timeout_for("/api/ai/modify", None), Duration::from_secs(120));
    }

    #[test]
    fn test_explicit_timeout_wins() {
        let policy = TimeoutPolicy::default();
        let explicit = Some(Duration::from_secs(5));

        assert_eq!(policy.timeout_for("/api/recipe/all", explicit), Duration::from_secs(5));
        assert_eq!(policy.timeout_for("/api/ai/create", explicit), Duration::from_secs(5));
    }
}

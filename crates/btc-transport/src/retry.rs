//! Retry budget and backoff schedule.

use std::time::Duration;

use rand::Rng;

/// Ceiling on any single backoff sleep, in seconds.
pub const BACKOFF_CAP_SECS: u64 = 10;

/// Retry policy for transient upstream failures.
///
/// The budget is `max_retries` re-attempts after the initial call. Between
/// attempts the fetcher sleeps with full jitter: uniformly random whole
/// seconds in `[0, 2^attempt)`, clamped to [`BACKOFF_CAP_SECS`]. Attempt 0
/// always computes a zero sleep (`[0, 1)` in whole seconds), so the first
/// retry fires immediately and later ones spread out.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub enabled: bool,
}

impl RetryPolicy {
    pub fn new(max_retries: u32, enabled: bool) -> Self {
        Self {
            max_retries,
            enabled,
        }
    }

    /// Retries granted after the initial attempt (zero when disabled).
    pub fn budget(&self) -> u32 {
        if self.enabled {
            self.max_retries
        } else {
            0
        }
    }

    /// Backoff sleep after the failure of attempt `attempt` (zero-based).
    pub fn backoff_delay(&self, attempt: u32, rng: &mut impl Rng) -> Duration {
        // Shift guard only matters past attempt 63; the cap clamps long
        // before that.
        let bound = 1u64 << attempt.min(32);
        let secs = rng.gen_range(0..bound).min(BACKOFF_CAP_SECS);
        Duration::from_secs(secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_first_attempt_backoff_is_always_zero() {
        let policy = RetryPolicy::new(3, true);
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            assert_eq!(policy.backoff_delay(0, &mut rng), Duration::ZERO);
        }
    }

    #[test]
    fn test_backoff_respects_exponential_bound_and_cap() {
        let policy = RetryPolicy::new(8, true);
        let mut rng = StdRng::seed_from_u64(42);
        for attempt in 0..10u32 {
            let exp_bound = 1u64 << attempt.min(32);
            for _ in 0..200 {
                let delay = policy.backoff_delay(attempt, &mut rng).as_secs();
                assert!(delay < exp_bound, "attempt {attempt}: {delay} >= {exp_bound}");
                assert!(delay <= BACKOFF_CAP_SECS);
            }
        }
    }

    #[test]
    fn test_cap_reached_at_high_attempts() {
        let policy = RetryPolicy::new(20, true);
        let mut rng = StdRng::seed_from_u64(7);
        // With a huge jitter window nearly every draw exceeds the cap, so
        // the clamp must show up quickly.
        let capped = (0..100)
            .map(|_| policy.backoff_delay(20, &mut rng).as_secs())
            .filter(|&s| s == BACKOFF_CAP_SECS)
            .count();
        assert!(capped > 0);
    }

    #[test]
    fn test_budget() {
        assert_eq!(RetryPolicy::new(3, true).budget(), 3);
        assert_eq!(RetryPolicy::new(3, false).budget(), 0);
        assert_eq!(RetryPolicy::new(0, true).budget(), 0);
    }
}

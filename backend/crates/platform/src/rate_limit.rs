//! Rate Limiting Infrastructure
//!
//! Token bucket admission control shared by request-shaping middleware.

use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use crate::clock::Clock;

/// Bucket state guarded by the mutex
struct BucketState {
    tokens: f64,
    last_refill: Instant,
}

/// Thread-safe token bucket.
///
/// The bucket starts full and refills continuously at `refill_rate`
/// tokens per second, capped at `capacity`. Acquisition takes exactly
/// one token; a rejected call leaves the state untouched, so callers
/// never pay for requests that were turned away.
pub struct TokenBucket {
    capacity: f64,
    refill_rate: f64,
    state: Mutex<BucketState>,
    clock: Arc<dyn Clock>,
}

impl TokenBucket {
    /// Create a full bucket.
    ///
    /// ## Arguments
    /// * `capacity` - Maximum burst size in requests
    /// * `refill_rate` - Sustained rate in tokens per second
    /// * `clock` - Time source (inject `MockClock` in tests)
    pub fn new(capacity: u32, refill_rate: f64, clock: Arc<dyn Clock>) -> Self {
        let now = clock.now();
        Self {
            capacity: f64::from(capacity),
            refill_rate,
            state: Mutex::new(BucketState {
                tokens: f64::from(capacity),
                last_refill: now,
            }),
            clock,
        }
    }

    /// Take one token if available. Never blocks.
    pub fn try_acquire(&self) -> bool {
        let mut state = self.state.lock().expect("token bucket mutex poisoned");
        self.refill(&mut state);
        if state.tokens >= 1.0 {
            state.tokens -= 1.0;
            true
        } else {
            false
        }
    }

    /// Tokens currently available, after applying any pending refill.
    pub fn available_tokens(&self) -> f64 {
        let mut state = self.state.lock().expect("token bucket mutex poisoned");
        self.refill(&mut state);
        state.tokens
    }

    /// Maximum burst size
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Sustained rate in tokens per second
    pub fn refill_rate(&self) -> f64 {
        self.refill_rate
    }

    /// Credit tokens for the time elapsed since the last refill.
    fn refill(&self, state: &mut BucketState) {
        let now = self.clock.now();
        let elapsed = now.duration_since(state.last_refill).as_secs_f64();
        if elapsed > 0.0 {
            state.tokens = (state.tokens + elapsed * self.refill_rate).min(self.capacity);
            state.last_refill = now;
        }
    }
}

// Arc<dyn Clock> has no Debug impl, so derive is not an option here.
impl fmt::Debug for TokenBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenBucket")
            .field("capacity", &self.capacity)
            .field("refill_rate", &self.refill_rate)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::MockClock;
    use std::time::Duration;

    fn frozen_bucket(capacity: u32, refill_rate: f64) -> (TokenBucket, MockClock) {
        let clock = MockClock::new(Instant::now());
        let bucket = TokenBucket::new(capacity, refill_rate, Arc::new(clock.clone()));
        (bucket, clock)
    }

    #[test]
    fn test_bucket_starts_full() {
        let (bucket, _clock) = frozen_bucket(5, 5.0);
        assert_eq!(bucket.available_tokens(), 5.0);
    }

    #[test]
    fn test_admits_capacity_then_rejects() {
        let (bucket, _clock) = frozen_bucket(3, 3.0);
        assert!(bucket.try_acquire());
        assert!(bucket.try_acquire());
        assert!(bucket.try_acquire());
        assert!(!bucket.try_acquire());
    }

    #[test]
    fn test_rejection_does_not_consume_tokens() {
        let (bucket, _clock) = frozen_bucket(1, 1.0);
        assert!(bucket.try_acquire());
        let before = bucket.available_tokens();
        assert!(!bucket.try_acquire());
        assert!(!bucket.try_acquire());
        assert_eq!(bucket.available_tokens(), before);
    }

    #[test]
    fn test_refill_restores_tokens() {
        let (bucket, clock) = frozen_bucket(2, 2.0);
        assert!(bucket.try_acquire());
        assert!(bucket.try_acquire());
        assert!(!bucket.try_acquire());

        // 500ms at 2 tokens/sec earns exactly one token
        clock.advance(Duration::from_millis(500));
        assert!(bucket.try_acquire());
        assert!(!bucket.try_acquire());
    }

    #[test]
    fn test_refill_is_capped_at_capacity() {
        let (bucket, clock) = frozen_bucket(4, 4.0);
        clock.advance(Duration::from_secs(3600));
        assert_eq!(bucket.available_tokens(), 4.0);
    }

    #[test]
    fn test_fractional_tokens_accumulate() {
        let (bucket, clock) = frozen_bucket(1, 2.0);
        assert!(bucket.try_acquire());

        // 250ms at 2 tokens/sec is half a token, not enough
        clock.advance(Duration::from_millis(250));
        assert!(!bucket.try_acquire());

        // Another 250ms completes the token
        clock.advance(Duration::from_millis(250));
        assert!(bucket.try_acquire());
    }

    #[test]
    fn test_concurrent_try_acquire_no_overallocation() {
        let (bucket, _clock) = frozen_bucket(50, 1.0);
        let bucket = Arc::new(bucket);

        let handles: Vec<_> = (0..100)
            .map(|_| {
                let bucket = Arc::clone(&bucket);
                std::thread::spawn(move || bucket.try_acquire())
            })
            .collect();

        let admitted = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|admitted| *admitted)
            .count();

        assert_eq!(admitted, 50);
    }
}

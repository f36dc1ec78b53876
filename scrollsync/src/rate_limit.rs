/// Rate-limiting policy for an outbound notification channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RateLimit {
    /// Quiet period that ends a burst. `0` disables rate limiting.
    pub window_ms: u64,
    /// Deliver the first call of a burst immediately.
    pub leading: bool,
}

impl RateLimit {
    pub const NONE: Self = Self {
        window_ms: 0,
        leading: false,
    };

    pub fn trailing(window_ms: u64) -> Self {
        Self {
            window_ms,
            leading: false,
        }
    }

    pub fn leading(window_ms: u64) -> Self {
        Self {
            window_ms,
            leading: true,
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.window_ms == 0
    }
}

impl Default for RateLimit {
    fn default() -> Self {
        Self::NONE
    }
}

/// A debouncer driven by caller-supplied timestamps.
///
/// Calls within `window_ms` of the previous call belong to the same burst. The pending
/// payload is always the latest one; it is delivered by [`RateLimiter::poll`] once the
/// burst has been quiet for a full window. With `leading`, the first call of a burst is
/// returned immediately and only a later call in the same burst produces a trailing
/// delivery.
#[derive(Clone, Debug)]
pub struct RateLimiter<T> {
    policy: RateLimit,
    pending: Option<T>,
    last_call_ms: Option<u64>,
}

impl<T> RateLimiter<T> {
    pub fn new(policy: RateLimit) -> Self {
        Self {
            policy,
            pending: None,
            last_call_ms: None,
        }
    }

    pub fn policy(&self) -> RateLimit {
        self.policy
    }

    pub fn set_policy(&mut self, policy: RateLimit) {
        self.policy = policy;
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Submits a payload. Returns it back when it must be delivered right away.
    pub fn call(&mut self, payload: T, now_ms: u64) -> Option<T> {
        if self.policy.is_disabled() {
            return Some(payload);
        }

        let in_burst = self
            .last_call_ms
            .is_some_and(|last| now_ms.saturating_sub(last) < self.policy.window_ms);
        self.last_call_ms = Some(now_ms);

        if !in_burst && self.policy.leading {
            self.pending = None;
            return Some(payload);
        }

        self.pending = Some(payload);
        None
    }

    /// Returns the pending payload once its burst has been quiet for a full window.
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        let last = self.last_call_ms?;
        if now_ms.saturating_sub(last) < self.policy.window_ms {
            return None;
        }
        self.pending.take()
    }

    /// Returns the pending payload regardless of timing.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// Drops the pending payload and forgets the current burst.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.last_call_ms = None;
    }
}

use std::time::{Duration, Instant};

/// A server-side idle timer, driven by the world loop's tick rather than a
/// per-session timer task (§4.3, ambient-stack note on `event_loop`-style
/// ticking).
pub fn is_idle(last_activity: Instant, now: Instant, idle_timeout: Duration) -> bool {
    now.saturating_duration_since(last_activity) >= idle_timeout
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_idle_before_timeout() {
        let now = Instant::now();
        assert!(!is_idle(now, now + Duration::from_secs(10), Duration::from_secs(30)));
    }

    #[test]
    fn idle_once_timeout_elapses() {
        let now = Instant::now();
        assert!(is_idle(now, now + Duration::from_secs(30), Duration::from_secs(30)));
        assert!(is_idle(now, now + Duration::from_secs(31), Duration::from_secs(30)));
    }
}

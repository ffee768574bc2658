use std::time::Duration;

/// Seconds a deferred client should wait before retrying, as a function of
/// its current slot. Bucketed rather than linear so that a crowded queue
/// doesn't spam reconnect attempts once slots climb into the hundreds.
pub fn retry_wait_seconds(slot: u32) -> u64 {
    match slot {
        s if s < 5 => 5,
        s if s < 10 => 10,
        s if s < 20 => 20,
        s if s < 50 => 60,
        _ => 120,
    }
}

/// How long an admission entry stays valid before a sweep drops it.
/// Adds 15s of grace on top of the retry wait for network latency.
pub fn expiry_timeout(slot: u32) -> Duration {
    Duration::from_secs(retry_wait_seconds(slot) + 15)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_match_table() {
        assert_eq!(retry_wait_seconds(0), 5);
        assert_eq!(retry_wait_seconds(4), 5);
        assert_eq!(retry_wait_seconds(5), 10);
        assert_eq!(retry_wait_seconds(9), 10);
        assert_eq!(retry_wait_seconds(10), 20);
        assert_eq!(retry_wait_seconds(19), 20);
        assert_eq!(retry_wait_seconds(20), 60);
        assert_eq!(retry_wait_seconds(49), 60);
        assert_eq!(retry_wait_seconds(50), 120);
        assert_eq!(retry_wait_seconds(1000), 120);
    }

    #[test]
    fn timeout_adds_grace() {
        assert_eq!(expiry_timeout(0), Duration::from_secs(20));
        assert_eq!(expiry_timeout(50), Duration::from_secs(135));
    }
}

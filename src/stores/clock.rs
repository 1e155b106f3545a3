use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

static LAST_TIMESTAMP: AtomicI64 = AtomicI64::new(0);

/// Current time in microseconds since the Unix epoch
///
/// Strictly increasing within the process, so records written back to back
/// still sort in write order.
pub fn now_micros() -> i64 {
    let now = Utc::now().timestamp_micros();
    let mut last = LAST_TIMESTAMP.load(Ordering::Relaxed);
    loop {
        let next = now.max(last + 1);
        match LAST_TIMESTAMP.compare_exchange_weak(last, next, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return next,
            Err(actual) => last = actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_micros_is_strictly_increasing() {
        let mut previous = now_micros();
        for _ in 0..1000 {
            let current = now_micros();
            assert!(current > previous);
            previous = current;
        }
    }

    #[test]
    fn test_now_micros_tracks_wall_clock() {
        let before = Utc::now().timestamp_micros();
        let stamp = now_micros();

        assert!(stamp >= before);
    }
}

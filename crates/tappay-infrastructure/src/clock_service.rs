//! System clock implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::time::Duration;
use tappay_core::clock::Clock;

/// Wall clock backed by `chrono` and `tokio` timers.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[async_trait]
impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_now_advances() {
        let clock = SystemClock;
        let a = clock.now();
        clock.sleep(Duration::from_millis(5)).await;
        let b = clock.now();
        assert!(b > a);
    }
}

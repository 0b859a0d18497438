//! Transient confirmation messages shown over the dashboard

use std::time::{Duration, Instant};

/// A short-lived confirmation
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self::created_at(message, duration, Instant::now())
    }

    fn created_at(message: impl Into<String>, duration: Duration, created_at: Instant) -> Self {
        Self {
            message: message.into(),
            created_at,
            duration,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expiry() {
        let start = Instant::now();
        let toast = Toast::created_at("Channel connected", Duration::from_millis(3000), start);

        assert!(!toast.is_expired(start));
        assert!(!toast.is_expired(start + Duration::from_millis(2999)));
        assert!(toast.is_expired(start + Duration::from_millis(3000)));
    }

    #[test]
    fn test_zero_duration_expires_immediately() {
        let toast = Toast::new("x", Duration::ZERO);
        assert!(toast.is_expired(Instant::now()));
    }
}

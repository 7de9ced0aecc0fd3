use std::time::{Instant, Duration};
use log::warn;

use crate::config::anti_spam::MAX_MESSAGES_PER_SECOND;

/// Tracks flood state for a single play session.
pub struct AntiSpamState {
    // Last error code sent (for suppression)
    last_error_code: Option<String>,
    // Timestamp of last reset (for per-second counters)
    last_tick: Instant,
    // Number of messages received in the current second
    messages_this_tick: u32,
    limit: u32,
}

impl AntiSpamState {
    pub fn new() -> Self {
        Self::with_limit(MAX_MESSAGES_PER_SECOND)
    }

    pub fn with_limit(limit: u32) -> Self {
        Self {
            last_error_code: None,
            last_tick: Instant::now(),
            messages_this_tick: 0,
            limit,
        }
    }

    /// Call at the start of every incoming message.
    /// Returns true if the session went over the per-second limit.
    pub fn record_message(&mut self, session: &str) -> bool {
        self.tick();
        self.messages_this_tick += 1;
        if self.messages_this_tick > self.limit {
            warn!("[AntiSpam] Session {} sent more than {} messages in a second", session, self.limit);
            return true;
        }
        false
    }

    /// Call when sending an error. Returns true if the error should be sent (not suppressed).
    pub fn should_send_error(&mut self, error_code: &str, session: &str) -> bool {
        if let Some(last) = &self.last_error_code {
            if last == error_code {
                // Suppress duplicate error
                warn!("[AntiSpam] Suppressed duplicate error '{}' for session={}", error_code, session);
                return false;
            }
        }
        self.last_error_code = Some(error_code.to_string());
        true
    }

    /// Call when a valid message was processed.
    pub fn reset_on_valid_action(&mut self) {
        self.last_error_code = None;
    }

    /// Reset per-second counters if a new second has started.
    fn tick(&mut self) {
        let now = Instant::now();
        if now.duration_since(self.last_tick) >= Duration::from_secs(1) {
            self.last_tick = now;
            self.messages_this_tick = 0;
        }
    }
}

impl Default for AntiSpamState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_error_suppressed() {
        let mut anti_spam = AntiSpamState::new();
        assert!(anti_spam.should_send_error("INVALID_MESSAGE", "s"));
        assert!(!anti_spam.should_send_error("INVALID_MESSAGE", "s"));
        assert!(anti_spam.should_send_error("FLOODING", "s"));
    }

    #[test]
    fn test_valid_action_resets_suppression() {
        let mut anti_spam = AntiSpamState::new();
        assert!(anti_spam.should_send_error("INVALID_MESSAGE", "s"));
        anti_spam.reset_on_valid_action();
        assert!(anti_spam.should_send_error("INVALID_MESSAGE", "s"));
    }

    #[test]
    fn test_flood_limit() {
        let mut anti_spam = AntiSpamState::with_limit(3);
        for _ in 0..3 {
            assert!(!anti_spam.record_message("s"));
        }
        assert!(anti_spam.record_message("s"));
    }
}

//! Transient user-visible notices.
//!
//! The entry form never reaches for a global UI context to show a
//! message. It is handed a [`Notifier`] and posts through it.

use std::time::{Duration, Instant};

/// Capability to surface a short, non-blocking message to the user.
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// Records messages in order. Handy for inspecting what a transition said.
impl Notifier for Vec<String> {
    fn notify(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

/// A message with an expiry instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub expires_at: Instant,
}

/// Single-slot notice holder: a newer notice replaces the older one.
#[derive(Debug)]
pub struct Toast {
    duration: Duration,
    current: Option<Notice>,
}

impl Toast {
    pub fn new(duration: Duration) -> Self {
        Toast {
            duration,
            current: None,
        }
    }

    /// The visible message, if any.
    pub fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|n| n.message.as_str())
    }

    /// Drop the current notice once `now` reaches its expiry.
    /// Returns true if something was cleared.
    pub fn expire(&mut self, now: Instant) -> bool {
        match &self.current {
            Some(notice) if now >= notice.expires_at => {
                self.current = None;
                true
            }
            _ => false,
        }
    }
}

impl Notifier for Toast {
    fn notify(&mut self, message: &str) {
        self.current = Some(Notice {
            message: message.to_string(),
            expires_at: Instant::now() + self.duration,
        });
    }
}

//! Transient notifications shown in the corner of the screen.

use std::time::{Duration, Instant};

/// Most toasts shown at once; older ones are dropped first.
pub const MAX_TOASTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub expires_at: Instant,
}

impl Toast {
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Toast queue with a shared display duration.
#[derive(Debug, Clone)]
pub struct Toasts {
    items: Vec<Toast>,
    duration: Duration,
}

impl Toasts {
    pub fn new(duration: Duration) -> Self {
        Self {
            items: Vec::new(),
            duration,
        }
    }

    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.push_at(kind, message, Instant::now());
    }

    pub fn push_at(&mut self, kind: ToastKind, message: impl Into<String>, now: Instant) {
        self.items.push(Toast {
            kind,
            message: message.into(),
            expires_at: now + self.duration,
        });
        if self.items.len() > MAX_TOASTS {
            let overflow = self.items.len() - MAX_TOASTS;
            self.items.drain(..overflow);
        }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Success, message);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Info, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Error, message);
    }

    /// Drop expired toasts. Returns true when anything was removed.
    pub fn prune(&mut self, now: Instant) -> bool {
        let before = self.items.len();
        self.items.retain(|t| !t.is_expired(now));
        self.items.len() != before
    }

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_expire() {
        let mut toasts = Toasts::new(Duration::from_millis(100));
        let now = Instant::now();
        toasts.push_at(ToastKind::Info, "hello", now);

        assert!(!toasts.prune(now + Duration::from_millis(50)));
        assert_eq!(toasts.len(), 1);

        assert!(toasts.prune(now + Duration::from_millis(100)));
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_queue_is_capped() {
        let mut toasts = Toasts::new(Duration::from_secs(5));
        for i in 0..5 {
            toasts.info(format!("toast {i}"));
        }
        assert_eq!(toasts.len(), MAX_TOASTS);
        assert_eq!(toasts.iter().next().map(|t| t.message.as_str()), Some("toast 2"));
        assert_eq!(toasts.latest().map(|t| t.message.as_str()), Some("toast 4"));
    }
}

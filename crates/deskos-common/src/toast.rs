use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Severity of a transient shell message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Error,
}

/// A transient message rendered by the shell above the taskbar.
#[derive(Debug, Clone)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
    created_at: Instant,
    ttl: Duration,
}

impl Toast {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Info,
            message: message.into(),
            created_at: Instant::now(),
            ttl: Duration::from_secs(4),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Error,
            message: message.into(),
            created_at: Instant::now(),
            ttl: Duration::from_secs(8),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }

    #[cfg(test)]
    fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

/// Bounded queue of toasts. Expired entries are dropped on access; when full,
/// the oldest entry gives way.
#[derive(Debug, Default)]
pub struct ToastQueue {
    items: VecDeque<Toast>,
    capacity: usize,
}

impl ToastQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, toast: Toast) {
        self.items.retain(|t| !t.is_expired());
        if self.items.len() >= self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(toast);
    }

    pub fn visible(&mut self) -> Vec<&Toast> {
        self.items.retain(|t| !t.is_expired());
        self.items.iter().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.items.iter().all(|t| t.is_expired())
    }
}

// ABOUTME: Transient user-facing notices with a fixed time-to-live
// ABOUTME: Expired notices are pruned when the queue is read
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smoothie Lab Contributors

use std::collections::VecDeque;
use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::constants::timing::DEFAULT_NOTIFICATION_TTL_MS;

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    /// An action completed
    Success,
    /// An action was rejected
    Error,
    /// Neutral status update
    Info,
}

impl fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
            Self::Info => write!(f, "info"),
        }
    }
}

/// A single notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Severity
    pub level: NotificationLevel,
    /// Text shown to the user
    pub message: String,
    /// When the notice was raised
    pub created_at: Instant,
    /// How long the notice stays visible
    pub ttl: Duration,
}

impl Notification {
    /// Whether the notice should no longer be shown at `now`
    #[must_use]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.ttl
    }
}

/// FIFO queue of notices
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    ttl: Duration,
    queue: VecDeque<Notification>,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_NOTIFICATION_TTL_MS))
    }
}

impl NotificationCenter {
    /// Queue whose notices live for `ttl`
    #[must_use]
    pub const fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            queue: VecDeque::new(),
        }
    }

    /// Time-to-live applied to new notices
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Raise a notice
    pub fn push(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.queue.push_back(Notification {
            level,
            message: message.into(),
            created_at: Instant::now(),
            ttl: self.ttl,
        });
    }

    /// Raise a success notice
    pub fn success(&mut self, message: impl Into<String>) {
        self.push(NotificationLevel::Success, message);
    }

    /// Raise an error notice
    pub fn error(&mut self, message: impl Into<String>) {
        self.push(NotificationLevel::Error, message);
    }

    /// Raise an informational notice
    pub fn info(&mut self, message: impl Into<String>) {
        self.push(NotificationLevel::Info, message);
    }

    /// Drop notices expired at `now`, returning how many were dismissed
    pub fn dismiss_expired(&mut self, now: Instant) -> usize {
        let before = self.queue.len();
        self.queue.retain(|notice| !notice.is_expired_at(now));
        before - self.queue.len()
    }

    /// Notices still visible at `now`, oldest first
    pub fn active_at(&mut self, now: Instant) -> impl Iterator<Item = &Notification> {
        self.dismiss_expired(now);
        self.queue.iter()
    }

    /// Take every unexpired notice, leaving the queue empty
    pub fn drain(&mut self) -> Vec<Notification> {
        self.dismiss_expired(Instant::now());
        self.queue.drain(..).collect()
    }

    /// Number of queued notices, expired or not
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether the queue is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

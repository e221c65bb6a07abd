//! Transient toast notifications.
//!
//! DESIGN
//! ======
//! Only the newest notice is shown. Each push bumps a sequence number so a
//! dismissal timer scheduled for an older notice cannot close a newer one.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use crate::error::AppError;

/// How long a notice stays on screen.
pub const NOTICE_TIMEOUT_MS: u64 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
    pub seq: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    pub current: Option<Notice>,
    seq: u64,
}

impl NoticeState {
    /// Show a notice, replacing any current one. Returns its sequence number.
    pub fn push(&mut self, kind: NoticeKind, title: impl Into<String>, message: impl Into<String>) -> u64 {
        self.seq += 1;
        self.current = Some(Notice { kind, title: title.into(), message: message.into(), seq: self.seq });
        self.seq
    }

    pub fn success(&mut self, title: impl Into<String>, message: impl Into<String>) -> u64 {
        self.push(NoticeKind::Success, title, message)
    }

    /// Error notice for a failed action; `fallback` is used when the error
    /// carries no user-facing text.
    pub fn error(&mut self, error: &AppError, fallback: &str) -> u64 {
        self.push(NoticeKind::Error, "Error!", error.user_message(fallback))
    }

    /// Dismiss the notice with `seq`; stale sequence numbers are ignored.
    pub fn dismiss(&mut self, seq: u64) {
        if self.current.as_ref().is_some_and(|notice| notice.seq == seq) {
            self.current = None;
        }
    }
}

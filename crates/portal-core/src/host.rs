//! Host-environment seams: the rendering surface and the history mechanism.
//!
//! The navigator is written against these two traits so the same state
//! machine drives the egui desk frontend, the ratatui terminal frontend, and
//! the in-memory fakes the test suites use.

use thiserror::Error;

use crate::view::ViewTree;

/// Requested motion for the post-transition scroll reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMotion {
    Smooth,
    Instant,
}

/// The surface declined the requested scroll motion.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("scroll motion not supported by this surface")]
pub struct ScrollUnsupported;

/// Mutable rendering target fully owned by the navigator.
///
/// Every mount replaces the previous content wholesale; no other collaborator
/// may write to it.
pub trait Surface {
    fn mount(&mut self, view: ViewTree);

    /// Scroll the view back to the top. Declining a motion is not an error
    /// condition for the caller; the navigator falls back to
    /// [`ScrollMotion::Instant`] on its own.
    fn scroll_to_top(&mut self, motion: ScrollMotion) -> Result<(), ScrollUnsupported>;
}

/// Host navigation history as consumed by the navigator.
///
/// Contract: a token pushed here must be recovered exactly when the host
/// returns to that entry and reports the change.
pub trait HistoryHost {
    /// Token of the entry current at startup, if any. Adopted, never pushed.
    fn initial_token(&self) -> Option<String>;

    /// Append an entry tagged with `token`. `address` is the display address
    /// associated with the entry (`#id` hash form); hosts without an address
    /// bar ignore it.
    fn push(&mut self, token: &str, address: &str);
}

/// In-memory back/forward log for hosts without a native history stack.
///
/// Entry 0 is the adopted startup entry; pushing from the middle of the log
/// truncates the forward tail, matching browser history semantics.
#[derive(Debug, Clone)]
pub struct SessionHistory {
    entries: Vec<String>,
    cursor: usize,
    initial: Option<String>,
    pushes: usize,
}

impl SessionHistory {
    /// Log with no startup token; the adopted entry resolves home.
    pub fn new() -> Self {
        Self {
            entries: vec!["home".to_string()],
            cursor: 0,
            initial: None,
            pushes: 0,
        }
    }

    /// Log whose startup entry carries `token` (deep-link startup).
    pub fn with_initial(token: impl Into<String>) -> Self {
        let token = token.into();
        Self {
            entries: vec![token.clone()],
            cursor: 0,
            initial: Some(token),
            pushes: 0,
        }
    }

    /// Step back one entry and return the token now current.
    pub fn back(&mut self) -> Option<String> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.entries[self.cursor].clone())
    }

    /// Step forward one entry and return the token now current.
    pub fn forward(&mut self) -> Option<String> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.entries[self.cursor].clone())
    }

    pub fn can_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Token of the current entry.
    pub fn current(&self) -> &str {
        &self.entries[self.cursor]
    }

    /// Number of entries pushed since construction (adoption not counted).
    pub fn pushes(&self) -> usize {
        self.pushes
    }
}

impl Default for SessionHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryHost for SessionHistory {
    fn initial_token(&self) -> Option<String> {
        self.initial.clone()
    }

    fn push(&mut self, token: &str, _address: &str) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(token.to_string());
        self.cursor = self.entries.len() - 1;
        self.pushes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_then_back_recovers_exact_token() {
        let mut log = SessionHistory::new();
        log.push("jenkins", "#jenkins");
        log.push("vault", "#vault");
        assert_eq!(log.back().as_deref(), Some("jenkins"));
        assert_eq!(log.back().as_deref(), Some("home"));
        assert_eq!(log.back(), None);
        assert_eq!(log.forward().as_deref(), Some("jenkins"));
    }

    #[test]
    fn push_truncates_forward_tail() {
        let mut log = SessionHistory::new();
        log.push("jenkins", "#jenkins");
        log.push("vault", "#vault");
        log.back();
        log.push("grafana", "#grafana");
        assert!(!log.can_forward());
        assert_eq!(log.current(), "grafana");
        assert_eq!(log.back().as_deref(), Some("jenkins"));
    }

    #[test]
    fn initial_token_is_adopted_not_pushed() {
        let log = SessionHistory::with_initial("vault");
        assert_eq!(log.initial_token().as_deref(), Some("vault"));
        assert_eq!(log.pushes(), 0);
        assert_eq!(log.current(), "vault");
    }
}

//! Transient user-facing notices.
//!
//! At most one notice is visible; posting replaces the current one. Each
//! notice expires on its own timer, and an expiry for a notice that has
//! already been replaced is ignored.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeBoard {
    current: Option<Notice>,
    next_id: u64,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// Show `message`, replacing whatever is visible. Returns the id to
    /// expire later.
    pub fn post(&mut self, severity: Severity, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.current = Some(Notice {
            id: self.next_id,
            severity,
            message: message.into(),
        });
        self.next_id
    }

    /// Remove notice `id` if it is still the visible one.
    pub fn expire(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_replaces_instead_of_stacking() {
        let mut board = NoticeBoard::new();
        board.post(Severity::Error, "first");
        board.post(Severity::Error, "second");
        assert_eq!(board.current().unwrap().message, "second");
    }

    #[test]
    fn expiry_of_replaced_notice_is_ignored() {
        let mut board = NoticeBoard::new();
        let old = board.post(Severity::Error, "server down");
        let new = board.post(Severity::Info, "No results found. Please try a different search term.");

        assert!(!board.expire(old), "old timer must not remove the new notice");
        assert!(board.current().is_some());
        assert!(board.expire(new));
        assert!(board.current().is_none());
    }

    #[test]
    fn dismiss_clears_visible_notice() {
        let mut board = NoticeBoard::new();
        board.post(Severity::Error, "Coordinates out of range.");
        board.dismiss();
        assert_eq!(board.current(), None);
    }
}

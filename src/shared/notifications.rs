//! User-visible notices
//!
//! A bounded queue of success/failure messages rendered as toasts. Pushing
//! is fire-and-forget from the caller's perspective; rendering and
//! auto-dismissal live in the view layer.

use uuid::Uuid;

use crate::shared::constants::MAX_NOTICES;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: Uuid,
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Notices {
    items: Vec<Notice>,
}

impl Notices {
    pub fn new() -> Self {
        Notices::default()
    }

    pub fn push_success(&mut self, message: impl Into<String>) -> Uuid {
        self.push(NoticeKind::Success, message.into())
    }

    pub fn push_failure(&mut self, message: impl Into<String>) -> Uuid {
        self.push(NoticeKind::Failure, message.into())
    }

    fn push(&mut self, kind: NoticeKind, message: String) -> Uuid {
        let id = Uuid::new_v4();
        self.items.push(Notice { id, kind, message });
        if self.items.len() > MAX_NOTICES {
            let overflow = self.items.len() - MAX_NOTICES;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: Uuid) {
        self.items.retain(|notice| notice.id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.items.iter()
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
    fn test_push_records_one_notice_each() {
        let mut notices = Notices::new();
        notices.push_success("saved");
        assert_eq!(notices.len(), 1);

        notices.push_failure("broken");
        assert_eq!(notices.len(), 2);

        let kinds: Vec<NoticeKind> = notices.iter().map(|n| n.kind).collect();
        assert_eq!(kinds, vec![NoticeKind::Success, NoticeKind::Failure]);
    }

    #[test]
    fn test_dismiss_removes_only_the_target() {
        let mut notices = Notices::new();
        let first = notices.push_success("one");
        let second = notices.push_success("two");

        notices.dismiss(first);
        assert_eq!(notices.len(), 1);
        assert_eq!(notices.iter().next().map(|n| n.id), Some(second));

        // Dismissing an unknown id is a no-op.
        notices.dismiss(first);
        assert_eq!(notices.len(), 1);
    }

    #[test]
    fn test_queue_is_bounded_dropping_oldest() {
        let mut notices = Notices::new();
        for i in 0..(MAX_NOTICES + 2) {
            notices.push_success(format!("notice {i}"));
        }
        assert_eq!(notices.len(), MAX_NOTICES);
        assert_eq!(notices.iter().next().map(|n| n.message.as_str()), Some("notice 2"));
    }
}

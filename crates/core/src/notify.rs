//! Toast notifications — a small queue the display surfaces render and expire.
//!
//! The center only stores and orders toasts; timers live with whatever surface
//! shows them. [`AUTO_DISMISS`] is the one canonical lifetime so every surface
//! expires toasts at the same pace.

use std::time::Duration;

/// How long a toast stays up unless dismissed by hand.
pub const AUTO_DISMISS: Duration = Duration::from_secs(5);

/// Visual flavor of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// One queued toast. The `id` is unique within a center for the life of the
/// process and is what dismissal keys on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

/// Ordered toast queue, oldest first.
#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    items: Vec<Notification>,
    next_id: u64,
}

impl NotificationCenter {
    pub fn new() -> NotificationCenter {
        NotificationCenter::default()
    }

    /// Queue a toast and return its id for later dismissal.
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notification { id, kind, message: message.into() });
        id
    }

    /// Remove the toast with `id`. Returns false when it already expired.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_increasing_ids() {
        let mut center = NotificationCenter::new();
        let a = center.push(NotificationKind::Success, "first");
        let b = center.push(NotificationKind::Error, "second");
        assert!(b > a);
        assert_eq!(center.items().len(), 2);
    }

    #[test]
    fn items_stay_in_arrival_order() {
        let mut center = NotificationCenter::new();
        center.push(NotificationKind::Success, "first");
        center.push(NotificationKind::Success, "second");
        let messages: Vec<&str> = center.items().iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let mut center = NotificationCenter::new();
        let a = center.push(NotificationKind::Success, "keep me out");
        center.push(NotificationKind::Error, "still here");

        assert!(center.dismiss(a));
        assert_eq!(center.items().len(), 1);
        assert_eq!(center.items()[0].message, "still here");
    }

    #[test]
    fn dismissing_an_expired_id_is_a_no_op() {
        let mut center = NotificationCenter::new();
        let a = center.push(NotificationKind::Success, "toast");
        assert!(center.dismiss(a));
        assert!(!center.dismiss(a));
        assert!(center.is_empty());
    }

    #[test]
    fn ids_never_recycle_after_dismissal() {
        let mut center = NotificationCenter::new();
        let a = center.push(NotificationKind::Success, "one");
        center.dismiss(a);
        let b = center.push(NotificationKind::Success, "two");
        assert_ne!(a, b);
    }
}

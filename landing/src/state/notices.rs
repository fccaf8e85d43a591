//! Bounded queue of toast notices shown after a form goes through.

use std::collections::VecDeque;

pub type NoticeId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: NoticeId,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeQueue {
    items: VecDeque<Notice>,
    limit: usize,
    next_id: NoticeId,
}

impl NoticeQueue {
    /// A limit of zero is bumped to one so a push is never silently dropped.
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            items: VecDeque::with_capacity(limit),
            limit,
            next_id: 1,
        }
    }

    /// Adds a notice, evicting the oldest one when the queue is full.
    pub fn push(&mut self, title: &'static str, description: &'static str) -> NoticeId {
        let id = self.next_id;
        self.next_id += 1;
        while self.items.len() >= self.limit {
            if let Some(evicted) = self.items.pop_front() {
                tracing::debug!(id = evicted.id, "notice evicted");
            }
        }
        self.items.push_back(Notice {
            id,
            title,
            description,
        });
        id
    }

    /// Unknown ids are ignored; the auto-dismiss timer may fire after a manual close.
    pub fn dismiss(&mut self, id: NoticeId) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        before != self.items.len()
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
    use pretty_assertions::assert_eq;

    #[test]
    fn ids_are_monotonic() {
        let mut q = NoticeQueue::new(3);
        let a = q.push("a", "");
        let b = q.push("b", "");
        assert!(b > a);
        q.dismiss(b);
        let c = q.push("c", "");
        assert!(c > b);
    }

    #[test]
    fn evicts_oldest_when_full() {
        let mut q = NoticeQueue::new(2);
        q.push("first", "");
        q.push("second", "");
        q.push("third", "");
        let titles: Vec<_> = q.iter().map(|n| n.title).collect();
        assert_eq!(titles, vec!["second", "third"]);
    }

    #[test]
    fn dismiss_unknown_is_noop() {
        let mut q = NoticeQueue::new(3);
        let id = q.push("hello", "world");
        assert!(!q.dismiss(id + 10));
        assert_eq!(q.len(), 1);
        assert!(q.dismiss(id));
        assert!(q.is_empty());
        assert!(!q.dismiss(id));
    }

    #[test]
    fn zero_limit_still_keeps_latest() {
        let mut q = NoticeQueue::new(0);
        q.push("one", "");
        q.push("two", "");
        assert_eq!(q.len(), 1);
        assert_eq!(q.iter().next().map(|n| n.title), Some("two"));
    }
}

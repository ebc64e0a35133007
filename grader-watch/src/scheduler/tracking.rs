//! Tracking set

use grader_core::domain::submission::SubmissionId;

/// Ordered ids of the submissions still being polled
///
/// Filled once when the poller initializes; afterwards it only shrinks.
#[derive(Debug, Clone, Default)]
pub struct TrackingSet {
    ids: Vec<SubmissionId>,
}

impl TrackingSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub(super) fn push(&mut self, id: SubmissionId) {
        self.ids.push(id);
    }

    /// Removes the first id whose declared form equals `raw`
    pub fn remove_first(&mut self, raw: &str) -> bool {
        match self.ids.iter().position(|id| id.as_str() == raw) {
            Some(index) => {
                self.ids.remove(index);
                true
            }
            None => false,
        }
    }

    /// Drops every id; returns how many were dropped
    pub fn clear(&mut self) -> usize {
        let dropped = self.ids.len();
        self.ids.clear();
        dropped
    }

    pub fn ids(&self) -> &[SubmissionId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ids: &[&str]) -> TrackingSet {
        let mut set = TrackingSet::new();
        for id in ids {
            set.push(SubmissionId::parse(id).unwrap());
        }
        set
    }

    #[test]
    fn test_remove_first_match_only() {
        let mut set = set(&["a:1", "b:2", "a:1"]);
        assert!(set.remove_first("a:1"));
        assert_eq!(set.len(), 2);
        assert_eq!(set.ids()[0].as_str(), "b:2");
        assert_eq!(set.ids()[1].as_str(), "a:1");
    }

    #[test]
    fn test_remove_matches_declared_form() {
        let mut set = set(&["a:1"]);
        assert!(!set.remove_first("a"));
        assert!(set.remove_first("a:1"));
        assert!(!set.remove_first("a:1"));
        assert!(set.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut set = set(&["a", "b"]);
        assert_eq!(set.clear(), 2);
        assert!(set.is_empty());
    }
}

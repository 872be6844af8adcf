//! View coordinates
//!
//! A view coordinate decides which stamps a reader can see. It is how
//! concurrent work on different paths and modules coexists in one
//! chronicle: each reader picks the slice of history it cares about.

use super::{Stamp, Timestamp};
use crate::types::{Nid, Status};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Stamp filter used by `latest_version`
///
/// Every restriction set is optional; `None` accepts any value. Staged
/// stamps are never visible through a view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewCoordinate {
    /// Latest time (inclusive) a visible stamp may carry
    pub as_of: Timestamp,
    /// Visible paths
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paths: Option<BTreeSet<Nid>>,
    /// Visible modules
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modules: Option<BTreeSet<Nid>>,
    /// Visible authors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<BTreeSet<Nid>>,
    /// Visible statuses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statuses: Option<BTreeSet<Status>>,
}

impl ViewCoordinate {
    /// View accepting every committed stamp
    pub fn latest() -> Self {
        ViewCoordinate {
            as_of: Timestamp::from_micros(u64::MAX - 1),
            paths: None,
            modules: None,
            authors: None,
            statuses: None,
        }
    }

    /// Restrict to stamps at or before `time`
    pub fn as_of(mut self, time: Timestamp) -> Self {
        self.as_of = time;
        self
    }

    /// Add `path` to the visible paths
    pub fn on_path(mut self, path: Nid) -> Self {
        self.paths.get_or_insert_with(BTreeSet::new).insert(path);
        self
    }

    /// Add `module` to the visible modules
    pub fn in_module(mut self, module: Nid) -> Self {
        self.modules.get_or_insert_with(BTreeSet::new).insert(module);
        self
    }

    /// Add `author` to the visible authors
    pub fn by_author(mut self, author: Nid) -> Self {
        self.authors.get_or_insert_with(BTreeSet::new).insert(author);
        self
    }

    /// Add `status` to the visible statuses
    pub fn with_status(mut self, status: Status) -> Self {
        self.statuses.get_or_insert_with(BTreeSet::new).insert(status);
        self
    }

    /// Whether `stamp` is visible in this view
    pub fn accepts(&self, stamp: &Stamp) -> bool {
        fn allowed<T: Ord>(set: &Option<BTreeSet<T>>, value: &T) -> bool {
            set.as_ref().map_or(true, |s| s.contains(value))
        }

        !stamp.is_uncommitted()
            && stamp.time <= self.as_of
            && allowed(&self.paths, &stamp.path)
            && allowed(&self.modules, &stamp.module)
            && allowed(&self.authors, &stamp.author)
            && allowed(&self.statuses, &stamp.status)
    }
}

impl Default for ViewCoordinate {
    fn default() -> Self {
        ViewCoordinate::latest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stamp(time: u64, path: u64) -> Stamp {
        Stamp::new(
            Status::Active,
            Timestamp::from_micros(time),
            Nid::new(5),
            Nid::new(6),
            Nid::new(path),
        )
    }

    #[test]
    fn test_latest_accepts_committed_only() {
        let view = ViewCoordinate::latest();
        assert!(view.accepts(&stamp(100, 1)));
        assert!(!view.accepts(&stamp(100, 1).with_time(Timestamp::UNCOMMITTED)));
    }

    #[test]
    fn test_as_of_is_inclusive() {
        let view = ViewCoordinate::latest().as_of(Timestamp::from_micros(100));
        assert!(view.accepts(&stamp(100, 1)));
        assert!(!view.accepts(&stamp(101, 1)));
    }

    #[test]
    fn test_path_restriction() {
        let view = ViewCoordinate::latest().on_path(Nid::new(2));
        assert!(view.accepts(&stamp(100, 2)));
        assert!(!view.accepts(&stamp(100, 1)));
    }

    #[test]
    fn test_status_restriction() {
        let view = ViewCoordinate::latest().with_status(Status::Active);
        assert!(view.accepts(&stamp(100, 1)));
        assert!(!view.accepts(&stamp(100, 1).with_status(Status::Inactive)));
    }

    #[test]
    fn test_module_and_author_restrictions() {
        let view = ViewCoordinate::latest().in_module(Nid::new(6)).by_author(Nid::new(9));
        assert!(!view.accepts(&stamp(100, 1)));
        assert!(view.accepts(&stamp(100, 1).with_author(Nid::new(9))));
    }
}

//! Stamp coordinate
//!
//! A stamp is the `(status, time, author, module, path)` tuple attached to
//! every version. It says what state the component was put in, when, by whom,
//! in which module and on which development path.
//!
//! ## Ordering
//!
//! Stamps order by `time` first. Equal times are broken by path, module,
//! author and finally status so that concurrent edits from different editors
//! always linearize the same way.

use super::Timestamp;
use crate::types::{Nid, Status};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Immutable version coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stamp {
    /// Status the version puts the component in
    pub status: Status,
    /// Commit time, or `Timestamp::UNCOMMITTED` while staged
    pub time: Timestamp,
    /// Editor that made the change
    pub author: Nid,
    /// Module the change belongs to
    pub module: Nid,
    /// Development path the change was made on
    pub path: Nid,
}

impl Stamp {
    /// Create a stamp
    pub const fn new(status: Status, time: Timestamp, author: Nid, module: Nid, path: Nid) -> Self {
        Stamp {
            status,
            time,
            author,
            module,
            path,
        }
    }

    /// Create an uncommitted stamp for staging an edit
    pub const fn uncommitted(status: Status, author: Nid, module: Nid, path: Nid) -> Self {
        Stamp::new(status, Timestamp::UNCOMMITTED, author, module, path)
    }

    /// Whether the stamp still carries the uncommitted sentinel
    #[inline]
    pub const fn is_uncommitted(&self) -> bool {
        self.time.is_uncommitted()
    }

    /// Copy of this stamp with a different time
    pub const fn with_time(mut self, time: Timestamp) -> Self {
        self.time = time;
        self
    }

    /// Copy of this stamp with a different status
    pub const fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Copy of this stamp with a different author
    pub const fn with_author(mut self, author: Nid) -> Self {
        self.author = author;
        self
    }

    /// Copy of this stamp with a different module
    pub const fn with_module(mut self, module: Nid) -> Self {
        self.module = module;
        self
    }

    /// Copy of this stamp with a different path
    pub const fn with_path(mut self, path: Nid) -> Self {
        self.path = path;
        self
    }
}

impl PartialOrd for Stamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Stamp {
    fn cmp(&self, other: &Self) -> Ordering {
        self.time
            .cmp(&other.time)
            .then_with(|| self.path.cmp(&other.path))
            .then_with(|| self.module.cmp(&other.module))
            .then_with(|| self.author.cmp(&other.author))
            .then_with(|| self.status.cmp(&other.status))
    }
}

impl fmt::Display for Stamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{} author={} module={} path={}",
            self.status, self.time, self.author, self.module, self.path
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stamp(time: u64, author: u64, path: u64) -> Stamp {
        Stamp::new(
            Status::Active,
            Timestamp::from_micros(time),
            Nid::new(author),
            Nid::new(1),
            Nid::new(path),
        )
    }

    #[test]
    fn test_orders_by_time_first() {
        assert!(stamp(100, 9, 9) < stamp(200, 1, 1));
    }

    #[test]
    fn test_equal_time_tie_break_is_total() {
        let a = stamp(100, 1, 2);
        let b = stamp(100, 2, 1);
        // path compares before author
        assert!(b < a);
        assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
    }

    #[test]
    fn test_uncommitted_sorts_after_committed() {
        let pending = Stamp::uncommitted(Status::Active, Nid::new(1), Nid::new(1), Nid::new(1));
        assert!(pending.is_uncommitted());
        assert!(stamp(u64::MAX - 1, 1, 1) < pending);
    }

    #[test]
    fn test_with_methods_copy() {
        let base = stamp(100, 1, 1);
        let moved = base
            .with_time(Timestamp::from_micros(300))
            .with_status(Status::Inactive);
        assert_eq!(base.time, Timestamp::from_micros(100));
        assert_eq!(moved.time, Timestamp::from_micros(300));
        assert_eq!(moved.status, Status::Inactive);
        assert_eq!(moved.author, base.author);
    }

    #[test]
    fn test_sort_is_stable_for_equal_times() {
        let mut stamps = vec![stamp(100, 3, 1), stamp(100, 1, 1), stamp(50, 2, 1)];
        stamps.sort();
        let authors: Vec<_> = stamps.iter().map(|s| s.author.as_u64()).collect();
        assert_eq!(authors, vec![2, 1, 3]);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn any_stamp() -> impl Strategy<Value = Stamp> {
            (0u64..4, 0u64..1_000, 1u64..4, 1u64..4, 1u64..4).prop_map(
                |(status, time, author, module, path)| {
                    let status = match status {
                        0 => Status::Active,
                        1 => Status::Inactive,
                        _ => Status::Retired,
                    };
                    Stamp::new(
                        status,
                        Timestamp::from_micros(time),
                        Nid::new(author),
                        Nid::new(module),
                        Nid::new(path),
                    )
                },
            )
        }

        proptest! {
            #[test]
            fn ordering_agrees_with_equality(a in any_stamp(), b in any_stamp()) {
                prop_assert_eq!(a.cmp(&b) == std::cmp::Ordering::Equal, a == b);
                prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
            }

            #[test]
            fn earlier_time_always_sorts_first(a in any_stamp(), b in any_stamp()) {
                if a.time < b.time {
                    prop_assert!(a < b);
                }
            }
        }
    }
}

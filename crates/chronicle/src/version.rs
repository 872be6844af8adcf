//! Versions and version histories
//!
//! A [`Version`] is one immutable snapshot of a component. A
//! [`VersionHistory`] is a read-only snapshot of a chronicle's committed
//! versions, oldest first. Holding a history never blocks commits: the
//! chronicle copies on write when a snapshot is still alive.

use crate::validation::Candidate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::ops::Index;
use std::sync::Arc;
use termstore_core::{IdAlias, Nid, Payload, Stamp, Status, Timestamp, ViewCoordinate};

/// Immutable snapshot of a component at one stamp
///
/// Versions are only created by committing an analog and are never
/// modified afterwards. A newer version supersedes an older one by being
/// appended after it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Version<P> {
    nid: Nid,
    stamp: Stamp,
    aliases: BTreeSet<IdAlias>,
    payload: P,
}

impl<P: Payload> Version<P> {
    pub(crate) fn new(nid: Nid, stamp: Stamp, aliases: BTreeSet<IdAlias>, payload: P) -> Self {
        Version {
            nid,
            stamp,
            aliases,
            payload,
        }
    }

    pub(crate) fn restamped(&self, time: Timestamp) -> Self {
        Version {
            stamp: self.stamp.with_time(time),
            ..self.clone()
        }
    }

    pub(crate) fn candidate(&self) -> Candidate<'_> {
        Candidate {
            nid: self.nid,
            stamp: &self.stamp,
            aliases: &self.aliases,
            payload: self.payload.payload_ref(),
        }
    }

    /// Identity of the component
    #[inline]
    pub fn nid(&self) -> Nid {
        self.nid
    }

    /// Stamp the version was committed with
    #[inline]
    pub fn stamp(&self) -> &Stamp {
        &self.stamp
    }

    /// Commit time
    #[inline]
    pub fn time(&self) -> Timestamp {
        self.stamp.time
    }

    /// Status
    #[inline]
    pub fn status(&self) -> Status {
        self.stamp.status
    }

    /// Whether the version leaves the component active
    #[inline]
    pub fn is_active(&self) -> bool {
        self.stamp.status.is_active()
    }

    /// Identifier aliases known at this version
    pub fn aliases(&self) -> &BTreeSet<IdAlias> {
        &self.aliases
    }

    /// Kind-specific content
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Consume and return the payload
    pub fn into_payload(self) -> P {
        self.payload
    }
}

/// Read-only snapshot of committed history, oldest first
#[derive(Debug, Clone)]
pub struct VersionHistory<P> {
    versions: Arc<Vec<Version<P>>>,
}

impl<P: Payload> VersionHistory<P> {
    pub(crate) fn new(versions: Arc<Vec<Version<P>>>) -> Self {
        VersionHistory { versions }
    }

    /// Number of versions in the snapshot
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    /// Whether the snapshot holds no versions
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Newest version in the snapshot
    pub fn latest(&self) -> Option<&Version<P>> {
        self.versions.last()
    }

    /// Oldest version in the snapshot
    pub fn first(&self) -> Option<&Version<P>> {
        self.versions.first()
    }

    /// Version at `index` (0 = oldest)
    pub fn get(&self, index: usize) -> Option<&Version<P>> {
        self.versions.get(index)
    }

    /// All versions, oldest first
    pub fn versions(&self) -> &[Version<P>] {
        &self.versions
    }

    /// Iterate oldest first
    pub fn iter(&self) -> std::slice::Iter<'_, Version<P>> {
        self.versions.iter()
    }

    /// Versions visible through `view`, oldest first
    pub fn visible<'a>(
        &'a self,
        view: &'a ViewCoordinate,
    ) -> impl Iterator<Item = &'a Version<P>> + 'a {
        self.versions.iter().filter(move |v| view.accepts(v.stamp()))
    }
}

impl<P> Index<usize> for VersionHistory<P> {
    type Output = Version<P>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.versions[index]
    }
}

impl<'a, P: Payload> IntoIterator for &'a VersionHistory<P> {
    type Item = &'a Version<P>;
    type IntoIter = std::slice::Iter<'a, Version<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.versions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termstore_core::ConceptPayload;

    fn version(time: u64, path: u64) -> Version<ConceptPayload> {
        Version::new(
            Nid::new(1),
            Stamp::new(
                Status::Active,
                Timestamp::from_micros(time),
                Nid::new(2),
                Nid::new(3),
                Nid::new(path),
            ),
            BTreeSet::new(),
            ConceptPayload::default(),
        )
    }

    #[test]
    fn test_history_accessors() {
        let history = VersionHistory::new(Arc::new(vec![version(100, 1), version(200, 1)]));
        assert_eq!(history.len(), 2);
        assert_eq!(history.first().map(|v| v.time()), Some(Timestamp::from_micros(100)));
        assert_eq!(history.latest().map(|v| v.time()), Some(Timestamp::from_micros(200)));
        assert_eq!(history[1].time(), Timestamp::from_micros(200));
    }

    #[test]
    fn test_visible_filters_by_view() {
        let history = VersionHistory::new(Arc::new(vec![version(100, 1), version(200, 2)]));
        let view = ViewCoordinate::latest().on_path(Nid::new(2));
        let visible: Vec<_> = history.visible(&view).map(|v| v.time().as_micros()).collect();
        assert_eq!(visible, vec![200]);
    }

    #[test]
    fn test_restamped_changes_only_time() {
        let v = version(100, 1);
        let moved = v.restamped(Timestamp::from_micros(500));
        assert_eq!(moved.time(), Timestamp::from_micros(500));
        assert_eq!(moved.stamp().path, v.stamp().path);
        assert_eq!(moved.payload(), v.payload());
    }

    #[test]
    fn test_version_serialization() {
        let v = version(100, 1);
        let json = serde_json::to_string(&v).unwrap();
        let restored: Version<ConceptPayload> = serde_json::from_str(&json).unwrap();
        assert_eq!(v, restored);
    }
}

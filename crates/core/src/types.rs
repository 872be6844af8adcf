//! Core types for termstore
//!
//! This module defines the foundational identity types:
//! - Nid: native identity of any component
//! - Status: activity status carried by every stamp
//! - ComponentKind: discriminates the closed set of component payloads

use serde::{Deserialize, Serialize};
use std::fmt;

/// Native identity of a component
///
/// A Nid is the stable, permanent identity of a concept, description,
/// relationship, media item or refex member. It is independent of the
/// component's content and never reused.
///
/// `Nid::UNASSIGNED` (0) is the null reference: it is never allocated and
/// is what blank payload fields hold until an editor fills them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Nid(u64);

impl Nid {
    /// The null identity reference
    pub const UNASSIGNED: Nid = Nid(0);

    /// Wrap a raw identity value
    #[inline]
    pub const fn new(raw: u64) -> Self {
        Nid(raw)
    }

    /// Raw identity value
    #[inline]
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// True for any value other than `UNASSIGNED`
    #[inline]
    pub const fn is_assigned(&self) -> bool {
        self.0 != 0
    }
}

impl Default for Nid {
    fn default() -> Self {
        Nid::UNASSIGNED
    }
}

impl fmt::Display for Nid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "nid:{}", self.0)
    }
}

impl From<u64> for Nid {
    fn from(raw: u64) -> Self {
        Nid(raw)
    }
}

/// Activity status of a version
///
/// Components are never removed. Retiring a component appends a version
/// whose status is not `Active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Component is in use
    Active,
    /// Component was withdrawn
    Inactive,
    /// Component was withdrawn and must not be reactivated by tooling
    Retired,
}

impl Status {
    /// Whether this status counts as active
    #[inline]
    pub const fn is_active(&self) -> bool {
        matches!(self, Status::Active)
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Active
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Active => "active",
            Status::Inactive => "inactive",
            Status::Retired => "retired",
        };
        f.write_str(name)
    }
}

/// Kind of component a chronicle holds
///
/// The set is closed: every payload type maps to exactly one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    /// Concept
    Concept,
    /// Description of a concept
    Description,
    /// Relationship from a source concept to a destination concept
    Relationship,
    /// Media attached to a concept
    Media,
    /// Reference set extension member
    Refex,
}

impl ComponentKind {
    /// All kinds, in declaration order
    pub const ALL: [ComponentKind; 5] = [
        ComponentKind::Concept,
        ComponentKind::Description,
        ComponentKind::Relationship,
        ComponentKind::Media,
        ComponentKind::Refex,
    ];

    /// Short lowercase name
    pub const fn name(&self) -> &'static str {
        match self {
            ComponentKind::Concept => "concept",
            ComponentKind::Description => "description",
            ComponentKind::Relationship => "relationship",
            ComponentKind::Media => "media",
            ComponentKind::Refex => "refex",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nid_unassigned() {
        assert!(!Nid::UNASSIGNED.is_assigned());
        assert!(Nid::new(1).is_assigned());
        assert_eq!(Nid::default(), Nid::UNASSIGNED);
    }

    #[test]
    fn test_nid_display() {
        assert_eq!(Nid::new(42).to_string(), "nid:42");
    }

    #[test]
    fn test_nid_serializes_transparently() {
        let json = serde_json::to_string(&Nid::new(7)).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn test_status_activity() {
        assert!(Status::Active.is_active());
        assert!(!Status::Inactive.is_active());
        assert!(!Status::Retired.is_active());
    }

    #[test]
    fn test_component_kind_names_unique() {
        let names: std::collections::HashSet<_> =
            ComponentKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names.len(), ComponentKind::ALL.len());
    }
}

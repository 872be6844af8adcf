//! Relationship payload
//!
//! Cross-field rules (non-negative group, assigned references) are checked
//! at commit, so a staged edit may pass through inconsistent states while
//! its fields are being set one by one.

use super::{require_assigned, Payload, PayloadRef};
use crate::field::{Field, Rejection};
use crate::types::{ComponentKind, Nid};
use serde::{Deserialize, Serialize};

/// Relationship attributes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipPayload {
    /// Concept the relationship starts from
    pub source: Nid,
    /// Concept the relationship points to
    pub destination: Nid,
    /// Relationship type (is-a, finding site, ...)
    pub type_nid: Nid,
    /// Characteristic (stated, inferred, ...)
    pub characteristic: Nid,
    /// Refinability (not refinable, optional, mandatory)
    pub refinability: Nid,
    /// Role group; 0 means ungrouped
    pub group: i32,
}

impl Payload for RelationshipPayload {
    const KIND: ComponentKind = ComponentKind::Relationship;

    fn check(&self, nid: Nid) -> Result<(), Rejection> {
        if self.group < 0 {
            return Err(Rejection::field(nid, Field::Group, "must not be negative"));
        }
        require_assigned(nid, Field::Source, self.source)?;
        require_assigned(nid, Field::Destination, self.destination)?;
        require_assigned(nid, Field::TypeNid, self.type_nid)?;
        require_assigned(nid, Field::Characteristic, self.characteristic)?;
        require_assigned(nid, Field::Refinability, self.refinability)?;
        Ok(())
    }

    fn anchor(&self) -> Option<Nid> {
        Some(self.source).filter(Nid::is_assigned)
    }

    fn references(&self) -> Vec<Nid> {
        [self.source, self.destination]
            .into_iter()
            .filter(Nid::is_assigned)
            .collect()
    }

    fn payload_ref(&self) -> PayloadRef<'_> {
        PayloadRef::Relationship(self)
    }
}

//! Concept payload

use super::{Payload, PayloadRef};
use crate::field::Rejection;
use crate::types::{ComponentKind, Nid};
use serde::{Deserialize, Serialize};

/// Concept attributes
///
/// A concept's meaning lives in its descriptions and relationships; the
/// concept version itself only records whether it is fully defined.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptPayload {
    /// Whether the concept's relationships are sufficient to define it
    pub defined: bool,
}

impl Payload for ConceptPayload {
    const KIND: ComponentKind = ComponentKind::Concept;

    fn check(&self, _nid: Nid) -> Result<(), Rejection> {
        Ok(())
    }

    fn payload_ref(&self) -> PayloadRef<'_> {
        PayloadRef::Concept(self)
    }
}

//! Component payloads
//!
//! A payload is the kind-specific part of a version: what a description says,
//! where a relationship points, what a refex member annotates. The set of
//! payloads is closed; [`PayloadRef`] lets code that does not know the
//! concrete type (validators, indexes) match on it.

pub mod concept;
pub mod description;
pub mod media;
pub mod refex;
pub mod relationship;

pub use concept::ConceptPayload;
pub use description::DescriptionPayload;
pub use media::MediaPayload;
pub use refex::{RefexAccess, RefexKind, RefexPayload, RefexValue, Slot};
pub use relationship::RelationshipPayload;

use crate::field::Rejection;
use crate::types::{ComponentKind, Nid};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// Kind-specific content of a version
///
/// `Default` is the blank payload an analog starts from when a component is
/// created. Blank payloads are allowed to be invalid; [`Payload::check`] runs
/// at commit time, after all fields of a staged edit have been set.
pub trait Payload:
    Clone + Default + Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Kind of component this payload belongs to
    const KIND: ComponentKind;

    /// Structural checks run on commit
    fn check(&self, nid: Nid) -> Result<(), Rejection>;

    /// Component this payload hangs off, if any
    ///
    /// Descriptions and media hang off their concept, relationships off their
    /// source, refex members off the component they annotate.
    fn anchor(&self) -> Option<Nid> {
        None
    }

    /// Components that must already exist for this payload to commit
    ///
    /// The anchor by default. Type and metadata identities are not included.
    fn references(&self) -> Vec<Nid> {
        self.anchor().into_iter().collect()
    }

    /// Borrow as the closed payload enum
    fn payload_ref(&self) -> PayloadRef<'_>;
}

/// Borrowed payload of any kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PayloadRef<'a> {
    /// Concept payload
    Concept(&'a ConceptPayload),
    /// Description payload
    Description(&'a DescriptionPayload),
    /// Relationship payload
    Relationship(&'a RelationshipPayload),
    /// Media payload
    Media(&'a MediaPayload),
    /// Refex payload
    Refex(&'a RefexPayload),
}

impl PayloadRef<'_> {
    /// Kind of the borrowed payload
    pub fn kind(&self) -> ComponentKind {
        match self {
            PayloadRef::Concept(_) => ComponentKind::Concept,
            PayloadRef::Description(_) => ComponentKind::Description,
            PayloadRef::Relationship(_) => ComponentKind::Relationship,
            PayloadRef::Media(_) => ComponentKind::Media,
            PayloadRef::Refex(_) => ComponentKind::Refex,
        }
    }
}

/// Reject `value` if it is the null identity
pub(crate) fn require_assigned(
    nid: Nid,
    field: crate::field::Field,
    value: Nid,
) -> Result<(), Rejection> {
    if value.is_assigned() {
        Ok(())
    } else {
        Err(Rejection::field(nid, field, "must reference an assigned identity"))
    }
}

//! Core types for termstore
//!
//! This crate defines the foundational types used throughout the system:
//! - Nid: native identity of every component
//! - Status / ComponentKind: version status and the closed set of component kinds
//! - Contract types: Timestamp, Stamp, ViewCoordinate, IdAlias
//! - Payloads: concept, description, relationship, media and refex content
//! - Field / Rejection: the vocabulary validators use to veto edits
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod contract;
pub mod error;
pub mod field;
pub mod payload;
pub mod types;

pub use contract::{AliasValue, IdAlias, Stamp, Timestamp, ViewCoordinate};
pub use error::{Error, Result};
pub use field::{Field, FieldEdit, FieldValue, Rejection};
pub use payload::{
    ConceptPayload, DescriptionPayload, MediaPayload, Payload, PayloadRef, RefexAccess, RefexKind,
    RefexPayload, RefexValue, RelationshipPayload, Slot,
};
pub use types::{ComponentKind, Nid, Status};

//! Media payload

use super::{require_assigned, Payload, PayloadRef};
use crate::field::{Field, Rejection};
use crate::types::{ComponentKind, Nid};
use serde::{Deserialize, Serialize};

/// Media attributes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaPayload {
    /// Concept the media illustrates
    pub concept: Nid,
    /// Media type
    pub type_nid: Nid,
    /// Format of `data` (for example "png")
    pub format: String,
    /// Textual description of the media
    pub text_description: String,
    /// Media bytes
    pub data: Vec<u8>,
}

impl Payload for MediaPayload {
    const KIND: ComponentKind = ComponentKind::Media;

    fn check(&self, nid: Nid) -> Result<(), Rejection> {
        require_assigned(nid, Field::Concept, self.concept)
    }

    fn anchor(&self) -> Option<Nid> {
        Some(self.concept).filter(Nid::is_assigned)
    }

    fn payload_ref(&self) -> PayloadRef<'_> {
        PayloadRef::Media(self)
    }
}

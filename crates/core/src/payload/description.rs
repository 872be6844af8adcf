//! Description payload

use super::{require_assigned, Payload, PayloadRef};
use crate::field::{Field, Rejection};
use crate::types::{ComponentKind, Nid};
use serde::{Deserialize, Serialize};

/// Description attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionPayload {
    /// Concept this description describes
    pub concept: Nid,
    /// Description text
    pub text: String,
    /// Description type (fully specified name, synonym, ...)
    pub type_nid: Nid,
    /// Language code
    pub language: String,
    /// Whether case is significant in `text`
    pub case_significant: bool,
}

impl Default for DescriptionPayload {
    fn default() -> Self {
        DescriptionPayload {
            concept: Nid::UNASSIGNED,
            text: String::new(),
            type_nid: Nid::UNASSIGNED,
            language: "en".to_string(),
            case_significant: false,
        }
    }
}

impl Payload for DescriptionPayload {
    const KIND: ComponentKind = ComponentKind::Description;

    fn check(&self, nid: Nid) -> Result<(), Rejection> {
        require_assigned(nid, Field::Concept, self.concept)?;
        require_assigned(nid, Field::TypeNid, self.type_nid)?;
        if self.text.trim().is_empty() {
            return Err(Rejection::field(nid, Field::Text, "must not be empty"));
        }
        Ok(())
    }

    fn anchor(&self) -> Option<Nid> {
        Some(self.concept).filter(Nid::is_assigned)
    }

    fn payload_ref(&self) -> PayloadRef<'_> {
        PayloadRef::Description(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> DescriptionPayload {
        DescriptionPayload {
            concept: Nid::new(10),
            text: "Heart".to_string(),
            type_nid: Nid::new(11),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_description_passes() {
        assert!(valid().check(Nid::new(1)).is_ok());
        assert_eq!(valid().anchor(), Some(Nid::new(10)));
    }

    #[test]
    fn test_blank_text_rejected() {
        let payload = DescriptionPayload {
            text: "   ".to_string(),
            ..valid()
        };
        let rejection = payload.check(Nid::new(1)).unwrap_err();
        assert_eq!(rejection.field, Some(Field::Text));
    }

    #[test]
    fn test_default_is_unanchored() {
        assert_eq!(DescriptionPayload::default().anchor(), None);
        assert!(DescriptionPayload::default().check(Nid::new(1)).is_err());
    }
}

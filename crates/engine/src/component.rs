//! Kind-erased handle to a registered chronicle
//!
//! The registry stores every component behind one enum so a single map can
//! hold all five kinds. [`StoredPayload`] converts between the enum and the
//! typed `Arc<Chronicle<P>>` callers work with.

use std::sync::Arc;
use termstore_chronicle::{Chronicle, Lifecycle};
use termstore_core::{
    ComponentKind, ConceptPayload, DescriptionPayload, MediaPayload, Nid, Payload, RefexPayload,
    RelationshipPayload,
};
use uuid::Uuid;

/// A registered chronicle of any kind
#[derive(Debug, Clone)]
pub enum Component {
    /// Concept chronicle
    Concept(Arc<Chronicle<ConceptPayload>>),
    /// Description chronicle
    Description(Arc<Chronicle<DescriptionPayload>>),
    /// Relationship chronicle
    Relationship(Arc<Chronicle<RelationshipPayload>>),
    /// Media chronicle
    Media(Arc<Chronicle<MediaPayload>>),
    /// Refex member chronicle
    Refex(Arc<Chronicle<RefexPayload>>),
}

macro_rules! each_chronicle {
    ($component:expr, $chronicle:ident => $body:expr) => {
        match $component {
            Component::Concept($chronicle) => $body,
            Component::Description($chronicle) => $body,
            Component::Relationship($chronicle) => $body,
            Component::Media($chronicle) => $body,
            Component::Refex($chronicle) => $body,
        }
    };
}

impl Component {
    /// Component kind
    pub fn kind(&self) -> ComponentKind {
        each_chronicle!(self, c => c.kind())
    }

    /// Native identity
    pub fn nid(&self) -> Nid {
        each_chronicle!(self, c => c.nid())
    }

    /// Primordial UUID
    pub fn primordial_uuid(&self) -> Uuid {
        each_chronicle!(self, c => c.primordial_uuid())
    }

    /// Lifecycle of the latest committed version
    pub fn lifecycle(&self) -> Lifecycle {
        each_chronicle!(self, c => c.lifecycle())
    }

    /// Number of committed versions
    pub fn len(&self) -> usize {
        each_chronicle!(self, c => c.len())
    }

    /// Whether nothing has been committed
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Anchor of the latest committed version
    pub fn anchor(&self) -> Option<Nid> {
        each_chronicle!(self, c => c.latest_version(None).and_then(|v| v.payload().anchor()))
    }
}

/// Payload kinds the store can register
pub trait StoredPayload: Payload {
    /// Erase the kind
    fn into_component(chronicle: Arc<Chronicle<Self>>) -> Component;

    /// Recover the typed chronicle if `component` holds this kind
    fn from_component(component: &Component) -> Option<Arc<Chronicle<Self>>>;
}

macro_rules! stored_payload {
    ($payload:ty, $variant:ident) => {
        impl StoredPayload for $payload {
            fn into_component(chronicle: Arc<Chronicle<Self>>) -> Component {
                Component::$variant(chronicle)
            }

            fn from_component(component: &Component) -> Option<Arc<Chronicle<Self>>> {
                match component {
                    Component::$variant(chronicle) => Some(Arc::clone(chronicle)),
                    _ => None,
                }
            }
        }
    };
}

stored_payload!(ConceptPayload, Concept);
stored_payload!(DescriptionPayload, Description);
stored_payload!(RelationshipPayload, Relationship);
stored_payload!(MediaPayload, Media);
stored_payload!(RefexPayload, Refex);

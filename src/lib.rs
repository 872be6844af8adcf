//! termstore - append-only bitemporal versioning for terminology components
//!
//! Every clinical terminology component (concept, description,
//! relationship, media, refex member) is a [`Chronicle`]: an ordered,
//! append-only history of immutable [`Version`]s. Edits are made on an
//! [`Analog`] and committed with optimistic concurrency.
//!
//! # Quick Start
//!
//! ```
//! use termstore::{ConceptPayload, DescriptionPayload, Nid, Stamp, Status, TerminologyStore, Timestamp};
//!
//! let store = TerminologyStore::default();
//! let stamp = |t| Stamp::new(Status::Active, Timestamp::from_micros(t), Nid::new(2), Nid::new(3), Nid::new(4));
//!
//! let heart = store.commit(store.new_component::<ConceptPayload>(stamp(100)))?.nid();
//!
//! let mut analog = store.new_component::<DescriptionPayload>(stamp(100));
//! analog.set_concept(heart)?;
//! analog.set_type_nid(Nid::new(11))?;
//! analog.set_text("Heart")?;
//! let description = store.commit(analog)?.nid();
//!
//! let mut analog = store.edit::<DescriptionPayload>(description, stamp(200))?;
//! analog.set_text("Heart structure")?;
//! store.commit(analog)?;
//!
//! let chronicle = store.chronicle::<DescriptionPayload>(description)?;
//! assert_eq!(chronicle.all_versions().len(), 2);
//! assert_eq!(chronicle.latest_version(None).unwrap().payload().text, "Heart structure");
//! # Ok::<(), termstore::Error>(())
//! ```
//!
//! # Architecture
//!
//! - `termstore-core`: identities, stamps, payloads, the refex tagged union,
//!   errors
//! - `termstore-chronicle`: versions, analogs, chronicles, validators
//! - `termstore-engine`: the store registry and its configuration

pub use termstore_chronicle::{
    Analog, Candidate, Chronicle, CommitRule, EditValidator, FieldRule, Lifecycle, Validators,
    Version, VersionHistory,
};
pub use termstore_core::{
    AliasValue, ComponentKind, ConceptPayload, DescriptionPayload, Error, Field, FieldEdit,
    FieldValue, IdAlias, MediaPayload, Nid, Payload, PayloadRef, RefexAccess, RefexKind,
    RefexPayload, RefexValue, Rejection, RelationshipPayload, Result, Slot, Stamp, Status,
    Timestamp, ViewCoordinate,
};
pub use termstore_engine::{Component, StoreConfig, StoredPayload, TerminologyStore, CONFIG_FILE_NAME};

//! Shared fixtures for the authoring suite.

#![allow(dead_code)]

pub use termstore::*;

/// Stamp on the default author, module and path
pub fn stamp(time: u64) -> Stamp {
    Stamp::new(
        Status::Active,
        Timestamp::from_micros(time),
        Nid::new(2),
        Nid::new(3),
        Nid::new(4),
    )
}

/// Commit a bare concept and return its identity
pub fn concept(store: &TerminologyStore, time: u64) -> Nid {
    let analog = store.new_component::<ConceptPayload>(stamp(time));
    store.commit(analog).unwrap().nid()
}

/// Commit a description of `concept` and return its identity
pub fn description(store: &TerminologyStore, concept: Nid, text: &str, time: u64) -> Nid {
    let mut analog = store.new_component::<DescriptionPayload>(stamp(time));
    analog.set_concept(concept).unwrap();
    analog.set_type_nid(Nid::new(11)).unwrap();
    analog.set_text(text).unwrap();
    store.commit(analog).unwrap().nid()
}

/// Relationship analog with every reference filled in
pub fn relationship(
    store: &TerminologyStore,
    source: Nid,
    destination: Nid,
    time: u64,
) -> Analog<RelationshipPayload> {
    let mut analog = store.new_component::<RelationshipPayload>(stamp(time));
    analog.set_source(source).unwrap();
    analog.set_destination(destination).unwrap();
    analog.set_type_nid(Nid::new(116680003)).unwrap();
    analog.set_characteristic(Nid::new(900000000000011006)).unwrap();
    analog.set_refinability(Nid::new(900000000000007000)).unwrap();
    analog
}

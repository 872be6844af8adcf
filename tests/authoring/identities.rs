//! Identifier aliases and identity lookup

use crate::common::*;
use proptest::prelude::*;
use uuid::Uuid;

#[test]
fn add_long_id_twice() {
    let store = TerminologyStore::default();
    let snomed = Nid::new(900000000000294009);
    let mut analog = store.new_component::<ConceptPayload>(stamp(100));

    assert!(analog.add_long_id(snomed, 80891009));
    assert!(!analog.add_long_id(snomed, 80891009));
    assert_eq!(analog.aliases().len(), 1);

    let version = store.commit(analog).unwrap();
    assert!(version.aliases().contains(&IdAlias::long(snomed, 80891009)));
}

#[test]
fn aliases_carry_into_next_version() {
    let store = TerminologyStore::default();
    let mut analog = store.new_component::<ConceptPayload>(stamp(100));
    analog.add_string_id(Nid::new(9), "HEART-01");
    let nid = store.commit(analog).unwrap().nid();

    let mut analog = store.edit::<ConceptPayload>(nid, stamp(200)).unwrap();
    assert!(!analog.add_string_id(Nid::new(9), "HEART-01"));
    analog.set_defined(true).unwrap();
    let latest = store.commit(analog).unwrap();
    assert_eq!(latest.aliases().len(), 1);
}

#[test]
fn primordial_uuid_lookup() {
    let store = TerminologyStore::default();
    let uuid = Uuid::new_v4();
    let analog = store
        .new_component_with_uuid::<ConceptPayload>(uuid, stamp(100))
        .unwrap();
    let nid = store.commit(analog).unwrap().nid();

    assert_eq!(store.nid_for_uuid(&uuid), Some(nid));
    assert_eq!(store.component_kind(nid), Some(ComponentKind::Concept));
    assert_eq!(store.nid_for_uuid(&Uuid::new_v4()), None);
}

#[test]
fn unknown_identity() {
    let store = TerminologyStore::default();
    let err = store.chronicle::<ConceptPayload>(Nid::new(999)).unwrap_err();
    assert!(matches!(
        err,
        Error::IdentityNotFound {
            kind: Some(ComponentKind::Concept),
            ..
        }
    ));
    assert!(!err.is_recoverable());
}

proptest! {
    #[test]
    fn alias_set_counts_distinct_pairs(ids in prop::collection::vec((1u64..4, 0i64..6), 0..30)) {
        let store = TerminologyStore::default();
        let mut analog = store.new_component::<ConceptPayload>(stamp(100));
        let mut distinct = std::collections::BTreeSet::new();

        for (authority, value) in ids {
            let added = analog.add_long_id(Nid::new(authority), value);
            prop_assert_eq!(added, distinct.insert((authority, value)));
        }
        prop_assert_eq!(analog.aliases().len(), distinct.len());
    }
}

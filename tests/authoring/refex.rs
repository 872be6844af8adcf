//! Typed refex members

use crate::common::*;

fn member(store: &TerminologyStore, value: RefexValue) -> Nid {
    let refset = concept(store, 100);
    let target = concept(store, 100);
    let mut analog = store.new_component::<RefexPayload>(stamp(100));
    analog.set_refset(refset).unwrap();
    analog.set_referenced_component(target).unwrap();
    analog.set_value(value).unwrap();
    store.commit(analog).unwrap().nid()
}

#[test]
fn float_member_read_as_long_is_invalid() {
    let store = TerminologyStore::default();
    let unit = concept(&store, 100);
    let nid = member(&store, RefexValue::IdentifierAndFloat { c1: unit, value: 2.5 });

    let latest = store
        .chronicle::<RefexPayload>(nid)
        .unwrap()
        .latest_version(None)
        .unwrap();
    let value = &latest.payload().value;
    assert_eq!(value.as_identifier_and_float().unwrap(), (unit, 2.5));
    assert!(matches!(
        value.as_identifier_and_long(),
        Err(Error::InvalidSlotAccess {
            actual: RefexKind::IdentifierAndFloat,
            ..
        })
    ));
}

#[test]
fn committed_kind_is_fixed() {
    let store = TerminologyStore::default();
    let nid = member(&store, RefexValue::Text("heart".to_string()));

    let mut analog = store.edit::<RefexPayload>(nid, stamp(200)).unwrap();
    assert!(matches!(
        analog.set_value(RefexValue::Long(7)),
        Err(Error::InvalidSlotAccess { .. })
    ));
    assert!(matches!(analog.set_long(7), Err(Error::InvalidSlotAccess { .. })));
    analog.set_string("cardiac").unwrap();
    let latest = store.commit(analog).unwrap();
    assert_eq!(latest.payload().value.as_text().unwrap(), "cardiac");
}

#[test]
fn members_indexed_by_referenced_component() {
    let store = TerminologyStore::default();
    let refset = concept(&store, 100);
    let heart = concept(&store, 100);
    description(&store, heart, "Heart", 100);

    let mut members = Vec::new();
    for _ in 0..3 {
        let mut analog = store.new_component::<RefexPayload>(stamp(100));
        analog.set_refset(refset).unwrap();
        analog.set_referenced_component(heart).unwrap();
        members.push(store.commit(analog).unwrap().nid());
    }

    assert_eq!(store.refex_members(heart), members);
    assert_eq!(store.dependents(heart).len(), 4);
}

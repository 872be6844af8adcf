//! Validator vetoes through the store

use crate::common::*;

fn frozen_module() -> Validators {
    Validators::new()
        .with(FieldRule::new(|edit: &FieldEdit<'_>| match (edit.field, edit.value) {
            (Field::Module, FieldValue::Nid(module)) if module == Nid::new(99) => {
                Err(edit.reject("module 99 is frozen"))
            }
            _ => Ok(()),
        }))
        .with(CommitRule::new(|candidate: &Candidate<'_>| match candidate.payload {
            PayloadRef::Description(d) if d.text.len() > 255 => {
                Err(candidate.reject("description text over 255 characters"))
            }
            _ => Ok(()),
        }))
}

#[test]
fn field_veto_leaves_analog_unchanged() {
    let store = TerminologyStore::new(StoreConfig::default(), frozen_module()).unwrap();
    let mut analog = store.new_component::<ConceptPayload>(stamp(100));

    let err = analog.set_module(Nid::new(99)).unwrap_err();
    assert!(matches!(err, Error::RejectedEdit(_)));
    assert!(err.is_recoverable());
    assert_eq!(analog.module(), Nid::new(3));
    store.commit(analog).unwrap();
}

#[test]
fn commit_veto_appends_nothing() {
    let store = TerminologyStore::new(StoreConfig::default(), frozen_module()).unwrap();
    let heart = concept(&store, 100);
    let nid = description(&store, heart, "Heart", 100);

    let mut analog = store.edit::<DescriptionPayload>(nid, stamp(200)).unwrap();
    analog.set_text("x".repeat(300)).unwrap();
    let err = store.commit(analog).unwrap_err();
    assert!(err.rejection().is_some());
    assert_eq!(store.chronicle::<DescriptionPayload>(nid).unwrap().len(), 1);
}

//! Editing scenarios from a terminology editor's point of view

use crate::common::*;

#[test]
fn heart_renamed_to_heart_structure() {
    let store = TerminologyStore::default();
    let heart = concept(&store, 100);

    let mut analog = store.new_component::<DescriptionPayload>(stamp(100));
    analog.set_concept(heart).unwrap();
    analog.set_type_nid(Nid::new(11)).unwrap();
    analog.set_text("Heart").unwrap();
    let first = store.commit(analog).unwrap();
    let nid = first.nid();

    let mut analog = store.edit::<DescriptionPayload>(nid, stamp(200)).unwrap();
    assert_eq!(analog.text(), "Heart");
    analog.set_text("Heart structure").unwrap();
    let second = store.commit(analog).unwrap();

    let chronicle = store.chronicle::<DescriptionPayload>(nid).unwrap();
    let history = chronicle.all_versions();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0], first);
    assert_eq!(history[1].payload().text, "Heart structure");
    assert_eq!(chronicle.latest_version(None), Some(second));
}

#[test]
fn two_editors_on_one_basis() {
    let store = TerminologyStore::default();
    let heart = concept(&store, 100);
    let nid = description(&store, heart, "Heart", 100);

    let mut first = store.edit::<DescriptionPayload>(nid, stamp(200)).unwrap();
    let mut second = store.edit::<DescriptionPayload>(nid, stamp(300)).unwrap();
    first.set_text("Heart structure").unwrap();
    second.set_text("Cardiac structure").unwrap();

    store.commit(first).unwrap();
    let err = store.commit(second).unwrap_err();
    assert!(matches!(err, Error::StaleBasis { basis: 1, current: 2, .. }));
    assert!(err.is_recoverable());

    let mut retry = store.edit::<DescriptionPayload>(nid, stamp(300)).unwrap();
    retry.set_text("Cardiac structure").unwrap();
    store.commit(retry).unwrap();
    assert_eq!(store.chronicle::<DescriptionPayload>(nid).unwrap().len(), 3);
}

#[test]
fn relationship_group_must_be_non_negative() {
    let store = TerminologyStore::default();
    let heart = concept(&store, 100);
    let organ = concept(&store, 100);

    let mut analog = relationship(&store, heart, organ, 100);
    analog.set_group(-1).unwrap();
    let err = store.commit(analog.clone()).unwrap_err();
    assert_eq!(err.rejection().and_then(|r| r.field), Some(Field::Group));

    analog.set_group(0).unwrap();
    let version = store.commit(analog).unwrap();
    assert_eq!(version.payload().group, 0);
    assert_eq!(store.dependents(heart), vec![version.nid()]);
}

#[test]
fn retire_and_reactivate() {
    let store = TerminologyStore::default();
    let heart = concept(&store, 100);
    let nid = description(&store, heart, "Heart", 100);

    let mut retire = store.edit::<DescriptionPayload>(nid, stamp(200)).unwrap();
    retire.set_status(Status::Inactive).unwrap();
    store.commit(retire).unwrap();
    assert_eq!(store.component(nid).unwrap().lifecycle(), Lifecycle::Inactive);

    let mut revive = store.edit::<DescriptionPayload>(nid, stamp(300)).unwrap();
    revive.set_status(Status::Active).unwrap();
    store.commit(revive).unwrap();
    assert_eq!(store.component(nid).unwrap().lifecycle(), Lifecycle::Active);
}

#[test]
fn past_views_see_past_versions() {
    let store = TerminologyStore::default();
    let heart = concept(&store, 100);
    let nid = description(&store, heart, "Heart", 100);

    let mut analog = store.edit::<DescriptionPayload>(nid, stamp(200)).unwrap();
    analog.set_text("Heart structure").unwrap();
    store.commit(analog).unwrap();

    let chronicle = store.chronicle::<DescriptionPayload>(nid).unwrap();
    let then = ViewCoordinate::latest().as_of(Timestamp::from_micros(150));
    let before = ViewCoordinate::latest().as_of(Timestamp::from_micros(50));
    assert_eq!(chronicle.latest_version(Some(&then)).unwrap().payload().text, "Heart");
    assert!(chronicle.latest_version(Some(&before)).is_none());
}

#[test]
fn staged_edit_commits_later() {
    let store = TerminologyStore::default();
    let heart = concept(&store, 100);
    let nid = description(&store, heart, "Heart", 100);

    let chronicle = store.chronicle::<DescriptionPayload>(nid).unwrap();
    let mut analog = store.edit::<DescriptionPayload>(nid, stamp(0)).unwrap();
    analog.set_text("Heart structure").unwrap();
    chronicle.stage(analog).unwrap();
    assert_eq!(chronicle.len(), 1);

    let committed = chronicle.commit_pending(Timestamp::from_micros(500)).unwrap();
    assert_eq!(committed.payload().text, "Heart structure");
    assert_eq!(chronicle.latest_version(None), Some(committed));
}

//! Concurrent authoring through one store

use crate::common::*;
use std::collections::BTreeSet;
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn parallel_new_components_get_distinct_identities() {
    let store = Arc::new(TerminologyStore::default());
    let threads = 8;
    let per_thread = 50;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let store = Arc::clone(&store);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                (0..per_thread).map(|_| concept(&store, 100)).collect::<Vec<_>>()
            })
        })
        .collect();

    let mut all = BTreeSet::new();
    for handle in handles {
        for nid in handle.join().unwrap() {
            assert!(all.insert(nid), "duplicate identity {}", nid);
        }
    }
    assert_eq!(all.len(), threads * per_thread);
    assert_eq!(store.len(), threads * per_thread);
}

#[test]
fn racing_first_commits_register_once() {
    let store = Arc::new(TerminologyStore::default());
    let analog = store.new_component::<ConceptPayload>(stamp(100));
    let nid = analog.nid();
    let threads = 4;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let store = Arc::clone(&store);
            let barrier = Arc::clone(&barrier);
            let analog = analog.clone();
            thread::spawn(move || {
                barrier.wait();
                store.commit(analog)
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(results
        .iter()
        .filter(|r| r.is_err())
        .all(|r| matches!(r, Err(Error::StaleBasis { .. }))));
    assert_eq!(store.chronicle::<ConceptPayload>(nid).unwrap().len(), 1);
}

#[test]
fn concurrent_anchor_moves_settle_on_latest() {
    use std::sync::atomic::{AtomicU64, Ordering};

    let store = Arc::new(TerminologyStore::default());
    let concepts: Vec<Nid> = (0..4).map(|_| concept(&store, 100)).collect();
    let desc = description(&store, concepts[0], "Heart", 100);
    let clock = Arc::new(AtomicU64::new(1_000));
    let threads = 3;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let store = Arc::clone(&store);
            let barrier = Arc::clone(&barrier);
            let clock = Arc::clone(&clock);
            let concepts = concepts.clone();
            thread::spawn(move || {
                barrier.wait();
                for round in 0..100 {
                    let target = concepts[(t + round) % concepts.len()];
                    loop {
                        let time = clock.fetch_add(1, Ordering::SeqCst);
                        let mut analog = store.edit::<DescriptionPayload>(desc, stamp(time)).unwrap();
                        analog.set_concept(target).unwrap();
                        match store.commit(analog) {
                            Ok(_) => break,
                            Err(Error::StaleBasis { .. }) | Err(Error::RejectedEdit(_)) => continue,
                            Err(other) => panic!("unexpected error: {}", other),
                        }
                    }
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let latest = store
        .chronicle::<DescriptionPayload>(desc)
        .unwrap()
        .latest_version(None)
        .unwrap()
        .payload()
        .concept;
    for concept in concepts {
        let expected = if concept == latest { vec![desc] } else { vec![] };
        assert_eq!(store.dependents(concept), expected);
    }
}

#[test]
fn one_uuid_claim_wins_across_threads() {
    let store = Arc::new(TerminologyStore::default());
    let uuid = uuid::Uuid::new_v4();
    let threads = 6;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let store = Arc::clone(&store);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                store
                    .new_component_with_uuid::<ConceptPayload>(uuid, stamp(100))
                    .ok()
                    .map(|analog| store.commit(analog).unwrap().nid())
            })
        })
        .collect();

    let winners: Vec<Nid> = handles
        .into_iter()
        .filter_map(|h| h.join().unwrap())
        .collect();
    assert_eq!(winners.len(), 1);
    assert_eq!(store.nid_for_uuid(&uuid), Some(winners[0]));
}

//! Concurrent creates of one name must produce exactly one winner.

use std::sync::{Arc, Barrier};
use std::thread;
use territory_registry::{InMemoryPolicyRegistry, PolicyRegistry, RegistryError};
use territory_types::{CreatePolicyRequest, DistributorName, LocationCode};

const WRITERS: usize = 16;

#[test]
fn concurrent_creates_have_single_winner() {
    let registry = Arc::new(InMemoryPolicyRegistry::new());
    let barrier = Arc::new(Barrier::new(WRITERS));

    let handles: Vec<_> = (0..WRITERS)
        .map(|i| {
            let registry = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let request = CreatePolicyRequest::new("contested")
                    .include(LocationCode::country(format!("country-{i}")));
                barrier.wait();
                registry.create(request)
            })
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    let winners: Vec<_> = results.iter().filter_map(|r| r.as_ref().ok()).collect();
    assert_eq!(winners.len(), 1);
    let stored = registry.get(&DistributorName::new("contested")).unwrap();
    assert!(Arc::ptr_eq(&winners[0].policy, &stored));

    // Every loser sees the winner's policy, never its own
    for result in results.iter().filter(|r| r.is_err()) {
        match result {
            Err(RegistryError::AlreadyExists { existing }) => {
                assert!(Arc::ptr_eq(existing, &stored));
            }
            other => panic!("expected AlreadyExists, got {other:?}"),
        }
    }
}

#[test]
fn concurrent_readers_see_published_policy() {
    let registry = Arc::new(InMemoryPolicyRegistry::new());
    registry
        .create(CreatePolicyRequest::new("shared").include(LocationCode::country("IN")))
        .unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                (0..100)
                    .map(|_| registry.get(&DistributorName::new("shared")).unwrap())
                    .all(|policy| policy.include == vec![LocationCode::country("IN")])
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

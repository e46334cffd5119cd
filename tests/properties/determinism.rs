//! Parsing is deterministic across concurrent callers.

use provisioning_attrs::AttributeRegistry;
use provisioning_attrs::attrs::names;
use provisioning_attrs::enums::{AccountStatus, StringEnum};
use std::sync::Barrier;
use std::thread;

const THREADS: usize = 8;

#[test]
fn concurrent_parses_agree() {
    let barrier = Barrier::new(THREADS);

    let results: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                scope.spawn(|| {
                    barrier.wait();
                    (0..1_000)
                        .map(|i| {
                            let input = if i % 2 == 0 { "lockout" } else { "Lockout" };
                            AccountStatus::parse(input)
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("parser thread panicked"))
            .collect()
    });

    for outcome in &results {
        assert_eq!(outcome, &results[0]);
    }
    assert_eq!(results[0][0], Ok(AccountStatus::Lockout));
    assert!(results[0][1].is_err());
}

#[test]
fn global_registry_is_built_once() {
    let barrier = Barrier::new(THREADS);

    let addresses: Vec<usize> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                scope.spawn(|| {
                    barrier.wait();
                    let registry = AttributeRegistry::global();
                    assert!(registry.validate_value(names::ZIMBRA_GAL_MODE, "both").is_ok());
                    registry as *const AttributeRegistry as usize
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("registry thread panicked"))
            .collect()
    });

    assert!(addresses.iter().all(|&a| a == addresses[0]));
}

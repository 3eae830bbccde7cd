//! Integration tests for the hash table engine.

use algovision::hashing::{
    HashTable, InsertOutcome, ProbeOutcome, ProbeStep, SearchOutcome, DEFAULT_TABLE_SIZE,
};

#[test]
fn test_collision_walks_to_next_slot() {
    let mut table = HashTable::with_default_size();
    assert_eq!(table.size(), DEFAULT_TABLE_SIZE);
    assert_eq!(table.hash(4), 4);
    assert_eq!(table.hash(15), 4);

    assert_eq!(table.insert(4).outcome, InsertOutcome::Inserted { index: 4 });
    let report = table.insert(15);
    assert_eq!(report.outcome, InsertOutcome::Inserted { index: 5 });
    assert_eq!(
        report.probes,
        vec![
            ProbeStep {
                index: 4,
                outcome: ProbeOutcome::Collision
            },
            ProbeStep {
                index: 5,
                outcome: ProbeOutcome::Empty
            },
        ]
    );

    let found = table.search(15);
    assert_eq!(found.outcome, SearchOutcome::Found { index: 5 });
    assert_eq!(found.probes.len(), 2);
}

#[test]
fn test_fill_to_capacity_then_reject() {
    let mut table = HashTable::new(5).unwrap();
    for (i, key) in [0u32, 5, 10, 15, 20].into_iter().enumerate() {
        assert_eq!(
            table.insert(key).outcome,
            InsertOutcome::Inserted { index: i }
        );
    }
    assert!(table.is_full());
    assert_eq!(table.len(), 5);

    let report = table.insert(25);
    assert_eq!(report.outcome, InsertOutcome::Full);
    assert_eq!(report.probes.len(), 5);
    assert!(report
        .probes
        .iter()
        .all(|p| p.outcome == ProbeOutcome::Collision));
    assert_eq!(
        table.slots(),
        &[Some(0), Some(5), Some(10), Some(15), Some(20)]
    );
}

#[test]
fn test_inserted_keys_are_found() {
    let mut table = HashTable::with_default_size();
    let keys = [3u32, 14, 25, 7, 18];
    for &key in &keys {
        table.insert(key);
    }
    for &key in &keys {
        assert!(
            matches!(table.search(key).outcome, SearchOutcome::Found { .. }),
            "{key}"
        );
    }
    assert_eq!(table.search(99).outcome, SearchOutcome::NotFound);
}

#[test]
fn test_duplicate_insert_after_collisions() {
    let mut table = HashTable::with_default_size();
    table.insert(3);
    table.insert(14); // 14 % 11 = 3, lands in slot 4
    let report = table.insert(14);
    assert_eq!(report.outcome, InsertOutcome::AlreadyPresent { index: 4 });
    assert_eq!(
        report.probes,
        vec![
            ProbeStep {
                index: 3,
                outcome: ProbeOutcome::Collision
            },
            ProbeStep {
                index: 4,
                outcome: ProbeOutcome::Match
            },
        ]
    );
    assert_eq!(table.len(), 2);
}

#[test]
fn test_probe_wraps_past_last_slot() {
    let mut table = HashTable::new(5).unwrap();
    table.insert(4);
    let report = table.insert(9); // hash 4, occupied, wraps to slot 0
    assert_eq!(report.outcome, InsertOutcome::Inserted { index: 0 });
    assert_eq!(
        report.probes,
        vec![
            ProbeStep {
                index: 4,
                outcome: ProbeOutcome::Collision
            },
            ProbeStep {
                index: 0,
                outcome: ProbeOutcome::Empty
            },
        ]
    );
}

#[test]
fn test_reset_makes_room() {
    let mut table = HashTable::new(3).unwrap();
    for key in [1, 2, 3] {
        table.insert(key);
    }
    assert!(table.is_full());
    table.reset();
    assert!(table.is_empty());
    assert_eq!(table.insert(9).outcome, InsertOutcome::Inserted { index: 0 });
}

use std::collections::HashSet;

use buscadis_catalog::IdSettings;
use buscadis_import::ShortIdGenerator;

#[test]
fn ids_are_four_digit_numbers_by_default() {
    let mut ids = ShortIdGenerator::seeded(&IdSettings::default(), 1);
    for _ in 0..200 {
        let id = ids.next_id();
        assert_eq!(id.len(), 4);
        let n: u32 = id.parse().unwrap();
        assert!((1000..10000).contains(&n));
    }
}

#[test]
fn ids_do_not_repeat_within_a_run() {
    let mut ids = ShortIdGenerator::seeded(&IdSettings::default(), 2);
    let mut seen = HashSet::new();
    for _ in 0..2000 {
        assert!(seen.insert(ids.next_id()));
    }
    assert_eq!(ids.issued_count(), 2000);
}

#[test]
fn same_seed_same_sequence() {
    let settings = IdSettings::default();
    let mut a = ShortIdGenerator::seeded(&settings, 42);
    let mut b = ShortIdGenerator::seeded(&settings, 42);
    for _ in 0..10 {
        assert_eq!(a.next_id(), b.next_id());
    }
}

#[test]
fn exhausted_width_widens_instead_of_repeating() {
    let settings = IdSettings {
        short_id_digits: 1,
        max_attempts: 64,
    };
    let mut ids = ShortIdGenerator::seeded(&settings, 3);
    let mut seen = HashSet::new();
    // Only nine one-digit ids exist.
    for _ in 0..20 {
        assert!(seen.insert(ids.next_id()));
    }
    assert!(ids.digits() >= 2);
}

#[test]
fn reserved_ids_are_never_drawn() {
    let settings = IdSettings {
        short_id_digits: 1,
        max_attempts: 1000,
    };
    let mut ids = ShortIdGenerator::seeded(&settings, 4);
    for reserved in ["1", "2", "3", "4", "5", "6", "7", "8"] {
        ids.reserve(reserved);
    }
    assert_eq!(ids.next_id(), "9");
}

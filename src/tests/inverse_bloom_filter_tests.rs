// Copyright (c) 2025 Inverse Bloom Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Property-based tests for the Inverse Bloom Filter.

use proptest::prelude::*;
use std::collections::HashSet;

use crate::data_structures::{InverseBloomFilter, InverseBloomFilterConfig};
use crate::tests::{key_strategy, small_size_strategy, valid_size_strategy};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Sizing never allocates less than requested and never doubles it.
    #[test]
    fn prop_table_len_is_next_power_of_two(size in valid_size_strategy()) {
        let len = InverseBloomFilterConfig::new().with_capacity(size).table_len().unwrap();
        let requested = size as usize;

        prop_assert!(len.is_power_of_two());
        prop_assert!(len >= requested);
        prop_assert!(len < requested * 2);
        if requested.is_power_of_two() {
            prop_assert_eq!(len, requested);
        }
    }

    /// Built filters report the same length the sizing rule predicts.
    #[test]
    fn prop_size_matches_table_len(size in small_size_strategy()) {
        let filter = InverseBloomFilter::new(size).unwrap();
        let expected = InverseBloomFilterConfig::new().with_capacity(size).table_len().unwrap();
        prop_assert_eq!(filter.size(), expected);
    }

    /// The first observation on a fresh filter is never a hit.
    #[test]
    fn prop_first_observe_is_false(size in small_size_strategy(), key in key_strategy()) {
        let filter = InverseBloomFilter::new(size).unwrap();
        prop_assert!(!filter.observe(&key));
    }

    /// An immediate repeat is always a hit.
    #[test]
    fn prop_immediate_repeat_is_true(size in small_size_strategy(), key in key_strategy()) {
        let filter = InverseBloomFilter::new(size).unwrap();
        prop_assert!(!filter.observe(&key));
        prop_assert!(filter.observe(&key));
    }

    /// A colliding key in between evicts the first one.
    #[test]
    fn prop_collision_evicts(k1 in key_strategy(), k2 in key_strategy()) {
        prop_assume!(k1 != k2);
        // One slot: every key collides.
        let filter = InverseBloomFilter::new(1).unwrap();
        prop_assert!(!filter.observe(&k1));
        prop_assert!(!filter.observe(&k2));
        prop_assert!(!filter.observe(&k1));
    }

    /// Slot selection is a pure function of the key and table length.
    #[test]
    fn prop_index_is_deterministic(size in small_size_strategy(), key in key_strategy()) {
        let a = InverseBloomFilter::new(size).unwrap();
        let b = InverseBloomFilter::new(size).unwrap();

        prop_assert_eq!(a.index_of(&key), a.index_of(&key));
        prop_assert_eq!(a.index_of(&key), b.index_of(&key));
        prop_assert!(a.index_of(&key) < a.size());
    }

    /// Over any sequence of observations, `true` only ever comes back for a
    /// key that was observed earlier.
    #[test]
    fn prop_no_false_positives(
        size in 1i64..64,
        keys in proptest::collection::vec(key_strategy(), 1..200),
    ) {
        let filter = InverseBloomFilter::new(size).unwrap();
        let mut observed = HashSet::new();

        for key in keys {
            if filter.observe(&key) {
                prop_assert!(observed.contains(&key));
            }
            observed.insert(key);
        }
    }

    /// With a single slot the filter answers exactly "was this the previous key".
    #[test]
    fn prop_single_slot_tracks_previous_key(
        keys in proptest::collection::vec(proptest::collection::vec(0u8..3, 0..2), 1..100),
    ) {
        let filter = InverseBloomFilter::new(1).unwrap();
        let mut previous: Option<Vec<u8>> = None;

        for key in keys {
            prop_assert_eq!(filter.observe(&key), previous.as_ref() == Some(&key));
            previous = Some(key);
        }
    }
}

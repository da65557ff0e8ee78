//! Integration tests for stream deduplication.

use std::io::Cursor;
use std::sync::Arc;
use std::thread;

use inverse_bloom::config::{DedupConfig, InputConfig};
use inverse_bloom::data_structures::InverseBloomFilter;
use inverse_bloom::dedup::{DedupStats, Deduplicator, EmitMode};
use inverse_bloom::error::DedupError;

#[test]
fn test_event_stream_dedup() {
    let config = DedupConfig::default();
    let dedup = Deduplicator::from_config(&config).unwrap();

    let events = "login:42\nlogin:42\nclick:7\nlogin:42\nclick:7\nlogout:42\n";
    let mut out = Vec::new();
    let stats = dedup
        .run(Cursor::new(events), &mut out, EmitMode::Unique)
        .unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "login:42\nclick:7\nlogout:42\n");
    assert_eq!(
        stats,
        DedupStats {
            records: 6,
            unique: 3,
            duplicates: 3,
            skipped: 0,
        }
    );
}

#[test]
fn test_binary_records() {
    let dedup = Deduplicator::new(
        Arc::new(InverseBloomFilter::new(64).unwrap()),
        InputConfig::default(),
    );

    let input: &[u8] = b"\xff\x00\xfe\n\xff\x00\xfe\n";
    let mut out = Vec::new();
    let stats = dedup.run(input, &mut out, EmitMode::Unique).unwrap();

    assert_eq!(out, b"\xff\x00\xfe\n");
    assert_eq!(stats.duplicates, 1);
}

#[test]
fn test_invalid_capacity_is_filter_error() {
    let mut config = DedupConfig::default();
    config.filter.capacity = -3;

    assert!(matches!(
        Deduplicator::from_config(&config),
        Err(DedupError::Filter(_))
    ));
}

#[test]
fn test_workers_share_history() {
    let dedup = Deduplicator::new(
        Arc::new(InverseBloomFilter::new(1 << 12).unwrap()),
        InputConfig::default(),
    );

    let first = dedup.clone();
    let seen_first = thread::spawn(move || first.check(b"order-1001"))
        .join()
        .unwrap();
    let seen_second = dedup.check(b"order-1001");

    assert_eq!(seen_first, Some(false));
    assert_eq!(seen_second, Some(true));
}

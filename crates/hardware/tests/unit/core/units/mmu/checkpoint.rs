//! # Checkpoint Tests
//!
//! Round-trips the translation cache through its serialized record and
//! through a file on disk, and checks that malformed records are rejected
//! before any state is replaced.

use std::fs::File;

use mipsim_core::core::units::mmu::checkpoint::{CheckpointError, CHECKPOINT_VERSION};
use mipsim_core::core::units::mmu::tlb::Tlb;
use pretty_assertions::assert_eq;

use crate::common::{config, entry_4k};

/// Builds a cache with a few entries, an advanced replacement pointer, and
/// one global mapping.
fn populated_tlb() -> Tlb {
    let mut tlb = Tlb::new(&config(8));
    tlb.insert_at(entry_4k(0x100, 3, 0x40, 0x41), 0, false);
    tlb.insert_at(entry_4k(0x200, 5, 0x50, 0x51), 3, false);
    let mut global = entry_4k(0x300, 0, 0x60, 0x61);
    global.global = true;
    tlb.insert_at(global, 7, false);
    let _ = tlb.index(true);
    let _ = tlb.index(true);
    tlb
}

#[test]
fn record_round_trip_restores_lookup_state() {
    let tlb = populated_tlb();
    let record = tlb.checkpoint();

    let mut restored = Tlb::new(&config(8));
    restored
        .restore_from(record)
        .unwrap_or_else(|e| panic!("restore failed: {e}"));

    assert_eq!(restored.capacity(), tlb.capacity());
    assert_eq!(restored.replacement(), tlb.replacement());
    assert_eq!(restored.small_pages(), tlb.small_pages());
    for slot in 0..tlb.capacity() {
        assert_eq!(restored.get_entry(slot), tlb.get_entry(slot));
    }

    // The rebuilt index answers the same queries as the saved cache did.
    assert_eq!(restored.probe(0x100, 3), Some(0));
    assert_eq!(restored.probe(0x200, 5), Some(3));
    assert_eq!(restored.probe(0x300, 0xAA), Some(7));
    assert_eq!(restored.probe(0x100, 5), None);
}

#[test]
fn restore_replaces_previous_contents() {
    let mut target = Tlb::new(&config(8));
    target.insert_at(entry_4k(0x700, 9, 0x70, 0x71), 2, false);

    target
        .restore_from(populated_tlb().checkpoint())
        .unwrap_or_else(|e| panic!("restore failed: {e}"));

    // Pre-restore mappings are gone from both the table and the index.
    assert_eq!(target.probe(0x700, 9), None);
    assert_eq!(target.probe(0x100, 3), Some(0));
}

#[test]
fn unsupported_version_is_rejected() {
    let mut record = populated_tlb().checkpoint();
    record.version = CHECKPOINT_VERSION + 1;

    let mut target = Tlb::new(&config(8));
    target.insert_at(entry_4k(0x700, 9, 0x70, 0x71), 2, false);
    let err = target.restore_from(record);

    assert!(matches!(err, Err(CheckpointError::UnsupportedVersion(v)) if v == CHECKPOINT_VERSION + 1));
    // The failed restore left the target untouched.
    assert_eq!(target.probe(0x700, 9), Some(2));
}

#[test]
fn capacity_mismatch_is_rejected() {
    let mut record = populated_tlb().checkpoint();
    let _ = record.entries.pop();

    let err = Tlb::new(&config(8)).restore_from(record);
    assert!(matches!(
        err,
        Err(CheckpointError::CapacityMismatch {
            found: 7,
            expected: 8
        })
    ));
}

#[test]
fn small_pages_mode_survives_a_round_trip() {
    let mut tlb = Tlb::new(&config(4));
    let mut entry = entry_4k(0x101, 3, 0x40, 0x41);
    entry.addr_shift_amount = 10;
    entry.offset_mask = 0x3FF;
    tlb.insert_at(entry, 0, true);
    assert!(tlb.small_pages());

    let mut restored = Tlb::new(&config(4));
    restored
        .restore_from(tlb.checkpoint())
        .unwrap_or_else(|e| panic!("restore failed: {e}"));

    assert!(restored.small_pages());
    assert_eq!(restored.probe(0x101, 3), Some(0));
}

#[test]
fn file_round_trip() {
    let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("tempdir failed: {e}"));
    let path = dir.path().join("tlb.ckpt");

    let tlb = populated_tlb();
    {
        let file = File::create(&path).unwrap_or_else(|e| panic!("create failed: {e}"));
        tlb.save(file).unwrap_or_else(|e| panic!("save failed: {e}"));
    }

    let mut restored = Tlb::new(&config(8));
    let file = File::open(&path).unwrap_or_else(|e| panic!("open failed: {e}"));
    restored
        .restore(file)
        .unwrap_or_else(|e| panic!("restore failed: {e}"));

    assert_eq!(restored.replacement(), tlb.replacement());
    assert_eq!(restored.probe(0x100, 3), Some(0));
    assert_eq!(restored.probe(0x200, 5), Some(3));
}

#[test]
fn garbage_input_is_a_format_error() {
    let mut target = Tlb::new(&config(8));
    let err = target.restore(&b"not a checkpoint"[..]);
    assert!(matches!(err, Err(CheckpointError::Format(_))));
}

//! TLB checkpointing.
//!
//! Serializes and restores the translation cache so a simulation can resume
//! exactly where it stopped. The record carries the capacity, the
//! replacement pointer, the page-size mode, and every entry in slot order;
//! the fast index is deliberately *not* serialized. Restoration rebuilds it
//! from scratch by re-inserting every entry with a valid half, in slot
//! order, so index/table consistency survives a round-trip even if the
//! index's internal representation changes between versions.
//!
//! The on-disk format is a versioned JSON document. Layout changes must bump
//! [`CHECKPOINT_VERSION`] and remain backward-readable or be rejected
//! explicitly.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entry::TlbEntry;
use super::tlb::Tlb;

/// Current checkpoint record version.
pub const CHECKPOINT_VERSION: u32 = 1;

/// Errors raised by checkpoint save/restore.
///
/// These are host-side failures, distinct from the guest-visible fault
/// taxonomy: a bad checkpoint aborts the resume attempt, it never reaches
/// the simulated machine.
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// Reading from or writing to the checkpoint stream failed.
    #[error("checkpoint I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The record is not a well-formed checkpoint document.
    #[error("malformed checkpoint record: {0}")]
    Format(#[from] serde_json::Error),

    /// The record was written by an incompatible version of the simulator.
    #[error("unsupported checkpoint version {0} (expected {CHECKPOINT_VERSION})")]
    UnsupportedVersion(u32),

    /// The entry table length disagrees with the recorded capacity.
    #[error("checkpoint entry table has {found} entries but capacity {expected}")]
    CapacityMismatch {
        /// Number of entries present in the record.
        found: usize,
        /// Capacity the record claims.
        expected: usize,
    },
}

/// Serialized image of a translation cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TlbCheckpoint {
    /// Record format version.
    pub version: u32,
    /// Number of slots in the table.
    pub capacity: usize,
    /// Replacement pointer at checkpoint time.
    pub replacement: usize,
    /// Cached page-size mode at checkpoint time.
    pub small_pages: bool,
    /// Every entry, in slot order, valid or not.
    pub entries: Vec<TlbEntry>,
}

impl Tlb {
    /// Captures the cache state as a checkpoint record.
    pub fn checkpoint(&self) -> TlbCheckpoint {
        TlbCheckpoint {
            version: CHECKPOINT_VERSION,
            capacity: self.capacity(),
            replacement: self.replacement(),
            small_pages: self.small_pages(),
            entries: self.entries().copied().collect(),
        }
    }

    /// Writes the cache state to a sink as a versioned record.
    ///
    /// # Arguments
    ///
    /// * `sink` - Destination stream for the checkpoint document.
    ///
    /// # Errors
    ///
    /// Returns [`CheckpointError::Io`] or [`CheckpointError::Format`] when
    /// the record cannot be written.
    pub fn save<W: Write>(&self, sink: W) -> Result<(), CheckpointError> {
        serde_json::to_writer(sink, &self.checkpoint())?;
        Ok(())
    }

    /// Restores the cache state from a checkpoint record.
    ///
    /// Replaces the entry table and scalar state, then rebuilds the fast
    /// index from the restored entries in slot order. Access counters are
    /// not part of the record and are left untouched.
    ///
    /// # Arguments
    ///
    /// * `record` - A previously captured checkpoint.
    ///
    /// # Errors
    ///
    /// Returns [`CheckpointError::UnsupportedVersion`] for records from an
    /// incompatible simulator version, or
    /// [`CheckpointError::CapacityMismatch`] when the record is internally
    /// inconsistent.
    pub fn restore_from(&mut self, record: TlbCheckpoint) -> Result<(), CheckpointError> {
        if record.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion(record.version));
        }
        if record.entries.len() != record.capacity {
            return Err(CheckpointError::CapacityMismatch {
                found: record.entries.len(),
                expected: record.capacity,
            });
        }
        self.set_entries(record.entries);
        self.set_replacement(record.replacement);
        self.set_small_pages(record.small_pages);
        self.rebuild_index();
        Ok(())
    }

    /// Reads a checkpoint record from a source and restores from it.
    ///
    /// # Arguments
    ///
    /// * `source` - Stream holding a checkpoint document.
    ///
    /// # Errors
    ///
    /// As [`restore_from`](Self::restore_from), plus
    /// [`CheckpointError::Io`]/[`CheckpointError::Format`] when the stream
    /// cannot be read or parsed.
    pub fn restore<R: Read>(&mut self, source: R) -> Result<(), CheckpointError> {
        let record: TlbCheckpoint = serde_json::from_reader(source)?;
        self.restore_from(record)
    }
}

//! Translation cache (TLB).
//!
//! A fixed-capacity table of translation entries plus a fast index from
//! virtual page numbers to table slots. Lookups on the per-access hot path
//! consult only the slots the index associates with the queried page, never
//! the whole table; mutation happens only through the explicit indexed-write
//! and flush operations that model the privileged TLB instructions.
//!
//! Entries are overwritten in place. A slot whose previous occupant was
//! reachable through the index is unlinked before the new mapping is
//! registered, so the index can never reference a stale slot.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, trace, warn};

use crate::config::TlbConfig;
use crate::stats::TlbStats;

use super::entry::TlbEntry;

/// Fixed-capacity translation cache with a fast VPN index.
///
/// One instance exists per translator and lives for the simulated
/// processor's lifetime. All operations are synchronous; faults are decided
/// by the translators layered on top, not here.
#[derive(Debug)]
pub struct Tlb {
    /// Entry table, indexed by slot. Slots are overwritten in place.
    entries: Vec<TlbEntry>,
    /// Fast index: page-masked VPN to the slots that may match it. Multiple
    /// slots can share a key when entries differ only by address space.
    lookup_table: HashMap<u64, Vec<usize>>,
    /// Page-size masks currently present in the table, with a count of the
    /// entries using each. A lookup probes one index bucket per active mask.
    active_masks: BTreeMap<u64, usize>,
    /// Sequential replacement cursor for hardware-style refill; advances
    /// modulo capacity.
    replacement: usize,
    /// Cached copy of the global page-size mode. Refreshed on every mutating
    /// operation so the per-access path avoids re-deriving it from
    /// control-register state.
    small_pages: bool,
    /// Access counters.
    pub stats: TlbStats,
}

impl Tlb {
    /// Creates a translation cache from its configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Capacity and initial page-size mode.
    ///
    /// # Returns
    ///
    /// An empty cache with every slot holding an invalid entry.
    pub fn new(config: &TlbConfig) -> Self {
        Self {
            entries: vec![TlbEntry::default(); config.size],
            lookup_table: HashMap::new(),
            active_masks: BTreeMap::new(),
            replacement: 0,
            small_pages: config.small_pages,
            stats: TlbStats::default(),
        }
    }

    /// Returns the number of slots in the table.
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    /// Returns the cached page-size mode.
    pub fn small_pages(&self) -> bool {
        self.small_pages
    }

    /// Returns the current replacement pointer.
    pub fn replacement(&self) -> usize {
        self.replacement
    }

    /// Looks up an entry by virtual page number and address space.
    ///
    /// Scans only the index buckets that can hold a match: one per page-size
    /// mask currently present, keyed by the query VPN with that mask's bits
    /// cleared. An entry matches when the VPNs agree outside its mask and it
    /// is global or tagged with the same address space. Among overlapping
    /// entries (a guest configuration fault in the modeled hardware) the
    /// first registered wins; no disambiguation is attempted.
    ///
    /// # Arguments
    ///
    /// * `vpn` - Page-size-adjusted virtual page number.
    /// * `asid` - Address-space id of the access.
    ///
    /// # Returns
    ///
    /// A reference to the matching entry, or `None` on a miss.
    pub fn lookup(&self, vpn: u64, asid: u8) -> Option<&TlbEntry> {
        let slot = self.find_slot(vpn, asid)?;
        Some(&self.entries[slot])
    }

    /// Looks up the slot number holding a match, as the probe instruction
    /// reports it.
    ///
    /// Uses the same matching rule as [`lookup`](Self::lookup).
    ///
    /// # Arguments
    ///
    /// * `vpn` - Page-size-adjusted virtual page number.
    /// * `asid` - Address-space id of the access.
    ///
    /// # Returns
    ///
    /// The matching slot index, or `None` when nothing matches.
    pub fn probe(&self, vpn: u64, asid: u8) -> Option<usize> {
        let slot = self.find_slot(vpn, asid);
        trace!("tlb probe vpn={vpn:#x} asid={asid} -> {slot:?}");
        slot
    }

    /// Reads the entry at a slot.
    ///
    /// Direct indexed read backing the privileged TLB-read instruction.
    ///
    /// # Arguments
    ///
    /// * `slot` - Slot index; must be below capacity.
    ///
    /// # Panics
    ///
    /// Panics when `slot` is out of range. Unlike an out-of-range write this
    /// is a simulator contract violation, not modeled guest behavior.
    pub fn get_entry(&self, slot: usize) -> &TlbEntry {
        assert!(
            slot < self.entries.len(),
            "TLB read at slot {slot} beyond capacity {}",
            self.entries.len()
        );
        &self.entries[slot]
    }

    /// Writes an entry at an explicit slot, modeling the indexed TLB write.
    ///
    /// Refreshes the cached page-size mode, unlinks the slot's previous
    /// mapping from the fast index if it was reachable, stores the entry,
    /// and registers it in the index when it has a valid half. Writing
    /// beyond capacity is a logged no-op: malformed guest TLB-management
    /// sequences degrade gracefully instead of halting the simulation.
    ///
    /// # Arguments
    ///
    /// * `entry` - The entry to store.
    /// * `slot` - Destination slot.
    /// * `small_pages` - Current global page-size mode.
    pub fn insert_at(&mut self, entry: TlbEntry, slot: usize, small_pages: bool) {
        self.small_pages = small_pages;
        if slot >= self.entries.len() {
            warn!(
                slot,
                capacity = self.entries.len(),
                "attempted TLB write beyond capacity; ignored"
            );
            return;
        }
        if self.entries[slot].is_valid() {
            self.index_remove(slot);
        }
        self.entries[slot] = entry;
        if entry.is_valid() {
            self.index_insert(slot);
        }
        debug!(
            "tlb write slot={slot} vpn={:#x} asid={} global={}",
            entry.vpn, entry.asid, entry.global
        );
    }

    /// Clears every entry, the fast index, and the replacement pointer.
    ///
    /// Used on whole-cache invalidations (address-space switches without
    /// ASID reuse) and on reset. The cached page-size mode is left as the
    /// last mutating operation set it.
    pub fn flush_all(&mut self) {
        debug!("tlb flush");
        self.entries.fill(TlbEntry::default());
        self.lookup_table.clear();
        self.active_masks.clear();
        self.replacement = 0;
    }

    /// Returns the entry at the replacement pointer.
    ///
    /// When `advance` is set the pointer moves to the next slot (wrapping at
    /// capacity) after the reference is taken, supporting the sequential
    /// next-victim pattern of hardware-managed refill.
    ///
    /// # Arguments
    ///
    /// * `advance` - Whether to step the replacement pointer.
    pub fn index(&mut self, advance: bool) -> &TlbEntry {
        let slot = self.replacement;
        if advance {
            self.replacement = (slot + 1) % self.entries.len();
        }
        &self.entries[slot]
    }

    /// Scans the index buckets that could match `vpn` and returns the first
    /// matching slot.
    fn find_slot(&self, vpn: u64, asid: u8) -> Option<usize> {
        for &mask in self.active_masks.keys() {
            if let Some(slots) = self.lookup_table.get(&(vpn & !mask)) {
                for &slot in slots {
                    if self.entries[slot].matches(vpn, asid) {
                        return Some(slot);
                    }
                }
            }
        }
        None
    }

    /// Registers a slot's current entry in the fast index.
    ///
    /// Must only be called for entries with a valid half; empty entries stay
    /// unreachable by construction.
    pub(super) fn index_insert(&mut self, slot: usize) {
        let entry = &self.entries[slot];
        let key = entry.vpn & !entry.mask;
        let mask = entry.mask;
        self.lookup_table.entry(key).or_default().push(slot);
        *self.active_masks.entry(mask).or_insert(0) += 1;
    }

    /// Unlinks a slot's current entry from the fast index.
    ///
    /// Removes exactly the `(key, slot)` pair, so an entry sharing its VPN
    /// with another slot (legal under different address spaces) never
    /// unlinks its neighbor. Every mutation path funnels through here before
    /// re-registering, which is what keeps stale slots unreachable.
    pub(super) fn index_remove(&mut self, slot: usize) {
        let entry = &self.entries[slot];
        let key = entry.vpn & !entry.mask;
        let mask = entry.mask;
        if let Some(slots) = self.lookup_table.get_mut(&key) {
            if let Some(pos) = slots.iter().position(|&s| s == slot) {
                let _ = slots.remove(pos);
            }
            if slots.is_empty() {
                let _ = self.lookup_table.remove(&key);
            }
        }
        if let Some(count) = self.active_masks.get_mut(&mask) {
            *count -= 1;
            if *count == 0 {
                let _ = self.active_masks.remove(&mask);
            }
        }
    }

    /// Rebuilds the fast index from the entry table.
    ///
    /// Re-inserts every entry with a valid half in slot order. Used by
    /// checkpoint restoration so index/table consistency survives a
    /// round-trip regardless of the index's internal representation.
    pub(super) fn rebuild_index(&mut self) {
        self.lookup_table.clear();
        self.active_masks.clear();
        for slot in 0..self.entries.len() {
            if self.entries[slot].is_valid() {
                self.index_insert(slot);
            }
        }
    }

    /// Replaces the entry table wholesale. Checkpoint restoration only;
    /// callers must rebuild the index afterwards.
    pub(super) fn set_entries(&mut self, entries: Vec<TlbEntry>) {
        self.entries = entries;
    }

    /// Sets the replacement pointer. Checkpoint restoration only.
    pub(super) fn set_replacement(&mut self, replacement: usize) {
        self.replacement = replacement;
    }

    /// Sets the cached page-size mode. Checkpoint restoration only.
    pub(super) fn set_small_pages(&mut self, small_pages: bool) {
        self.small_pages = small_pages;
    }

    /// Iterates the entry table in slot order.
    pub fn entries(&self) -> impl Iterator<Item = &TlbEntry> {
        self.entries.iter()
    }
}

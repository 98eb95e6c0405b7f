//! MIPS32 system simulator translation core.
//!
//! This crate implements the software-managed address-translation layer of a
//! cycle-level MIPS32 system simulator:
//! 1. **TLB:** A fixed-capacity, fully associative translation cache with a
//!    fast index, variable page sizes, and paired even/odd half-page mappings.
//! 2. **Translators:** Instruction-side (ITB), data-side (DTB), and unified
//!    (UTB) translate paths, including the kseg0/kseg1 unmapped windows.
//! 3. **Faults:** The MIPS translation fault taxonomy (address error, refill,
//!    invalid, modified) with EntryHi/Context register fields for handlers.
//! 4. **Checkpointing:** Versioned save/restore of the full TLB state.
//! 5. **Configuration and statistics:** Serde-backed configuration and
//!    per-table access counters.

/// Common types and constants (addresses, requests, faults, access types).
pub mod common;
/// Simulator configuration (defaults, hierarchical config structures).
pub mod config;
/// CPU core components (architecture state, translation units).
pub mod core;
/// Translation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Fault taxonomy returned by the translate paths.
pub use crate::common::Fault;
/// Memory request object consumed and annotated by the translate paths.
pub use crate::common::MemRequest;
/// Translators; each owns (or shares, for `Utb`) a [`core::units::mmu::tlb::Tlb`].
pub use crate::core::units::mmu::{Dtb, Itb, Utb};

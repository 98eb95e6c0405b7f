//! Translation units.
//!
//! This module contains the memory management components of the simulated
//! processor: the translation cache, the instruction- and data-side
//! translators built on it, and the checkpoint adapter.

/// Memory Management Unit with TLB, translators, and checkpointing.
pub mod mmu;

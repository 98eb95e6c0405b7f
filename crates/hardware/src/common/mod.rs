//! Common utilities and types used throughout the MIPS translation core.
//!
//! This module provides fundamental building blocks that are shared across all
//! components of the simulator. It includes:
//! 1. **Address Types:** Strong types for virtual and physical addresses.
//! 2. **Constants:** Segment windows, VPN derivation shifts, and page masks.
//! 3. **Memory Requests:** The request object carried through translation
//!    (Fetch/Read/Write classification, alignment, cacheability).
//! 4. **Fault Handling:** The translation fault taxonomy and its register
//!    context fields.

/// Address type definitions (physical and virtual addresses).
pub mod addr;

/// Common constants used throughout the translation core.
pub mod constants;

/// Memory access types and the memory request object.
pub mod data;

/// Fault types raised by the translate paths.
pub mod error;

pub use addr::{PhysAddr, VirtAddr};
pub use constants::{KSEG0_BASE, KSEG1_BASE, PAGE_SHIFT, VPN_SHIFT};
pub use data::{AccessType, MemRequest};
pub use error::{Fault, TlbFaultInfo};

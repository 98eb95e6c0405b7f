//! Physical and Virtual Address types.
//!
//! This module defines strong types for physical and virtual addresses to
//! prevent accidental mixing of address spaces. It provides the following:
//! 1. **Type Safety:** Distinguishes between virtual and physical address
//!    spaces at compile time.
//! 2. **Address Manipulation:** Helper methods for raw values and segment
//!    arithmetic.
//! 3. **TLB Integration:** Acts as the primary interface for translation
//!    operations.
//!
//! Addresses are carried as `u64` even though MIPS32 addresses fit in 32 bits;
//! the extra width keeps VPN and frame-number arithmetic free of overflow
//! concerns and matches the simulator-wide address type.

use std::fmt;

/// A virtual address in the MIPS32 address space.
///
/// Virtual addresses are used by guest software and must be translated to
/// physical addresses, either through the TLB or through the fixed kseg0/kseg1
/// segment windows, before memory can be accessed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct VirtAddr(pub u64);

/// A physical address in the simulated machine's address space.
///
/// Physical addresses represent actual memory locations and are produced by
/// the translate paths, never consumed by them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct PhysAddr(pub u64);

impl VirtAddr {
    /// Creates a new virtual address from a raw 64-bit value.
    ///
    /// # Arguments
    ///
    /// * `addr` - The raw address value.
    ///
    /// # Returns
    ///
    /// A new `VirtAddr` instance wrapping the provided address.
    #[inline(always)]
    pub fn new(addr: u64) -> Self {
        Self(addr)
    }

    /// Returns the raw 64-bit address value.
    #[inline(always)]
    pub fn val(&self) -> u64 {
        self.0
    }
}

impl PhysAddr {
    /// Creates a new physical address from a raw 64-bit value.
    ///
    /// # Arguments
    ///
    /// * `addr` - The raw address value.
    ///
    /// # Returns
    ///
    /// A new `PhysAddr` instance wrapping the provided address.
    #[inline(always)]
    pub fn new(addr: u64) -> Self {
        Self(addr)
    }

    /// Returns the raw 64-bit address value.
    #[inline(always)]
    pub fn val(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for VirtAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl fmt::Display for PhysAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

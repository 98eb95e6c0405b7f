//! Global System Constants.
//!
//! This module defines system-wide constants used across the translation core.
//! It includes:
//! 1. **Segment Constants:** Bases and extents of the fixed kseg0/kseg1
//!    unmapped windows and the physical mask that implements them.
//! 2. **VPN Derivation:** The shift and mask that turn a virtual address into
//!    a TLB tag under both page-size modes.
//! 3. **Fault Encoding:** The split of a VPN into the EntryHi VPN2/VPN2X
//!    fields used by refill handlers.

/// Base virtual address of the kseg0 unmapped, cached segment.
pub const KSEG0_BASE: u64 = 0x8000_0000;

/// Base virtual address of the kseg1 unmapped, uncached segment.
pub const KSEG1_BASE: u64 = 0xA000_0000;

/// Exclusive upper bound of the kseg1 segment.
pub const KSEG1_END: u64 = 0xC000_0000;

/// Mask applied to a kseg0/kseg1 virtual address to obtain its physical
/// address. Both windows alias the low 512 MiB of physical memory.
pub const KSEG_PHYS_MASK: u64 = 0x1FFF_FFFF;

/// Virtual address bits that mark an access as uncacheable.
///
/// Cacheability on MIPS is controlled by the virtual address (and by the TLB
/// entry's cache attribute); an address with both of these bits set bypasses
/// the caches.
pub const VADDR_UNCACHEABLE: u64 = 0xA000_0000;

/// Right shift applied to a virtual address to derive the VPN tag.
///
/// The TLB tags pages in 1 KiB half-page pairs, so the tag unit is 2 KiB.
pub const VPN_SHIFT: u64 = 11;

/// Mask applied to the shifted VPN when small (1 KiB) pages are disabled.
///
/// With standard 4 KiB pages the low two VPN bits belong to the page offset
/// and must not participate in tag comparison.
pub const VPN_LARGE_MASK: u64 = 0xFFFF_FFFC;

/// Number of bits to shift to convert between bytes and 4 KiB frames.
pub const PAGE_SHIFT: u64 = 12;

/// Size in bytes of a standard page.
pub const PAGE_SIZE: u64 = 1 << PAGE_SHIFT;

/// Right shift splitting a VPN into the EntryHi VPN2 field.
pub const VPN2_SHIFT: u64 = 2;

/// Mask extracting the 2-bit EntryHi VPN2X extension from a VPN.
pub const VPN2X_MASK: u64 = 0x3;

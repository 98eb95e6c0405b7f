//! TLB entry definition.
//!
//! A single translation entry maps one virtual page pair to two physical
//! frames. The hardware packs two adjacent mappings (the even and odd
//! half-pages) into each entry to double TLB reach; which half applies to an
//! access is selected purely by one virtual address bit, never by software.
//!
//! The entry is a plain value type. The shift/mask arithmetic that hardware
//! encodes in overlapping bitfields is kept as explicit integer fields with
//! named accessors so the matching and reconstruction logic stays auditable.

use serde::{Deserialize, Serialize};

use crate::common::constants::PAGE_SHIFT;

/// One half (even or odd) of a TLB entry.
///
/// A borrowed view assembled by [`TlbEntry::half`]; the storage lives in the
/// per-half scalar fields of the entry itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HalfPage {
    /// Physical frame number, in 4 KiB frame units.
    pub pfn: u64,
    /// Valid bit; a matched access through an invalid half faults.
    pub valid: bool,
    /// Dirty bit; hardware convention for "writable". A store through a
    /// clean half raises a modified fault.
    pub dirty: bool,
    /// Cache coherency attribute bits.
    pub cache_attr: u8,
}

/// A single entry in the translation cache.
///
/// Field names follow the MIPS32 EntryHi/EntryLo register layout: `vpn` and
/// `mask` tag the virtual page pair, `asid`/`global` scope it to an address
/// space, and the `*0`/`*1` fields describe the even and odd half-pages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlbEntry {
    /// Virtual page number, in page-pair units (the address shifted down by
    /// the VPN shift and masked per the page-size mode at insertion).
    pub vpn: u64,
    /// Page-size selector in VPN units. Compared inverted: an entry matches
    /// every VPN that agrees with `vpn` outside the masked bits, so one
    /// entry can cover a range of virtual pages.
    pub mask: u64,
    /// Address-space identifier. Ignored for matching when `global` is set.
    pub asid: u8,
    /// Global bit; when set the entry matches accesses from any address
    /// space.
    pub global: bool,
    /// Physical frame number of the even half-page.
    pub pfn0: u64,
    /// Physical frame number of the odd half-page.
    pub pfn1: u64,
    /// Valid bit of the even half-page.
    pub v0: bool,
    /// Valid bit of the odd half-page.
    pub v1: bool,
    /// Dirty (writable) bit of the even half-page.
    pub d0: bool,
    /// Dirty (writable) bit of the odd half-page.
    pub d1: bool,
    /// Cache attribute of the even half-page.
    pub c0: u8,
    /// Cache attribute of the odd half-page.
    pub c1: u8,
    /// Number of low virtual address bits consumed by the half-page offset;
    /// the bit immediately above selects the even or odd half.
    pub addr_shift_amount: u32,
    /// Mask of the offset bits preserved unchanged through translation.
    pub offset_mask: u64,
}

impl TlbEntry {
    /// Reports whether the entry holds any mapping at all.
    ///
    /// An entry with neither half valid is logically empty and must not be
    /// reachable through the fast index; the cache enforces that at
    /// insertion and removal time rather than with a separate free flag.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.v0 || self.v1
    }

    /// Applies the hardware matching rule for a lookup.
    ///
    /// # Arguments
    ///
    /// * `vpn` - The page-size-adjusted VPN derived from the access.
    /// * `asid` - Address-space id of the access.
    ///
    /// # Returns
    ///
    /// `true` when the VPNs agree outside the page mask and the entry is
    /// either global or tagged with the same address space.
    #[inline]
    pub fn matches(&self, vpn: u64, asid: u8) -> bool {
        let inv_mask = !self.mask;
        (vpn & inv_mask) == (self.vpn & inv_mask) && (self.global || asid == self.asid)
    }

    /// Selects the even or odd half for a virtual address.
    ///
    /// The selector is the address bit immediately below the page-size
    /// boundary, i.e. the lowest bit not covered by the offset mask.
    #[inline]
    pub fn odd_half_of(&self, vaddr: u64) -> bool {
        (vaddr >> self.addr_shift_amount) & 1 != 0
    }

    /// Returns a view of one half-page.
    ///
    /// # Arguments
    ///
    /// * `odd` - `true` for the odd half, `false` for the even half.
    pub fn half(&self, odd: bool) -> HalfPage {
        if odd {
            HalfPage {
                pfn: self.pfn1,
                valid: self.v1,
                dirty: self.d1,
                cache_attr: self.c1,
            }
        } else {
            HalfPage {
                pfn: self.pfn0,
                valid: self.v0,
                dirty: self.d0,
                cache_attr: self.c0,
            }
        }
    }

    /// Returns the half-page an address falls in.
    #[inline]
    pub fn half_for(&self, vaddr: u64) -> HalfPage {
        self.half(self.odd_half_of(vaddr))
    }

    /// Reconstructs the physical address for an access through this entry.
    ///
    /// The selected half's frame number is shifted to byte units and aligned
    /// down to the page boundary, then the offset bits below the boundary
    /// are carried over from the virtual address unchanged.
    ///
    /// # Arguments
    ///
    /// * `vaddr` - The virtual address being translated.
    ///
    /// # Returns
    ///
    /// The physical byte address.
    pub fn half_paddr(&self, vaddr: u64) -> u64 {
        let half = self.half_for(vaddr);
        ((half.pfn << PAGE_SHIFT) & !self.offset_mask) | (vaddr & self.offset_mask)
    }
}

//! Memory Management Unit (MMU).
//!
//! This module implements the software-managed address-translation layer of
//! the simulated MIPS32 processor. It provides:
//! 1. **Translation cache:** A fixed-capacity entry table with a fast VPN
//!    index, mutated only by the privileged TLB-management operations.
//! 2. **Translators:** The instruction-side ([`Itb`]), data-side ([`Dtb`]),
//!    and unified ([`Utb`]) translate algorithms, including the kseg0/kseg1
//!    unmapped windows and per-path fault selection.
//! 3. **Checkpointing:** Versioned save/restore of the full TLB state.
//!
//! Each translator owns its cache; nothing here suspends or schedules. A
//! translate call is a pure function of the request, the operating mode, the
//! cache contents, and the cached page-size mode, and either writes a
//! physical address into the request or returns a fault for the pipeline to
//! dispatch.

/// Checkpoint record and save/restore for the translation cache.
pub mod checkpoint;

/// TLB entry value type and half-page accessors.
pub mod entry;

/// The translation cache: entry table, fast index, and management surface.
pub mod tlb;

use crate::common::addr::PhysAddr;
use crate::common::constants::{
    KSEG0_BASE, KSEG1_BASE, KSEG1_END, KSEG_PHYS_MASK, VADDR_UNCACHEABLE, VPN_LARGE_MASK,
    VPN_SHIFT,
};
use crate::common::data::{AccessType, MemRequest};
use crate::common::error::{Fault, TlbFaultInfo};
use crate::config::TlbConfig;
use crate::core::arch::mode::OperatingMode;

use self::tlb::Tlb;

/// Reports whether an address falls in the kseg0 unmapped, cached window.
#[inline]
fn is_kseg0(vaddr: u64) -> bool {
    (KSEG0_BASE..KSEG1_BASE).contains(&vaddr)
}

/// Reports whether an address falls in the kseg1 unmapped, uncached window.
#[inline]
fn is_kseg1(vaddr: u64) -> bool {
    (KSEG1_BASE..KSEG1_END).contains(&vaddr)
}

/// Translates a kseg0/kseg1 address by the fixed offset transform.
#[inline]
fn kseg_to_phys(vaddr: u64) -> u64 {
    vaddr & KSEG_PHYS_MASK
}

/// Tags a request as uncacheable when the virtual address selects an
/// uncached region.
///
/// Cacheability on this architecture is controlled by bits of the virtual
/// address; this runs on every successfully translated path, unmapped
/// windows included.
#[inline]
fn check_cacheability(req: &mut MemRequest) {
    if req.vaddr().val() & VADDR_UNCACHEABLE == VADDR_UNCACHEABLE {
        req.set_uncacheable();
    }
}

/// Instruction-fetch translation algorithm over a translation cache.
///
/// Shared by [`Itb`] and the fetch side of [`Utb`].
fn translate_fetch(tlb: &mut Tlb, req: &mut MemRequest, mode: OperatingMode) -> Result<(), Fault> {
    let va = req.vaddr().val();
    if is_kseg0(va) {
        // Not translated through the TLB; the physical address is still
        // assigned before the privilege/alignment fault is decided.
        req.set_paddr(PhysAddr::new(kseg_to_phys(va)));
        if mode != OperatingMode::Kernel || req.is_misaligned() {
            return Err(Fault::AddressError(va));
        }
    } else if is_kseg1(va) {
        req.set_paddr(PhysAddr::new(kseg_to_phys(va)));
    } else {
        // The page-size mode is refreshed by every TLB-mutating operation,
        // so the per-access path never re-derives it from control registers.
        let vpn = if tlb.small_pages() {
            va >> VPN_SHIFT
        } else {
            (va >> VPN_SHIFT) & VPN_LARGE_MASK
        };
        let asid = req.asid();
        if req.is_misaligned() {
            return Err(Fault::AddressError(va));
        }
        tlb.stats.read_accesses += 1;
        if let Some(pte) = tlb.lookup(vpn, asid).copied() {
            let half = pte.half_for(va);
            if !half.valid {
                tlb.stats.invalids += 1;
                return Err(Fault::ItbInvalid(TlbFaultInfo::new(va, asid, vpn)));
            }
            tlb.stats.read_hits += 1;
            req.set_paddr(PhysAddr::new(pte.half_paddr(va)));
        } else {
            tlb.stats.read_misses += 1;
            return Err(Fault::ItbRefill(TlbFaultInfo::new(va, asid, vpn)));
        }
    }
    check_cacheability(req);
    Ok(())
}

/// Data-access translation algorithm over a translation cache.
///
/// Shared by [`Dtb`] and the data side of [`Utb`]. Identical in shape to the
/// fetch path except for the fault kinds and one extra check: a store
/// through a matched, valid, clean half-page raises a modified fault. The
/// read path never inspects the dirty bit.
fn translate_data(
    tlb: &mut Tlb,
    req: &mut MemRequest,
    mode: OperatingMode,
    write: bool,
) -> Result<(), Fault> {
    let va = req.vaddr().val();
    if is_kseg0(va) {
        req.set_paddr(PhysAddr::new(kseg_to_phys(va)));
        if mode != OperatingMode::Kernel || req.is_misaligned() {
            return Err(Fault::StoreAddressError(va));
        }
    } else if is_kseg1(va) {
        req.set_paddr(PhysAddr::new(kseg_to_phys(va)));
    } else {
        // The data path historically derives the VPN masked-first and then
        // overwrites it in small-page mode, and performs its lookup before
        // the alignment check; both orderings are kept as the hardware
        // model specifies them rather than unified with the fetch path.
        let mut vpn = (va >> VPN_SHIFT) & VPN_LARGE_MASK;
        if tlb.small_pages() {
            vpn = va >> VPN_SHIFT;
        }
        let asid = req.asid();
        if write {
            tlb.stats.write_accesses += 1;
        } else {
            tlb.stats.read_accesses += 1;
        }
        let pte = tlb.lookup(vpn, asid).copied();
        if req.is_misaligned() {
            return Err(Fault::StoreAddressError(va));
        }
        if let Some(pte) = pte {
            let half = pte.half_for(va);
            if !half.valid {
                tlb.stats.invalids += 1;
                return Err(Fault::DtbInvalid(TlbFaultInfo::new(va, asid, vpn)));
            }
            if write && !half.dirty {
                return Err(Fault::TlbModified(TlbFaultInfo::new(va, asid, vpn)));
            }
            if write {
                tlb.stats.write_hits += 1;
            } else {
                tlb.stats.read_hits += 1;
            }
            req.set_paddr(PhysAddr::new(pte.half_paddr(va)));
        } else {
            if write {
                tlb.stats.write_misses += 1;
            } else {
                tlb.stats.read_misses += 1;
            }
            return Err(Fault::DtbRefill(TlbFaultInfo::new(va, asid, vpn)));
        }
    }
    check_cacheability(req);
    Ok(())
}

/// Instruction-side translator.
///
/// Thin specialization of the translation cache implementing the fetch-path
/// translate algorithm. The underlying cache is public so the pipeline's
/// privileged-instruction emulation can drive the TLB-management surface
/// (`lookup`, `probe`, `get_entry`, `insert_at`, `flush_all`, `index`)
/// directly.
#[derive(Debug)]
pub struct Itb {
    /// The translation cache backing this translator.
    pub tlb: Tlb,
}

impl Itb {
    /// Creates an instruction-side translator.
    ///
    /// # Arguments
    ///
    /// * `config` - Capacity and initial page-size mode for the cache.
    pub fn new(config: &TlbConfig) -> Self {
        Self {
            tlb: Tlb::new(config),
        }
    }

    /// Translates an instruction fetch.
    ///
    /// # Arguments
    ///
    /// * `req` - The fetch request; receives the physical address and
    ///   cacheability tag on success.
    /// * `mode` - Current operating mode, supplied by the pipeline.
    ///
    /// # Errors
    ///
    /// Returns the fault for the pipeline to dispatch: an address error on
    /// misalignment or a non-kernel kseg0 fetch, a refill fault on a miss,
    /// or an invalid fault when the matched half-page is not valid.
    pub fn translate(&mut self, req: &mut MemRequest, mode: OperatingMode) -> Result<(), Fault> {
        translate_fetch(&mut self.tlb, req, mode)
    }
}

/// Data-side translator.
///
/// Thin specialization of the translation cache implementing the data-path
/// translate algorithm, including the dirty-bit check on stores.
#[derive(Debug)]
pub struct Dtb {
    /// The translation cache backing this translator.
    pub tlb: Tlb,
}

impl Dtb {
    /// Creates a data-side translator.
    ///
    /// # Arguments
    ///
    /// * `config` - Capacity and initial page-size mode for the cache.
    pub fn new(config: &TlbConfig) -> Self {
        Self {
            tlb: Tlb::new(config),
        }
    }

    /// Translates a data access.
    ///
    /// # Arguments
    ///
    /// * `req` - The access request; receives the physical address and
    ///   cacheability tag on success.
    /// * `mode` - Current operating mode, supplied by the pipeline.
    /// * `write` - `true` for stores; enables the dirty-bit check.
    ///
    /// # Errors
    ///
    /// Returns the fault for the pipeline to dispatch: a store address error
    /// on misalignment or a non-kernel kseg0 access, a refill fault on a
    /// miss, an invalid fault when the matched half-page is not valid, or a
    /// modified fault on a store through a clean half-page.
    pub fn translate(
        &mut self,
        req: &mut MemRequest,
        mode: OperatingMode,
        write: bool,
    ) -> Result<(), Fault> {
        translate_data(&mut self.tlb, req, mode, write)
    }
}

/// Unified translator.
///
/// Serves both translate paths from a single shared table, for processor
/// configurations without split instruction/data TLBs.
#[derive(Debug)]
pub struct Utb {
    /// The translation cache shared by both translate paths.
    pub tlb: Tlb,
}

impl Utb {
    /// Creates a unified translator.
    ///
    /// # Arguments
    ///
    /// * `config` - Capacity and initial page-size mode for the cache.
    pub fn new(config: &TlbConfig) -> Self {
        Self {
            tlb: Tlb::new(config),
        }
    }

    /// Translates an instruction fetch through the shared table.
    ///
    /// # Errors
    ///
    /// As [`Itb::translate`].
    pub fn translate_fetch(
        &mut self,
        req: &mut MemRequest,
        mode: OperatingMode,
    ) -> Result<(), Fault> {
        translate_fetch(&mut self.tlb, req, mode)
    }

    /// Translates a data access through the shared table.
    ///
    /// # Errors
    ///
    /// As [`Dtb::translate`].
    pub fn translate_data(
        &mut self,
        req: &mut MemRequest,
        mode: OperatingMode,
        write: bool,
    ) -> Result<(), Fault> {
        translate_data(&mut self.tlb, req, mode, write)
    }

    /// Translates an access classified by [`AccessType`].
    ///
    /// Dispatches fetches to the fetch path and loads/stores to the data
    /// path, for callers that carry the classification rather than a
    /// per-port request stream.
    ///
    /// # Errors
    ///
    /// As [`Itb::translate`] for fetches and [`Dtb::translate`] otherwise.
    pub fn translate(
        &mut self,
        req: &mut MemRequest,
        mode: OperatingMode,
        access: AccessType,
    ) -> Result<(), Fault> {
        match access {
            AccessType::Fetch => translate_fetch(&mut self.tlb, req, mode),
            AccessType::Read => translate_data(&mut self.tlb, req, mode, false),
            AccessType::Write => translate_data(&mut self.tlb, req, mode, true),
        }
    }
}

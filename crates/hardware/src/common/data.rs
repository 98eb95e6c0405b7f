//! Memory Access Types and Requests.
//!
//! This module defines the classification of memory accesses and the request
//! object carried through translation. These types are used for the following:
//! 1. **Fault Generation:** Determining the correct fault kind (instruction
//!    vs. data variants) when translation cannot succeed.
//! 2. **Alignment Checking:** An access must be naturally aligned to its
//!    width before any TLB lookup is attempted.
//! 3. **Cacheability Tagging:** The translate paths annotate the request when
//!    the virtual address selects an uncached region.

use super::addr::{PhysAddr, VirtAddr};

/// Type of memory access operation.
///
/// Used to distinguish between instruction fetches, data loads, and data
/// stores for fault selection and statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessType {
    /// Instruction fetch access, translated by the instruction-side TLB.
    Fetch,

    /// Data read access. The read path never inspects the dirty bit.
    Read,

    /// Data write access. Requires the matched half-page to be dirty
    /// (writable); otherwise a modified fault is raised.
    Write,
}

/// A memory access request flowing from the pipeline into translation.
///
/// The pipeline fills in the virtual address, access width, and address-space
/// id; the translate paths write back the physical address and the
/// uncacheable flag. The request carries no read/write discriminator itself;
/// the data-side translate path takes that as an explicit argument, mirroring
/// the hardware interface.
#[derive(Clone, Copy, Debug)]
pub struct MemRequest {
    /// Virtual address of the access.
    pub vaddr: VirtAddr,
    /// Access width in bytes. Must be a power of two.
    pub size: usize,
    /// Address-space identifier tagging the access.
    pub asid: u8,
    /// Physical address, written by a successful translation.
    pub paddr: PhysAddr,
    /// Set when the virtual address selects an uncached region.
    pub uncacheable: bool,
}

impl MemRequest {
    /// Creates a request for a given virtual address, width, and ASID.
    ///
    /// # Arguments
    ///
    /// * `vaddr` - Virtual address of the access.
    /// * `size` - Access width in bytes (power of two).
    /// * `asid` - Address-space identifier of the issuing context.
    ///
    /// # Returns
    ///
    /// A request with the physical address and cacheability not yet assigned.
    pub fn new(vaddr: VirtAddr, size: usize, asid: u8) -> Self {
        Self {
            vaddr,
            size,
            asid,
            paddr: PhysAddr::new(0),
            uncacheable: false,
        }
    }

    /// Returns the virtual address of the request.
    #[inline(always)]
    pub fn vaddr(&self) -> VirtAddr {
        self.vaddr
    }

    /// Returns the address-space identifier of the request.
    #[inline(always)]
    pub fn asid(&self) -> u8 {
        self.asid
    }

    /// Reports whether the access is misaligned for its width.
    ///
    /// An access of width `n` bytes is naturally aligned when the address is
    /// a multiple of `n`. Zero-width requests are treated as aligned.
    #[inline]
    pub fn is_misaligned(&self) -> bool {
        self.size != 0 && self.vaddr.val() & (self.size as u64 - 1) != 0
    }

    /// Writes the translated physical address into the request.
    #[inline]
    pub fn set_paddr(&mut self, paddr: PhysAddr) {
        self.paddr = paddr;
    }

    /// Marks the request as bypassing the cache hierarchy.
    #[inline]
    pub fn set_uncacheable(&mut self) {
        self.uncacheable = true;
    }
}

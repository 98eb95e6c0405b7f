//! Translation Fault definitions.
//!
//! This module defines the fault taxonomy raised by the translate paths. It
//! provides:
//! 1. **Fault Representation:** All recoverable translation failures (address
//!    errors, refills, invalid entries, modified faults).
//! 2. **Handler Context:** The EntryHi/Context register fields a refill
//!    handler needs to synthesize a replacement entry.
//! 3. **Error Handling:** Integration with standard Rust error traits for
//!    system-level reporting.
//!
//! Faults are expected, recoverable conditions. The translation layer never
//! dispatches a handler itself; it returns the fault to the pipeline, which
//! owns the redirect to the guest's exception vector.

use std::fmt;

use super::constants::{VPN2_SHIFT, VPN2X_MASK};

/// Register context attached to refill, invalid, and modified faults.
///
/// Carries the fields the guest's exception handler reads out of EntryHi,
/// BadVAddr, and Context to repopulate the TLB: the faulting address, the
/// address-space id, and the VPN split into the hardware's VPN2 base field
/// plus its 2-bit extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TlbFaultInfo {
    /// The faulting virtual address (BadVAddr).
    pub bad_vaddr: u64,
    /// Address-space id of the faulting access (EntryHi.ASID).
    pub asid: u8,
    /// Upper VPN bits (EntryHi.VPN2).
    pub vpn2: u64,
    /// Low 2-bit VPN extension (EntryHi.VPN2X).
    pub vpn2x: u64,
}

impl TlbFaultInfo {
    /// Builds the handler context from a derived VPN and faulting address.
    ///
    /// # Arguments
    ///
    /// * `bad_vaddr` - The faulting virtual address.
    /// * `asid` - Address-space id of the access.
    /// * `vpn` - The page-size-adjusted virtual page number.
    ///
    /// # Returns
    ///
    /// A `TlbFaultInfo` with the VPN split into its VPN2/VPN2X encoding.
    pub fn new(bad_vaddr: u64, asid: u8, vpn: u64) -> Self {
        Self {
            bad_vaddr,
            asid,
            vpn2: vpn >> VPN2_SHIFT,
            vpn2x: vpn & VPN2X_MASK,
        }
    }

    /// Returns the BadVPN2 field of the Context register.
    ///
    /// Identical to `vpn2` by construction; kept as a named accessor because
    /// handlers read it from a different register than EntryHi.
    pub fn context_bad_vpn2(&self) -> u64 {
        self.vpn2
    }
}

/// Translation faults raised by the instruction and data translate paths.
///
/// Each variant corresponds to one exception entry point in the MIPS32
/// privileged architecture. Instruction-side and data-side refill/invalid
/// faults are distinct kinds because they vector differently.
#[derive(Clone, Debug, PartialEq)]
pub enum Fault {
    /// Address error on a fetch or load.
    ///
    /// Raised for a misaligned access, or a kseg0 access from a
    /// non-privileged mode. Carries the faulting virtual address.
    AddressError(u64),

    /// Address error on the data side.
    ///
    /// The data path raises the store variant for alignment and privilege
    /// violations regardless of access direction. Carries the faulting
    /// virtual address.
    StoreAddressError(u64),

    /// Instruction-side TLB refill.
    ///
    /// No entry matched the fetched page; the handler must insert one.
    ItbRefill(TlbFaultInfo),

    /// Data-side TLB refill.
    ///
    /// No entry matched the accessed page; the handler must insert one.
    DtbRefill(TlbFaultInfo),

    /// Instruction-side invalid entry.
    ///
    /// An entry matched but the selected half-page is not valid.
    ItbInvalid(TlbFaultInfo),

    /// Data-side invalid entry.
    ///
    /// An entry matched but the selected half-page is not valid.
    DtbInvalid(TlbFaultInfo),

    /// Write to a clean page (TLB modified).
    ///
    /// An entry matched with a valid half-page, but a store targeted a
    /// half-page whose dirty bit is clear.
    TlbModified(TlbFaultInfo),
}

impl Fault {
    /// Returns the faulting virtual address carried by any fault kind.
    pub fn bad_vaddr(&self) -> u64 {
        match self {
            Self::AddressError(addr) | Self::StoreAddressError(addr) => *addr,
            Self::ItbRefill(info)
            | Self::DtbRefill(info)
            | Self::ItbInvalid(info)
            | Self::DtbInvalid(info)
            | Self::TlbModified(info) => info.bad_vaddr,
        }
    }

    /// Returns the handler register context for faults that carry one.
    ///
    /// Address errors set only BadVAddr, so they yield `None`.
    pub fn tlb_info(&self) -> Option<&TlbFaultInfo> {
        match self {
            Self::AddressError(_) | Self::StoreAddressError(_) => None,
            Self::ItbRefill(info)
            | Self::DtbRefill(info)
            | Self::ItbInvalid(info)
            | Self::DtbInvalid(info)
            | Self::TlbModified(info) => Some(info),
        }
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddressError(addr) => write!(f, "AddressError({addr:#x})"),
            Self::StoreAddressError(addr) => write!(f, "StoreAddressError({addr:#x})"),
            Self::ItbRefill(info) => write!(f, "ItbRefill({:#x})", info.bad_vaddr),
            Self::DtbRefill(info) => write!(f, "DtbRefill({:#x})", info.bad_vaddr),
            Self::ItbInvalid(info) => write!(f, "ItbInvalid({:#x})", info.bad_vaddr),
            Self::DtbInvalid(info) => write!(f, "DtbInvalid({:#x})", info.bad_vaddr),
            Self::TlbModified(info) => write!(f, "TlbModified({:#x})", info.bad_vaddr),
        }
    }
}

impl std::error::Error for Fault {}

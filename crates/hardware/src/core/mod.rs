//! Core processor components.
//!
//! This module contains the architectural pieces of the simulated MIPS32
//! processor that the translation layer depends on: the operating-mode
//! definitions and the translation units themselves.

/// Architecture-specific components (operating modes).
pub mod arch;

/// Translation units (TLB, translators, checkpointing).
pub mod units;

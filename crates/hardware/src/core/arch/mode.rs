//! MIPS32 Operating Modes.
//!
//! This module defines the operating modes of the MIPS32 privileged
//! architecture. It implements the following:
//! 1. **Mode Classification:** Definitions for Kernel, Supervisor, and User
//!    modes as encoded by the Status register's KSU field.
//! 2. **Serialization:** Conversion between numeric KSU values and enum
//!    variants.
//! 3. **Observability:** Human-readable naming and display formatting.
//!
//! The translation layer never reads the Status register itself; the current
//! mode is passed into the translate paths as an explicit parameter by the
//! pipeline, keeping translation a pure function of its inputs.

/// MIPS32 operating mode levels.
///
/// The KSU field of the Status register selects one of three modes. Kernel
/// mode is the highest privilege level and is required for kseg0 accesses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum OperatingMode {
    /// Kernel mode (KSU = 0).
    ///
    /// Highest privilege level; required for the privileged unmapped window.
    Kernel = 0,

    /// Supervisor mode (KSU = 1).
    ///
    /// Intermediate privilege level, rarely used by guest operating systems.
    Supervisor = 1,

    /// User mode (KSU = 2).
    ///
    /// Lowest privilege level for application code.
    User = 2,
}

impl OperatingMode {
    /// Converts a KSU field value to an operating mode.
    ///
    /// # Arguments
    ///
    /// * `val` - The numeric KSU value (0, 1, or 2).
    ///
    /// # Returns
    ///
    /// The corresponding `OperatingMode`. The reserved KSU encoding 3 maps to
    /// `Kernel`, matching processors that treat it as undefined-but-privileged.
    pub fn from_u8(val: u8) -> Self {
        match val {
            1 => Self::Supervisor,
            2 => Self::User,
            _ => Self::Kernel,
        }
    }

    /// Converts an operating mode to its KSU field representation.
    pub fn to_u8(self) -> u8 {
        self as u8
    }

    /// Returns the human-readable name of the operating mode.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Kernel => "Kernel",
            Self::Supervisor => "Supervisor",
            Self::User => "User",
        }
    }
}

impl std::fmt::Display for OperatingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

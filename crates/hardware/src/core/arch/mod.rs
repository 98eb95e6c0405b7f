//! MIPS32 architecture-specific components.
//!
//! This module contains core architectural definitions consumed by the
//! translation layer:
//! 1. **Modes:** Operating mode (kernel/supervisor/user) classification as
//!    encoded in the Status register's KSU field.

/// Operating mode definitions.
pub mod mode;

pub use mode::OperatingMode;

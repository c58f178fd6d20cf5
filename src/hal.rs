//! Hardware Abstraction Layer
//!
//! Binds the portable transport contracts to concrete target peripherals.
//! Only this module and the firmware entry point know about embassy; the
//! driver core stays chip-agnostic.

pub mod uart;

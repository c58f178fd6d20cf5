//! VoiceKit Peripheral Driver Library
//!
//! This library provides drivers for the peripherals of a small audio/voice
//! expansion kit: a GD5800 MP3 playback module attached over UART, plus a
//! matrix keyboard and a speech recognizer attached over I2C.
//!
//! # Architecture
//!
//! The drivers are organized in layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     DEVICE DRIVERS                           │
//! │  GD5800 MP3  │  Matrix Keyboard  │  Speech Recognizer        │
//! ├─────────────────────────────────────────────────────────────┤
//! │                    PROTOCOL / ACCESS                         │
//! │  Framed UART command link   │   I2C register accessors       │
//! ├─────────────────────────────────────────────────────────────┤
//! │                   TRANSPORT CONTRACTS                        │
//! │  ByteChannel (UART)  │  embedded-hal I2c / DelayNs           │
//! ├─────────────────────────────────────────────────────────────┤
//! │                 TARGET HAL (feature "embedded")              │
//! │           embassy-stm32 UART/I2C + embassy-time              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The portable core is written against the transport contracts only, so the
//! whole driver stack runs under host tests with scripted mock transports.
//!
//! # Design Principles
//!
//! - **Blocking, single-caller model**: each driver owns its transport; one
//!   command/response exchange is in flight at a time
//! - **Type-driven design**: typed command/config enums, validated arguments
//! - **No unsafe**: the crate forbids unsafe code outright
//! - **Explicit error handling**: all fallible operations return `Result`

#![cfg_attr(feature = "embedded", no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Re-export dependencies needed by applications (only in embedded mode)
#[cfg(feature = "embedded")]
pub use embassy_executor;
#[cfg(feature = "embedded")]
pub use embassy_stm32;
#[cfg(feature = "embedded")]
pub use embassy_time;

/// Byte transport contract for the framed UART protocol
pub mod channel;

/// Framed UART protocol engine
///
/// Frame codec and the retrying command/response transactor.
pub mod protocol;

/// I2C register access helpers
///
/// Capability trait with typed little/big-endian accessors.
pub mod registers;

/// Peripheral Drivers
///
/// High-level drivers for the external modules (MP3, keyboard, speech).
pub mod drivers;

/// Hardware Abstraction Layer
///
/// Adapters binding the transport contracts to embassy peripherals.
#[cfg(feature = "embedded")]
pub mod hal;

/// Shared types used across modules
pub mod types;

/// System configuration and constants
pub mod config;

/// Prelude module for common imports
#[cfg(feature = "embedded")]
pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::config::*;
    pub use crate::types::*;

    pub use crate::channel::ByteChannel;
    pub use crate::registers::I2cRegisters;

    // Common traits
    pub use embedded_hal::delay::DelayNs;
    pub use embedded_hal::i2c::I2c;

    // Embassy
    pub use embassy_time::{Duration, Instant, Timer};

    // Error handling
    pub use core::result::Result;

    // Logging
    pub use defmt::{debug, error, info, trace, warn};
}

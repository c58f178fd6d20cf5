//! System configuration and hardware constants
//!
//! This module defines compile-time constants for the VoiceKit peripherals.
//! All timing parameters, bus addresses, and buffer sizes are centralized here.

/// UART baud rate for the GD5800 MP3 module (8N1)
pub const MP3_BAUD_RATE: u32 = 9600;

/// I2C bus frequency for the keyboard and speech recognizer
pub const I2C_FREQUENCY_HZ: u32 = 100_000;

/// Matrix keyboard I2C address
pub const KEYBOARD_I2C_ADDR: u8 = 0x65;

/// Speech recognizer I2C address
pub const SPEECH_I2C_ADDR: u8 = 0x30;

/// Per-byte window while scanning for a response frame delimiter, in ms
pub const DELIMITER_TIMEOUT_MS: u32 = 500;

/// Per-read window for bytes inside a response frame, in ms
pub const BYTE_TIMEOUT_MS: u32 = 100;

/// Total command attempts on the MP3 link (1 initial + 3 retries)
pub const COMMAND_ATTEMPTS: u32 = 4;

/// Capacity of an encoded command frame buffer
pub const FRAME_BUFFER_SIZE: usize = 16;

/// Capacity of a decoded response payload buffer
pub const RESPONSE_BUFFER_SIZE: usize = 32;

/// Consecutive matching reads required to accept a keyboard scan
pub const KEYBOARD_CONFIRM_READS: usize = 4;

/// Delay between speech recognizer busy polls, in ms
pub const SPEECH_BUSY_POLL_MS: u32 = 1;

/// Maximum UTF-8 byte length of a speech keyword
pub const MAX_KEYWORD_BYTES: usize = 50;

/// Pin assignments for GPIO
pub mod pins {
    //! GPIO pin assignments matching the carrier board schematic

    /// Status LED (directly on MCU)
    pub const LED_STATUS: &str = "PA5";

    /// I2C1 SCL (keyboard, speech recognizer)
    pub const I2C1_SCL: &str = "PB8";

    /// I2C1 SDA (keyboard, speech recognizer)
    pub const I2C1_SDA: &str = "PB9";

    /// USART1 TX (MP3 module RX)
    pub const USART1_TX: &str = "PA9";

    /// USART1 RX (MP3 module TX)
    pub const USART1_RX: &str = "PA10";
}

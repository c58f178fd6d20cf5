//! Speech Recognizer Driver
//!
//! Offline keyword-spotting module behind an I2C register file. Keywords are
//! registered by index, recognition runs on demand, and the module reports
//! progress through an event register. Every mutating operation first waits
//! for the module's busy flag to clear; recognition itself can take seconds,
//! during which the module stays busy.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use heapless::Vec;

use crate::config::{MAX_KEYWORD_BYTES, SPEECH_BUSY_POLL_MS, SPEECH_I2C_ADDR};
use crate::registers::{BusError, I2cRegisters};

/// Speech recognizer register addresses
mod reg {
    pub const VERSION: u8 = 0x00;
    pub const BUSY: u8 = 0x01;
    pub const RESET: u8 = 0x02;
    pub const RECOGNITION_MODE: u8 = 0x03;
    pub const RESULT: u8 = 0x04;
    pub const EVENT: u8 = 0x06;
    pub const TIMEOUT: u8 = 0x08;
    pub const KEYWORD_INDEX: u8 = 0x0C;
    pub const KEYWORD_DATA: u8 = 0x0D;
    pub const KEYWORD_LENGTH: u8 = 0x3F;
    pub const ADD_KEYWORD: u8 = 0x40;
    pub const RECOGNIZE: u8 = 0x41;
}

/// What arms a recognition run
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RecognitionMode {
    /// Recognize continuously
    #[default]
    Auto,
    /// Recognize after the on-module button is pressed
    ButtonTrigger,
    /// Recognize after the wake keyword is heard
    KeywordTrigger,
    /// Recognize after either the keyword or the button
    KeywordOrButtonTrigger,
}

impl RecognitionMode {
    /// Get the raw mode byte
    #[must_use]
    pub const fn as_raw(self) -> u8 {
        match self {
            Self::Auto => 0,
            Self::ButtonTrigger => 1,
            Self::KeywordTrigger => 2,
            Self::KeywordOrButtonTrigger => 3,
        }
    }
}

/// Progress event reported by the module
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpeechEvent {
    /// Nothing happened since the last poll
    None,
    /// The module started waiting for its trigger
    StartWaitingForTrigger,
    /// The on-module button fired the trigger
    ButtonTriggered,
    /// The wake keyword fired the trigger
    KeywordTriggered,
    /// Recognition started
    StartRecognizing,
    /// A keyword was recognized; the result register holds its index
    SpeechRecognized,
    /// Recognition gave up without a match
    RecognitionTimedOut,
}

impl SpeechEvent {
    /// Interpret a raw event byte, `None` for undocumented values
    #[must_use]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::None),
            1 => Some(Self::StartWaitingForTrigger),
            2 => Some(Self::ButtonTriggered),
            3 => Some(Self::KeywordTriggered),
            4 => Some(Self::StartRecognizing),
            5 => Some(Self::SpeechRecognized),
            6 => Some(Self::RecognitionTimedOut),
            _ => None,
        }
    }

    /// Get the raw event byte
    #[must_use]
    pub const fn as_raw(self) -> u8 {
        match self {
            Self::None => 0,
            Self::StartWaitingForTrigger => 1,
            Self::ButtonTriggered => 2,
            Self::KeywordTriggered => 3,
            Self::StartRecognizing => 4,
            Self::SpeechRecognized => 5,
            Self::RecognitionTimedOut => 6,
        }
    }
}

/// Speech recognizer operation error
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error<E> {
    /// The keyword exceeds the module's 50-byte limit; nothing was written
    KeywordTooLong,
    /// The I2C bus failed
    Bus(E),
}

/// Speech recognizer module
pub struct SpeechRecognizer<I2C: I2c, D: DelayNs> {
    bus: I2C,
    address: u8,
    delay: D,
}

impl<I2C: I2c, D: DelayNs> I2cRegisters for SpeechRecognizer<I2C, D> {
    type Bus = I2C;

    fn bus(&mut self) -> &mut I2C {
        &mut self.bus
    }

    fn address(&self) -> u8 {
        self.address
    }
}

impl<I2C: I2c, D: DelayNs> SpeechRecognizer<I2C, D> {
    /// Create a driver at the default address
    pub const fn new(bus: I2C, delay: D) -> Self {
        Self::with_address(bus, SPEECH_I2C_ADDR, delay)
    }

    /// Create a driver at a non-default address
    pub const fn with_address(bus: I2C, address: u8, delay: D) -> Self {
        Self { bus, address, delay }
    }

    /// Tear down the driver and recover the bus and delay provider
    pub fn release(self) -> (I2C, D) {
        (self.bus, self.delay)
    }

    /// Firmware version byte of the module
    pub fn version(&mut self) -> Result<u8, Error<BusError<I2C>>> {
        self.read_reg(reg::VERSION).map_err(Error::Bus)
    }

    /// Reset the module to its power-on state
    pub fn reset(&mut self) -> Result<(), Error<BusError<I2C>>> {
        self.wait_until_idle()?;
        self.write_reg(reg::RESET, 1).map_err(Error::Bus)
    }

    /// Select what arms a recognition run
    pub fn set_recognition_mode(
        &mut self,
        mode: RecognitionMode,
    ) -> Result<(), Error<BusError<I2C>>> {
        self.wait_until_idle()?;
        self.write_reg(reg::RECOGNITION_MODE, mode.as_raw())
            .map_err(Error::Bus)
    }

    /// Set the recognition give-up window in milliseconds
    pub fn set_timeout(&mut self, timeout_ms: u16) -> Result<(), Error<BusError<I2C>>> {
        self.wait_until_idle()?;
        let ms = timeout_ms.to_le_bytes();
        self.write_bytes(&[reg::TIMEOUT, ms[0], ms[1]])
            .map_err(Error::Bus)
    }

    /// Register a keyword under an index
    ///
    /// The keyword is staged into the data window, then committed. Recognition
    /// results report the index of the matched keyword.
    ///
    /// # Errors
    ///
    /// [`Error::KeywordTooLong`] if the keyword exceeds
    /// [`MAX_KEYWORD_BYTES`] UTF-8 bytes; nothing is written in that case.
    pub fn add_keyword(&mut self, index: u8, keyword: &str) -> Result<(), Error<BusError<I2C>>> {
        let bytes = keyword.as_bytes();
        if bytes.len() > MAX_KEYWORD_BYTES {
            return Err(Error::KeywordTooLong);
        }

        self.wait_until_idle()?;
        self.write_reg(reg::KEYWORD_INDEX, index).map_err(Error::Bus)?;

        let mut data: Vec<u8, { MAX_KEYWORD_BYTES + 1 }> = Vec::new();
        let _ = data.push(reg::KEYWORD_DATA);
        let _ = data.extend_from_slice(bytes);
        self.write_bytes(&data).map_err(Error::Bus)?;

        self.write_reg(reg::KEYWORD_LENGTH, bytes.len() as u8)
            .map_err(Error::Bus)?;
        self.write_reg(reg::ADD_KEYWORD, 1).map_err(Error::Bus)
    }

    /// Run one recognition and return the matched keyword index
    ///
    /// Negative results mean no keyword matched.
    pub fn recognize(&mut self) -> Result<i16, Error<BusError<I2C>>> {
        self.wait_until_idle()?;
        self.write_reg(reg::RECOGNIZE, 1).map_err(Error::Bus)?;
        self.write_bytes(&[reg::RESULT]).map_err(Error::Bus)?;
        self.read_i16_le().map_err(Error::Bus)
    }

    /// Latest progress event, as reported by the module
    ///
    /// See [`SpeechEvent::from_raw`] for the documented values.
    pub fn poll_event(&mut self) -> Result<u8, Error<BusError<I2C>>> {
        self.read_reg(reg::EVENT).map_err(Error::Bus)
    }

    /// Block until the busy register clears
    fn wait_until_idle(&mut self) -> Result<(), Error<BusError<I2C>>> {
        loop {
            if self.read_reg(reg::BUSY).map_err(Error::Bus)? == 0 {
                return Ok(());
            }
            self.delay.delay_ms(SPEECH_BUSY_POLL_MS);
        }
    }
}

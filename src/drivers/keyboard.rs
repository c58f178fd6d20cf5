//! Matrix Keyboard Driver
//!
//! 4x4 membrane keyboard behind an I2C controller. The controller reports the
//! whole key matrix as a 16-bit mask; scanning re-reads the mask until several
//! consecutive reads agree, which debounces keys without any timing dependence.
//! Edge detection works on the previous/current mask pair kept by the driver.

use embedded_hal::i2c::I2c;

use crate::config::{KEYBOARD_CONFIRM_READS, KEYBOARD_I2C_ADDR};
use crate::registers::{BusError, I2cRegisters};

/// One key of the matrix, as a bit in the state mask
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Key(u16);

impl Key {
    /// Digit 0
    pub const NUM_0: Self = Self(1 << 7);
    /// Digit 1
    pub const NUM_1: Self = Self(1 << 0);
    /// Digit 2
    pub const NUM_2: Self = Self(1 << 4);
    /// Digit 3
    pub const NUM_3: Self = Self(1 << 8);
    /// Digit 4
    pub const NUM_4: Self = Self(1 << 1);
    /// Digit 5
    pub const NUM_5: Self = Self(1 << 5);
    /// Digit 6
    pub const NUM_6: Self = Self(1 << 9);
    /// Digit 7
    pub const NUM_7: Self = Self(1 << 2);
    /// Digit 8
    pub const NUM_8: Self = Self(1 << 6);
    /// Digit 9
    pub const NUM_9: Self = Self(1 << 10);
    /// Function key A
    pub const A: Self = Self(1 << 12);
    /// Function key B
    pub const B: Self = Self(1 << 13);
    /// Function key C
    pub const C: Self = Self(1 << 14);
    /// Function key D
    pub const D: Self = Self(1 << 15);
    /// The `*` key
    pub const ASTERISK: Self = Self(1 << 3);
    /// The `#` key
    pub const NUMBER_SIGN: Self = Self(1 << 11);

    /// The key's bit in the state mask
    #[must_use]
    pub const fn mask(self) -> u16 {
        self.0
    }
}

/// Matrix keyboard at its I2C controller
pub struct MatrixKeyboard<I2C: I2c> {
    bus: I2C,
    address: u8,
    key_states: u16,
    last_key_states: u16,
}

impl<I2C: I2c> I2cRegisters for MatrixKeyboard<I2C> {
    type Bus = I2C;

    fn bus(&mut self) -> &mut I2C {
        &mut self.bus
    }

    fn address(&self) -> u8 {
        self.address
    }
}

impl<I2C: I2c> MatrixKeyboard<I2C> {
    /// Create a driver at the default address
    pub const fn new(bus: I2C) -> Self {
        Self::with_address(bus, KEYBOARD_I2C_ADDR)
    }

    /// Create a driver at a non-default address
    pub const fn with_address(bus: I2C, address: u8) -> Self {
        Self {
            bus,
            address,
            key_states: 0,
            last_key_states: 0,
        }
    }

    /// Tear down the driver and recover the bus
    pub fn release(self) -> I2C {
        self.bus
    }

    /// Scan the keyboard once
    ///
    /// Reads the key mask and re-reads it until
    /// [`KEYBOARD_CONFIRM_READS`] consecutive confirmations agree, then
    /// shifts the current mask into the previous one. Blocks for as long as
    /// the matrix keeps bouncing.
    pub fn update(&mut self) -> Result<(), BusError<I2C>> {
        let accepted = loop {
            let candidate = self.read_u16_le()?;
            let mut stable = true;
            for _ in 0..KEYBOARD_CONFIRM_READS {
                if self.read_u16_le()? != candidate {
                    stable = false;
                    break;
                }
            }
            if stable {
                break candidate;
            }
        };

        self.last_key_states = self.key_states;
        self.key_states = accepted;
        Ok(())
    }

    /// Raw key mask from the latest scan
    #[must_use]
    pub const fn key_states(&self) -> u16 {
        self.key_states
    }

    /// Key went down between the last two scans
    #[must_use]
    pub const fn pressed(&self, key: Key) -> bool {
        self.last_key_states & key.mask() == 0 && self.key_states & key.mask() != 0
    }

    /// Key is down in both of the last two scans
    #[must_use]
    pub const fn pressing(&self, key: Key) -> bool {
        self.last_key_states & key.mask() != 0 && self.key_states & key.mask() != 0
    }

    /// Key came up between the last two scans
    #[must_use]
    pub const fn released(&self, key: Key) -> bool {
        self.last_key_states & key.mask() != 0 && self.key_states & key.mask() == 0
    }
}

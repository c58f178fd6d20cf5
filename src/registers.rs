//! I2C register access helpers
//!
//! The I2C peripherals on the kit (keyboard, speech recognizer) expose
//! byte-addressable register files with multi-byte integer fields in both
//! endiannesses. Rather than a driver base class, register access is a
//! capability trait: a device driver supplies its bus handle and address and
//! inherits the whole accessor surface.
//!
//! Reads and writes are issued as separate bus transactions (no repeated
//! start); the kit peripherals do not support combined transfers.

use embedded_hal::i2c::I2c;

/// Error type of the underlying I2C bus
pub type BusError<B> = <B as embedded_hal::i2c::ErrorType>::Error;

/// A byte-addressable I2C register device
///
/// Implementors provide [`bus`](Self::bus) and [`address`](Self::address);
/// every accessor comes for free.
pub trait I2cRegisters {
    /// The I2C bus handle this device talks through
    type Bus: I2c;

    /// Exclusive access to the bus
    fn bus(&mut self) -> &mut Self::Bus;

    /// The device's 7-bit address
    fn address(&self) -> u8;

    /// Write raw bytes to the device
    fn write_bytes(&mut self, data: &[u8]) -> Result<(), BusError<Self::Bus>> {
        let address = self.address();
        self.bus().write(address, data)
    }

    /// Read raw bytes from the device
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<(), BusError<Self::Bus>> {
        let address = self.address();
        self.bus().read(address, buf)
    }

    /// Write a single register
    fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), BusError<Self::Bus>> {
        self.write_bytes(&[reg, value])
    }

    /// Select a register, then read it back
    fn read_reg(&mut self, reg: u8) -> Result<u8, BusError<Self::Bus>> {
        self.write_bytes(&[reg])?;
        self.read_u8()
    }

    /// Read an unsigned byte
    fn read_u8(&mut self) -> Result<u8, BusError<Self::Bus>> {
        let mut buf = [0u8; 1];
        self.read_bytes(&mut buf)?;
        Ok(buf[0])
    }

    /// Read a signed byte
    fn read_i8(&mut self) -> Result<i8, BusError<Self::Bus>> {
        let mut buf = [0u8; 1];
        self.read_bytes(&mut buf)?;
        Ok(i8::from_le_bytes(buf))
    }

    /// Read a little-endian unsigned 16-bit value
    fn read_u16_le(&mut self) -> Result<u16, BusError<Self::Bus>> {
        let mut buf = [0u8; 2];
        self.read_bytes(&mut buf)?;
        Ok(u16::from_le_bytes(buf))
    }

    /// Read a little-endian signed 16-bit value
    fn read_i16_le(&mut self) -> Result<i16, BusError<Self::Bus>> {
        let mut buf = [0u8; 2];
        self.read_bytes(&mut buf)?;
        Ok(i16::from_le_bytes(buf))
    }

    /// Read a little-endian unsigned 32-bit value
    fn read_u32_le(&mut self) -> Result<u32, BusError<Self::Bus>> {
        let mut buf = [0u8; 4];
        self.read_bytes(&mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }

    /// Read a little-endian signed 32-bit value
    fn read_i32_le(&mut self) -> Result<i32, BusError<Self::Bus>> {
        let mut buf = [0u8; 4];
        self.read_bytes(&mut buf)?;
        Ok(i32::from_le_bytes(buf))
    }

    /// Read a little-endian unsigned 64-bit value
    fn read_u64_le(&mut self) -> Result<u64, BusError<Self::Bus>> {
        let mut buf = [0u8; 8];
        self.read_bytes(&mut buf)?;
        Ok(u64::from_le_bytes(buf))
    }

    /// Read a little-endian signed 64-bit value
    fn read_i64_le(&mut self) -> Result<i64, BusError<Self::Bus>> {
        let mut buf = [0u8; 8];
        self.read_bytes(&mut buf)?;
        Ok(i64::from_le_bytes(buf))
    }

    /// Read a big-endian unsigned 16-bit value
    fn read_u16_be(&mut self) -> Result<u16, BusError<Self::Bus>> {
        let mut buf = [0u8; 2];
        self.read_bytes(&mut buf)?;
        Ok(u16::from_be_bytes(buf))
    }

    /// Read a big-endian signed 16-bit value
    fn read_i16_be(&mut self) -> Result<i16, BusError<Self::Bus>> {
        let mut buf = [0u8; 2];
        self.read_bytes(&mut buf)?;
        Ok(i16::from_be_bytes(buf))
    }

    /// Read a big-endian unsigned 32-bit value
    fn read_u32_be(&mut self) -> Result<u32, BusError<Self::Bus>> {
        let mut buf = [0u8; 4];
        self.read_bytes(&mut buf)?;
        Ok(u32::from_be_bytes(buf))
    }

    /// Read a big-endian signed 32-bit value
    fn read_i32_be(&mut self) -> Result<i32, BusError<Self::Bus>> {
        let mut buf = [0u8; 4];
        self.read_bytes(&mut buf)?;
        Ok(i32::from_be_bytes(buf))
    }

    /// Read a big-endian unsigned 64-bit value
    fn read_u64_be(&mut self) -> Result<u64, BusError<Self::Bus>> {
        let mut buf = [0u8; 8];
        self.read_bytes(&mut buf)?;
        Ok(u64::from_be_bytes(buf))
    }

    /// Read a big-endian signed 64-bit value
    fn read_i64_be(&mut self) -> Result<i64, BusError<Self::Bus>> {
        let mut buf = [0u8; 8];
        self.read_bytes(&mut buf)?;
        Ok(i64::from_be_bytes(buf))
    }
}

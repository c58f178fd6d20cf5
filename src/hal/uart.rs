//! Serial port adapter for the MP3 byte channel
//!
//! Wraps any blocking `embedded-io` serial port into a
//! [`ByteChannel`](crate::channel::ByteChannel). The readiness wait spins on
//! the port's ready flag against an `embassy-time` deadline; the target UART
//! has no receive interrupt wired up, so polling is the intended mode here.

use embassy_time::{Duration, Instant};
use embedded_io::{Read, ReadReady, Write};

use crate::channel::ByteChannel;

/// Byte channel over a blocking serial port
pub struct SerialChannel<T> {
    port: T,
    /// One byte of lookahead pulled while polling readiness
    pending: Option<u8>,
}

impl<T: Read + ReadReady + Write> SerialChannel<T> {
    /// Wrap a serial port
    pub const fn new(port: T) -> Self {
        Self {
            port,
            pending: None,
        }
    }

    /// Recover the serial port
    pub fn release(self) -> T {
        self.port
    }

    /// Pull a byte into the lookahead slot if the port has one
    ///
    /// A port fault here reads as "no data"; it surfaces on the next
    /// explicit read.
    fn poll_byte(&mut self) -> bool {
        if self.pending.is_none() && self.port.read_ready().unwrap_or(false) {
            let mut buf = [0u8; 1];
            if matches!(self.port.read(&mut buf), Ok(1)) {
                self.pending = Some(buf[0]);
            }
        }
        self.pending.is_some()
    }
}

impl<T: Read + ReadReady + Write> ByteChannel for SerialChannel<T> {
    type Error = <T as embedded_io::ErrorType>::Error;

    fn available(&mut self) -> usize {
        usize::from(self.poll_byte())
    }

    fn wait_readable(&mut self, timeout_ms: u32) -> bool {
        let deadline = Instant::now() + Duration::from_millis(u64::from(timeout_ms));
        while Instant::now() < deadline {
            if self.poll_byte() {
                return true;
            }
        }
        self.poll_byte()
    }

    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        if let Some(byte) = self.pending.take() {
            return Ok(byte);
        }
        let mut buf = [0u8; 1];
        self.port.read(&mut buf).map(|_| buf[0])
    }

    fn write_all(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.port.write_all(data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.port.flush()
    }
}

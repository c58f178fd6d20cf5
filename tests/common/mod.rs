//! Scripted mock transports shared by the integration tests

#![allow(dead_code)]

use std::collections::VecDeque;

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation};
use voicekit_firmware::channel::ByteChannel;

/// Transport fault reported by the mock channel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MockChannelError;

/// Scripted byte channel
///
/// Bytes queued in `rx` are readable immediately; with no bytes queued, every
/// readiness wait "times out" at once, so timeout paths run without real
/// delays. Frames queued with [`respond_to_next_write`] become readable when
/// the corresponding write happens, which scripts per-attempt behavior.
pub struct MockChannel {
    rx: VecDeque<u8>,
    on_write: VecDeque<Vec<u8>>,
    /// Every `write_all` payload, in order
    pub writes: Vec<Vec<u8>>,
    /// Number of `flush` calls
    pub flushes: usize,
}

impl MockChannel {
    pub fn new() -> Self {
        Self {
            rx: VecDeque::new(),
            on_write: VecDeque::new(),
            writes: Vec::new(),
            flushes: 0,
        }
    }

    /// Make `bytes` readable immediately
    pub fn queue(&mut self, bytes: &[u8]) {
        self.rx.extend(bytes.iter().copied());
    }

    /// Make `bytes` readable once the next unanswered write happens
    pub fn respond_to_next_write(&mut self, bytes: &[u8]) {
        self.on_write.push_back(bytes.to_vec());
    }

    pub fn frames_written(&self) -> usize {
        self.writes.len()
    }
}

impl ByteChannel for MockChannel {
    type Error = MockChannelError;

    fn available(&mut self) -> usize {
        self.rx.len()
    }

    fn wait_readable(&mut self, _timeout_ms: u32) -> bool {
        !self.rx.is_empty()
    }

    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        self.rx.pop_front().ok_or(MockChannelError)
    }

    fn write_all(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.writes.push(data.to_vec());
        if let Some(response) = self.on_write.pop_front() {
            self.rx.extend(response);
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.flushes += 1;
        Ok(())
    }
}

/// Bus fault reported by the mock I2C bus
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MockI2cError;

impl embedded_hal::i2c::Error for MockI2cError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// One recorded bus transaction segment
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BusOp {
    Write { addr: u8, data: Vec<u8> },
    Read { addr: u8, len: usize },
}

/// Scripted I2C bus
///
/// Records every operation; read payloads are served from a queue and must be
/// scripted with the exact width the driver will ask for.
pub struct MockI2c {
    /// Every operation, in order
    pub ops: Vec<BusOp>,
    reads: VecDeque<Vec<u8>>,
}

impl MockI2c {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            reads: VecDeque::new(),
        }
    }

    /// Queue the payload for the next read
    pub fn queue_read(&mut self, bytes: &[u8]) {
        self.reads.push_back(bytes.to_vec());
    }

    /// The write payloads only, in order
    pub fn written(&self) -> Vec<Vec<u8>> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                BusOp::Write { data, .. } => Some(data.clone()),
                BusOp::Read { .. } => None,
            })
            .collect()
    }
}

impl ErrorType for MockI2c {
    type Error = MockI2cError;
}

impl I2c for MockI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        for op in operations {
            match op {
                Operation::Write(data) => self.ops.push(BusOp::Write {
                    addr: address,
                    data: data.to_vec(),
                }),
                Operation::Read(buf) => {
                    let data = self.reads.pop_front().expect("unscripted I2C read");
                    assert_eq!(
                        data.len(),
                        buf.len(),
                        "scripted read width does not match the driver's request"
                    );
                    buf.copy_from_slice(&data);
                    self.ops.push(BusOp::Read {
                        addr: address,
                        len: buf.len(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Delay provider that only counts
pub struct MockDelay {
    /// Total nanoseconds slept
    pub slept_ns: u64,
    /// Number of delay calls
    pub calls: usize,
}

impl MockDelay {
    pub fn new() -> Self {
        Self {
            slept_ns: 0,
            calls: 0,
        }
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.slept_ns += u64::from(ns);
        self.calls += 1;
    }
}

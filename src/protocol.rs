//! Framed UART protocol engine
//!
//! Implements the command/response protocol spoken by the GD5800 MP3 module.
//! The link is half-duplex with no sequence numbers: the host writes one
//! command frame, then reads response frames until one echoes the command's
//! opcode with the expected payload length.
//!
//! # Wire format
//!
//! Outbound command frame:
//!
//! ```text
//! 0x7E | len | opcode | args... | 0xEF      len = 2 + args.len()
//! ```
//!
//! Inbound response frame:
//!
//! ```text
//! 0xAA | len | payload... | 0xEF            len counts payload + terminator
//! ```
//!
//! The two directions use different start delimiters (0x7E out, 0xAA in) and
//! different length-byte conventions; both asymmetries are properties of the
//! device's wire protocol and are preserved exactly. `payload[0]` echoes the
//! opcode of the command being answered.
//!
//! The decoder pulls bytes one at a time behind a readiness poll; the target
//! transport has no interrupt-driven buffering, so a frame must never be
//! assumed to arrive atomically.

use heapless::Vec;

use crate::channel::ByteChannel;
use crate::config::{
    BYTE_TIMEOUT_MS, COMMAND_ATTEMPTS, DELIMITER_TIMEOUT_MS, FRAME_BUFFER_SIZE,
    RESPONSE_BUFFER_SIZE,
};

/// Start delimiter of an outbound command frame
pub const COMMAND_START: u8 = 0x7E;

/// Start delimiter of an inbound response frame
pub const RESPONSE_START: u8 = 0xAA;

/// Terminator byte shared by both frame directions
pub const FRAME_END: u8 = 0xEF;

/// An encoded command frame
pub type CommandFrame = Vec<u8, FRAME_BUFFER_SIZE>;

/// A decoded response payload: opcode echo plus data, terminator stripped
pub type Response = Vec<u8, RESPONSE_BUFFER_SIZE>;

/// Failure of a single exchange attempt
///
/// All of these are transient from the transactor's point of view and consume
/// one attempt out of the retry budget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameError<E> {
    /// No response delimiter byte arrived within the scan window
    FrameTimeout,
    /// A byte inside the frame did not arrive within its read window
    ReadTimeout,
    /// The frame did not end in the terminator byte, or its length byte was
    /// unusable
    MalformedFrame,
    /// The transport itself failed
    Channel(E),
}

/// Command execution error
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error<E> {
    /// An argument was outside its documented range; nothing was transmitted
    InvalidArgument,
    /// Every attempt failed; carries the failure of the last one
    RetriesExhausted(FrameError<E>),
}

#[cfg(feature = "embedded")]
impl<E: defmt::Format> defmt::Format for FrameError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::FrameTimeout => defmt::write!(f, "frame timeout"),
            Self::ReadTimeout => defmt::write!(f, "read timeout"),
            Self::MalformedFrame => defmt::write!(f, "malformed frame"),
            Self::Channel(e) => defmt::write!(f, "channel: {}", e),
        }
    }
}

#[cfg(feature = "embedded")]
impl<E: defmt::Format> defmt::Format for Error<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::InvalidArgument => defmt::write!(f, "invalid argument"),
            Self::RetriesExhausted(e) => defmt::write!(f, "retries exhausted: {}", e),
        }
    }
}

/// Encode one command frame
///
/// The length byte counts the opcode, the arguments, and the terminator.
/// Argument values are validated by the device facades before they reach this
/// point; an argument slice that cannot fit the frame buffer is a programming
/// error.
#[must_use]
pub fn encode(opcode: u8, args: &[u8]) -> CommandFrame {
    debug_assert!(args.len() + 4 <= FRAME_BUFFER_SIZE);

    let mut frame = CommandFrame::new();
    let _ = frame.push(COMMAND_START);
    let _ = frame.push(args.len() as u8 + 2);
    let _ = frame.push(opcode);
    let _ = frame.extend_from_slice(args);
    let _ = frame.push(FRAME_END);
    frame
}

/// Read one byte, waiting up to `timeout_ms` for it to become available
fn next_byte<C: ByteChannel>(
    channel: &mut C,
    timeout_ms: u32,
) -> Result<u8, FrameError<C::Error>> {
    if channel.available() == 0 && !channel.wait_readable(timeout_ms) {
        return Err(FrameError::ReadTimeout);
    }
    channel.read_byte().map_err(FrameError::Channel)
}

/// Read exactly `count` bytes into `buf` with a per-chunk readiness window
fn read_exact<C: ByteChannel>(
    channel: &mut C,
    buf: &mut Response,
    count: usize,
) -> Result<(), FrameError<C::Error>> {
    let mut remaining = count;
    while remaining > 0 {
        if channel.available() == 0 && !channel.wait_readable(BYTE_TIMEOUT_MS) {
            return Err(FrameError::ReadTimeout);
        }
        while remaining > 0 && channel.available() > 0 {
            let byte = channel.read_byte().map_err(FrameError::Channel)?;
            let _ = buf.push(byte);
            remaining -= 1;
        }
    }
    Ok(())
}

/// Read one response frame and return its usable payload
///
/// Scans byte-at-a-time for the response delimiter (skipping line noise and
/// leftovers from earlier exchanges), then reads the length byte and the
/// number of bytes it announces. The last of those must be the terminator;
/// it is checked and stripped.
pub fn read_frame<C: ByteChannel>(channel: &mut C) -> Result<Response, FrameError<C::Error>> {
    loop {
        match next_byte(channel, DELIMITER_TIMEOUT_MS) {
            Ok(RESPONSE_START) => break,
            Ok(_) => {}
            Err(FrameError::ReadTimeout) => return Err(FrameError::FrameTimeout),
            Err(other) => return Err(other),
        }
    }

    let length = usize::from(next_byte(channel, BYTE_TIMEOUT_MS)?);
    if length > RESPONSE_BUFFER_SIZE + 1 {
        // A length that cannot fit the response buffer is framing corruption;
        // the retry path re-synchronizes on the next delimiter scan.
        return Err(FrameError::MalformedFrame);
    }

    let mut payload = Response::new();
    read_exact(channel, &mut payload, length.saturating_sub(1))?;

    if next_byte(channel, BYTE_TIMEOUT_MS)? == FRAME_END {
        Ok(payload)
    } else {
        Err(FrameError::MalformedFrame)
    }
}

/// Request/response transactor for the MP3 command link
///
/// Owns the byte channel for the lifetime of the link, which also serializes
/// access: one command/response exchange is in flight at a time, and a caller
/// wanting an overall deadline must wrap calls externally.
pub struct CommandLink<C: ByteChannel> {
    channel: C,
}

impl<C: ByteChannel> CommandLink<C> {
    /// Take ownership of the channel
    pub const fn new(channel: C) -> Self {
        Self { channel }
    }

    /// Give the channel back
    pub fn release(self) -> C {
        self.channel
    }

    /// Execute a command expecting a bare opcode echo
    pub fn execute(&mut self, opcode: u8, args: &[u8]) -> Result<(), Error<C::Error>> {
        self.query(opcode, args, 1).map(|_| ())
    }

    /// Execute a command and return its response payload
    ///
    /// One attempt writes the frame and reads response frames until one
    /// matches `opcode` and `response_len`. Well-formed frames that do not
    /// match are discarded without consuming an attempt; on this unsequenced
    /// half-duplex link that is the only defense against stale responses left
    /// over from an earlier command. Decode-level failures consume one
    /// attempt each, up to [`COMMAND_ATTEMPTS`] total.
    pub fn query(
        &mut self,
        opcode: u8,
        args: &[u8],
        response_len: usize,
    ) -> Result<Response, Error<C::Error>> {
        let frame = encode(opcode, args);

        let mut attempts = 0;
        loop {
            match self.exchange(&frame, opcode, response_len) {
                Ok(payload) => return Ok(payload),
                Err(failure) => {
                    attempts += 1;
                    if attempts >= COMMAND_ATTEMPTS {
                        return Err(Error::RetriesExhausted(failure));
                    }
                    #[cfg(feature = "embedded")]
                    defmt::debug!("command 0x{:02x}: attempt {} failed, retrying", opcode, attempts);
                }
            }
        }
    }

    /// One write + read-until-match cycle
    fn exchange(
        &mut self,
        frame: &[u8],
        opcode: u8,
        response_len: usize,
    ) -> Result<Response, FrameError<C::Error>> {
        self.channel.write_all(frame).map_err(FrameError::Channel)?;
        self.channel.flush().map_err(FrameError::Channel)?;

        loop {
            let payload = read_frame(&mut self.channel)?;
            if payload.len() == response_len && payload[0] == opcode {
                return Ok(payload);
            }
        }
    }
}

//! GD5800 MP3 Playback Module Driver
//!
//! Maps named playback operations onto the module's framed UART commands.
//! Control commands are acknowledged with a bare opcode echo; queries answer
//! with a three-byte payload `[echo, reserved, value]` and the driver reports
//! the value byte verbatim — the remote device owns its state, nothing is
//! cached here. [`PlaybackStatus`](crate::types::PlaybackStatus) and friends
//! in [`types`](crate::types) give a typed view over the raw values.

use crate::channel::ByteChannel;
use crate::protocol::{CommandLink, Error};
use crate::types::{Equalizer, LoopMode};

/// GD5800 command opcodes
mod cmd {
    pub const PLAY: u8 = 0x01;
    pub const PAUSE: u8 = 0x02;
    pub const NEXT: u8 = 0x03;
    pub const PREVIOUS: u8 = 0x04;
    pub const VOLUME_UP: u8 = 0x05;
    pub const VOLUME_DOWN: u8 = 0x06;
    pub const PLAY_LOOP: u8 = 0x07;
    pub const SHUFFLE_PLAY: u8 = 0x08;
    pub const STOP_AND_PLAY_BACKGROUND: u8 = 0x09;
    pub const SHUTDOWN: u8 = 0x0A;
    pub const RESET: u8 = 0x0B;
    pub const STOP: u8 = 0x0E;
    pub const RESUME_OR_PAUSE: u8 = 0x0F;
    pub const PLAY_BY_INDEX: u8 = 0x41;
    pub const FAST_FORWARD: u8 = 0x50;
    pub const FAST_REVERSE: u8 = 0x51;

    pub const SET_VOLUME: u8 = 0x31;
    pub const SET_EQUALIZER: u8 = 0x32;
    pub const SET_LOOP_MODE: u8 = 0x33;

    pub const GET_STATUS: u8 = 0x10;
    pub const GET_VOLUME: u8 = 0x11;
    pub const GET_EQUALIZER: u8 = 0x12;
    pub const GET_MODE: u8 = 0x13;
}

/// Queries answer `[echo, reserved, value]`
const QUERY_RESPONSE_LEN: usize = 3;

/// Index of the value byte in a query response
const QUERY_VALUE_INDEX: usize = 2;

/// Highest selectable track index
pub const MAX_TRACK_INDEX: u32 = 0xFFFF;

/// Highest volume step
pub const MAX_VOLUME: u8 = 0x30;

/// GD5800 MP3 playback module
///
/// Owns the byte channel to the module for its whole lifetime.
pub struct Gd5800Mp3<C: ByteChannel> {
    link: CommandLink<C>,
}

impl<C: ByteChannel> Gd5800Mp3<C> {
    /// Create a driver over a 9600-baud byte channel
    pub const fn new(channel: C) -> Self {
        Self {
            link: CommandLink::new(channel),
        }
    }

    /// Tear down the driver and recover the channel
    pub fn release(self) -> C {
        self.link.release()
    }

    /// Reset the module
    pub fn reset(&mut self) -> Result<(), Error<C::Error>> {
        self.link.execute(cmd::RESET, &[])
    }

    /// Start playback
    pub fn play(&mut self) -> Result<(), Error<C::Error>> {
        self.link.execute(cmd::PLAY, &[])
    }

    /// Stop playback
    pub fn stop(&mut self) -> Result<(), Error<C::Error>> {
        self.link.execute(cmd::STOP, &[])
    }

    /// Pause playback
    pub fn pause(&mut self) -> Result<(), Error<C::Error>> {
        self.link.execute(cmd::PAUSE, &[])
    }

    /// Toggle between playing and paused
    pub fn resume_or_pause(&mut self) -> Result<(), Error<C::Error>> {
        self.link.execute(cmd::RESUME_OR_PAUSE, &[])
    }

    /// Skip to the next track
    pub fn next(&mut self) -> Result<(), Error<C::Error>> {
        self.link.execute(cmd::NEXT, &[])
    }

    /// Skip to the previous track
    pub fn prev(&mut self) -> Result<(), Error<C::Error>> {
        self.link.execute(cmd::PREVIOUS, &[])
    }

    /// Seek forward within the current track
    pub fn fast_forward(&mut self) -> Result<(), Error<C::Error>> {
        self.link.execute(cmd::FAST_FORWARD, &[])
    }

    /// Seek backward within the current track
    pub fn fast_reverse(&mut self) -> Result<(), Error<C::Error>> {
        self.link.execute(cmd::FAST_REVERSE, &[])
    }

    /// Restart playback in the configured loop mode
    pub fn play_loop(&mut self) -> Result<(), Error<C::Error>> {
        self.link.execute(cmd::PLAY_LOOP, &[])
    }

    /// Start shuffled playback
    pub fn shuffle_play(&mut self) -> Result<(), Error<C::Error>> {
        self.link.execute(cmd::SHUFFLE_PLAY, &[])
    }

    /// Stop the current track and fall back to the background track
    pub fn stop_and_play_background(&mut self) -> Result<(), Error<C::Error>> {
        self.link.execute(cmd::STOP_AND_PLAY_BACKGROUND, &[])
    }

    /// Put the module into standby
    pub fn shutdown(&mut self) -> Result<(), Error<C::Error>> {
        self.link.execute(cmd::SHUTDOWN, &[])
    }

    /// Play the track at `index` (0..=65535)
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `index` exceeds [`MAX_TRACK_INDEX`];
    /// nothing is transmitted in that case.
    pub fn play_by_index(&mut self, index: u32) -> Result<(), Error<C::Error>> {
        if index > MAX_TRACK_INDEX {
            return Err(Error::InvalidArgument);
        }
        let args = [(index >> 8) as u8, index as u8];
        self.link.execute(cmd::PLAY_BY_INDEX, &args)
    }

    /// Step the volume up
    pub fn volume_up(&mut self) -> Result<(), Error<C::Error>> {
        self.link.execute(cmd::VOLUME_UP, &[])
    }

    /// Step the volume down
    pub fn volume_down(&mut self) -> Result<(), Error<C::Error>> {
        self.link.execute(cmd::VOLUME_DOWN, &[])
    }

    /// Current playback status, as reported by the module
    ///
    /// See [`PlaybackStatus::from_raw`](crate::types::PlaybackStatus::from_raw)
    /// for the documented values.
    pub fn status(&mut self) -> Result<u8, Error<C::Error>> {
        self.query_value(cmd::GET_STATUS)
    }

    /// Current volume step (0..=48)
    pub fn volume(&mut self) -> Result<u8, Error<C::Error>> {
        self.query_value(cmd::GET_VOLUME)
    }

    /// Set the volume step
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `volume` exceeds [`MAX_VOLUME`]; nothing
    /// is transmitted in that case.
    pub fn set_volume(&mut self, volume: u8) -> Result<(), Error<C::Error>> {
        if volume > MAX_VOLUME {
            return Err(Error::InvalidArgument);
        }
        self.link.execute(cmd::SET_VOLUME, &[volume])
    }

    /// Current equalizer preset, as reported by the module
    pub fn equalizer(&mut self) -> Result<u8, Error<C::Error>> {
        self.query_value(cmd::GET_EQUALIZER)
    }

    /// Select an equalizer preset
    pub fn set_equalizer(&mut self, equalizer: Equalizer) -> Result<(), Error<C::Error>> {
        self.link.execute(cmd::SET_EQUALIZER, &[equalizer.as_raw()])
    }

    /// Current loop mode, as reported by the module
    pub fn loop_mode(&mut self) -> Result<u8, Error<C::Error>> {
        self.query_value(cmd::GET_MODE)
    }

    /// Select a loop mode
    pub fn set_loop_mode(&mut self, loop_mode: LoopMode) -> Result<(), Error<C::Error>> {
        self.link.execute(cmd::SET_LOOP_MODE, &[loop_mode.as_raw()])
    }

    /// Issue a query and pull the value byte out of its response
    fn query_value(&mut self, opcode: u8) -> Result<u8, Error<C::Error>> {
        let response = self.link.query(opcode, &[], QUERY_RESPONSE_LEN)?;
        Ok(response[QUERY_VALUE_INDEX])
    }
}

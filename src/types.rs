//! Shared types used across the VoiceKit drivers
//!
//! This module defines the playback domain types reported by and sent to the
//! MP3 module. The driver reports device values verbatim as raw bytes; these
//! enums give a typed view over the documented value sets.

/// Playback state reported by the MP3 module
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackStatus {
    /// Nothing is playing
    Stopped,
    /// A track is playing
    Playing,
    /// Playback is paused
    Paused,
    /// An interlude track is interrupting the current one
    InterruptingPlaying,
}

impl PlaybackStatus {
    /// Interpret a raw status byte, `None` for undocumented values
    #[must_use]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Stopped),
            1 => Some(Self::Playing),
            2 => Some(Self::Paused),
            5 => Some(Self::InterruptingPlaying),
            _ => None,
        }
    }

    /// Get the raw status byte
    #[must_use]
    pub const fn as_raw(self) -> u8 {
        match self {
            Self::Stopped => 0,
            Self::Playing => 1,
            Self::Paused => 2,
            Self::InterruptingPlaying => 5,
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for PlaybackStatus {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Stopped => defmt::write!(f, "stopped"),
            Self::Playing => defmt::write!(f, "playing"),
            Self::Paused => defmt::write!(f, "paused"),
            Self::InterruptingPlaying => defmt::write!(f, "interrupting"),
        }
    }
}

/// Equalizer preset
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Equalizer {
    /// Flat response
    #[default]
    Normal,
    /// Pop preset
    Pop,
    /// Rock preset
    Rock,
    /// Jazz preset
    Jazz,
    /// Classical preset
    Classic,
    /// Bass-boost preset
    Bass,
}

impl Equalizer {
    /// Interpret a raw preset byte, `None` for undocumented values
    #[must_use]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Normal),
            1 => Some(Self::Pop),
            2 => Some(Self::Rock),
            3 => Some(Self::Jazz),
            4 => Some(Self::Classic),
            5 => Some(Self::Bass),
            _ => None,
        }
    }

    /// Get the raw preset byte
    #[must_use]
    pub const fn as_raw(self) -> u8 {
        match self {
            Self::Normal => 0,
            Self::Pop => 1,
            Self::Rock => 2,
            Self::Jazz => 3,
            Self::Classic => 4,
            Self::Bass => 5,
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Equalizer {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Normal => defmt::write!(f, "normal"),
            Self::Pop => defmt::write!(f, "pop"),
            Self::Rock => defmt::write!(f, "rock"),
            Self::Jazz => defmt::write!(f, "jazz"),
            Self::Classic => defmt::write!(f, "classic"),
            Self::Bass => defmt::write!(f, "bass"),
        }
    }
}

/// Track loop mode
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LoopMode {
    /// Repeat every track on the medium
    #[default]
    RepeatAll,
    /// Repeat the current folder
    RepeatFolder,
    /// Repeat the current track
    RepeatSingle,
    /// Shuffle across the medium
    Shuffle,
    /// Play the current track once, then stop
    SinglePlay,
}

impl LoopMode {
    /// Interpret a raw mode byte, `None` for undocumented values
    #[must_use]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::RepeatAll),
            1 => Some(Self::RepeatFolder),
            2 => Some(Self::RepeatSingle),
            3 => Some(Self::Shuffle),
            4 => Some(Self::SinglePlay),
            _ => None,
        }
    }

    /// Get the raw mode byte
    #[must_use]
    pub const fn as_raw(self) -> u8 {
        match self {
            Self::RepeatAll => 0,
            Self::RepeatFolder => 1,
            Self::RepeatSingle => 2,
            Self::Shuffle => 3,
            Self::SinglePlay => 4,
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for LoopMode {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::RepeatAll => defmt::write!(f, "repeat-all"),
            Self::RepeatFolder => defmt::write!(f, "repeat-folder"),
            Self::RepeatSingle => defmt::write!(f, "repeat-single"),
            Self::Shuffle => defmt::write!(f, "shuffle"),
            Self::SinglePlay => defmt::write!(f, "single-play"),
        }
    }
}

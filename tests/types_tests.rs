//! Types Module Tests
//!
//! Raw byte round-trips for the playback domain enums.

use voicekit_firmware::types::{Equalizer, LoopMode, PlaybackStatus};

// ============================================================================
// PlaybackStatus Tests
// ============================================================================

#[test]
fn test_playback_status_roundtrip() {
    for status in [
        PlaybackStatus::Stopped,
        PlaybackStatus::Playing,
        PlaybackStatus::Paused,
        PlaybackStatus::InterruptingPlaying,
    ] {
        assert_eq!(PlaybackStatus::from_raw(status.as_raw()), Some(status));
    }
}

#[test]
fn test_playback_status_values() {
    assert_eq!(PlaybackStatus::Stopped.as_raw(), 0);
    assert_eq!(PlaybackStatus::Playing.as_raw(), 1);
    assert_eq!(PlaybackStatus::Paused.as_raw(), 2);
    assert_eq!(PlaybackStatus::InterruptingPlaying.as_raw(), 5);
}

#[test]
fn test_playback_status_gap_values_unknown() {
    // 3 and 4 are holes in the device's value set.
    assert_eq!(PlaybackStatus::from_raw(3), None);
    assert_eq!(PlaybackStatus::from_raw(4), None);
    assert_eq!(PlaybackStatus::from_raw(0xFF), None);
}

// ============================================================================
// Equalizer Tests
// ============================================================================

#[test]
fn test_equalizer_roundtrip() {
    for eq in [
        Equalizer::Normal,
        Equalizer::Pop,
        Equalizer::Rock,
        Equalizer::Jazz,
        Equalizer::Classic,
        Equalizer::Bass,
    ] {
        assert_eq!(Equalizer::from_raw(eq.as_raw()), Some(eq));
    }
}

#[test]
fn test_equalizer_unknown_value() {
    assert_eq!(Equalizer::from_raw(6), None);
}

#[test]
fn test_equalizer_default_is_normal() {
    assert_eq!(Equalizer::default(), Equalizer::Normal);
}

// ============================================================================
// LoopMode Tests
// ============================================================================

#[test]
fn test_loop_mode_roundtrip() {
    for mode in [
        LoopMode::RepeatAll,
        LoopMode::RepeatFolder,
        LoopMode::RepeatSingle,
        LoopMode::Shuffle,
        LoopMode::SinglePlay,
    ] {
        assert_eq!(LoopMode::from_raw(mode.as_raw()), Some(mode));
    }
}

#[test]
fn test_loop_mode_unknown_value() {
    assert_eq!(LoopMode::from_raw(5), None);
}

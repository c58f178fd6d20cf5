//! GD5800 MP3 Driver Tests
//!
//! Facade-level tests: operation-to-frame mapping, argument range checks,
//! and value extraction from query responses.

mod common;

use common::{MockChannel, MockChannelError};
use voicekit_firmware::drivers::mp3::{Gd5800Mp3, MAX_TRACK_INDEX, MAX_VOLUME};
use voicekit_firmware::protocol::Error;
use voicekit_firmware::types::{Equalizer, LoopMode, PlaybackStatus};

/// Echo ack frame for a control command
fn ack(opcode: u8) -> [u8; 4] {
    [0xAA, 0x02, opcode, 0xEF]
}

/// Query response frame carrying one value byte
fn query_response(opcode: u8, value: u8) -> [u8; 6] {
    [0xAA, 0x04, opcode, 0x00, value, 0xEF]
}

// ============================================================================
// Control Command Tests
// ============================================================================

#[test]
fn test_play_frame() {
    let mut channel = MockChannel::new();
    channel.queue(&ack(0x01));

    let mut player = Gd5800Mp3::new(channel);
    player.play().unwrap();

    assert_eq!(player.release().writes, vec![vec![0x7E, 0x02, 0x01, 0xEF]]);
}

#[test]
fn test_stop_frame() {
    let mut channel = MockChannel::new();
    channel.queue(&ack(0x0E));

    let mut player = Gd5800Mp3::new(channel);
    player.stop().unwrap();

    assert_eq!(player.release().writes, vec![vec![0x7E, 0x02, 0x0E, 0xEF]]);
}

#[test]
fn test_control_opcodes() {
    // Every no-arg control maps to its documented opcode.
    type Control = fn(&mut Gd5800Mp3<MockChannel>) -> Result<(), Error<MockChannelError>>;
    let cases: [(Control, u8); 15] = [
        (Gd5800Mp3::play, 0x01),
        (Gd5800Mp3::pause, 0x02),
        (Gd5800Mp3::next, 0x03),
        (Gd5800Mp3::prev, 0x04),
        (Gd5800Mp3::volume_up, 0x05),
        (Gd5800Mp3::volume_down, 0x06),
        (Gd5800Mp3::play_loop, 0x07),
        (Gd5800Mp3::shuffle_play, 0x08),
        (Gd5800Mp3::stop_and_play_background, 0x09),
        (Gd5800Mp3::shutdown, 0x0A),
        (Gd5800Mp3::reset, 0x0B),
        (Gd5800Mp3::stop, 0x0E),
        (Gd5800Mp3::resume_or_pause, 0x0F),
        (Gd5800Mp3::fast_forward, 0x50),
        (Gd5800Mp3::fast_reverse, 0x51),
    ];

    for (operation, opcode) in cases {
        let mut channel = MockChannel::new();
        channel.queue(&ack(opcode));

        let mut player = Gd5800Mp3::new(channel);
        operation(&mut player).unwrap();

        assert_eq!(
            player.release().writes,
            vec![vec![0x7E, 0x02, opcode, 0xEF]],
            "opcode 0x{opcode:02X}"
        );
    }
}

// ============================================================================
// Track Selection Tests
// ============================================================================

#[test]
fn test_play_by_index_zero() {
    let mut channel = MockChannel::new();
    channel.queue(&ack(0x41));

    let mut player = Gd5800Mp3::new(channel);
    player.play_by_index(0).unwrap();

    assert_eq!(
        player.release().writes,
        vec![vec![0x7E, 0x04, 0x41, 0x00, 0x00, 0xEF]]
    );
}

#[test]
fn test_play_by_index_max() {
    let mut channel = MockChannel::new();
    channel.queue(&ack(0x41));

    let mut player = Gd5800Mp3::new(channel);
    player.play_by_index(MAX_TRACK_INDEX).unwrap();

    assert_eq!(
        player.release().writes,
        vec![vec![0x7E, 0x04, 0x41, 0xFF, 0xFF, 0xEF]]
    );
}

#[test]
fn test_play_by_index_big_endian_split() {
    let mut channel = MockChannel::new();
    channel.queue(&ack(0x41));

    let mut player = Gd5800Mp3::new(channel);
    player.play_by_index(0x1234).unwrap();

    assert_eq!(
        player.release().writes,
        vec![vec![0x7E, 0x04, 0x41, 0x12, 0x34, 0xEF]]
    );
}

#[test]
fn test_play_by_index_out_of_range() {
    let channel = MockChannel::new();

    let mut player = Gd5800Mp3::new(channel);
    let result = player.play_by_index(MAX_TRACK_INDEX + 1);
    assert_eq!(result, Err(Error::InvalidArgument));

    // Rejected before any I/O.
    assert!(player.release().writes.is_empty());
}

// ============================================================================
// Volume Tests
// ============================================================================

#[test]
fn test_set_volume_max() {
    let mut channel = MockChannel::new();
    channel.queue(&ack(0x31));

    let mut player = Gd5800Mp3::new(channel);
    player.set_volume(MAX_VOLUME).unwrap();

    assert_eq!(
        player.release().writes,
        vec![vec![0x7E, 0x03, 0x31, 0x30, 0xEF]]
    );
}

#[test]
fn test_set_volume_out_of_range() {
    let channel = MockChannel::new();

    let mut player = Gd5800Mp3::new(channel);
    let result = player.set_volume(MAX_VOLUME + 1);
    assert_eq!(result, Err(Error::InvalidArgument));

    assert!(player.release().writes.is_empty());
}

#[test]
fn test_volume_query() {
    let mut channel = MockChannel::new();
    channel.queue(&query_response(0x11, 26));

    let mut player = Gd5800Mp3::new(channel);
    assert_eq!(player.volume().unwrap(), 26);
}

// ============================================================================
// Status / Mode Tests
// ============================================================================

#[test]
fn test_status_reports_playing() {
    let mut channel = MockChannel::new();
    channel.queue(&query_response(0x10, 0x01));

    let mut player = Gd5800Mp3::new(channel);
    let raw = player.status().unwrap();
    assert_eq!(raw, 1);
    assert_eq!(PlaybackStatus::from_raw(raw), Some(PlaybackStatus::Playing));
}

#[test]
fn test_status_reports_undocumented_value_verbatim() {
    let mut channel = MockChannel::new();
    channel.queue(&query_response(0x10, 0x07));

    let mut player = Gd5800Mp3::new(channel);
    let raw = player.status().unwrap();
    assert_eq!(raw, 7);
    assert_eq!(PlaybackStatus::from_raw(raw), None);
}

#[test]
fn test_equalizer_roundtrip() {
    let mut channel = MockChannel::new();
    channel.queue(&ack(0x32));
    channel.queue(&query_response(0x12, Equalizer::Jazz.as_raw()));

    let mut player = Gd5800Mp3::new(channel);
    player.set_equalizer(Equalizer::Jazz).unwrap();
    assert_eq!(player.equalizer().unwrap(), Equalizer::Jazz.as_raw());

    assert_eq!(
        player.release().writes,
        vec![
            vec![0x7E, 0x03, 0x32, 0x03, 0xEF],
            vec![0x7E, 0x02, 0x12, 0xEF],
        ]
    );
}

#[test]
fn test_loop_mode_setter_frame() {
    let mut channel = MockChannel::new();
    channel.queue(&ack(0x33));

    let mut player = Gd5800Mp3::new(channel);
    player.set_loop_mode(LoopMode::RepeatSingle).unwrap();

    assert_eq!(
        player.release().writes,
        vec![vec![0x7E, 0x03, 0x33, 0x02, 0xEF]]
    );
}

#[test]
fn test_loop_mode_query() {
    let mut channel = MockChannel::new();
    channel.queue(&query_response(0x13, LoopMode::Shuffle.as_raw()));

    let mut player = Gd5800Mp3::new(channel);
    assert_eq!(player.loop_mode().unwrap(), 3);
}

// ============================================================================
// Desynchronization Tests
// ============================================================================

#[test]
fn test_stale_ack_from_previous_command_skipped() {
    let mut channel = MockChannel::new();
    // A late ack for an earlier play command sits in the receive buffer.
    channel.queue(&ack(0x01));
    channel.queue(&ack(0x0E));

    let mut player = Gd5800Mp3::new(channel);
    player.stop().unwrap();

    assert_eq!(player.release().frames_written(), 1);
}

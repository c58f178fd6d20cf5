//! VoiceKit Firmware Entry Point
//!
//! Brings up the kit peripherals on the STM32G474 carrier board and runs a
//! heartbeat. Application logic lives with the consumer; this binary only
//! proves the buses and modules out.

#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use embassy_stm32::gpio::{Level, Output, Speed};
use embassy_stm32::time::Hertz;
use embassy_stm32::usart::{Config as UartConfig, Uart};
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use voicekit_firmware::drivers::mp3::Gd5800Mp3;
use voicekit_firmware::hal::uart::SerialChannel;
use voicekit_firmware::prelude::*;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("VoiceKit firmware v{}", env!("CARGO_PKG_VERSION"));

    // Initialize STM32G474 peripherals with default clock configuration
    let config = embassy_stm32::Config::default();
    let p = embassy_stm32::init(config);

    info!("Peripherals initialized");

    // Status LED (PA5 on Nucleo-style boards)
    let led = Output::new(p.PA5, Level::Low, Speed::Low);

    // USART1 to the MP3 module, 9600 8N1
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = MP3_BAUD_RATE;
    let uart = Uart::new_blocking(p.USART1, p.PA10, p.PA9, uart_config).unwrap();

    let mut player = Gd5800Mp3::new(SerialChannel::new(uart));
    match player.status() {
        Ok(raw) => info!("MP3 module status: {}", PlaybackStatus::from_raw(raw)),
        Err(_) => info!("MP3 module not responding"),
    }

    // I2C1 for the keyboard and speech recognizer
    let _i2c = embassy_stm32::i2c::I2c::new_blocking(
        p.I2C1,
        p.PB8, // SCL
        p.PB9, // SDA
        Hertz(I2C_FREQUENCY_HZ),
        Default::default(),
    );

    info!("I2C1 initialized at {} Hz", I2C_FREQUENCY_HZ);

    // Spawn background tasks
    spawner.spawn(heartbeat_task(led)).unwrap();
    // spawner.spawn(keyboard_scan_task()).unwrap();
    // spawner.spawn(speech_event_task()).unwrap();

    info!("Tasks spawned, entering main loop");

    // Main loop - additional coordination can happen here
    loop {
        Timer::after(Duration::from_secs(10)).await;
        info!("Main loop tick");
    }
}

/// Heartbeat task - blinks LED to show system is running
#[embassy_executor::task]
async fn heartbeat_task(mut led: Output<'static>) {
    loop {
        led.set_high();
        Timer::after(Duration::from_millis(100)).await;
        led.set_low();
        Timer::after(Duration::from_millis(900)).await;
    }
}

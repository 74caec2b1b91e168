use std::time::Duration;

pub const API_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
pub const LOG_LEVEL: &str = "info";
pub const POLL_INTERVAL: Duration = Duration::from_secs(600);
pub const EPD_PATH: &str = "/dev/epd";

/// Canvas size used when no panel answers (2.7" e-paper, landscape)
pub const CANVAS_WIDTH: u32 = 264;
pub const CANVAS_HEIGHT: u32 = 176;

pub const SPI_DEVICE: &str = "/dev/spidev0.0";
pub const SPI_SPEED_HZ: u32 = 4_000_000;
pub const GPIO_CHIP: &str = "/dev/gpiochip0";
pub const GPIO_RST: u32 = 17;
pub const GPIO_DC: u32 = 25;
pub const GPIO_BUSY: u32 = 24;

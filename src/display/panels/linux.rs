use std::io;

use linux_embedded_hal::gpio_cdev::{Chip, LineRequestFlags};
use linux_embedded_hal::spidev::{SpiModeFlags, Spidev, SpidevOptions};
use linux_embedded_hal::{CdevPin, Delay, SpidevDevice};

use super::{Epd2in7, Panel, PanelError};
use crate::constants::defaults;

const CONSUMER: &str = "netatmo-display";

fn not_present_if_missing(e: io::Error) -> PanelError {
    if e.kind() == io::ErrorKind::NotFound {
        PanelError::NotPresent
    } else {
        e.into()
    }
}

fn gpio<E: std::fmt::Debug>(e: E) -> PanelError {
    PanelError::Bus(format!("{e:?}"))
}

fn request(chip: &mut Chip, offset: u32, flags: LineRequestFlags) -> Result<CdevPin, PanelError> {
    let handle = chip
        .get_line(offset)
        .and_then(|line| line.request(flags, 0, CONSUMER))
        .map_err(gpio)?;
    CdevPin::new(handle).map_err(gpio)
}

/// Opens the Waveshare HAT on the Raspberry Pi SPI bus and GPIO header.
pub fn open_waveshare() -> Result<Box<dyn Panel>, PanelError> {
    let mut spi = SpidevDevice(Spidev::open(defaults::SPI_DEVICE).map_err(not_present_if_missing)?);
    let options = SpidevOptions::new()
        .bits_per_word(8)
        .max_speed_hz(defaults::SPI_SPEED_HZ)
        .mode(SpiModeFlags::SPI_MODE_0)
        .build();
    spi.0.configure(&options)?;

    let mut chip = Chip::new(defaults::GPIO_CHIP).map_err(gpio)?;
    let rst = request(&mut chip, defaults::GPIO_RST, LineRequestFlags::OUTPUT)?;
    let dc = request(&mut chip, defaults::GPIO_DC, LineRequestFlags::OUTPUT)?;
    let busy = request(&mut chip, defaults::GPIO_BUSY, LineRequestFlags::INPUT)?;

    Ok(Box::new(Epd2in7::new(spi, busy, dc, rst, Delay)))
}

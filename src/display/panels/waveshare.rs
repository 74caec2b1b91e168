//! Waveshare 2.7" e-Paper HAT (V2), over any `embedded-hal` SPI device and
//! pins.
//!
//! The controller is portrait (176x264); frames are rotated from the
//! landscape canvas on the way out.

use embedded_graphics::prelude::Size;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::spi::SpiDevice;

use super::{check_size, Panel, PanelError};
use crate::display::canvas::MonoCanvas;

const WIDTH: u32 = 176;
const HEIGHT: u32 = 264;
const CHUNK: usize = 4096;
const BUSY_POLL_MS: u32 = 20;
const BUSY_TIMEOUT_MS: u32 = 10_000;

mod cmd {
    pub const DEEP_SLEEP: u8 = 0x10;
    pub const DATA_ENTRY_MODE: u8 = 0x11;
    pub const SW_RESET: u8 = 0x12;
    pub const MASTER_ACTIVATION: u8 = 0x20;
    pub const UPDATE_CONTROL_2: u8 = 0x22;
    pub const WRITE_RAM: u8 = 0x24;
    pub const RAM_Y_RANGE: u8 = 0x45;
    pub const RAM_Y_COUNTER: u8 = 0x4F;
}

fn bus<E: core::fmt::Debug>(e: E) -> PanelError {
    PanelError::Bus(format!("{e:?}"))
}

pub struct Epd2in7<SPI, BUSY, DC, RST, DELAY> {
    spi: SPI,
    busy: BUSY,
    dc: DC,
    rst: RST,
    delay: DELAY,
}

impl<SPI, BUSY, DC, RST, DELAY> Epd2in7<SPI, BUSY, DC, RST, DELAY>
where
    SPI: SpiDevice,
    BUSY: InputPin,
    DC: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
{
    pub fn new(spi: SPI, busy: BUSY, dc: DC, rst: RST, delay: DELAY) -> Self {
        Epd2in7 {
            spi,
            busy,
            dc,
            rst,
            delay,
        }
    }

    fn command(&mut self, command: u8) -> Result<(), PanelError> {
        self.dc.set_low().map_err(bus)?;
        self.spi.write(&[command]).map_err(bus)
    }

    fn data(&mut self, data: &[u8]) -> Result<(), PanelError> {
        self.dc.set_high().map_err(bus)?;
        for chunk in data.chunks(CHUNK) {
            self.spi.write(chunk).map_err(bus)?;
        }
        Ok(())
    }

    fn command_with(&mut self, command: u8, data: &[u8]) -> Result<(), PanelError> {
        self.command(command)?;
        self.data(data)
    }

    /// BUSY is high while the controller works.
    fn wait_until_idle(&mut self) -> Result<(), PanelError> {
        let mut waited = 0;
        while self.busy.is_high().map_err(bus)? {
            if waited >= BUSY_TIMEOUT_MS {
                return Err(PanelError::BusyTimeout);
            }
            self.delay.delay_ms(BUSY_POLL_MS);
            waited += BUSY_POLL_MS;
        }
        Ok(())
    }

    fn reset(&mut self) -> Result<(), PanelError> {
        self.rst.set_high().map_err(bus)?;
        self.delay.delay_ms(200);
        self.rst.set_low().map_err(bus)?;
        self.delay.delay_ms(2);
        self.rst.set_high().map_err(bus)?;
        self.delay.delay_ms(200);
        Ok(())
    }

    fn init(&mut self) -> Result<(), PanelError> {
        self.reset()?;
        self.wait_until_idle()?;
        self.command(cmd::SW_RESET)?;
        self.wait_until_idle()?;
        self.command_with(cmd::RAM_Y_RANGE, &[0x00, 0x00, 0x07, 0x01])?;
        self.command_with(cmd::RAM_Y_COUNTER, &[0x00, 0x00])?;
        self.command_with(cmd::DATA_ENTRY_MODE, &[0x03])
    }

    fn display(&mut self, frame: &[u8]) -> Result<(), PanelError> {
        self.command_with(cmd::WRITE_RAM, frame)?;
        self.command_with(cmd::UPDATE_CONTROL_2, &[0xF7])?;
        self.command(cmd::MASTER_ACTIVATION)?;
        self.wait_until_idle()
    }

    fn sleep(&mut self) -> Result<(), PanelError> {
        self.command_with(cmd::DEEP_SLEEP, &[0x01])
    }
}

/// Rotates the landscape canvas a quarter turn counter-clockwise into the
/// controller's portrait frame, a set bit meaning white.
pub fn portrait_frame(canvas: &MonoCanvas) -> Vec<u8> {
    let landscape_w = canvas.width();
    let mut frame = vec![0xFF; (WIDTH.div_ceil(8) * HEIGHT) as usize];
    for ny in 0..HEIGHT {
        for nx in 0..WIDTH {
            if ny < landscape_w && canvas.is_ink(landscape_w - 1 - ny, nx) {
                let bit = nx + ny * WIDTH;
                frame[(bit / 8) as usize] &= !(0x80 >> (bit % 8));
            }
        }
    }
    frame
}

impl<SPI, BUSY, DC, RST, DELAY> Panel for Epd2in7<SPI, BUSY, DC, RST, DELAY>
where
    SPI: SpiDevice,
    BUSY: InputPin,
    DC: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
{
    fn name(&self) -> &'static str {
        "Waveshare 2.7\""
    }

    fn size(&self) -> Size {
        Size::new(HEIGHT, WIDTH)
    }

    fn show(&mut self, canvas: &MonoCanvas) -> Result<(), PanelError> {
        check_size(self, canvas)?;
        self.init()?;
        self.display(&portrait_frame(canvas))?;
        self.sleep()
    }
}

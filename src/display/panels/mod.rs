use std::io;

use embedded_graphics::prelude::Size;
use thiserror::Error;

use super::canvas::MonoCanvas;

mod papirus;
mod waveshare;

#[cfg(target_os = "linux")]
mod linux;

pub use papirus::Papirus;
pub use waveshare::Epd2in7;

#[cfg(target_os = "linux")]
pub use linux::open_waveshare;

#[derive(Error, Debug)]
pub enum PanelError {
    #[error("panel not present")]
    NotPresent,
    #[error("unrecognised panel description '{0}'")]
    UnknownPanel(String),
    #[error("canvas is {got:?}, panel expects {expected:?}")]
    SizeMismatch { expected: Size, got: Size },
    #[error("panel I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("bus error: {0}")]
    Bus(String),
    #[error("panel stayed busy")]
    BusyTimeout,
}

/// A physical monochrome display.
pub trait Panel {
    fn name(&self) -> &'static str;

    /// Native size in landscape orientation.
    fn size(&self) -> Size;

    /// Pushes a full frame and refreshes the panel.
    fn show(&mut self, canvas: &MonoCanvas) -> Result<(), PanelError>;
}

fn check_size(panel: &dyn Panel, canvas: &MonoCanvas) -> Result<(), PanelError> {
    let got = Size::new(canvas.width(), canvas.height());
    if got != panel.size() {
        return Err(PanelError::SizeMismatch {
            expected: panel.size(),
            got,
        });
    }
    Ok(())
}

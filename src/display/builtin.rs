use std::path::PathBuf;

use embedded_graphics::prelude::Size;

use super::panels::{Panel, PanelError, Papirus};
use super::view::DisplayView;
use super::{bmp, layout, DisplayError};
use crate::constants::defaults;
use crate::helpers::base_path;

pub type Probe = Box<dyn Fn() -> Result<Box<dyn Panel>, PanelError>>;

/// Probes, in order: PaPiRus, then the Waveshare HAT.
pub fn default_probes() -> Vec<Probe> {
    let mut probes: Vec<Probe> = vec![Box::new(|| {
        Papirus::probe(&base_path::EPD_PATH).map(|p| Box::new(p) as Box<dyn Panel>)
    })];
    #[cfg(target_os = "linux")]
    probes.push(Box::new(super::panels::open_waveshare));
    probes
}

/// Renders in-process onto the first panel that accepts the frame, always
/// keeping a bitmap copy on disk.
pub struct BuiltinDisplay {
    probes: Vec<Probe>,
    image_path: PathBuf,
}

impl BuiltinDisplay {
    pub fn new(probes: Vec<Probe>, image_path: PathBuf) -> Self {
        BuiltinDisplay { probes, image_path }
    }

    /// Returns the name of the panel that was updated, if any.
    pub fn show(&self, view: &DisplayView) -> Result<Option<&'static str>, DisplayError> {
        for probe in &self.probes {
            let mut panel = match probe() {
                Ok(panel) => panel,
                Err(PanelError::NotPresent) => continue,
                Err(e) => {
                    log::warn!("Display probe failed: {}", e);
                    continue;
                }
            };
            let canvas = layout::render(view, panel.size());
            bmp::write(&canvas, &self.image_path)?;
            match panel.show(&canvas) {
                Ok(()) => {
                    log::info!("Updated {} display", panel.name());
                    return Ok(Some(panel.name()));
                }
                Err(e) => log::warn!("Could not update {} display: {}", panel.name(), e),
            }
        }

        log::info!(
            "No display found, image written to {}",
            self.image_path.display()
        );
        let canvas = layout::render(
            view,
            Size::new(defaults::CANVAS_WIDTH, defaults::CANVAS_HEIGHT),
        );
        bmp::write(&canvas, &self.image_path)?;
        Ok(None)
    }
}

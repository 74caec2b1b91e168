//! PaPiRus e-paper HAT, driven through the EPD fuse filesystem.
//!
//! The fuse driver exposes `panel` (a description such as
//! `EPD 2.7 264x176 COG 2 FILM 231`), `LE/display_inverse` taking one packed
//! frame, and `command` accepting `U` for a full update.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use embedded_graphics::prelude::Size;

use super::{check_size, Panel, PanelError};
use crate::display::canvas::MonoCanvas;

pub struct Papirus {
    root: PathBuf,
    size: Size,
}

/// Upper bound on either side of a described panel.
const MAX_SIDE: u32 = 1024;

fn parse_size(description: &str) -> Option<Size> {
    description.split_whitespace().find_map(|word| {
        let (w, h) = word.split_once('x')?;
        let size = Size::new(w.parse().ok()?, h.parse().ok()?);
        let valid = (1..=MAX_SIDE).contains(&size.width) && (1..=MAX_SIDE).contains(&size.height);
        valid.then_some(size)
    })
}

impl Papirus {
    pub fn probe(root: &Path) -> Result<Self, PanelError> {
        let description = match fs::read_to_string(root.join("panel")) {
            Ok(d) => d,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(PanelError::NotPresent),
            Err(e) => return Err(e.into()),
        };
        let size = parse_size(&description)
            .ok_or_else(|| PanelError::UnknownPanel(description.trim().to_string()))?;
        log::debug!("Found PaPiRus panel '{}'", description.trim());
        Ok(Papirus {
            root: root.to_path_buf(),
            size,
        })
    }
}

impl Panel for Papirus {
    fn name(&self) -> &'static str {
        "PaPiRus"
    }

    fn size(&self) -> Size {
        self.size
    }

    fn show(&mut self, canvas: &MonoCanvas) -> Result<(), PanelError> {
        check_size(self, canvas)?;
        fs::write(self.root.join("LE").join("display_inverse"), canvas.packed())?;
        fs::write(self.root.join("command"), "U")?;
        Ok(())
    }
}

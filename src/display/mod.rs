mod bmp;
mod builtin;
mod canvas;
mod external;
mod fonts;
mod layout;
pub mod panels;
mod view;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub use builtin::{default_probes, BuiltinDisplay, Probe};
pub use canvas::MonoCanvas;
pub use external::CommandDisplay;
pub use layout::render;
pub use view::DisplayView;

use crate::data_mgmt::Readings;
use crate::helpers::Zone;
use crate::interfaces::StateDir;
use crate::node_mgmt::DisplayChoice;

#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("could not write image: {0}")]
    Io(#[from] io::Error),
    #[error("display program {program:?} failed: {status}")]
    Program { program: PathBuf, status: String },
}

/// Whatever the loop does with fresh readings after reporting them.
pub trait DisplaySink {
    fn show(&mut self, readings: &Readings, zone: &Zone) -> Result<(), DisplayError>;
}

impl DisplaySink for BuiltinDisplay {
    fn show(&mut self, readings: &Readings, zone: &Zone) -> Result<(), DisplayError> {
        BuiltinDisplay::show(self, &DisplayView::new(readings, zone)).map(|_| ())
    }
}

impl DisplaySink for CommandDisplay {
    fn show(&mut self, _readings: &Readings, _zone: &Zone) -> Result<(), DisplayError> {
        self.run()
    }
}

/// Builds the sink selected in config, or `None` when display is disabled.
pub fn sink_for(choice: &DisplayChoice, state: &StateDir) -> Option<Box<dyn DisplaySink>> {
    match choice {
        DisplayChoice::Builtin => Some(Box::new(BuiltinDisplay::new(
            default_probes(),
            state.image_file(),
        ))),
        DisplayChoice::Command { program, args } => Some(Box::new(CommandDisplay::new(
            program.clone(),
            args.clone(),
            state.root().to_path_buf(),
        ))),
        DisplayChoice::Disabled => None,
    }
}

use std::path::PathBuf;

use super::DisplayError;
use crate::helpers::run_program;

/// Hands display duty to an operator-supplied program, run from the state
/// directory so it can read `data.json` itself.
pub struct CommandDisplay {
    program: PathBuf,
    args: Vec<String>,
    cwd: PathBuf,
}

impl CommandDisplay {
    pub fn new(program: PathBuf, args: Vec<String>, cwd: PathBuf) -> Self {
        CommandDisplay { program, args, cwd }
    }

    pub fn run(&self) -> Result<(), DisplayError> {
        let status = run_program(&self.program, &self.args, &self.cwd)?;
        if !status.success() {
            return Err(DisplayError::Program {
                program: self.program.clone(),
                status: status.to_string(),
            });
        }
        Ok(())
    }
}

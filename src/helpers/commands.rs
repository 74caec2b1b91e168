use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};

/// Runs an external program to completion, logging its output.
pub fn run_program(program: &Path, args: &[String], cwd: &Path) -> io::Result<ExitStatus> {
    let output = Command::new(program).args(args).current_dir(cwd).output()?;
    let message = format!(
        "Program: {}\n{}\nstdout: {}stderr: {}",
        program.display(),
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    if output.status.success() {
        log::debug!("{}", message);
    } else {
        log::warn!("{}", message);
    }
    Ok(output.status)
}

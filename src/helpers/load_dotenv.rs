use std::path::PathBuf;

use crate::helpers::base_path;

/// Loads `.env` from the working directory, then from the state directory.
///
/// Runs before the logger exists, so the loaded paths are returned for the
/// caller to report.
pub fn load_dotenv() -> Vec<PathBuf> {
    let mut loaded = Vec::new();
    if let Ok(path) = dotenv::dotenv() {
        loaded.push(path);
    }
    let state_dotenv = base_path::DATA_DIR.join(".env");
    if !loaded.contains(&state_dotenv)
        && state_dotenv.is_file()
        && dotenv::from_path(&state_dotenv).is_ok()
    {
        loaded.push(state_dotenv);
    }
    loaded
}

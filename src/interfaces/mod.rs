mod netatmo_api;
mod state_files;

pub use netatmo_api::{ApiError, NetatmoApi};
pub use state_files::StateDir;

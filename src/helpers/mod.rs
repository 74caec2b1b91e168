mod commands;
mod json_file;
mod load_dotenv;
mod shutdown;
mod time;

pub use commands::run_program;
pub use json_file::{read_json, write_json};
pub use load_dotenv::load_dotenv;
pub use shutdown::listen_for_shutdown;
pub use time::Zone;

pub mod base_path;

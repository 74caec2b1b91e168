pub mod config;
pub mod token;

pub use config::{Config, ConfigError, DisplayChoice};
pub use token::{Token, TokenError};

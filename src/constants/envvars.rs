pub const DATA_DIR: &str = "ND_DATA_DIR";
pub const EPD_PATH: &str = "ND_EPD_PATH";

pub const LOG_LEVEL: &str = "LOG_LEVEL";

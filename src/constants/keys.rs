// File names inside the state directory
pub const CONFIG_FILE: &str = "config.json";
pub const TOKEN_FILE: &str = "token.json";
pub const DATA_FILE: &str = "data.json";
pub const IMAGE_FILE: &str = "image.bmp";

// Placeholder written into freshly created config/token files
pub const PLACEHOLDER: &str = "xx";

pub const API_BASE_URL: &str = "https://api.netatmo.com";
pub const TOKEN_PATH: &str = "/oauth2/token";
pub const STATION_DATA_PATH: &str = "/api/getstationsdata";
pub const DEV_PORTAL_URL: &str = "https://dev.netatmo.com/apps";
pub const TOKEN_SCOPE: &str = "read_station";

#![allow(dead_code)]

/// Indoor 21.5, outdoor 15.0, rain 0.0 at 2019-09-17T12:05:00Z, metric units
pub const MINIMAL_PAYLOAD: &str = r#"{
  "body": {
    "user": {"administrative": {"unit": 0, "windunit": 0, "pressureunit": 0}},
    "devices": [{
      "_id": "70:ee:50:00:00:01",
      "station_name": "Home",
      "dashboard_data": {"time_utc": 1568721860, "Temperature": 21.5},
      "modules": [
        {"_id": "02:00:00:00:00:01", "type": "NAModule1", "dashboard_data": {"Temperature": 15.0}},
        {"_id": "05:00:00:00:00:01", "type": "NAModule3", "dashboard_data": {"Rain": 0.0}}
      ]
    }]
  },
  "status": "ok",
  "time_exec": 0.05,
  "time_server": 1568721900
}"#;

pub const FULL_PAYLOAD: &str = r#"{
  "body": {
    "user": {"administrative": {"unit": 0, "windunit": 2, "pressureunit": 0}},
    "devices": [{
      "_id": "70:ee:50:00:00:01",
      "station_name": "Home",
      "dashboard_data": {
        "Temperature": 21.5, "temp_trend": "up",
        "Pressure": 1013.2, "pressure_trend": "stable"
      },
      "modules": [
        {"type": "NAModule4", "module_name": "Bedroom", "dashboard_data": {"Temperature": 19.2, "temp_trend": "down"}},
        {"type": "NAModule2", "dashboard_data": {"WindStrength": 4, "WindAngle": 225}},
        {"type": "NAModule3", "dashboard_data": {"Rain": 1.2}},
        {"type": "NAModule1", "dashboard_data": {"Temperature": 15.0, "temp_trend": "stable"}}
      ]
    }]
  },
  "status": "ok",
  "time_server": 1568721900
}"#;

pub const DEVICE_ID: &str = "70:ee:50:00:00:01";

pub const TOKEN: &str = r#"{"access_token": "old-access", "refresh_token": "old-refresh", "expires_in": 10800}"#;

/// Config pointing at a mock API, with display disabled.
pub fn config(api_base_url: &str) -> String {
    serde_json::json!({
        "client_id": "id",
        "client_secret": "secret",
        "device_id": DEVICE_ID,
        "timezone": "Europe/Paris",
        "display": {"kind": "none"},
        "api_base_url": api_base_url,
    })
    .to_string()
}

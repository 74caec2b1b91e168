//! Typed view of the `getstationsdata` response.
//!
//! Every leaf is optional and tolerant: a key that is missing, `null` or of
//! the wrong type reads as `None` instead of failing the whole payload. The
//! only hard requirement is a top-level `body` object.

use serde::de::{DeserializeOwned, Deserializer, Error as _};
use serde::Deserialize;
use serde_json::Value;

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn body_object<'de, D>(deserializer: D) -> Result<Body, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => serde_json::from_value(value).map_err(D::Error::custom),
        other => Err(D::Error::custom(format!(
            "`body` must be an object, got {}",
            other
        ))),
    }
}

fn lenient_modules<'de, D>(deserializer: D) -> Result<Vec<Module>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Ok(raw) = serde_json::from_value::<Vec<Value>>(value) else {
        return Ok(Vec::new());
    };
    Ok(raw
        .into_iter()
        .map(|m| serde_json::from_value(m).unwrap_or(Module::Unknown))
        .collect())
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StationPayload {
    #[serde(deserialize_with = "body_object")]
    pub body: Body,
    #[serde(default, deserialize_with = "lenient")]
    pub time_server: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Body {
    #[serde(default, deserialize_with = "lenient")]
    pub user: Option<User>,
    #[serde(default, deserialize_with = "lenient")]
    pub devices: Option<Vec<Device>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "lenient")]
    pub administrative: Option<Administrative>,
}

/// Per-account unit preferences, as indices into the provider's unit tables.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Administrative {
    #[serde(default, deserialize_with = "lenient")]
    pub unit: Option<u8>,
    #[serde(default, deserialize_with = "lenient")]
    pub windunit: Option<u8>,
    #[serde(default, deserialize_with = "lenient")]
    pub pressureunit: Option<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Device {
    #[serde(default, deserialize_with = "lenient")]
    pub dashboard_data: Option<Dashboard>,
    #[serde(default, deserialize_with = "lenient_modules")]
    pub modules: Vec<Module>,
}

/// Sensor module attached to the main station, dispatched on its `type` tag.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum Module {
    #[serde(rename = "NAModule1")]
    Outdoor(ModuleData),
    #[serde(rename = "NAModule2")]
    Wind(ModuleData),
    #[serde(rename = "NAModule3")]
    Rain(ModuleData),
    #[serde(rename = "NAModule4")]
    ExtraIndoor(ModuleData),
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ModuleData {
    #[serde(default, deserialize_with = "lenient")]
    pub module_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub dashboard_data: Option<Dashboard>,
}

/// Latest measurements of one device or module. Which keys are present
/// depends on the kind of sensor.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Dashboard {
    #[serde(rename = "Temperature", default, deserialize_with = "lenient")]
    pub temperature: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub temp_trend: Option<String>,
    #[serde(rename = "Pressure", default, deserialize_with = "lenient")]
    pub pressure: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub pressure_trend: Option<String>,
    #[serde(rename = "WindStrength", default, deserialize_with = "lenient")]
    pub wind_strength: Option<f64>,
    #[serde(rename = "WindAngle", default, deserialize_with = "lenient")]
    pub wind_angle: Option<f64>,
    #[serde(rename = "Rain", default, deserialize_with = "lenient")]
    pub rain: Option<f64>,
}

impl StationPayload {
    /// The main station unit; the provider lists it first.
    pub fn main_device(&self) -> Option<&Device> {
        self.body.devices.as_ref().and_then(|d| d.first())
    }

    pub fn administrative(&self) -> Option<&Administrative> {
        self.body.user.as_ref()?.administrative.as_ref()
    }
}

impl ModuleData {
    pub fn dashboard(&self) -> Option<&Dashboard> {
        self.dashboard_data.as_ref()
    }
}

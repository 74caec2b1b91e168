use super::models::{Dashboard, Module, StationPayload};
use super::units::Units;

/// Direction of change since the previous measurement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Stable,
    #[default]
    Unknown,
}

impl Trend {
    pub fn glyph(self) -> char {
        match self {
            Trend::Up => '↗',
            Trend::Down => '↘',
            Trend::Stable => '→',
            Trend::Unknown => ' ',
        }
    }
}

impl From<Option<&str>> for Trend {
    fn from(raw: Option<&str>) -> Self {
        match raw {
            Some("up") => Trend::Up,
            Some("down") => Trend::Down,
            Some("stable") => Trend::Stable,
            _ => Trend::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub value: f64,
    pub trend: Trend,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wind {
    pub strength: f64,
    pub angle: f64,
}

/// Temperature of the optional additional indoor module, under its own name.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedMeasurement {
    pub name: String,
    pub measurement: Measurement,
}

/// Everything the reporter and the renderer show, each reading either
/// present or absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Readings {
    pub time_server: Option<i64>,
    pub units: Units,
    pub indoor: Option<Measurement>,
    pub pressure: Option<Measurement>,
    pub outdoor: Option<Measurement>,
    pub wind: Option<Wind>,
    pub rain: Option<f64>,
    pub extra_indoor: Option<NamedMeasurement>,
}

const EXTRA_INDOOR_NAME: &str = "Indoor 2";

fn temperature(dashboard: Option<&Dashboard>) -> Option<Measurement> {
    let dashboard = dashboard?;
    Some(Measurement {
        value: dashboard.temperature?,
        trend: dashboard.temp_trend.as_deref().into(),
    })
}

fn pressure(dashboard: Option<&Dashboard>) -> Option<Measurement> {
    let dashboard = dashboard?;
    Some(Measurement {
        value: dashboard.pressure?,
        trend: dashboard.pressure_trend.as_deref().into(),
    })
}

fn wind(dashboard: Option<&Dashboard>) -> Option<Wind> {
    let dashboard = dashboard?;
    Some(Wind {
        strength: dashboard.wind_strength?,
        angle: dashboard.wind_angle?,
    })
}

impl Readings {
    pub fn extract(payload: &StationPayload) -> Self {
        let mut readings = Readings {
            time_server: payload.time_server,
            units: Units::from_administrative(payload.administrative()),
            ..Default::default()
        };
        let Some(device) = payload.main_device() else {
            return readings;
        };

        let indoor = device.dashboard_data.as_ref();
        readings.indoor = temperature(indoor);
        readings.pressure = pressure(indoor);

        // First module of each kind wins
        for module in &device.modules {
            match module {
                Module::Outdoor(m) => {
                    readings.outdoor = readings.outdoor.or_else(|| temperature(m.dashboard()));
                }
                Module::Wind(m) => {
                    readings.wind = readings.wind.or_else(|| wind(m.dashboard()));
                }
                Module::Rain(m) => {
                    readings.rain = readings.rain.or_else(|| m.dashboard()?.rain);
                }
                Module::ExtraIndoor(m) => {
                    if readings.extra_indoor.is_none() {
                        readings.extra_indoor =
                            temperature(m.dashboard()).map(|measurement| NamedMeasurement {
                                name: m
                                    .module_name
                                    .clone()
                                    .unwrap_or_else(|| EXTRA_INDOOR_NAME.to_string()),
                                measurement,
                            });
                    }
                }
                Module::Unknown => {}
            }
        }
        readings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::{json, Value};

    use crate::data_mgmt::units::UnitSystem;

    fn extract(value: Value) -> Readings {
        Readings::extract(&serde_json::from_value(value).unwrap())
    }

    fn full_payload() -> Value {
        json!({
            "time_server": 1568721900,
            "body": {
                "user": {"administrative": {"unit": 0, "windunit": 0, "pressureunit": 0}},
                "devices": [{
                    "station_name": "Home",
                    "dashboard_data": {
                        "Temperature": 21.5, "temp_trend": "up",
                        "Pressure": 1013.2, "pressure_trend": "stable"
                    },
                    "modules": [
                        {"type": "NAModule1", "dashboard_data": {"Temperature": 15.0, "temp_trend": "down"}},
                        {"type": "NAModule3", "dashboard_data": {"Rain": 0.0}},
                        {"type": "NAModule2", "dashboard_data": {"WindStrength": 12, "WindAngle": 270}},
                        {"type": "NAModule4", "module_name": "Bedroom", "dashboard_data": {"Temperature": 19.8}}
                    ]
                }]
            }
        })
    }

    #[test]
    fn extracts_every_reading() {
        let readings = extract(full_payload());

        assert_eq!(readings.time_server, Some(1568721900));
        assert_eq!(readings.units.system, UnitSystem::Metric);
        assert_eq!(
            readings.indoor,
            Some(Measurement {
                value: 21.5,
                trend: Trend::Up
            })
        );
        assert_eq!(readings.pressure.unwrap().trend, Trend::Stable);
        assert_eq!(
            readings.outdoor,
            Some(Measurement {
                value: 15.0,
                trend: Trend::Down
            })
        );
        assert_eq!(
            readings.wind,
            Some(Wind {
                strength: 12.0,
                angle: 270.0
            })
        );
        assert_eq!(readings.rain, Some(0.0));
        let extra = readings.extra_indoor.unwrap();
        assert_eq!(extra.name, "Bedroom");
        assert_eq!(extra.measurement.trend, Trend::Unknown);
    }

    #[test]
    fn modules_are_found_by_type_not_position() {
        let mut payload = full_payload();
        let modules = payload["body"]["devices"][0]["modules"]
            .as_array_mut()
            .unwrap();
        modules.reverse();
        assert_eq!(extract(payload), extract(full_payload()));
    }

    #[test]
    fn missing_module_leaves_reading_absent() {
        let mut payload = full_payload();
        payload["body"]["devices"][0]["modules"]
            .as_array_mut()
            .unwrap()
            .retain(|m| m["type"] != "NAModule3");
        let readings = extract(payload);

        assert_eq!(readings.rain, None);
        assert!(readings.outdoor.is_some());
    }

    #[test]
    fn missing_dashboard_or_field_is_absent() {
        let readings = extract(json!({"body": {"devices": [{
            "modules": [
                {"type": "NAModule1"},
                {"type": "NAModule2", "dashboard_data": {"WindStrength": 3}},
                {"type": "NAModule4", "dashboard_data": {}}
            ]
        }]}}));

        assert_eq!(readings.indoor, None);
        assert_eq!(readings.pressure, None);
        assert_eq!(readings.outdoor, None);
        assert_eq!(readings.wind, None);
        assert_eq!(readings.extra_indoor, None);
    }

    #[test]
    fn no_devices_yields_empty_readings() {
        let readings = extract(json!({"body": {"devices": []}, "time_server": 10}));
        assert_eq!(
            readings,
            Readings {
                time_server: Some(10),
                ..Default::default()
            }
        );
    }

    #[test]
    fn unnamed_extra_module_gets_default_name() {
        let readings = extract(json!({"body": {"devices": [{"modules": [
            {"type": "NAModule4", "dashboard_data": {"Temperature": 18.0}}
        ]}]}}));
        assert_eq!(readings.extra_indoor.unwrap().name, "Indoor 2");
    }

    #[test]
    fn trend_glyphs() {
        assert_eq!(Trend::from(Some("up")).glyph(), '↗');
        assert_eq!(Trend::from(Some("down")).glyph(), '↘');
        assert_eq!(Trend::from(Some("stable")).glyph(), '→');
        assert_eq!(Trend::from(Some("sideways")).glyph(), ' ');
        assert_eq!(Trend::from(None), Trend::Unknown);
    }
}

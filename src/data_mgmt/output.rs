use super::readings::Readings;
use crate::helpers::Zone;

/// Formatting options for the console line.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineStyle {
    /// Append unit labels to each value
    pub units: bool,
}

/// One-line summary of the readings. Segments for absent readings are left
/// out entirely.
pub fn console_line(readings: &Readings, zone: &Zone, style: LineStyle) -> String {
    let units = &readings.units;
    let suffix = |label: &str| {
        if style.units {
            format!(" {label}")
        } else {
            String::new()
        }
    };
    let temperature = suffix(units.system.temperature());

    let mut segments = Vec::new();
    if let Some(time) = readings.time_server.and_then(|ts| zone.hh_mm(ts)) {
        segments.push(format!("Time {time}"));
    }
    if let Some(pressure) = readings.pressure {
        segments.push(format!(
            "Pressure {:.1}{}",
            pressure.value,
            suffix(units.pressure.label())
        ));
    }
    if let Some(indoor) = readings.indoor {
        segments.push(format!("Indoor {:.1}{temperature}", indoor.value));
    }
    if let Some(outdoor) = readings.outdoor {
        segments.push(format!("Outdoor {:.1}{temperature}", outdoor.value));
    }
    if let Some(wind) = readings.wind {
        segments.push(format!(
            "Wind {:.0}{} angle {:.0}{}",
            wind.strength,
            suffix(units.wind.label()),
            wind.angle,
            if style.units { "°" } else { "" }
        ));
    }
    if let Some(rain) = readings.rain {
        segments.push(format!("Rain {rain:.1}{}", suffix(units.system.rain_rate())));
    }
    if let Some(extra) = &readings.extra_indoor {
        segments.push(format!(
            "{} {:.1}{temperature}",
            extra.name, extra.measurement.value
        ));
    }
    segments.join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono_tz::Tz;
    use serde_json::{json, Value};

    const PARIS: Zone = Zone::Named(Tz::Europe__Paris);

    fn readings(value: Value) -> Readings {
        Readings::extract(&serde_json::from_value(value).unwrap())
    }

    fn minimal() -> Value {
        json!({
            "time_server": 1568721900,
            "body": {
                "user": {"administrative": {"unit": 0}},
                "devices": [{
                    "dashboard_data": {"Temperature": 21.5},
                    "modules": [
                        {"type": "NAModule1", "dashboard_data": {"Temperature": 15.0}},
                        {"type": "NAModule3", "dashboard_data": {"Rain": 0.0}}
                    ]
                }]
            }
        })
    }

    #[test]
    fn minimal_payload() {
        assert_eq!(
            console_line(&readings(minimal()), &PARIS, LineStyle::default()),
            "Time 14:05 | Indoor 21.5 | Outdoor 15.0 | Rain 0.0"
        );
    }

    #[test]
    fn all_segments_in_order() {
        let mut payload = minimal();
        let device = &mut payload["body"]["devices"][0];
        device["dashboard_data"]["Pressure"] = json!(1013.2);
        let modules = device["modules"].as_array_mut().unwrap();
        modules.push(json!({"type": "NAModule2", "dashboard_data": {"WindStrength": 12, "WindAngle": 270}}));
        modules.push(json!({"type": "NAModule4", "module_name": "Bedroom", "dashboard_data": {"Temperature": 19.8}}));

        assert_eq!(
            console_line(&readings(payload), &PARIS, LineStyle::default()),
            "Time 14:05 | Pressure 1013.2 | Indoor 21.5 | Outdoor 15.0 | Wind 12 angle 270 | Rain 0.0 | Bedroom 19.8"
        );
    }

    #[test]
    fn unit_suffixes_follow_preferences() {
        let mut payload = minimal();
        payload["body"]["user"]["administrative"] = json!({"unit": 1, "windunit": 1});
        payload["body"]["devices"][0]["modules"]
            .as_array_mut()
            .unwrap()
            .push(json!({"type": "NAModule2", "dashboard_data": {"WindStrength": 7.6, "WindAngle": 90}}));

        assert_eq!(
            console_line(&readings(payload), &PARIS, LineStyle { units: true }),
            "Time 14:05 | Indoor 21.5 °F | Outdoor 15.0 °F | Wind 8 mph angle 90° | Rain 0.0 in/h"
        );
    }

    #[test]
    fn absent_readings_are_omitted() {
        let line = console_line(
            &readings(json!({"body": {"devices": [{"modules": []}]}})),
            &PARIS,
            LineStyle::default(),
        );
        assert_eq!(line, "");

        let mut payload = minimal();
        payload["body"]["devices"][0]["modules"] = json!([]);
        payload.as_object_mut().unwrap().remove("time_server");
        assert_eq!(
            console_line(&readings(payload), &PARIS, LineStyle::default()),
            "Indoor 21.5"
        );
    }

    #[test]
    fn same_input_same_line() {
        let a = console_line(&readings(minimal()), &PARIS, LineStyle::default());
        let b = console_line(&readings(minimal()), &PARIS, LineStyle::default());
        assert_eq!(a, b);
    }
}

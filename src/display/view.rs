use crate::data_mgmt::readings::Measurement;
use crate::data_mgmt::{Readings, Trend};
use crate::helpers::Zone;

pub const MISSING: &str = "N/A";
pub const MISSING_TIME: &str = "--:--";

/// Text shown on the panel, one entry per line plus the clock.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayView {
    pub indoor: String,
    pub indoor_trend: Trend,
    pub outdoor: String,
    pub outdoor_trend: Trend,
    pub rain: String,
    pub time: String,
}

impl DisplayView {
    pub fn new(readings: &Readings, zone: &Zone) -> Self {
        let unit = readings.units.system.temperature();
        // Trailing space reserves the cell the trend arrow is drawn into
        let temperature = |m: Option<Measurement>| match m {
            Some(Measurement { value, trend }) => (format!("{value:.2} {unit} "), trend),
            None => (MISSING.to_string(), Trend::Unknown),
        };
        let (indoor, indoor_trend) = temperature(readings.indoor);
        let (outdoor, outdoor_trend) = temperature(readings.outdoor);

        DisplayView {
            indoor,
            indoor_trend,
            outdoor,
            outdoor_trend,
            rain: readings
                .rain
                .map(|r| format!("{r:.1} {}", readings.units.system.rain_rate()))
                .unwrap_or_else(|| MISSING.to_string()),
            time: readings
                .time_server
                .and_then(|ts| zone.hh_mm(ts))
                .unwrap_or_else(|| MISSING_TIME.to_string()),
        }
    }

    /// The three stacked lines with their trend, top to bottom.
    pub fn lines(&self) -> [(&str, Trend); 3] {
        [
            (self.indoor.as_str(), self.indoor_trend),
            (self.outdoor.as_str(), self.outdoor_trend),
            (self.rain.as_str(), Trend::Unknown),
        ]
    }
}

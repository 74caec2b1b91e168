use std::str::FromStr;

use chrono::{DateTime, Local};
use chrono_tz::Tz;

/// Timezone used to turn the server timestamp into wall-clock text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Zone {
    /// Process local time (honours `TZ`)
    #[default]
    Local,
    Named(Tz),
}

impl Zone {
    /// `HH:MM` for a Unix timestamp, or `None` if it is out of range.
    pub fn hh_mm(&self, epoch_secs: i64) -> Option<String> {
        let utc = DateTime::from_timestamp(epoch_secs, 0)?;
        let formatted = match self {
            Zone::Local => utc.with_timezone(&Local).format("%H:%M").to_string(),
            Zone::Named(tz) => utc.with_timezone(tz).format("%H:%M").to_string(),
        };
        Some(formatted)
    }
}

impl FromStr for Zone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Tz>().map(Zone::Named).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2019-09-17T12:05:00Z
    const TS: i64 = 1568721900;

    #[test]
    fn formats_in_named_zone() {
        assert_eq!(Zone::Named(Tz::UTC).hh_mm(TS).unwrap(), "12:05");
        assert_eq!(Zone::Named(Tz::Europe__Paris).hh_mm(TS).unwrap(), "14:05");
    }

    #[test]
    fn parses_iana_names() {
        assert_eq!(
            "Europe/Paris".parse::<Zone>().unwrap(),
            Zone::Named(Tz::Europe__Paris)
        );
        assert!("Mars/Olympus_Mons".parse::<Zone>().is_err());
    }

    #[test]
    fn local_zone_honours_tz() {
        temp_env::with_var("TZ", Some("UTC"), || {
            assert_eq!(Zone::Local.hh_mm(TS).unwrap(), "12:05");
        });
    }

    #[test]
    fn out_of_range_timestamp() {
        assert!(Zone::Named(Tz::UTC).hh_mm(i64::MAX).is_none());
    }
}

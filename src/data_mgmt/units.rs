use super::models::Administrative;

/// `administrative.unit`: drives temperature and rain units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

/// `administrative.windunit`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WindUnit {
    #[default]
    Kph,
    Mph,
    MetersPerSecond,
    Beaufort,
    Knot,
}

/// `administrative.pressureunit`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PressureUnit {
    #[default]
    Mbar,
    InHg,
    MmHg,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Units {
    pub system: UnitSystem,
    pub wind: WindUnit,
    pub pressure: PressureUnit,
}

impl UnitSystem {
    fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(UnitSystem::Metric),
            1 => Some(UnitSystem::Imperial),
            _ => None,
        }
    }

    pub fn temperature(self) -> &'static str {
        match self {
            UnitSystem::Metric => "°C",
            UnitSystem::Imperial => "°F",
        }
    }

    pub fn rain_rate(self) -> &'static str {
        match self {
            UnitSystem::Metric => "mm/h",
            UnitSystem::Imperial => "in/h",
        }
    }
}

impl WindUnit {
    fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(WindUnit::Kph),
            1 => Some(WindUnit::Mph),
            2 => Some(WindUnit::MetersPerSecond),
            3 => Some(WindUnit::Beaufort),
            4 => Some(WindUnit::Knot),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WindUnit::Kph => "kph",
            WindUnit::Mph => "mph",
            WindUnit::MetersPerSecond => "m/s",
            WindUnit::Beaufort => "beaufort",
            WindUnit::Knot => "knot",
        }
    }
}

impl PressureUnit {
    fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(PressureUnit::Mbar),
            1 => Some(PressureUnit::InHg),
            2 => Some(PressureUnit::MmHg),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PressureUnit::Mbar => "mbar",
            PressureUnit::InHg => "inHg",
            PressureUnit::MmHg => "mmHg",
        }
    }
}

impl Units {
    /// Missing or out-of-range indices fall back to the first table entry.
    pub fn from_administrative(admin: Option<&Administrative>) -> Self {
        let Some(admin) = admin else {
            return Units::default();
        };
        Units {
            system: admin
                .unit
                .and_then(UnitSystem::from_index)
                .unwrap_or_default(),
            wind: admin
                .windunit
                .and_then(WindUnit::from_index)
                .unwrap_or_default(),
            pressure: admin
                .pressureunit
                .and_then(PressureUnit::from_index)
                .unwrap_or_default(),
        }
    }
}

//! WMO weather code classification

/// Weather condition categories
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeatherCondition {
    ClearSky,
    PartlyCloudy,
    Cloudy,
    Fog,
    Drizzle,
    Rain,
    Snow,
    Thunderstorm,
    Unknown,
}

impl WeatherCondition {
    /// Map WMO weather code to condition
    pub fn from_code(code: u16) -> Self {
        match code {
            0 => WeatherCondition::ClearSky,
            1..=2 => WeatherCondition::PartlyCloudy,
            3 => WeatherCondition::Cloudy,
            45 | 48 => WeatherCondition::Fog,
            51..=57 => WeatherCondition::Drizzle,
            61..=67 | 80..=82 => WeatherCondition::Rain,
            71..=77 | 85..=86 => WeatherCondition::Snow,
            95..=99 => WeatherCondition::Thunderstorm,
            _ => WeatherCondition::Unknown,
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            WeatherCondition::ClearSky => "\u{2600}\u{fe0f}",
            WeatherCondition::PartlyCloudy => "\u{26c5}",
            WeatherCondition::Cloudy | WeatherCondition::Unknown => "\u{2601}\u{fe0f}",
            WeatherCondition::Fog => "\u{1f32b}\u{fe0f}",
            WeatherCondition::Drizzle => "\u{1f326}\u{fe0f}",
            WeatherCondition::Rain => "\u{1f327}\u{fe0f}",
            WeatherCondition::Snow => "\u{2744}\u{fe0f}",
            WeatherCondition::Thunderstorm => "\u{26c8}\u{fe0f}",
        }
    }
}

/// Human-readable description of a WMO weather code
pub fn describe(code: u16) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 | 48 => "Fog",
        51 | 53 | 55 => "Drizzle",
        56 | 57 => "Freezing drizzle",
        61 | 63 | 65 => "Rain",
        66 | 67 => "Freezing rain",
        71 | 73 | 75 => "Snow",
        77 => "Snow grains",
        80..=82 => "Rain showers",
        85 | 86 => "Snow showers",
        95 => "Thunderstorm",
        96 | 99 => "Thunderstorm with hail",
        _ => "Unknown",
    }
}

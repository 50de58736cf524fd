use serde::{Deserialize, Serialize};

/// Black-and-white weather glyphs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeatherIcon {
    DaySunny,
    NightClear,
    DayCloudy,
    Cloudy,
    Overcast,
    Rain,
    Snow,
    RainMix,
    Thunderstorm,
    Fog,
    StrongWind,
    NotAvailable,
}

/// Ordered: the first keyword contained in the forecast wins
const ICON_KEYWORDS: &[(&str, WeatherIcon)] = &[
    ("SUNNY", WeatherIcon::DaySunny),
    ("CLEAR", WeatherIcon::NightClear),
    ("PARTLY SUNNY", WeatherIcon::DayCloudy),
    ("MOSTLY SUNNY", WeatherIcon::DayCloudy),
    ("PARTLY CLOUDY", WeatherIcon::Cloudy),
    ("MOSTLY CLOUDY", WeatherIcon::Cloudy),
    ("CLOUDY", WeatherIcon::Overcast),
    ("RAIN", WeatherIcon::Rain),
    ("SHOWERS", WeatherIcon::Rain),
    ("LIGHT RAIN", WeatherIcon::Rain),
    ("CHANCE RAIN", WeatherIcon::Rain),
    ("RAIN LIKELY", WeatherIcon::Rain),
    ("DRIZZLE", WeatherIcon::Rain),
    ("SNOW", WeatherIcon::Snow),
    ("HEAVY SNOW", WeatherIcon::Snow),
    ("LIGHT SNOW", WeatherIcon::Snow),
    ("SLEET", WeatherIcon::RainMix),
    ("RAIN/SNOW", WeatherIcon::RainMix),
    ("WINTERY MIX", WeatherIcon::RainMix),
    ("THUNDERSTORM", WeatherIcon::Thunderstorm),
    ("T-STORM", WeatherIcon::Thunderstorm),
    ("FOG", WeatherIcon::Fog),
    ("HAZE", WeatherIcon::Fog),
    ("WINDY", WeatherIcon::StrongWind),
    ("BLUSTERY", WeatherIcon::StrongWind),
];

impl WeatherIcon {
    pub fn from_description(description: &str) -> Self {
        let upper = description.to_uppercase();
        ICON_KEYWORDS
            .iter()
            .find(|(keyword, _)| upper.contains(keyword))
            .map(|(_, icon)| *icon)
            .unwrap_or(WeatherIcon::NotAvailable)
    }

    /// Short label printed above the description
    pub fn label(&self) -> &'static str {
        match self {
            WeatherIcon::DaySunny => "Sun",
            WeatherIcon::NightClear => "Clear",
            WeatherIcon::DayCloudy => "Sun/Cloud",
            WeatherIcon::Cloudy => "Clouds",
            WeatherIcon::Overcast => "Overcast",
            WeatherIcon::Rain => "Rain",
            WeatherIcon::Snow => "Snow",
            WeatherIcon::RainMix => "Mix",
            WeatherIcon::Thunderstorm => "Storms",
            WeatherIcon::Fog => "Fog",
            WeatherIcon::StrongWind => "Wind",
            WeatherIcon::NotAvailable => "N/A",
        }
    }
}

/// One day of the forecast strip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub day: String,
    /// Only set on the first day
    pub location: String,
    pub description: String,
    pub icon: WeatherIcon,
    pub high: Option<i64>,
    pub low: Option<i64>,
}

impl ForecastDay {
    pub fn temperature_range(&self) -> String {
        let fmt = |t: Option<i64>| t.map(|v| format!("{}°", v)).unwrap_or_else(|| "N/A".into());
        format!("{} / {}", fmt(self.high), fmt(self.low))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_keyword_order() {
        assert_eq!(WeatherIcon::from_description("Sunny"), WeatherIcon::DaySunny);
        // "SUNNY" is listed first, so it wins over "MOSTLY SUNNY"
        assert_eq!(
            WeatherIcon::from_description("Mostly Sunny"),
            WeatherIcon::DaySunny
        );
        assert_eq!(
            WeatherIcon::from_description("Partly Cloudy"),
            WeatherIcon::Cloudy
        );
        assert_eq!(
            WeatherIcon::from_description("Chance Light Snow"),
            WeatherIcon::Snow
        );
        assert_eq!(
            WeatherIcon::from_description("Volcanic Ash"),
            WeatherIcon::NotAvailable
        );
    }

    #[test]
    fn test_temperature_range() {
        let day = ForecastDay {
            day: "Today".to_string(),
            location: "Bryn Mawr, PA".to_string(),
            description: "Sunny".to_string(),
            icon: WeatherIcon::DaySunny,
            high: Some(72),
            low: None,
        };
        assert_eq!(day.temperature_range(), "72° / N/A");
    }
}

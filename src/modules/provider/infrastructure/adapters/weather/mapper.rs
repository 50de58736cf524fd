use super::models::ForecastPeriod;
use crate::modules::provider::domain::entities::{ForecastDay, WeatherIcon};

const FOLLOWING_DAYS: usize = 4;

#[derive(Debug, Clone, Default)]
pub struct WeatherMapper;

impl WeatherMapper {
    pub fn new() -> Self {
        Self
    }

    /// Fold half-day periods into today plus up to four following days.
    ///
    /// When the first period is a night, today's entry is the next daytime
    /// period and the remaining days shift by one.
    pub fn map_periods(&self, periods: &[ForecastPeriod], location: &str) -> Vec<ForecastDay> {
        if periods.is_empty() {
            return Vec::new();
        }

        let (today_idx, next_idx) = if periods[0].is_daytime { (0, 2) } else { (1, 3) };
        let mut days = Vec::new();

        if let Some(today) = periods.get(today_idx) {
            let night = periods.get(today_idx + 1);
            days.push(self.day(today.name.clone(), location, today, night));
        }

        for i in 0..FOLLOWING_DAYS {
            let day_idx = next_idx + i * 2;
            let Some(day) = periods.get(day_idx) else {
                break;
            };
            let name = day.name.split_whitespace().next().unwrap_or_default().to_string();
            days.push(self.day(name, "", day, periods.get(day_idx + 1)));
        }

        days
    }

    fn day(
        &self,
        name: String,
        location: &str,
        day: &ForecastPeriod,
        night: Option<&ForecastPeriod>,
    ) -> ForecastDay {
        let description = day
            .short_forecast
            .clone()
            .unwrap_or_else(|| "N/A".to_string());
        ForecastDay {
            day: name,
            location: location.to_string(),
            icon: WeatherIcon::from_description(&description),
            description,
            high: day.temperature,
            low: night.and_then(|n| n.temperature),
        }
    }
}

use super::mapper::WeatherMapper;
use super::models::{ForecastResponse, PointsResponse};
use crate::modules::provider::domain::entities::ForecastDay;
use crate::modules::provider::infrastructure::source::DataSource;
use crate::modules::provider::traits::ForecastProvider;
use crate::shared::config::WeatherLocation;
use crate::shared::errors::{AppError, AppResult, ResultExt};
use async_trait::async_trait;

const NWS_BASE_URL: &str = "https://api.weather.gov";

/// NWS asks for JSON-LD to get flat `forecast`/`periods` fields
const NWS_HEADERS: &[(&str, &str)] = &[("Accept", "application/ld+json")];

/// National Weather Service forecast for one location
pub struct WeatherAdapter {
    source: DataSource,
    base_url: String,
    location: WeatherLocation,
    mapper: WeatherMapper,
}

impl WeatherAdapter {
    pub fn new(source: DataSource, location: WeatherLocation) -> Self {
        Self {
            source: source.named("NWS"),
            base_url: NWS_BASE_URL.to_string(),
            location,
            mapper: WeatherMapper::new(),
        }
    }

    pub async fn fetch_forecast(&self) -> AppResult<Vec<ForecastDay>> {
        let points_url = format!(
            "{}/points/{},{}",
            self.base_url, self.location.latitude, self.location.longitude
        );
        log::info!("NWS: Fetching forecast for {}", self.location.name);

        let points: PointsResponse = self
            .source
            .get_json_with(&points_url, "weather_points", NWS_HEADERS)
            .await?;
        let forecast_url = points.forecast.ok_or_else(|| {
            AppError::NotFound("No forecast URL in NWS points response".to_string())
        })?;

        let forecast: ForecastResponse = self
            .source
            .get_json_with(&forecast_url, "weather_forecast", NWS_HEADERS)
            .await?;

        Ok(self.mapper.map_periods(&forecast.periods, &self.location.name))
    }
}

#[async_trait]
impl ForecastProvider for WeatherAdapter {
    async fn get_forecast(&self) -> Vec<ForecastDay> {
        self.fetch_forecast().await.or_degrade("NWS: forecast")
    }
}

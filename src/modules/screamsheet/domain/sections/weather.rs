use crate::modules::document::{Flowable, Table};
use crate::modules::provider::domain::entities::ForecastDay;
use crate::modules::provider::traits::ForecastProvider;
use crate::modules::screamsheet::traits::Section;
use async_trait::async_trait;
use std::sync::Arc;

/// Five-day forecast strip: one column per day
pub struct WeatherSection {
    title: String,
    provider: Arc<dyn ForecastProvider>,
    data: Option<Vec<ForecastDay>>,
}

impl WeatherSection {
    pub fn new(title: impl Into<String>, provider: Arc<dyn ForecastProvider>) -> Self {
        Self {
            title: title.into(),
            provider,
            data: None,
        }
    }
}

fn forecast_table(days: &[ForecastDay]) -> Table {
    let header = days.iter().map(|d| d.day.clone()).collect();
    let rows = vec![
        days.iter().map(|d| d.icon.label().to_string()).collect(),
        days.iter().map(|d| d.description.clone()).collect(),
        days.iter().map(ForecastDay::temperature_range).collect(),
    ];

    let table = Table::new(header, rows);
    match days.first().map(|d| d.location.as_str()) {
        Some(location) if !location.is_empty() => table.with_caption(location),
        _ => table,
    }
}

#[async_trait]
impl Section for WeatherSection {
    fn title(&self) -> &str {
        &self.title
    }

    async fn fetch_data(&mut self) {
        if self.data.is_none() {
            self.data = Some(self.provider.get_forecast().await);
        }
    }

    fn is_fetched(&self) -> bool {
        self.data.is_some()
    }

    fn is_empty(&self) -> bool {
        self.data.as_ref().map_or(true, Vec::is_empty)
    }

    fn render(&self) -> Vec<Flowable> {
        match self.data.as_deref() {
            Some(days) if !days.is_empty() => vec![Flowable::Table(forecast_table(days))],
            _ => Vec::new(),
        }
    }
}

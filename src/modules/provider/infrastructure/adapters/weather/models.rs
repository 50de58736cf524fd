use serde::{Deserialize, Serialize};

/// `/points/{lat},{lon}` in JSON-LD form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointsResponse {
    #[serde(default)]
    pub forecast: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub periods: Vec<ForecastPeriod>,
}

/// Half-day forecast period ("Tonight", "Wednesday", ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPeriod {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_daytime: bool,
    #[serde(default)]
    pub temperature: Option<i64>,
    #[serde(default)]
    pub short_forecast: Option<String>,
}

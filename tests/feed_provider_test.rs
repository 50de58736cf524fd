mod utils;

use screamsheet_lib::modules::provider::infrastructure::{MlbTradeRumorsProvider, WeatherAdapter};
use screamsheet_lib::modules::provider::domain::entities::WeatherIcon;
use screamsheet_lib::modules::provider::{ArticleProvider, ForecastProvider};
use screamsheet_lib::shared::config::WeatherLocation;
use utils::helpers;

#[tokio::test]
async fn test_trade_rumors_fill_favorite_slots_first() {
    let provider = MlbTradeRumorsProvider::new(helpers::fixture_source(), Vec::new(), 4);
    assert_eq!(provider.source_name(), "MLB Trade Rumors");
    assert!(provider.needs_summary());

    let slotted = provider.get_articles().await;
    let placed: Vec<(usize, &str)> = slotted
        .iter()
        .map(|s| (s.slot, s.article.title.as_str()))
        .collect();

    // Phillies -> 1, no Padres story, Yankees -> 3, podcast dropped
    assert_eq!(
        placed,
        vec![
            (0, "Rangers Sign Veteran Infielder"),
            (1, "Phillies Extend Starting Pitcher"),
            (2, "Mets Interested In Closer Market"),
            (3, "Yankees Acquire Reliever From Marlins"),
        ]
    );
}

#[tokio::test]
async fn test_trade_rumors_text_is_cleaned() {
    let provider = MlbTradeRumorsProvider::new(helpers::fixture_source(), Vec::new(), 4);
    let slotted = provider.fetch_articles().await.unwrap();

    let phillies = &slotted[1].article;
    assert!(phillies.summary.contains("three-year extension"));
    assert!(!phillies.summary.contains("<p>"));
    assert!(phillies.link.ends_with("phillies-extend-starter.html"));
    assert!(phillies.published.is_some());
}

#[tokio::test]
async fn test_custom_favorites_change_the_slots() {
    let favorites = vec!["Mets".to_string()];
    let provider = MlbTradeRumorsProvider::new(helpers::fixture_source(), favorites, 2);

    let slotted = provider.get_articles().await;
    assert_eq!(slotted.len(), 2);
    assert_eq!(slotted[0].article.title, "Yankees Acquire Reliever From Marlins");
    assert_eq!(slotted[1].article.title, "Mets Interested In Closer Market");
}

#[tokio::test]
async fn test_missing_feed_degrades_to_no_articles() {
    let dir = tempfile::tempdir().unwrap();
    let provider = MlbTradeRumorsProvider::new(helpers::empty_source(&dir), Vec::new(), 4);
    assert!(provider.get_articles().await.is_empty());
}

#[tokio::test]
async fn test_evening_forecast_starts_with_tomorrow() {
    let adapter = WeatherAdapter::new(helpers::fixture_source(), WeatherLocation::default());
    let days = adapter.get_forecast().await;

    let names: Vec<&str> = days.iter().map(|d| d.day.as_str()).collect();
    assert_eq!(
        names,
        vec!["Monday", "Tuesday", "Wednesday", "Thanksgiving", "Friday"]
    );

    let today = &days[0];
    assert_eq!(today.location, "Bryn Mawr, PA");
    assert_eq!((today.high, today.low), (Some(55), Some(41)));
    assert_eq!(today.icon, WeatherIcon::Cloudy);
    assert_eq!(today.temperature_range(), "55° / 41°");

    assert!(days[1..].iter().all(|d| d.location.is_empty()));
    assert_eq!(days[1].icon, WeatherIcon::Rain);
    assert_eq!(days[4].icon, WeatherIcon::StrongWind);
}

#[tokio::test]
async fn test_missing_forecast_degrades_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let adapter = WeatherAdapter::new(helpers::empty_source(&dir), WeatherLocation::default());
    assert!(adapter.get_forecast().await.is_empty());
}

mod utils;

use screamsheet_lib::modules::provider::infrastructure::NflAdapter;
use screamsheet_lib::modules::provider::DataProvider;
use utils::helpers;

fn adapter() -> NflAdapter {
    NflAdapter::new(helpers::fixture_source()).with_as_of(helpers::date("2024-11-18"))
}

#[tokio::test]
async fn test_scores_for_the_week_containing_the_date() {
    let games = adapter().get_game_scores(helpers::date("2024-11-17")).await;

    // the Monday night game was still scheduled when the board was recorded
    assert_eq!(games.len(), 2);

    assert_eq!(games[0].away_team, "Baltimore Ravens");
    assert_eq!(games[0].home_team, "Pittsburgh Steelers");
    assert_eq!((games[0].away_score, games[0].home_score), (Some(16), Some(18)));

    assert_eq!(games[1].away_team, "Cincinnati Bengals");
    assert_eq!(games[1].home_team, "Los Angeles Chargers");
    assert_eq!((games[1].away_score, games[1].home_score), (Some(27), Some(34)));
    assert!(games.iter().all(|g| g.game_date.is_some()));
}

#[tokio::test]
async fn test_date_outside_the_season_has_no_scores() {
    let games = adapter().get_game_scores(helpers::date("2024-06-15")).await;
    assert!(games.is_empty());
}

#[tokio::test]
async fn test_missing_conference_payloads_give_empty_standings() {
    let standings = adapter().get_standings().await;
    assert!(standings.is_empty());
}

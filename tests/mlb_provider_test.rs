mod utils;

use screamsheet_lib::modules::provider::infrastructure::MlbAdapter;
use screamsheet_lib::modules::provider::DataProvider;
use screamsheet_lib::shared::domain::value_objects::League;
use utils::helpers;

fn adapter(as_of: &str) -> MlbAdapter {
    MlbAdapter::new(helpers::fixture_source()).with_as_of(helpers::date(as_of))
}

#[tokio::test]
async fn test_scores_for_every_scheduled_game() {
    let adapter = adapter("2024-07-04");
    assert_eq!(adapter.league(), League::Mlb);

    let games = adapter.get_game_scores(helpers::date("2024-07-04")).await;
    assert_eq!(games.len(), 3);

    assert_eq!(games[0].away_team, "Philadelphia Phillies");
    assert_eq!(games[0].home_team, "New York Mets");
    assert_eq!((games[0].away_score, games[0].home_score), (Some(5), Some(3)));
    assert_eq!(games[0].status, "Final");

    // postponed games carry no score and are left out of the printed boxes
    assert_eq!(games[2].status, "Postponed");
    assert!(!games[2].has_score());
}

#[tokio::test]
async fn test_standings_resolve_division_names() {
    let standings = adapter("2024-07-04").get_standings().await;
    assert_eq!(standings.team_count(), 4);
    assert_eq!(
        standings.conferences(),
        vec!["American League", "National League"]
    );

    let nl_east = standings
        .groups
        .iter()
        .find(|g| g.label == "National League East")
        .expect("division name resolved from its link");
    let teams: Vec<&str> = nl_east.rows.iter().map(|r| r.team.as_str()).collect();
    assert_eq!(teams, vec!["Philadelphia Phillies", "New York Mets"]);
    assert!((nl_east.rows[0].win_pct - 0.667).abs() < 1e-9);

    let headers: Vec<&str> = standings.columns.iter().map(|c| c.header()).collect();
    assert_eq!(headers, vec!["W", "L", "PCT"]);
}

#[tokio::test]
async fn test_unresolvable_division_is_unknown() {
    let standings = adapter("2024-07-04").get_standings().await;
    let unknown = standings
        .groups
        .iter()
        .find(|g| g.label == "Unknown Division")
        .expect("AL East lookup has no payload");
    assert_eq!(unknown.conference.as_deref(), Some("American League"));
    assert_eq!(unknown.rows[0].team, "Baltimore Orioles");
}

#[tokio::test]
async fn test_preseason_falls_back_to_last_season() {
    let standings = adapter("2025-03-01").get_standings().await;
    assert_eq!(standings.team_count(), 4);
}

#[tokio::test]
async fn test_missing_team_schedule_gives_no_box_score() {
    let adapter = adapter("2024-07-04");
    let box_score = adapter
        .get_box_score(143, helpers::date("2024-07-04"))
        .await;
    assert!(box_score.is_none());
}

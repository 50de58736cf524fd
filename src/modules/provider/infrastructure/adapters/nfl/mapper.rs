use super::models::{CoreStandingsResponse, TeamsResponse};
use crate::modules::provider::domain::entities::StandingsRow;
use crate::modules::provider::infrastructure::adapters::espn::EspnMapper;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static TEAM_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/teams/(\d+)").expect("static regex"));

/// Core API group ids for the two conferences
pub const CONFERENCES: &[(u32, &str)] = &[(7, "NFC"), (8, "AFC")];

#[derive(Debug, Clone, Default)]
pub struct NflMapper {
    espn: EspnMapper,
}

impl NflMapper {
    pub fn new() -> Self {
        Self {
            espn: EspnMapper::new(),
        }
    }

    pub fn espn(&self) -> &EspnMapper {
        &self.espn
    }

    pub fn team_names(&self, response: TeamsResponse) -> HashMap<u32, String> {
        response
            .sports
            .into_iter()
            .flat_map(|s| s.leagues)
            .flat_map(|l| l.teams)
            .filter_map(|entry| {
                let id = entry.team.id.as_deref()?.parse::<u32>().ok()?;
                Some((id, entry.team.display_name))
            })
            .collect()
    }

    /// Rows for one conference; entries without a team reference are skipped
    pub fn map_conference(
        &self,
        response: CoreStandingsResponse,
        conference: &str,
        names: &HashMap<u32, String>,
    ) -> Vec<StandingsRow> {
        response
            .standings
            .iter()
            .filter_map(|entry| {
                let reference = entry.team.as_ref()?.reference.as_str();
                let team_id: u32 = TEAM_ID.captures(reference)?.get(1)?.as_str().parse().ok()?;
                let stats = self.espn.stat_map(entry.stats());
                let stat = |name: &str| stats.get(name).copied().unwrap_or(0.0);

                Some(StandingsRow {
                    team: names
                        .get(&team_id)
                        .cloned()
                        .unwrap_or_else(|| format!("Team {}", team_id)),
                    conference: Some(conference.to_string()),
                    division: conference.to_string(),
                    wins: stat("wins") as u32,
                    losses: stat("losses") as u32,
                    ties: Some(stat("ties") as u32),
                    ot_losses: None,
                    points: None,
                    games_played: None,
                    win_pct: stat("winPercent"),
                    rank: 0,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_map_conference_resolves_team_refs() {
        let names: HashMap<u32, String> = [(21, "Philadelphia Eagles".to_string())].into();
        let response: CoreStandingsResponse = serde_json::from_value(json!({
            "standings": [
                {
                    "team": {"$ref": "http://sports.core.api.espn.com/v2/sports/football/leagues/nfl/seasons/2024/teams/21?lang=en"},
                    "records": [{"stats": [
                        {"name": "wins", "value": 14.0},
                        {"name": "losses", "value": 3.0},
                        {"name": "ties", "value": 0.0},
                        {"name": "winPercent", "value": 0.8235}
                    ]}]
                },
                {
                    "team": {"$ref": "http://sports.core.api.espn.com/v2/sports/football/leagues/nfl/seasons/2024/teams/99"},
                    "stats": [{"name": "wins", "value": 1.0}]
                },
                {"stats": []}
            ]
        }))
        .unwrap();

        let rows = NflMapper::new().map_conference(response, "NFC", &names);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].team, "Philadelphia Eagles");
        assert_eq!(rows[0].wins, 14);
        assert_eq!(rows[0].ties, Some(0));
        assert_eq!(rows[0].win_pct, 0.8235);
        assert_eq!(rows[1].team, "Team 99");
    }

    #[test]
    fn test_team_names() {
        let response: TeamsResponse = serde_json::from_value(json!({
            "sports": [{"leagues": [{"teams": [
                {"team": {"id": "21", "displayName": "Philadelphia Eagles"}},
                {"team": {"id": "x", "displayName": "Broken"}}
            ]}]}]
        }))
        .unwrap();
        let names = NflMapper::new().team_names(response);
        assert_eq!(names.len(), 1);
        assert_eq!(names[&21], "Philadelphia Eagles");
    }
}

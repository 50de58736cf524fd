use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One team's line in a standings table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub team: String,
    pub conference: Option<String>,
    /// Group the row is printed under (division or conference name)
    pub division: String,
    pub wins: u32,
    pub losses: u32,
    pub ties: Option<u32>,
    pub ot_losses: Option<u32>,
    pub points: Option<u32>,
    pub games_played: Option<u32>,
    pub win_pct: f64,
    /// 1-based position inside the group
    pub rank: u32,
}

/// Stat columns a league prints after the team name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StandingsColumn {
    GamesPlayed,
    Wins,
    Losses,
    Ties,
    OtLosses,
    Points,
    WinPct,
}

impl StandingsColumn {
    pub fn header(&self) -> &'static str {
        match self {
            StandingsColumn::GamesPlayed => "GP",
            StandingsColumn::Wins => "W",
            StandingsColumn::Losses => "L",
            StandingsColumn::Ties => "T",
            StandingsColumn::OtLosses => "OTL",
            StandingsColumn::Points => "PTS",
            StandingsColumn::WinPct => "PCT",
        }
    }

    pub fn value(&self, row: &StandingsRow) -> String {
        let optional = |v: Option<u32>| v.map(|n| n.to_string()).unwrap_or_else(|| "-".into());
        match self {
            StandingsColumn::GamesPlayed => optional(row.games_played),
            StandingsColumn::Wins => row.wins.to_string(),
            StandingsColumn::Losses => row.losses.to_string(),
            StandingsColumn::Ties => optional(row.ties),
            StandingsColumn::OtLosses => optional(row.ot_losses),
            StandingsColumn::Points => optional(row.points),
            StandingsColumn::WinPct => format_pct(row.win_pct),
        }
    }
}

/// ".600" style winning percentage
fn format_pct(pct: f64) -> String {
    let formatted = format!("{:.3}", pct);
    match formatted.strip_prefix('0') {
        Some(rest) => rest.to_string(),
        None => formatted,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingsGroup {
    pub conference: Option<String>,
    pub label: String,
    pub rows: Vec<StandingsRow>,
}

/// League standings grouped for printing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Standings {
    pub groups: Vec<StandingsGroup>,
    pub columns: Vec<StandingsColumn>,
}

impl Standings {
    /// Group rows by conference and division, each group sorted by rank
    pub fn from_rows(rows: Vec<StandingsRow>, columns: Vec<StandingsColumn>) -> Self {
        let mut grouped: BTreeMap<(Option<String>, String), Vec<StandingsRow>> = BTreeMap::new();
        for row in rows {
            grouped
                .entry((row.conference.clone(), row.division.clone()))
                .or_default()
                .push(row);
        }

        let groups = grouped
            .into_iter()
            .map(|((conference, label), mut rows)| {
                // stable sort keeps feed order for equal ranks
                rows.sort_by_key(|r| r.rank);
                StandingsGroup {
                    conference,
                    label,
                    rows,
                }
            })
            .collect();

        Self { groups, columns }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|g| g.rows.is_empty())
    }

    pub fn team_count(&self) -> usize {
        self.groups.iter().map(|g| g.rows.len()).sum()
    }

    /// Distinct conference names in group order
    pub fn conferences(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for conference in self.groups.iter().filter_map(|g| g.conference.as_deref()) {
            if !seen.contains(&conference) {
                seen.push(conference);
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(team: &str, conference: &str, division: &str, rank: u32) -> StandingsRow {
        StandingsRow {
            team: team.to_string(),
            conference: Some(conference.to_string()),
            division: division.to_string(),
            wins: 10,
            losses: 5,
            ties: None,
            ot_losses: None,
            points: None,
            games_played: None,
            win_pct: 0.667,
            rank,
        }
    }

    #[test]
    fn test_from_rows_groups_and_sorts_by_rank() {
        let rows = vec![
            row("Mets", "National League", "National League East", 2),
            row("Dodgers", "National League", "National League West", 1),
            row("Phillies", "National League", "National League East", 1),
            row("Braves", "National League", "National League East", 3),
        ];
        let standings = Standings::from_rows(rows, vec![StandingsColumn::Wins]);

        assert_eq!(standings.groups.len(), 2);
        assert_eq!(standings.groups[0].label, "National League East");
        let teams: Vec<_> = standings.groups[0].rows.iter().map(|r| r.team.as_str()).collect();
        assert_eq!(teams, vec!["Phillies", "Mets", "Braves"]);
        assert_eq!(standings.team_count(), 4);
        assert_eq!(standings.conferences(), vec!["National League"]);
    }

    #[test]
    fn test_empty_standings() {
        let standings = Standings::default();
        assert!(standings.is_empty());
        assert_eq!(standings.team_count(), 0);
    }

    #[test]
    fn test_column_values() {
        let mut r = row("Flyers", "Eastern", "Metropolitan", 1);
        r.ot_losses = Some(3);
        r.win_pct = 0.6;
        assert_eq!(StandingsColumn::WinPct.value(&r), ".600");
        assert_eq!(StandingsColumn::OtLosses.value(&r), "3");
        assert_eq!(StandingsColumn::Points.value(&r), "-");
        r.win_pct = 1.0;
        assert_eq!(StandingsColumn::WinPct.value(&r), "1.000");
    }
}

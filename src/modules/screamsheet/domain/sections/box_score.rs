use crate::modules::document::domain::style::BLOCK_GAP;
use crate::modules::document::{Flowable, Table};
use crate::modules::provider::domain::entities::{
    BattingLine, BoxScore, GoalieLine, PitchingLine, SkaterLine,
};
use crate::modules::provider::traits::DataProvider;
use crate::modules::screamsheet::traits::Section;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;

/// Player stat lines of the featured team's completed game
pub struct BoxScoreSection {
    title: String,
    provider: Arc<dyn DataProvider>,
    team_id: u32,
    date: NaiveDate,
    fetched: bool,
    data: Option<BoxScore>,
}

impl BoxScoreSection {
    pub fn new(
        title: impl Into<String>,
        provider: Arc<dyn DataProvider>,
        team_id: u32,
        date: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            provider,
            team_id,
            date,
            fetched: false,
            data: None,
        }
    }
}

fn header(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

fn stat_table(caption: &str, head: &[&str], rows: Vec<Vec<String>>) -> Vec<Flowable> {
    if rows.is_empty() {
        return Vec::new();
    }
    let mut weights = vec![4];
    weights.extend(std::iter::repeat(1).take(head.len() - 1));
    vec![
        Flowable::Table(
            Table::new(header(head), rows)
                .with_caption(caption)
                .with_weights(weights),
        ),
        Flowable::Spacer(BLOCK_GAP),
    ]
}

fn batting_row(line: &BattingLine) -> Vec<String> {
    vec![
        line.name.clone(),
        line.at_bats.to_string(),
        line.runs.to_string(),
        line.hits.to_string(),
        line.home_runs.to_string(),
        line.rbi.to_string(),
        line.walks.to_string(),
        line.strikeouts.to_string(),
    ]
}

fn pitching_row(line: &PitchingLine) -> Vec<String> {
    vec![
        line.name.clone(),
        line.innings_pitched.clone(),
        line.hits.to_string(),
        line.runs.to_string(),
        line.earned_runs.to_string(),
        line.walks.to_string(),
        line.strikeouts.to_string(),
    ]
}

fn skater_row(line: &SkaterLine) -> Vec<String> {
    vec![
        line.name.clone(),
        line.position.clone(),
        line.goals.to_string(),
        line.assists.to_string(),
        line.points.to_string(),
        line.shots.to_string(),
        line.penalty_minutes.to_string(),
    ]
}

fn goalie_row(line: &GoalieLine) -> Vec<String> {
    vec![
        line.name.clone(),
        line.saves.to_string(),
        line.shots_against.to_string(),
        line.save_percentage(),
    ]
}

#[async_trait]
impl Section for BoxScoreSection {
    fn title(&self) -> &str {
        &self.title
    }

    async fn fetch_data(&mut self) {
        if !self.fetched {
            self.data = self.provider.get_box_score(self.team_id, self.date).await;
            self.fetched = true;
        }
    }

    fn is_fetched(&self) -> bool {
        self.fetched
    }

    fn is_empty(&self) -> bool {
        self.data.as_ref().map_or(true, BoxScore::is_empty)
    }

    fn render(&self) -> Vec<Flowable> {
        let Some(box_score) = self.data.as_ref().filter(|b| !b.is_empty()) else {
            return Vec::new();
        };

        let mut flowables = vec![Flowable::heading(self.title.clone())];
        match box_score {
            BoxScore::Baseball {
                batting, pitching, ..
            } => {
                flowables.extend(stat_table(
                    "Batting",
                    &["Batter", "AB", "R", "H", "HR", "RBI", "BB", "K"],
                    batting.iter().map(batting_row).collect(),
                ));
                flowables.extend(stat_table(
                    "Pitching",
                    &["Pitcher", "IP", "H", "R", "ER", "BB", "K"],
                    pitching.iter().map(pitching_row).collect(),
                ));
            }
            BoxScore::Hockey {
                skaters, goalies, ..
            } => {
                flowables.extend(stat_table(
                    "Skaters",
                    &["Skater", "POS", "G", "A", "P", "SOG", "PIM"],
                    skaters.iter().map(skater_row).collect(),
                ));
                flowables.extend(stat_table(
                    "Goalies",
                    &["Goalie", "SV", "SA", "SV%"],
                    goalies.iter().map(goalie_row).collect(),
                ));
            }
        }
        flowables
    }
}

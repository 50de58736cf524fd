use crate::modules::provider::traits::DataProvider;
use crate::modules::screamsheet::domain::sections::{
    BoxScoreSection, GameScoresSection, GameSummarySection, StandingsSection,
};
use crate::modules::screamsheet::traits::{Screamsheet, Section};
use crate::shared::domain::value_objects::League;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Team whose game gets a box score and a recap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturedTeam {
    pub id: u32,
    pub name: String,
}

/// Scores and standings for one league, plus an optional featured team
pub struct SportsScreamsheet {
    provider: Arc<dyn DataProvider>,
    date: NaiveDate,
    team: Option<FeaturedTeam>,
    include_summary: bool,
    output_path: PathBuf,
}

impl SportsScreamsheet {
    pub fn new(provider: Arc<dyn DataProvider>, date: NaiveDate, output_path: impl Into<PathBuf>) -> Self {
        Self {
            provider,
            date,
            team: None,
            include_summary: false,
            output_path: output_path.into(),
        }
    }

    pub fn with_team(mut self, team: Option<FeaturedTeam>) -> Self {
        self.team = team;
        self
    }

    pub fn with_summary(mut self, include_summary: bool) -> Self {
        self.include_summary = include_summary;
        self
    }

    pub fn league(&self) -> League {
        self.provider.league()
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Screamsheet for SportsScreamsheet {
    fn title(&self) -> String {
        format!("{} Screamsheet", self.league())
    }

    fn build_sections(&self) -> Vec<Box<dyn Section>> {
        let league = self.league();
        let mut sections: Vec<Box<dyn Section>> = vec![
            Box::new(GameScoresSection::new(
                format!("{} Game Scores", league),
                Arc::clone(&self.provider),
                self.date,
            )),
            Box::new(StandingsSection::new(
                format!("{} Standings", league),
                Arc::clone(&self.provider),
            )),
        ];

        if let Some(team) = &self.team {
            sections.push(Box::new(BoxScoreSection::new(
                format!("{} Box Score", team.name),
                Arc::clone(&self.provider),
                team.id,
                self.date,
            )));
            if self.include_summary {
                sections.push(Box::new(GameSummarySection::new(
                    format!("{} Game Summary", team.name),
                    Arc::clone(&self.provider),
                    team.id,
                    self.date,
                )));
            }
        }

        sections
    }

    fn output_path(&self) -> &Path {
        &self.output_path
    }
}

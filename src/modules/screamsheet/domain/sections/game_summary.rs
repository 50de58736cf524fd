use crate::modules::document::Flowable;
use crate::modules::provider::traits::DataProvider;
use crate::modules::screamsheet::traits::Section;
use crate::shared::utils::text::paragraphs;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;

/// Model-written recap of the featured team's game
pub struct GameSummarySection {
    title: String,
    provider: Arc<dyn DataProvider>,
    team_id: u32,
    date: NaiveDate,
    fetched: bool,
    data: Option<String>,
}

impl GameSummarySection {
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

#[async_trait]
impl Section for GameSummarySection {
    fn title(&self) -> &str {
        &self.title
    }

    async fn fetch_data(&mut self) {
        if !self.fetched {
            self.data = self
                .provider
                .get_game_summary(self.team_id, self.date)
                .await;
            self.fetched = true;
        }
    }

    fn is_fetched(&self) -> bool {
        self.fetched
    }

    fn is_empty(&self) -> bool {
        self.data.as_deref().map_or(true, |s| s.trim().is_empty())
    }

    fn render(&self) -> Vec<Flowable> {
        let Some(summary) = self.data.as_deref().filter(|s| !s.trim().is_empty()) else {
            return Vec::new();
        };

        let mut flowables = vec![Flowable::heading(self.title.clone())];
        flowables.extend(paragraphs(summary).into_iter().map(Flowable::Paragraph));
        flowables
    }
}

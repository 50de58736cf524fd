use crate::modules::document::domain::style::BLOCK_GAP;
use crate::modules::document::{Flowable, Table};
use crate::modules::provider::domain::entities::GameScore;
use crate::modules::provider::traits::DataProvider;
use crate::modules::screamsheet::traits::Section;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;

const SCORE_COLUMNS: usize = 3;

/// Final and in-progress scores laid out in three columns
pub struct GameScoresSection {
    title: String,
    provider: Arc<dyn DataProvider>,
    date: NaiveDate,
    data: Option<Vec<GameScore>>,
}

impl GameScoresSection {
    pub fn new(title: impl Into<String>, provider: Arc<dyn DataProvider>, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            provider,
            date,
            data: None,
        }
    }

    fn scored(&self) -> impl Iterator<Item = &GameScore> {
        self.data.iter().flatten().filter(|g| g.has_score())
    }
}

/// Two-line box: away team over "@home", scores on the right
fn score_box(game: &GameScore) -> Flowable {
    let score = |s: Option<u32>| s.map(|v| v.to_string()).unwrap_or_default();
    Flowable::Table(
        Table::new(
            Vec::new(),
            vec![
                vec![game.away_team.clone(), score(game.away_score)],
                vec![format!("@{}", game.home_team), score(game.home_score)],
            ],
        )
        .with_weights(vec![4, 1]),
    )
}

#[async_trait]
impl Section for GameScoresSection {
    fn title(&self) -> &str {
        &self.title
    }

    async fn fetch_data(&mut self) {
        if self.data.is_none() {
            self.data = Some(self.provider.get_game_scores(self.date).await);
        }
    }

    fn is_fetched(&self) -> bool {
        self.data.is_some()
    }

    fn is_empty(&self) -> bool {
        self.scored().next().is_none()
    }

    fn render(&self) -> Vec<Flowable> {
        if self.is_empty() {
            return Vec::new();
        }

        let mut columns: Vec<Vec<Flowable>> = vec![Vec::new(); SCORE_COLUMNS];
        for (i, game) in self.scored().enumerate() {
            let column = &mut columns[i % SCORE_COLUMNS];
            column.push(score_box(game));
            column.push(Flowable::Spacer(BLOCK_GAP));
        }

        vec![Flowable::Columns(columns)]
    }
}

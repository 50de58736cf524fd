use crate::modules::document::domain::style::BLOCK_GAP;
use crate::modules::document::{Flowable, Table};
use crate::modules::provider::domain::entities::{Standings, StandingsColumn, StandingsGroup};
use crate::modules::provider::traits::DataProvider;
use crate::modules::screamsheet::traits::Section;
use async_trait::async_trait;
use std::sync::Arc;

/// One captioned table per division or conference, in two columns
pub struct StandingsSection {
    title: String,
    provider: Arc<dyn DataProvider>,
    data: Option<Standings>,
}

impl StandingsSection {
    pub fn new(title: impl Into<String>, provider: Arc<dyn DataProvider>) -> Self {
        Self {
            title: title.into(),
            provider,
            data: None,
        }
    }
}

pub fn group_table(group: &StandingsGroup, columns: &[StandingsColumn]) -> Table {
    let mut header = vec!["Team".to_string()];
    header.extend(columns.iter().map(|c| c.header().to_string()));

    let rows = group
        .rows
        .iter()
        .map(|row| {
            let mut cells = vec![row.team.clone()];
            cells.extend(columns.iter().map(|c| c.value(row)));
            cells
        })
        .collect();

    let mut weights = vec![4];
    weights.extend(std::iter::repeat(1).take(columns.len()));

    Table::new(header, rows)
        .with_caption(group.label.clone())
        .with_weights(weights)
}

fn group_block(group: &StandingsGroup, columns: &[StandingsColumn]) -> Vec<Flowable> {
    vec![
        Flowable::Table(group_table(group, columns)),
        Flowable::Spacer(BLOCK_GAP),
    ]
}

/// Conference per column when there are exactly two, otherwise alternate groups
fn arrange(standings: &Standings) -> Vec<Vec<Flowable>> {
    let conferences = standings.conferences();
    if conferences.len() == 2 {
        return conferences
            .iter()
            .map(|conference| {
                let mut column = vec![Flowable::subheading(*conference)];
                for group in standings
                    .groups
                    .iter()
                    .filter(|g| g.conference.as_deref() == Some(*conference))
                {
                    column.extend(group_block(group, &standings.columns));
                }
                column
            })
            .collect();
    }

    let mut columns = vec![Vec::new(), Vec::new()];
    for (i, group) in standings.groups.iter().enumerate() {
        columns[i % 2].extend(group_block(group, &standings.columns));
    }
    columns
}

#[async_trait]
impl Section for StandingsSection {
    fn title(&self) -> &str {
        &self.title
    }

    async fn fetch_data(&mut self) {
        if self.data.is_none() {
            self.data = Some(self.provider.get_standings().await);
        }
    }

    fn is_fetched(&self) -> bool {
        self.data.is_some()
    }

    fn is_empty(&self) -> bool {
        self.data.as_ref().map_or(true, Standings::is_empty)
    }

    fn render(&self) -> Vec<Flowable> {
        let Some(standings) = self.data.as_ref().filter(|s| !s.is_empty()) else {
            return Vec::new();
        };

        vec![
            Flowable::heading(self.title.clone()),
            Flowable::Columns(arrange(standings)),
        ]
    }
}

use crate::modules::provider::traits::{ArticleProvider, ForecastProvider};
use crate::modules::screamsheet::domain::sections::{NewsArticlesSection, WeatherSection};
use crate::modules::screamsheet::traits::{Screamsheet, Section};
use crate::modules::summary::Summarizer;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A titled window over the provider's articles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleBlock {
    pub title: String,
    pub start_index: usize,
    pub max_articles: usize,
}

impl ArticleBlock {
    pub fn new(title: impl Into<String>, start_index: usize, max_articles: usize) -> Self {
        Self {
            title: title.into(),
            start_index,
            max_articles,
        }
    }
}

/// Weather strip followed by one or more article blocks from a single source
pub struct NewsScreamsheet {
    provider: Arc<dyn ArticleProvider>,
    weather: Option<Arc<dyn ForecastProvider>>,
    summarizer: Option<Arc<Summarizer>>,
    blocks: Vec<ArticleBlock>,
    date: NaiveDate,
    output_path: PathBuf,
}

impl NewsScreamsheet {
    pub fn new(
        provider: Arc<dyn ArticleProvider>,
        blocks: Vec<ArticleBlock>,
        date: NaiveDate,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            provider,
            weather: None,
            summarizer: None,
            blocks,
            date,
            output_path: output_path.into(),
        }
    }

    pub fn with_weather(mut self, weather: Option<Arc<dyn ForecastProvider>>) -> Self {
        self.weather = weather;
        self
    }

    pub fn with_summarizer(mut self, summarizer: Option<Arc<Summarizer>>) -> Self {
        self.summarizer = summarizer;
        self
    }

    pub fn source_name(&self) -> &str {
        self.provider.source_name()
    }
}

impl Screamsheet for NewsScreamsheet {
    fn title(&self) -> String {
        format!("{} - {}", self.source_name(), self.date.format("%B %d, %Y"))
    }

    fn build_sections(&self) -> Vec<Box<dyn Section>> {
        let mut sections: Vec<Box<dyn Section>> = Vec::new();
        if let Some(weather) = &self.weather {
            sections.push(Box::new(WeatherSection::new(
                "Weather Report",
                Arc::clone(weather),
            )));
        }
        for block in &self.blocks {
            sections.push(Box::new(
                NewsArticlesSection::new(
                    block.title.clone(),
                    Arc::clone(&self.provider),
                    block.start_index,
                    block.max_articles,
                )
                .with_summarizer(self.summarizer.clone()),
            ));
        }
        sections
    }

    fn output_path(&self) -> &Path {
        &self.output_path
    }
}

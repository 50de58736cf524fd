use crate::modules::document::domain::style::BLOCK_GAP;
use crate::modules::document::Flowable;
use crate::modules::provider::traits::ArticleProvider;
use crate::modules::screamsheet::traits::Section;
use crate::modules::summary::Summarizer;
use crate::shared::utils::text::paragraphs;
use async_trait::async_trait;
use std::sync::Arc;

/// An article as it will be printed
#[derive(Debug, Clone, PartialEq)]
pub struct PrintedArticle {
    pub title: String,
    pub date: Option<String>,
    pub body: String,
}

/// A window of a provider's articles in two columns, even left and odd right.
///
/// Articles are rewritten by the summarizer when one is set and the provider
/// asks for it.
pub struct NewsArticlesSection {
    title: String,
    provider: Arc<dyn ArticleProvider>,
    summarizer: Option<Arc<Summarizer>>,
    start_index: usize,
    max_articles: usize,
    data: Option<Vec<PrintedArticle>>,
}

impl NewsArticlesSection {
    pub fn new(
        title: impl Into<String>,
        provider: Arc<dyn ArticleProvider>,
        start_index: usize,
        max_articles: usize,
    ) -> Self {
        Self {
            title: title.into(),
            provider,
            summarizer: None,
            start_index,
            max_articles,
            data: None,
        }
    }

    pub fn with_summarizer(mut self, summarizer: Option<Arc<Summarizer>>) -> Self {
        self.summarizer = summarizer;
        self
    }

    pub fn articles(&self) -> &[PrintedArticle] {
        self.data.as_deref().unwrap_or_default()
    }
}

fn article_block(article: &PrintedArticle) -> Vec<Flowable> {
    let mut block = vec![Flowable::subheading(article.title.clone())];
    if let Some(date) = &article.date {
        block.push(Flowable::paragraph(date.clone()));
    }
    block.extend(paragraphs(&article.body).into_iter().map(Flowable::Paragraph));
    block.push(Flowable::Spacer(BLOCK_GAP * 2.0));
    block
}

#[async_trait]
impl Section for NewsArticlesSection {
    fn title(&self) -> &str {
        &self.title
    }

    async fn fetch_data(&mut self) {
        if self.data.is_some() {
            return;
        }

        let slotted = self.provider.get_articles().await;
        let summarizer = self
            .summarizer
            .as_ref()
            .filter(|_| self.provider.needs_summary());

        let mut printed = Vec::new();
        for item in slotted
            .into_iter()
            .skip(self.start_index)
            .take(self.max_articles)
        {
            let article = item.article;
            let body = match summarizer {
                Some(summarizer) => summarizer.summarize_article(&article).await,
                None => article.summary.clone(),
            };
            printed.push(PrintedArticle {
                date: article.published.map(|d| d.format("%B %d, %Y").to_string()),
                title: article.title,
                body,
            });
        }
        self.data = Some(printed);
    }

    fn is_fetched(&self) -> bool {
        self.data.is_some()
    }

    fn is_empty(&self) -> bool {
        self.articles().is_empty()
    }

    fn render(&self) -> Vec<Flowable> {
        if self.is_empty() {
            return Vec::new();
        }

        let mut left = Vec::new();
        let mut right = Vec::new();
        for (i, article) in self.articles().iter().enumerate() {
            let column = if i % 2 == 0 { &mut left } else { &mut right };
            column.extend(article_block(article));
        }

        vec![
            Flowable::heading(self.title.clone()),
            Flowable::Columns(vec![left, right]),
        ]
    }
}

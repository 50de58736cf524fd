use crate::modules::document::domain::style::{SECTION_GAP, TITLE_GAP};
use crate::modules::document::{Document, DocumentWriter, Flowable};
use crate::shared::errors::AppResult;
use crate::shared::utils::{LogContext, TimedOperation};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// One independently fetched and rendered block of a screamsheet
#[async_trait]
pub trait Section: Send + Sync {
    fn title(&self) -> &str;

    /// Load data from the provider; later calls keep the first result
    async fn fetch_data(&mut self);

    fn is_fetched(&self) -> bool;

    /// True when fetched data has nothing worth printing
    fn is_empty(&self) -> bool;

    async fn has_content(&mut self) -> bool {
        if !self.is_fetched() {
            self.fetch_data().await;
        }
        !self.is_empty()
    }

    /// Flowables for the fetched data, empty when there is nothing to show
    fn render(&self) -> Vec<Flowable>;
}

/// A titled document built from an ordered list of sections
#[async_trait]
pub trait Screamsheet: Send + Sync {
    fn title(&self) -> String;

    fn build_sections(&self) -> Vec<Box<dyn Section>>;

    fn output_path(&self) -> &Path;

    /// Fetch every section and lay out the ones with content
    async fn compose(&self) -> Document {
        let title = self.title();
        let mut document = Document::new(title.clone());
        document.push(Flowable::Title(title));
        document.push(Flowable::Spacer(TITLE_GAP));

        for mut section in self.build_sections() {
            if !section.has_content().await {
                LogContext::section(section.title(), None);
                continue;
            }
            let flowables = section.render();
            LogContext::section(section.title(), Some(flowables.len()));
            document.extend(flowables);
            document.push(Flowable::Spacer(SECTION_GAP));
        }

        document
    }

    /// Compose the document and write it to `output_path`
    async fn generate(&self, writer: &dyn DocumentWriter) -> AppResult<PathBuf> {
        let timer = TimedOperation::new(&format!("generate '{}'", self.title()));
        let document = self.compose().await;

        let path = self.output_path().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        writer.write(&document, &path)?;

        timer.finish_with_info(&path.display().to_string());
        Ok(path)
    }
}

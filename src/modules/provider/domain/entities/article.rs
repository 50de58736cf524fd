use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A news story, either from a feed or written by a model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub link: String,
    pub published: Option<DateTime<Utc>>,
}

impl Article {
    /// Identity used for de-duplication: the link, or the id when there is none
    pub fn key(&self) -> &str {
        if self.link.is_empty() {
            &self.id
        } else {
            &self.link
        }
    }
}

/// An article placed into a fixed digest position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlottedArticle {
    pub slot: usize,
    pub article: Article,
}

impl SlottedArticle {
    pub fn label(&self) -> String {
        format!("Section {}", self.slot + 1)
    }
}

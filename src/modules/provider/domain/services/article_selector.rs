use crate::modules::provider::domain::entities::{Article, SlottedArticle};
use std::collections::HashSet;

/// Headlines that are site housekeeping rather than news
pub const TRADE_RUMORS_EXCLUSIONS: &[&str] = &[
    "Top 50",
    "Contest",
    "Prediction",
    "Subscribers",
    "Email List",
    "Presents Our",
    "Podcast",
    "Live Chat",
    "Q&A",
    "Ask Us Anything",
    "Best of",
    "MLBTR Chat",
    "Front Office",
];

/// Fills a fixed number of digest slots from feed entries.
///
/// Slot 0 is left for the best general story. Favorite team `k` gets slot
/// `k + 1` with the first unused story naming it, then empty slots are
/// back-filled in feed order.
#[derive(Debug, Clone)]
pub struct ArticleSelector {
    favorite_teams: Vec<String>,
    max_articles: usize,
    exclusions: Vec<String>,
}

impl ArticleSelector {
    pub fn new(favorite_teams: Vec<String>, max_articles: usize) -> Self {
        Self {
            favorite_teams,
            max_articles,
            exclusions: TRADE_RUMORS_EXCLUSIONS
                .iter()
                .map(|k| k.to_lowercase())
                .collect(),
        }
    }

    /// True when title or summary contains an excluded keyword (any case)
    pub fn is_excluded(&self, article: &Article) -> bool {
        let title = article.title.to_lowercase();
        let summary = article.summary.to_lowercase();
        self.exclusions
            .iter()
            .any(|keyword| title.contains(keyword) || summary.contains(keyword))
    }

    pub fn select(&self, entries: Vec<Article>) -> Vec<SlottedArticle> {
        let candidates: Vec<Article> = entries
            .into_iter()
            .filter(|a| !self.is_excluded(a))
            .collect();

        let mut slots: Vec<Option<Article>> = vec![None; self.max_articles];
        let mut used: HashSet<String> = HashSet::new();

        for (idx, team) in self.favorite_teams.iter().enumerate() {
            let slot = idx + 1;
            if slot >= self.max_articles {
                break;
            }
            if let Some(article) = candidates
                .iter()
                .find(|a| !used.contains(a.key()) && a.title.contains(team.as_str()))
            {
                used.insert(article.key().to_string());
                slots[slot] = Some(article.clone());
            }
        }

        let mut remaining = candidates.iter().filter(|a| !used.contains(a.key()));
        for slot in slots.iter_mut().filter(|s| s.is_none()) {
            match remaining.next() {
                Some(article) => *slot = Some(article.clone()),
                None => break,
            }
        }

        slots
            .into_iter()
            .enumerate()
            .filter_map(|(slot, article)| article.map(|article| SlottedArticle { slot, article }))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str) -> Article {
        Article {
            id: title.to_string(),
            title: title.to_string(),
            summary: String::new(),
            link: format!("https://example.com/{}", title.replace(' ', "-")),
            published: None,
        }
    }

    fn titles(selected: &[SlottedArticle]) -> Vec<(usize, &str)> {
        selected
            .iter()
            .map(|s| (s.slot, s.article.title.as_str()))
            .collect()
    }

    #[test]
    fn test_favorite_team_gets_its_reserved_slot() {
        let selector = ArticleSelector::new(
            vec!["Phillies".into(), "Padres".into(), "Yankees".into()],
            4,
        );
        let selected = selector.select(vec![
            article("A"),
            article("Padres sign X"),
            article("B"),
            article("C"),
        ]);

        // Padres is favorite index 1 and lands in slot 2
        assert_eq!(
            titles(&selected),
            vec![(0, "A"), (1, "B"), (2, "Padres sign X"), (3, "C")]
        );
        assert_eq!(selected[2].label(), "Section 3");
    }

    #[test]
    fn test_team_match_is_case_sensitive() {
        let selector = ArticleSelector::new(vec!["Phillies".into()], 2);
        let selected = selector.select(vec![article("phillies notes"), article("Phillies win")]);
        assert_eq!(titles(&selected), vec![(0, "phillies notes"), (1, "Phillies win")]);
    }

    #[test]
    fn test_exclusions_are_case_insensitive_on_title_and_summary() {
        let selector = ArticleSelector::new(vec![], 4);
        let mut in_summary = article("Weekend reading");
        in_summary.summary = "Join our LIVE CHAT at noon".to_string();
        let selected = selector.select(vec![
            article("MLBTR Podcast: Offseason"),
            article("top 50 free agents"),
            in_summary,
            article("Real news"),
        ]);
        assert_eq!(titles(&selected), vec![(0, "Real news")]);
    }

    #[test]
    fn test_excluded_entry_never_claims_a_team_slot() {
        let selector = ArticleSelector::new(vec!["Phillies".into(), "Mets".into()], 3);
        let selected = selector.select(vec![
            article("Phillies Podcast: Deadline Plans"),
            article("Lead story"),
            article("Phillies Add Reliever"),
            article("Mets Sign Starter"),
        ]);

        assert_eq!(
            titles(&selected),
            vec![
                (0, "Lead story"),
                (1, "Phillies Add Reliever"),
                (2, "Mets Sign Starter")
            ]
        );
        assert!(selected.iter().all(|s| !s.article.title.contains("Podcast")));
    }

    #[test]
    fn test_no_article_is_used_twice() {
        let selector = ArticleSelector::new(vec!["Phillies".into(), "Phillies".into()], 4);
        let selected = selector.select(vec![article("Phillies trade"), article("Other")]);
        assert_eq!(titles(&selected), vec![(0, "Other"), (1, "Phillies trade")]);
    }

    #[test]
    fn test_favorites_beyond_slot_count_are_ignored() {
        let selector = ArticleSelector::new(vec!["Phillies".into(), "Padres".into()], 2);
        let selected = selector.select(vec![article("Padres rumor"), article("Phillies rumor")]);
        assert_eq!(
            titles(&selected),
            vec![(0, "Padres rumor"), (1, "Phillies rumor")]
        );
    }

    #[test]
    fn test_short_feed_leaves_trailing_slots_empty() {
        let selector = ArticleSelector::new(vec!["Yankees".into()], 4);
        assert!(selector.select(vec![]).is_empty());
        let selected = selector.select(vec![article("Only story")]);
        assert_eq!(titles(&selected), vec![(0, "Only story")]);
    }
}

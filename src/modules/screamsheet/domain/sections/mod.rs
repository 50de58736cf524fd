pub mod box_score;
pub mod game_scores;
pub mod game_summary;
pub mod news_articles;
pub mod standings;
pub mod weather;

pub use box_score::BoxScoreSection;
pub use game_scores::GameScoresSection;
pub use game_summary::GameSummarySection;
pub use news_articles::{NewsArticlesSection, PrintedArticle};
pub use standings::StandingsSection;
pub use weather::WeatherSection;

pub mod article;
pub mod box_score;
pub mod forecast;
pub mod game_score;
pub mod standings;

pub use article::{Article, SlottedArticle};
pub use box_score::{save_percentage, BattingLine, BoxScore, GoalieLine, PitchingLine, SkaterLine};
pub use forecast::{ForecastDay, WeatherIcon};
pub use game_score::{parse_game_time, GameScore};
pub use standings::{Standings, StandingsColumn, StandingsGroup, StandingsRow};

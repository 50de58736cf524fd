pub mod espn;
pub mod feeds;
pub mod generated_news;
pub mod mapper;
pub mod mlb;
pub mod nba;
pub mod nfl;
pub mod nhl;
pub mod weather;

pub use feeds::{FanGraphsProvider, MlbTradeRumorsProvider, PlayersTribuneProvider};
pub use generated_news::GeneratedMlbNewsProvider;
pub use mapper::ScoreMapper;
pub use mlb::MlbAdapter;
pub use nba::NbaAdapter;
pub use nfl::NflAdapter;
pub use nhl::NhlAdapter;
pub use weather::WeatherAdapter;

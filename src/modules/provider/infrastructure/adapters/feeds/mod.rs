pub mod fangraphs;
pub mod mapper;
pub mod mlb_trade_rumors;
pub mod players_tribune;
pub mod reader;

pub use fangraphs::FanGraphsProvider;
pub use mapper::FeedMapper;
pub use mlb_trade_rumors::MlbTradeRumorsProvider;
pub use players_tribune::PlayersTribuneProvider;
pub use reader::FeedReader;

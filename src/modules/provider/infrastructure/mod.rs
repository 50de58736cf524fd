pub mod adapters;
pub mod http_client;
pub mod source;

pub use adapters::{
    FanGraphsProvider, GeneratedMlbNewsProvider, MlbAdapter, MlbTradeRumorsProvider, NbaAdapter,
    NflAdapter, NhlAdapter, PlayersTribuneProvider, WeatherAdapter,
};
pub use http_client::JsonClient;
pub use source::DataSource;

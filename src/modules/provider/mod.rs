pub mod domain;
pub mod infrastructure;
pub mod traits;

pub use domain::{ArticleSelector, Article, SlottedArticle};
pub use traits::{ArticleProvider, DataProvider, ForecastProvider};

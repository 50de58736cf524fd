pub mod article_selector;

pub use article_selector::{ArticleSelector, TRADE_RUMORS_EXCLUSIONS};

pub mod news;
pub mod sports;

pub use news::{ArticleBlock, NewsScreamsheet};
pub use sports::{FeaturedTeam, SportsScreamsheet};

pub mod sections;
pub mod sheets;
pub mod teams;

pub use sheets::{ArticleBlock, FeaturedTeam, NewsScreamsheet, SportsScreamsheet};

pub mod application;
pub mod domain;
pub mod traits;

pub use application::{ScreamsheetFactory, SheetKind, SheetRequest};
pub use domain::{teams, ArticleBlock, FeaturedTeam, NewsScreamsheet, SportsScreamsheet};
pub use traits::{Screamsheet, Section};

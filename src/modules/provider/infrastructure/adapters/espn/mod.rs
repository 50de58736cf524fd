pub mod mapper;
pub mod models;

pub use mapper::{EspnMapper, SeasonWeek};

//! Type sizes shared by the writers, in points

pub const TITLE_SIZE: u8 = 20;
pub const HEADING_SIZE: u8 = 14;
pub const SUBHEADING_SIZE: u8 = 11;
pub const BODY_SIZE: u8 = 10;
pub const TABLE_SIZE: u8 = 8;
pub const CAPTION_SIZE: u8 = 9;

/// Gap after the document title
pub const TITLE_GAP: f32 = 12.0;
/// Gap after each section
pub const SECTION_GAP: f32 = 20.0;
/// Gap between blocks inside a section
pub const BLOCK_GAP: f32 = 6.0;

/// Half an inch
pub const PAGE_MARGIN_MM: f64 = 12.7;

pub mod cache;
pub mod utils;

pub mod sentiment;
pub mod table_preview;

pub mod json;
pub mod table;

pub use json::format_json;
pub use table::{SummaryFormatter, NONE_MISSING};

//! Terminal display formatting

pub mod record;
pub mod report;

pub use record::{format_queue_line, format_record_details, format_record_row, format_register};
pub use report::format_summary;

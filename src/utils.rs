mod format_bytes;
pub use format_bytes::format_bytes;

mod parse_capacity;
pub use parse_capacity::parse_capacity;

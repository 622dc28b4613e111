//! nom parsers for the text forms users type: sizes, colors and event times

pub mod color;
pub mod datetime;
pub mod size;

pub use color::parse_hex_color;
pub use datetime::{parse_calendar_time, CalendarTime};
pub use size::parse_custom_size;

//! Card sizing: physical print sizes, custom size validation and preview
//! layout tokens.

pub mod engine;
pub mod tables;
pub mod units;

pub use engine::{
    custom_scale_ratio, default_custom_size, physical_size, size_tokens, validate_custom_size,
};
pub use tables::{preset_size, preset_tokens, reference_size, Preset};
pub use units::{convert_from_inches, convert_to_inches, custom_to_inches, format_length};

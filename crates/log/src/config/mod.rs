//! Configuration types
//!
//! - `base`: [`Config`], [`Format`], [`DisplayConfig`], [`WriterConfig`]
//! - `presets`: environment parsing and the development/production/test setups

mod base;
mod presets;

pub use base::{Config, DisplayConfig, Format, WriterConfig};
pub use presets::{LOG_FORMAT_VAR, LOG_VAR};

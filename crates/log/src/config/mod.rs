//! Configuration types and presets
//!
//! - `base`: the [`Config`] struct with [`Format`] and [`Level`]
//! - `writer`: output destination and display toggles
//! - `presets`: ready-made setups (development, production, test, env)

mod base;
mod presets;
mod writer;

pub use base::{Config, Format, Level};
pub use writer::{DisplayConfig, WriterConfig};

#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

pub const OUTPUT_FORMATS: [&str; 2] = ["text", "json"];

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};

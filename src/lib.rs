pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::dry_run::DryRunInvoker;
pub use config::toml_config::TomlConfig;
pub use core::affiliate_program::{AffiliateProgramMethod, AFFILIATE_PROGRAM_SERVICE};
pub use core::client::AffiliateProgramClient;
pub use core::interface::InterfaceDeclaration;
pub use core::registry::ServiceRegistry;
pub use utils::error::{Result, RpcError};

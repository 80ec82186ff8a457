use crate::config::OUTPUT_FORMATS;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_one_of, validate_path, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "affiliate-rpc")]
#[command(about = "Inspect and dry-run the Affiliate Program XML-RPC interface")]
pub struct CliConfig {
    #[arg(long, help = "Path to a TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Output format: text or json (overrides the config file)")]
    pub format: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List the declared methods
    List,
    /// Show the signature of one method
    Describe { method: String },
    /// Build a call without sending it; arguments are positional
    Plan {
        method: String,
        args: Vec<String>,
    },
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("--config", path)?;
        }
        if let Some(format) = &self.format {
            validate_one_of("--format", format, &OUTPUT_FORMATS)?;
        }
        match &self.command {
            Command::List => Ok(()),
            Command::Describe { method } | Command::Plan { method, .. } => {
                validate_non_empty_string("method", method)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plan_command() {
        let config =
            CliConfig::try_parse_from(["affiliate-rpc", "--format", "json", "plan", "getAffiliatesByProgram", "7"])
                .unwrap();

        assert!(config.validate().is_ok());
        match config.command {
            Command::Plan { method, args } => {
                assert_eq!(method, "getAffiliatesByProgram");
                assert_eq!(args, vec!["7".to_string()]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_unknown_format() {
        let config = CliConfig::try_parse_from(["affiliate-rpc", "--format", "xml", "list"]).unwrap();
        assert!(config.validate().is_err());
    }
}

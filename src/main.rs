use affiliate_rpc::app::commands::{
    plan_call, render_describe, render_list, render_plan, resolve_method,
};
use affiliate_rpc::config::Command;
use affiliate_rpc::domain::ports::RpcInvoker;
use affiliate_rpc::utils::error::ErrorSeverity;
use affiliate_rpc::utils::logger;
use affiliate_rpc::utils::validation::Validate;
use affiliate_rpc::{CliConfig, DryRunInvoker, Result, RpcError, ServiceRegistry, TomlConfig};
use clap::Parser;

async fn run(cli: &CliConfig, file_config: TomlConfig) -> Result<()> {
    cli.validate()?;
    file_config.validate()?;

    let format = cli
        .format
        .as_deref()
        .unwrap_or_else(|| file_config.output_format());
    let json = format == "json";
    let registry = ServiceRegistry::with_defaults();

    let output = match &cli.command {
        Command::List => render_list(&registry, json)?,
        Command::Describe { method } => {
            let (decl, sig) = resolve_method(&registry, method)?;
            render_describe(decl, sig, json)?
        }
        Command::Plan { method, args } => {
            let (decl, sig) = resolve_method(&registry, method)?;
            let call = plan_call(decl, sig, args, file_config.defaults.as_ref())?;
            let plan = DryRunInvoker.invoke(call).await?;
            render_plan(&plan, json)?
        }
    };

    println!("{}", output);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let file_config = match &cli.config {
        Some(path) => TomlConfig::from_file(path),
        None => Ok(TomlConfig::default()),
    };

    let verbose = cli.verbose || file_config.as_ref().map(|c| c.verbose()).unwrap_or(false);
    if file_config.as_ref().map(|c| c.json_logs()).unwrap_or(false) {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("Starting affiliate-rpc CLI");
    tracing::debug!("CLI config: {:?}", cli);

    let result = match file_config {
        Ok(file_config) => run(&cli, file_config).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        report_and_exit(e);
    }

    Ok(())
}

fn report_and_exit(e: RpcError) -> ! {
    tracing::error!(
        "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use clarity_mocknet::cli::{Cli, Commands, Verbosity};
use clarity_mocknet::repl::ReplConfig;
use clarity_mocknet::ui::formatter::Formatter;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn initialize_tracing(verbosity: Verbosity) {
    let log_level = verbosity.to_log_level();
    let fallback_filter = format!("clarity_mocknet={}", log_level);

    let use_json = std::env::var("CLARITY_MOCKNET_JSON").is_ok();

    if use_json {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true);

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| fallback_filter.clone().into()),
            )
            .with(json_layer)
            .init();
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true);

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| fallback_filter.into()),
            )
            .with(fmt_layer)
            .init();
    }
}

fn main() -> miette::Result<()> {
    Formatter::configure_colors_from_env();

    let cli = Cli::parse();
    let verbosity = cli.verbosity();

    initialize_tracing(verbosity);

    let config = clarity_mocknet::config::Config::load_or_default();

    match cli.command {
        Commands::Call(args) => clarity_mocknet::cli::commands::run_call(args, &config),
        Commands::Scenario(args) => clarity_mocknet::scenario::run_scenario(args),
        Commands::Contracts(args) => clarity_mocknet::cli::commands::run_contracts(args),
        Commands::Repl(args) => clarity_mocknet::repl::start_repl(ReplConfig {
            stubs: args.stub,
            height: args.height,
        }),
        Commands::Completions(args) => {
            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "clarity-mocknet", &mut io::stdout());
            Ok(())
        }
    }
}

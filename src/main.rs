use clap::Parser;

use floatscout::adapter::inbound::cli::command::{Cli, Commands, ConfigCommand};
use floatscout::adapter::inbound::cli::output::{self, OutputConfig};
use floatscout::adapter::inbound::cli::{auctions, config, run};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet), cli.color);

    let result = match &cli.command {
        Commands::Run(args) => run::execute(args).await,
        Commands::Auctions(args) => auctions::execute(args).await,
        Commands::Config(ConfigCommand::Init(args)) => config::execute_init(&args.path, args.force),
        Commands::Config(ConfigCommand::Validate(args)) => config::execute_validate(&args.config),
    };

    if let Err(err) = result {
        output::error(&err.to_string());
        std::process::exit(1);
    }
}

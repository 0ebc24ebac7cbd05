use clap::Parser;
use cloudnix_onboard::{
    cli::commands::{
        check_config::CheckConfigCommand, run::RunCommand, themes::ThemesCommand, CommandHandler,
    },
    cli::logging::initialize_tracing,
    cli::{Cli, Commands},
    config::ConfigLoader,
    Result,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(&cli.log_level, cli.log_file.as_deref())?;

    let (config, source) = ConfigLoader::new().load(cli.config.as_deref())?;
    tracing::debug!(source = %source, "Configuration resolved");

    let command: Box<dyn CommandHandler> = match cli.command_or_default() {
        Commands::Run { record_out } => Box::new(RunCommand::new(config, record_out)),
        Commands::Themes { format } => Box::new(ThemesCommand::new(config, format)),
        Commands::CheckConfig => Box::new(CheckConfigCommand::new(config, source)),
    };

    tracing::info!(command = command.name(), "Executing command");
    command.execute()
}

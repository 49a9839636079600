//! Clientele CLI entry point.

use clap::Parser;

use clientele::cli::{commands, handle_error, Cli, Commands};
use clientele::infrastructure::logging;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match commands::resolve_config(cli.database.as_deref()) {
        Ok(config) => config,
        Err(err) => return handle_error(err, cli.json),
    };

    // Guard must outlive every command; dropping it stops file logging.
    let _log_guard = match logging::init(&config.logging) {
        Ok(guard) => guard,
        Err(err) => return handle_error(err, cli.json),
    };

    let result = match cli.command {
        Commands::Init => commands::init::execute(&config, cli.json).await,
        Commands::List(args) => commands::customer::list(args, &config, cli.json).await,
        Commands::Show(args) => commands::customer::show(args, &config, cli.json).await,
        Commands::Create(args) => commands::customer::create(args, &config, cli.json).await,
        Commands::Update(args) => commands::customer::update(args, &config, cli.json).await,
        Commands::Delete(args) => commands::customer::delete(args, &config, cli.json).await,
    };

    if let Err(err) = result {
        handle_error(err, cli.json);
    }
}

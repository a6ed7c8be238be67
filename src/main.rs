use anyhow::{Context, Result};
use clap::Parser;

use bookshelf::cli::handlers::{
    CommandContext, ServeParams, handle_query, handle_schema, handle_serve,
};
use bookshelf::cli::{Cli, Commands};
use bookshelf::config::BookshelfConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    bookshelf::logging::init(cli.verbose, cli.log_file.clone())
        .context("Failed to initialize logging")?;

    let ctx = load_context(&cli)?;

    match cli.command {
        Commands::Serve {
            host,
            port,
            no_graphiql,
        } => handle_serve(
            ctx,
            ServeParams {
                host,
                port,
                no_graphiql,
            },
        ),
        Commands::Query {
            query,
            variables,
            operation,
        } => handle_query(ctx, query, variables, operation),
        Commands::Schema => handle_schema(ctx),
    }
}

fn load_context(cli: &Cli) -> Result<CommandContext> {
    let cwd = std::env::current_dir()?;
    let config = BookshelfConfig::load(cli.config.as_deref(), &cwd)
        .context("Failed to load bookshelf configuration")?;
    Ok(CommandContext::new(config))
}

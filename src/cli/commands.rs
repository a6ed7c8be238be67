use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(
    author,
    version,
    about = "A small GraphQL service for authors and the books they wrote"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .bookshelf.yml by default)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the GraphQL server
    Serve {
        /// Address to bind (overrides config)
        #[arg(long, env = "BOOKSHELF_HOST")]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long, env = "BOOKSHELF_PORT")]
        port: Option<u16>,

        /// Do not serve the GraphiQL explorer
        #[arg(long)]
        no_graphiql: bool,
    },

    /// Execute a GraphQL document against a freshly seeded library
    Query {
        /// GraphQL query or mutation document
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,

        /// Operation to run when the document defines several
        #[arg(long)]
        operation: Option<String>,
    },

    /// Print the GraphQL schema (SDL)
    Schema,
}

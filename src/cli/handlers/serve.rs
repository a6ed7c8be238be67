use crate::graphql::{GRAPHQL_PATH, bind, build_schema, run_server};
use anyhow::{Context, Result};

use super::CommandContext;

/// Command-line overrides for the `[server]` settings
pub struct ServeParams {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub no_graphiql: bool,
}

pub fn handle_serve(ctx: CommandContext, params: ServeParams) -> Result<()> {
    let mut settings = ctx.config.server.clone();
    if let Some(host) = params.host {
        settings.host = host;
    }
    if let Some(port) = params.port {
        settings.port = port;
    }
    if params.no_graphiql {
        settings.graphiql = false;
    }

    let library = ctx.library()?;
    let schema = build_schema(library.clone());

    tokio::runtime::Runtime::new()?
        .block_on(async {
            tracing::info!(
                authors = library.author_count().await,
                books = library.book_count().await,
                "Library loaded"
            );

            let listener = bind(&settings).await?;
            let addr = listener.local_addr()?;

            println!("Server listening on http://{}{}", addr, GRAPHQL_PATH);
            if settings.graphiql {
                println!("GraphiQL: http://{}{}", addr, GRAPHQL_PATH);
            }

            run_server(schema, listener, settings.graphiql).await
        })
        .context("GraphQL server failed")?;
    Ok(())
}

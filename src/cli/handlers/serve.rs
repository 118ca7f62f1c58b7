use anyhow::{Context, Result};

use super::CommandContext;
use crate::server::run_server;

pub fn handle_serve(ctx: CommandContext, host: Option<String>, port: Option<u16>) -> Result<()> {
    let schema = ctx.schema();
    let config = ctx.config.with_overrides(host, port);
    let settings = &config.server;

    println!(
        "Starting GraphQL server on http://{}{}",
        settings.bind_addr(),
        settings.path
    );
    if settings.graphiql {
        println!(
            "GraphiQL console: http://{}{}",
            settings.bind_addr(),
            settings.path
        );
    }

    tokio::runtime::Runtime::new()?
        .block_on(async { run_server(schema, settings).await })
        .with_context(|| format!("GraphQL server on {} failed", settings.bind_addr()))?;
    Ok(())
}

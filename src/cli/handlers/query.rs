use crate::graphql::build_schema;
use anyhow::{Context, Result, bail};
use async_graphql::{Request, Variables};

use super::CommandContext;

pub fn handle_query(
    ctx: CommandContext,
    query: String,
    variables: Option<String>,
    operation: Option<String>,
) -> Result<()> {
    let mut request = Request::new(query);
    if let Some(vars) = variables {
        let map: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(&vars).context("--variables must be a JSON object")?;
        request = request.variables(Variables::from_json(serde_json::Value::Object(map)));
    }
    if let Some(name) = operation {
        request = request.operation_name(name);
    }

    let schema = build_schema(ctx.library()?);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    println!("{}", serde_json::to_string_pretty(&response)?);

    if response.is_err() {
        bail!("Query returned {} error(s)", response.errors.len());
    }
    Ok(())
}

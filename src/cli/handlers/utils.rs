use anyhow::{Context, Result};
use async_graphql::{Request, Response, Variables};

use crate::graphql::BookshelfSchema;

pub fn parse_variables(variables: Option<&str>) -> Result<Variables> {
    match variables {
        Some(v) => serde_json::from_str(v).context("Failed to parse --variables as JSON"),
        None => Ok(Variables::default()),
    }
}

/// Runs `document` to completion on a throwaway runtime.
pub fn execute(
    schema: &BookshelfSchema,
    document: &str,
    variables: Option<&str>,
) -> Result<Response> {
    let request = Request::new(document).variables(parse_variables(variables)?);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));
    Ok(response)
}

pub fn print_response(response: &Response) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(response)?);
    Ok(())
}

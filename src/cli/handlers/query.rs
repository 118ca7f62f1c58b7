use anyhow::Result;

use super::CommandContext;
use super::utils::{execute, print_response};

pub fn handle_query(ctx: CommandContext, query: String, variables: Option<String>) -> Result<()> {
    let response = execute(&ctx.schema(), &query, variables.as_deref())?;
    print_response(&response)
}

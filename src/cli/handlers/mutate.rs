use anyhow::Result;

use super::CommandContext;
use super::utils::{execute, print_response};

pub fn handle_mutate(
    ctx: CommandContext,
    mutation: String,
    variables: Option<String>,
) -> Result<()> {
    // Auto-wrap in mutation { }
    let document = format!("mutation {{ {} }}", mutation);
    let response = execute(&ctx.schema(), &document, variables.as_deref())?;
    print_response(&response)
}

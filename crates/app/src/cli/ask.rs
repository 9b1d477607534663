use std::io::Write;

use clap::Args;
use keepstudy_app::{context::AppContext, errors::AppError};

#[derive(Debug, Args)]
pub(crate) struct AskArgs {
    /// Question for the assistant
    prompt: String,
}

pub(crate) async fn run(args: AskArgs, context: &AppContext, out: &mut impl Write) -> Result<(), AppError> {
    let reply = context.assistant.ask(args.prompt).await?;

    writeln!(out, "{reply}")?;

    Ok(())
}

//! KeepStudy CLI

use std::{io, process};

use keepstudy_app::{context::AppContext, errors::AppError, observability};

use crate::cli::Cli;

mod cli;

#[tokio::main]
pub async fn main() {
    let cli = Cli::load().unwrap_or_else(|error| error.exit());

    if let Err(error) = run(cli).await {
        #[expect(
            clippy::print_stderr,
            reason = "errors are reported on stderr, logging may not be initialised"
        )]
        {
            eprintln!("error: {error}");
        }

        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    observability::init(&cli.config.logging)?;

    let context = AppContext::from_config(&cli.config)?;
    let mut stdout = io::stdout().lock();

    cli.command.run(&context, &mut stdout).await
}

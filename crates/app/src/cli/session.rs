use std::io::Write;

use clap::{Args, Subcommand};
use keepstudy_app::{context::AppContext, errors::AppError};

#[derive(Debug, Args)]
pub(crate) struct SessionCommand {
    #[command(subcommand)]
    command: SessionSubcommand,
}

#[derive(Debug, Subcommand)]
enum SessionSubcommand {
    /// Sign in; any credentials are accepted
    Login(LoginArgs),

    /// Sign out
    Logout,

    /// Show who is signed in
    Show,
}

#[derive(Debug, Args)]
struct LoginArgs {
    /// User name
    username: String,

    /// Stay signed in after this command exits
    #[arg(long)]
    remember: bool,
}

pub(crate) fn run(
    command: SessionCommand,
    context: &AppContext,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let session = context.storefront.session();

    match command.command {
        SessionSubcommand::Login(args) => {
            session.login(&args.username, args.remember)?;

            writeln!(out, "欢迎回来, {}", args.username)?;
        }
        SessionSubcommand::Logout => {
            session.logout()?;

            writeln!(out, "已退出登录")?;
        }
        SessionSubcommand::Show => match session.current()? {
            Some(user) if user.is_logged_in => writeln!(
                out,
                "已登录: {}",
                user.username.as_deref().unwrap_or("用户")
            )?,
            _ => writeln!(out, "未登录")?,
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::cli::test_helpers::{context, output};

    use super::*;

    fn command(command: SessionSubcommand) -> SessionCommand {
        SessionCommand { command }
    }

    #[test]
    fn login_then_show() -> TestResult {
        let context = context()?;
        let mut buffer = Vec::new();

        run(
            command(SessionSubcommand::Login(LoginArgs {
                username: "alice".to_string(),
                remember: true,
            })),
            &context,
            &mut buffer,
        )?;
        run(command(SessionSubcommand::Show), &context, &mut buffer)?;
        run(command(SessionSubcommand::Logout), &context, &mut buffer)?;
        run(command(SessionSubcommand::Show), &context, &mut buffer)?;

        assert_eq!(
            output(buffer)?,
            "欢迎回来, alice\n已登录: alice\n已退出登录\n未登录\n"
        );

        Ok(())
    }
}

use std::io::Write;

use clap::{Parser, Subcommand};
use keepstudy_app::{config::AppConfig, context::AppContext, errors::AppError};

mod ask;
mod assessments;
mod cart;
mod checkout;
mod community;
mod courses;
mod orders;
mod render;
mod session;

#[cfg(test)]
mod test_helpers;

#[derive(Debug, Parser)]
#[command(name = "keepstudy", about = "KeepStudy storefront CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) config: AppConfig,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

impl Cli {
    /// Parse flags and environment, loading `.env` first if present.
    pub(crate) fn load() -> Result<Self, clap::Error> {
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Browse the course catalog
    Courses(courses::CoursesCommand),

    /// Manage the shopping cart
    Cart(cart::CartCommand),

    /// Pay for the cart
    Checkout(checkout::CheckoutArgs),

    /// Browse past orders
    Orders(orders::OrdersCommand),

    /// Sign in or out
    Session(session::SessionCommand),

    /// Read and post in the community board
    Community(community::CommunityCommand),

    /// Ask the learning assistant
    Ask(ask::AskArgs),

    /// Browse assessments and learning plans
    Assessments(assessments::AssessmentsCommand),
}

impl Commands {
    pub(crate) async fn run(self, context: &AppContext, out: &mut impl Write) -> Result<(), AppError> {
        match self {
            Self::Courses(command) => courses::run(command, context, out),
            Self::Cart(command) => cart::run(command, context, out).await,
            Self::Checkout(args) => checkout::run(args, context, out).await,
            Self::Orders(command) => orders::run(command, context, out).await,
            Self::Session(command) => session::run(command, context, out),
            Self::Community(command) => community::run(command, out),
            Self::Ask(args) => ask::run(args, context, out).await,
            Self::Assessments(command) => assessments::run(command, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_nested_subcommands() -> TestResult {
        let cli = Cli::try_parse_from(["keepstudy", "cart", "add", "3", "--data-dir", "/tmp/ks"])?;

        assert!(matches!(cli.command, Commands::Cart(_)));
        assert_eq!(cli.config.storage.data_dir.to_str(), Some("/tmp/ks"));

        Ok(())
    }

    #[test]
    fn parses_plan_lookup() -> TestResult {
        let cli = Cli::try_parse_from(["keepstudy", "assessments", "plan", "2"])?;

        assert!(matches!(cli.command, Commands::Assessments(_)));

        Ok(())
    }

    #[test]
    fn checkout_method_must_be_offered() {
        let result = Cli::try_parse_from(["keepstudy", "checkout", "--method", "paypal"]);

        assert!(result.is_err(), "paypal should be rejected");
    }
}

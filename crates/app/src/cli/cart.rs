use std::io::Write;

use clap::{Args, Subcommand};
use keepstudy::{cart::AddOutcome, prices::format_price};
use keepstudy_app::{context::AppContext, errors::AppError};

use super::render::table;

#[derive(Debug, Args)]
pub(crate) struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    /// Add a course to the cart
    Add(CartItemArgs),

    /// Remove a course from the cart
    Remove(CartItemArgs),

    /// Show the cart and its total
    Show,

    /// Empty the cart
    Clear,
}

#[derive(Debug, Args)]
struct CartItemArgs {
    /// Course id
    id: u32,
}

pub(crate) async fn run(
    command: CartCommand,
    context: &AppContext,
    out: &mut impl Write,
) -> Result<(), AppError> {
    match command.command {
        CartSubcommand::Add(args) => add(&args, context, out).await,
        CartSubcommand::Remove(args) => remove(&args, context, out).await,
        CartSubcommand::Show => show(context, out).await,
        CartSubcommand::Clear => clear(context, out).await,
    }
}

async fn add(args: &CartItemArgs, context: &AppContext, out: &mut impl Write) -> Result<(), AppError> {
    let outcome = context.storefront.add_course(args.id).await?;

    let title = context
        .storefront
        .catalog()
        .get(args.id)
        .map_or_else(String::new, |course| course.title.clone());

    match outcome {
        AddOutcome::Added => writeln!(out, "已加入购物车: {title}")?,
        AddOutcome::AlreadyPresent => writeln!(out, "课程已在购物车中: {title}")?,
    }

    Ok(())
}

async fn remove(args: &CartItemArgs, context: &AppContext, out: &mut impl Write) -> Result<(), AppError> {
    context.storefront.cart().lock().await.remove(args.id)?;

    writeln!(out, "已从购物车移除课程 {}", args.id)?;

    Ok(())
}

async fn show(context: &AppContext, out: &mut impl Write) -> Result<(), AppError> {
    let cart = context.storefront.cart().lock().await;

    if cart.is_empty() {
        writeln!(out, "购物车是空的")?;

        return Ok(());
    }

    let rows = cart.items().iter().map(|item| {
        [
            item.id.to_string(),
            item.title.clone(),
            item.original_price.clone().unwrap_or_default(),
            item.price.clone(),
        ]
    });

    writeln!(out, "{}", table(["ID", "课程", "原价", "价格"], rows, &[2, 3]))?;
    writeln!(out, "共 {} 门课程，合计 {}", cart.len(), format_price(&cart.total()?))?;

    Ok(())
}

async fn clear(context: &AppContext, out: &mut impl Write) -> Result<(), AppError> {
    context.storefront.cart().lock().await.clear()?;

    writeln!(out, "购物车已清空")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use keepstudy_app::storefront::StorefrontError;
    use testresult::TestResult;

    use crate::cli::test_helpers::{context, output};

    use super::*;

    #[tokio::test]
    async fn add_twice_reports_duplicate() -> TestResult {
        let context = context()?;
        let mut buffer = Vec::new();

        add(&CartItemArgs { id: 1 }, &context, &mut buffer).await?;
        add(&CartItemArgs { id: 1 }, &context, &mut buffer).await?;

        assert_eq!(
            output(buffer)?,
            "已加入购物车: Python 全栈开发实战\n课程已在购物车中: Python 全栈开发实战\n"
        );

        Ok(())
    }

    #[tokio::test]
    async fn show_lists_items_with_total() -> TestResult {
        let context = context()?;
        context.storefront.add_course(1).await?;
        context.storefront.add_course(3).await?;

        let mut buffer = Vec::new();
        show(&context, &mut buffer).await?;

        let text = output(buffer)?;

        assert!(text.contains("Web前端开发入门到精通"), "{text}");
        assert!(text.contains("共 2 门课程，合计 ¥498"), "{text}");

        Ok(())
    }

    #[tokio::test]
    async fn clear_empties_the_cart() -> TestResult {
        let context = context()?;
        context.storefront.add_course(2).await?;

        clear(&context, &mut Vec::new()).await?;

        let mut buffer = Vec::new();
        show(&context, &mut buffer).await?;

        assert_eq!(output(buffer)?, "购物车是空的\n");

        Ok(())
    }

    #[tokio::test]
    async fn unknown_course_is_reported() -> TestResult {
        let context = context()?;

        let result = add(&CartItemArgs { id: 42 }, &context, &mut Vec::new()).await;

        assert!(matches!(
            result,
            Err(AppError::Storefront(StorefrontError::UnknownCourse(42)))
        ));

        Ok(())
    }
}

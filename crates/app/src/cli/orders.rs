use std::io::Write;

use clap::{Args, Subcommand};
use keepstudy::{
    orders::{Order, OrderAction},
    prices::format_amount,
};
use keepstudy_app::{context::AppContext, errors::AppError};

use super::render::table;

#[derive(Debug, Args)]
pub(crate) struct OrdersCommand {
    #[command(subcommand)]
    command: OrdersSubcommand,
}

#[derive(Debug, Subcommand)]
enum OrdersSubcommand {
    /// List orders, newest first
    List(ListOrdersArgs),

    /// Show one order
    Show(ShowOrderArgs),
}

#[derive(Debug, Args)]
struct ListOrdersArgs {
    /// Match order id or course title
    #[arg(long, short, default_value = "")]
    search: String,
}

#[derive(Debug, Args)]
struct ShowOrderArgs {
    /// Order id
    id: String,
}

pub(crate) async fn run(
    command: OrdersCommand,
    context: &AppContext,
    out: &mut impl Write,
) -> Result<(), AppError> {
    match command.command {
        OrdersSubcommand::List(args) => list(&args, context, out).await,
        OrdersSubcommand::Show(args) => show(&args, context, out).await,
    }
}

fn display_total(order: &Order) -> String {
    format_amount(order.total)
}

fn display_date(order: &Order) -> String {
    order.date.strftime("%Y-%m-%d %H:%M").to_string()
}

async fn list(args: &ListOrdersArgs, context: &AppContext, out: &mut impl Write) -> Result<(), AppError> {
    let orders = context.storefront.orders().lock().await;
    let matches = orders.search(&args.search);

    if matches.is_empty() {
        writeln!(out, "暂无订单")?;

        return Ok(());
    }

    let rows = matches.iter().rev().map(|order| {
        [
            order.id.to_string(),
            display_date(order),
            order
                .items
                .iter()
                .map(|item| item.title.as_str())
                .collect::<Vec<_>>()
                .join("、"),
            display_total(order),
            order.payment_method.label().to_string(),
            order.status.label().text.to_string(),
        ]
    });

    writeln!(
        out,
        "{}",
        table(["订单号", "下单时间", "课程", "金额", "支付方式", "状态"], rows, &[3])
    )?;

    Ok(())
}

async fn show(args: &ShowOrderArgs, context: &AppContext, out: &mut impl Write) -> Result<(), AppError> {
    let orders = context.storefront.orders().lock().await;
    let order = orders
        .get(&args.id)
        .ok_or_else(|| AppError::UnknownOrder(args.id.clone()))?;

    writeln!(out, "订单号: {}", order.id)?;
    writeln!(out, "状态: {}", order.status.label().text)?;
    writeln!(out, "下单时间: {}", display_date(order))?;
    writeln!(out, "支付方式: {}", order.payment_method.label())?;

    let rows = order
        .items
        .iter()
        .map(|item| [item.title.clone(), item.price.clone()]);

    writeln!(out, "{}", table(["课程", "价格"], rows, &[1]))?;
    writeln!(out, "实付金额: {}", display_total(order))?;

    let actions: Vec<&str> = order
        .status
        .actions()
        .iter()
        .map(|action| OrderAction::label(*action))
        .collect();

    if !actions.is_empty() {
        writeln!(out, "可用操作: {}", actions.join(" / "))?;
    }

    Ok(())
}

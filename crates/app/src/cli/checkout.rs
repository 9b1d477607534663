use std::io::Write;

use clap::{Args, ValueEnum};
use keepstudy::{orders::PaymentMethod, prices::format_amount};
use keepstudy_app::{context::AppContext, errors::AppError};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MethodArg {
    /// 支付宝
    Alipay,

    /// 微信支付
    Wechat,

    /// 银行卡
    Card,
}

impl From<MethodArg> for PaymentMethod {
    fn from(value: MethodArg) -> Self {
        match value {
            MethodArg::Alipay => Self::Alipay,
            MethodArg::Wechat => Self::Wechat,
            MethodArg::Card => Self::Card,
        }
    }
}

#[derive(Debug, Args)]
pub(crate) struct CheckoutArgs {
    /// Payment method
    #[arg(long, value_enum, default_value_t = MethodArg::Alipay)]
    method: MethodArg,
}

pub(crate) async fn run(
    args: CheckoutArgs,
    context: &AppContext,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let method = PaymentMethod::from(args.method);

    writeln!(out, "正在通过{}支付...", method.label())?;

    let order = context.checkout.checkout(method).await?;

    writeln!(out, "支付成功！")?;
    writeln!(out, "订单号: {}", order.id)?;
    writeln!(out, "实付金额: {}", format_amount(order.total))?;

    Ok(())
}

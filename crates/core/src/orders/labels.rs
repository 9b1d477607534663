//! Order Labels
//!
//! Display tables for order statuses and payment methods. Unrecognised values
//! read from storage are kept verbatim and fall back to a generic label.

use std::{
    convert::Infallible,
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

/// How an order was (nominally) paid for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentMethod {
    /// Alipay.
    Alipay,

    /// WeChat Pay.
    Wechat,

    /// Bank card.
    Card,

    /// Any other stored value.
    Other(String),
}

impl PaymentMethod {
    /// Methods offered at checkout, in display order.
    pub const OFFERED: [Self; 3] = [Self::Alipay, Self::Wechat, Self::Card];

    /// Wire value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Alipay => "alipay",
            Self::Wechat => "wechat",
            Self::Card => "card",
            Self::Other(value) => value,
        }
    }

    /// Display name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Alipay => "支付宝",
            Self::Wechat => "微信支付",
            Self::Card => "银行卡",
            Self::Other(_) => "其他",
        }
    }
}

impl From<String> for PaymentMethod {
    fn from(value: String) -> Self {
        match value.as_str() {
            "alipay" => Self::Alipay,
            "wechat" => Self::Wechat,
            "card" => Self::Card,
            _ => Self::Other(value),
        }
    }
}

impl From<PaymentMethod> for String {
    fn from(value: PaymentMethod) -> Self {
        match value {
            PaymentMethod::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of an order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    /// Payment completed.
    Paid,

    /// Awaiting payment.
    Pending,

    /// Cancelled before payment.
    Canceled,

    /// Payment returned.
    Refunded,

    /// Any other stored value.
    Unknown(String),
}

/// Visual tone of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Completed, good.
    Success,

    /// Needs attention.
    Warning,

    /// Failed or withdrawn.
    Danger,

    /// Nothing to highlight.
    Neutral,
}

impl Tone {
    /// Badge classes used by the web front end.
    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::Success => "bg-green-100 text-green-800",
            Self::Warning => "bg-yellow-100 text-yellow-800",
            Self::Danger => "bg-red-100 text-red-800",
            Self::Neutral => "bg-gray-100 text-gray-800",
        }
    }
}

/// Display text and tone of a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLabel {
    /// Display text.
    pub text: &'static str,

    /// Badge tone.
    pub tone: Tone,
}

/// Follow-up actions offered on an order's detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    /// Open the learning workspace.
    StartLearning,

    /// Download the e-invoice.
    DownloadInvoice,

    /// Resume an unfinished payment.
    ContinuePayment,

    /// Cancel an unpaid order.
    Cancel,
}

impl OrderAction {
    /// Button text.
    pub const fn label(self) -> &'static str {
        match self {
            Self::StartLearning => "立即学习",
            Self::DownloadInvoice => "下载电子发票",
            Self::ContinuePayment => "继续支付",
            Self::Cancel => "取消订单",
        }
    }
}

impl OrderStatus {
    /// Wire value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Paid => "paid",
            Self::Pending => "pending",
            Self::Canceled => "canceled",
            Self::Refunded => "refunded",
            Self::Unknown(value) => value,
        }
    }

    /// Display text and tone.
    pub fn label(&self) -> StatusLabel {
        let (text, tone) = match self {
            Self::Paid => ("已支付", Tone::Success),
            Self::Pending => ("待支付", Tone::Warning),
            Self::Canceled => ("已取消", Tone::Danger),
            Self::Refunded => ("已退款", Tone::Neutral),
            Self::Unknown(_) => ("未知", Tone::Neutral),
        };

        StatusLabel { text, tone }
    }

    /// Actions offered for an order in this status.
    pub fn actions(&self) -> &'static [OrderAction] {
        match self {
            Self::Paid => &[OrderAction::StartLearning, OrderAction::DownloadInvoice],
            Self::Pending => &[OrderAction::ContinuePayment, OrderAction::Cancel],
            Self::Canceled | Self::Refunded | Self::Unknown(_) => &[],
        }
    }
}

impl From<String> for OrderStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "paid" => Self::Paid,
            "pending" => Self::Pending,
            "canceled" => Self::Canceled,
            "refunded" => Self::Refunded,
            _ => Self::Unknown(value),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(value: OrderStatus) -> Self {
        match value {
            OrderStatus::Unknown(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

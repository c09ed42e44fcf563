//! Objects referenced from the resources in this crate.
//!
//! Only identity and a handful of descriptive fields are modelled. They are
//! the targets of `Expandable` fields and of embedded values.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use stripe_sdk::{Expandable, Object};

use crate::common::Metadata;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub object: Option<String>,
    /// Current balance in the smallest currency unit; negative is a credit
    pub balance: Option<i64>,
    pub created: Option<i64>,
    pub currency: Option<String>,
    pub deleted: Option<bool>,
    pub description: Option<String>,
    pub email: Option<String>,
    pub livemode: Option<bool>,
    pub metadata: Option<Metadata>,
    pub name: Option<String>,
}

impl Object for Customer {
    const OBJECT_NAME: &'static str = "customer";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Draft,
    Open,
    Paid,
    Uncollectible,
    Void,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub object: Option<String>,
    pub amount_due: Option<i64>,
    pub amount_paid: Option<i64>,
    pub created: Option<i64>,
    pub currency: Option<String>,
    pub customer: Option<Expandable<Customer>>,
    pub livemode: Option<bool>,
    pub metadata: Option<Metadata>,
    pub status: Option<InvoiceStatus>,
}

impl Object for Invoice {
    const OBJECT_NAME: &'static str = "invoice";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    Canceled,
    Incomplete,
    IncompleteExpired,
    PastDue,
    Trialing,
    Unpaid,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: String,
    pub object: Option<String>,
    pub created: Option<i64>,
    pub current_period_end: Option<i64>,
    pub current_period_start: Option<i64>,
    pub customer: Option<Expandable<Customer>>,
    pub livemode: Option<bool>,
    pub metadata: Option<Metadata>,
    pub status: Option<SubscriptionStatus>,
}

impl Object for Subscription {
    const OBJECT_NAME: &'static str = "subscription";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Connected account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub object: Option<String>,
    pub charges_enabled: Option<bool>,
    pub country: Option<String>,
    pub created: Option<i64>,
    pub default_currency: Option<String>,
    pub email: Option<String>,
    pub metadata: Option<Metadata>,
    pub payouts_enabled: Option<bool>,
}

impl Object for Account {
    const OBJECT_NAME: &'static str = "account";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanInterval {
    Day,
    Week,
    Month,
    Year,
    #[serde(other)]
    Unknown,
}

/// Pricing plan embedded in subscription-generated invoice items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: String,
    pub object: Option<String>,
    pub active: Option<bool>,
    pub amount: Option<i64>,
    pub amount_decimal: Option<Decimal>,
    pub currency: Option<String>,
    pub interval: Option<PlanInterval>,
    pub interval_count: Option<i64>,
    pub livemode: Option<bool>,
    pub metadata: Option<Metadata>,
    pub nickname: Option<String>,
    pub product: Option<String>,
}

impl Object for Plan {
    const OBJECT_NAME: &'static str = "plan";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxRate {
    pub id: String,
    pub object: Option<String>,
    pub active: Option<bool>,
    pub created: Option<i64>,
    pub description: Option<String>,
    pub display_name: Option<String>,
    pub inclusive: Option<bool>,
    pub jurisdiction: Option<String>,
    pub livemode: Option<bool>,
    pub metadata: Option<Metadata>,
    pub percentage: Option<Decimal>,
}

impl Object for TaxRate {
    const OBJECT_NAME: &'static str = "tax_rate";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Start and end of a billing period, as Unix timestamps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub end: Option<i64>,
    pub start: Option<i64>,
}

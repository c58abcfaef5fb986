use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::timestamp;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    pub deal_unique_id: String,
    pub ordering_currency: String,
    pub to_currency: String,
    pub deal_timestamp: NaiveDateTime,
    pub amount: Decimal,
}

/// One element of an import batch as it arrives on the wire. Every field is
/// optional so that absent values surface as violations, not parse errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeal {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deal_unique_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordering_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "timestamp::deserialize_optional")]
    pub deal_timestamp: Option<NaiveDateTime>,
    /// JSON numbers are read digit for digit, never through `f64`.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "rust_decimal::serde::arbitrary_precision_option")]
    pub amount: Option<Decimal>,
}

impl CreateDeal {
    pub fn new(deal_unique_id: &str,
               ordering_currency: &str,
               to_currency: &str,
               deal_timestamp: NaiveDateTime,
               amount: Decimal) -> Self {
        Self {
            deal_unique_id: Some(deal_unique_id.to_string()),
            ordering_currency: Some(ordering_currency.to_string()),
            to_currency: Some(to_currency.to_string()),
            deal_timestamp: Some(deal_timestamp),
            amount: Some(amount),
        }
    }
}

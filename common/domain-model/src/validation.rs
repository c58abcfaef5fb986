use std::fmt;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::CreateDeal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    DealUniqueId,
    OrderingCurrency,
    ToCurrency,
    DealTimestamp,
    Amount,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Field::DealUniqueId => "dealUniqueId",
            Field::OrderingCurrency => "orderingCurrency",
            Field::ToCurrency => "toCurrency",
            Field::DealTimestamp => "dealTimestamp",
            Field::Amount => "amount",
        };
        write!(f, "{name}")
    }
}

/// A field constraint broken by a single deal record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("{0} is required")]
    Missing(Field),
    #[error("{0} must not be blank")]
    Blank(Field),
    #[error("{field} must be a valid ISO 4217 code (3 uppercase letters): '{value}'")]
    InvalidCurrency { field: Field, value: String },
    #[error("amount must be greater than 0: '{0}'")]
    NonPositiveAmount(Decimal),
}

impl Violation {
    pub fn field(&self) -> Field {
        match self {
            Violation::Missing(field) | Violation::Blank(field) => *field,
            Violation::InvalidCurrency { field, .. } => *field,
            Violation::NonPositiveAmount(_) => Field::Amount,
        }
    }
}

impl CreateDeal {
    /// Checks every field constraint and reports all broken ones at once.
    pub fn validate(&self) -> Result<(), Vec<Violation>> {
        let mut violations = Vec::new();

        match &self.deal_unique_id {
            None => violations.push(Violation::Missing(Field::DealUniqueId)),
            Some(id) if id.trim().is_empty() => violations.push(Violation::Blank(Field::DealUniqueId)),
            Some(_) => {}
        }
        validate_currency(Field::OrderingCurrency, self.ordering_currency.as_deref(), &mut violations);
        validate_currency(Field::ToCurrency, self.to_currency.as_deref(), &mut violations);
        if self.deal_timestamp.is_none() {
            violations.push(Violation::Missing(Field::DealTimestamp));
        }
        match self.amount {
            None => violations.push(Violation::Missing(Field::Amount)),
            Some(amount) if amount <= Decimal::ZERO => violations.push(Violation::NonPositiveAmount(amount)),
            Some(_) => {}
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

fn validate_currency(field: Field, value: Option<&str>, violations: &mut Vec<Violation>) {
    match value {
        None => violations.push(Violation::Missing(field)),
        Some(value) if !is_currency_code(value) => violations.push(Violation::InvalidCurrency {
            field,
            value: value.to_string(),
        }),
        Some(_) => {}
    }
}

pub fn is_currency_code(value: &str) -> bool {
    value.len() == 3 && value.bytes().all(|byte| byte.is_ascii_uppercase())
}

//! Field-for-field conversion from the import input to the entity.

use anyhow::{anyhow, Error, Result};

use crate::{CreateDeal, Deal, Field};

impl TryFrom<CreateDeal> for Deal {
    type Error = Error;

    fn try_from(value: CreateDeal) -> Result<Self, Self::Error> {
        Ok(Self {
            deal_unique_id: value.deal_unique_id.ok_or_else(|| missing(Field::DealUniqueId))?,
            ordering_currency: value.ordering_currency.ok_or_else(|| missing(Field::OrderingCurrency))?,
            to_currency: value.to_currency.ok_or_else(|| missing(Field::ToCurrency))?,
            deal_timestamp: value.deal_timestamp.ok_or_else(|| missing(Field::DealTimestamp))?,
            amount: value.amount.ok_or_else(|| missing(Field::Amount))?,
        })
    }
}

/// Maps one batch element. An absent element cannot be mapped.
pub fn to_entity(request: Option<CreateDeal>) -> Result<Deal> {
    request
        .ok_or_else(|| anyhow!("Deal record is empty"))?
        .try_into()
}

fn missing(field: Field) -> Error {
    anyhow!("Cannot map deal without '{field}'")
}

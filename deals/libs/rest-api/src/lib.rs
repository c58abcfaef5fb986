pub mod endpoints {
    pub const DEALS: &str = "/api/deals";
    pub const DEAL: &str = "/api/deals/:deal_unique_id";
}

pub mod dto {
    use chrono::NaiveDateTime;
    use rust_decimal::Decimal;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct DealResponse {
        pub deal_unique_id: String,
        pub ordering_currency: String,
        pub to_currency: String,
        pub deal_timestamp: NaiveDateTime,
        pub amount: Decimal,
    }

    /// Body of every 4xx/5xx answer. `violations` is filled only when the
    /// batch broke field constraints.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ErrorResponse {
        pub message: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        pub violations: Vec<ViolationDto>,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ViolationDto {
        pub index: usize,
        pub field: String,
        pub message: String,
    }
}

pub mod mapping {
    use domain_model::Deal;

    use crate::dto::DealResponse;

    impl From<Deal> for DealResponse {
        fn from(value: Deal) -> Self {
            Self {
                deal_unique_id: value.deal_unique_id,
                ordering_currency: value.ordering_currency,
                to_currency: value.to_currency,
                deal_timestamp: value.deal_timestamp,
                amount: value.amount,
            }
        }
    }

    pub fn to_response(deal: Option<Deal>) -> Option<DealResponse> {
        deal.map(DealResponse::from)
    }

    #[cfg(test)]
    mod tests {
        use chrono::NaiveDate;
        use rust_decimal::Decimal;

        use super::*;

        #[test]
        fn test_to_response() {
            assert_eq!(to_response(None), None);

            let deal = Deal {
                deal_unique_id: "d1".to_string(),
                ordering_currency: "USD".to_string(),
                to_currency: "EUR".to_string(),
                deal_timestamp: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
                    .and_hms_opt(10, 0, 0).unwrap(),
                amount: Decimal::new(1005, 1),
            };
            let response = to_response(Some(deal)).unwrap();

            assert_eq!(serde_json::to_value(&response).unwrap(), serde_json::json!({
                "dealUniqueId": "d1",
                "orderingCurrency": "USD",
                "toCurrency": "EUR",
                "dealTimestamp": "2024-01-01T10:00:00",
                "amount": "100.5"
            }));
        }
    }
}

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

use storefront_core::payload::{self, NOT_A_DATE, NOT_AN_INTEGER};
use storefront_core::{
    CustomerId, DomainError, DomainResult, Entity, FieldErrors, OrderId, ProductId,
};
use storefront_products::Product;

/// Entity: an order row with its resolved product lines.
///
/// Orders have no lifecycle: once created they are immutable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub order_date: NaiveDate,
    pub customer_id: CustomerId,
    pub products: Vec<Product>,
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Validated order record.
///
/// `items` is carried as given; the repository resolves the ids against the
/// product store (treating them as a set) and decides success only after
/// scanning the full list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    pub order_date: NaiveDate,
    pub customer_id: CustomerId,
    pub items: Vec<ProductId>,
}

/// Validate a raw order payload.
///
/// `order_date` is optional and defaults to `today` (the caller's clock)
/// before validation; when present it must be an ISO calendar date.
/// `customer_id` must be an integer; the repository leaves its existence to
/// the store's foreign key. `items` must be a list of integers.
pub fn validate_order(raw: &Value, today: NaiveDate) -> DomainResult<OrderDraft> {
    let empty = serde_json::Map::new();
    let fields = payload::as_object(raw).unwrap_or(&empty);
    let mut errors = FieldErrors::new();

    let order_date = match fields.get("order_date") {
        None | Some(Value::Null) => Some(today),
        Some(Value::String(s)) => match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                payload::push_error(&mut errors, "order_date", NOT_A_DATE);
                None
            }
        },
        Some(_) => {
            payload::push_error(&mut errors, "order_date", NOT_A_DATE);
            None
        }
    };

    let customer_id = payload::required_i64(fields, "customer_id", &mut errors).map(CustomerId::new);

    let items = payload::required_array(fields, "items", &mut errors).and_then(|raw_items| {
        let mut ids = Vec::with_capacity(raw_items.len());
        for item in raw_items {
            match item.as_i64() {
                Some(id) => ids.push(ProductId::new(id)),
                None => {
                    payload::push_error(&mut errors, "items", NOT_AN_INTEGER);
                    return None;
                }
            }
        }
        Some(ids)
    });

    match (order_date, customer_id, items) {
        (Some(order_date), Some(customer_id), Some(items)) => Ok(OrderDraft {
            order_date,
            customer_id,
            items,
        }),
        _ => Err(DomainError::validation(errors)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn field_errors(raw: &Value) -> FieldErrors {
        match validate_order(raw, today()) {
            Err(DomainError::Validation(errors)) => errors,
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn full_payload_validates() {
        let draft = validate_order(
            &json!({
                "order_date": "2024-05-30",
                "customer_id": 7,
                "items": [1, 2, 3],
            }),
            today(),
        )
        .unwrap();

        assert_eq!(draft.order_date, NaiveDate::from_ymd_opt(2024, 5, 30).unwrap());
        assert_eq!(draft.customer_id, CustomerId::new(7));
        assert_eq!(
            draft.items,
            vec![ProductId::new(1), ProductId::new(2), ProductId::new(3)]
        );
    }

    #[test]
    fn omitted_order_date_defaults_to_today() {
        let draft = validate_order(
            &json!({ "customer_id": 7, "items": [1] }),
            today(),
        )
        .unwrap();
        assert_eq!(draft.order_date, today());
    }

    #[test]
    fn malformed_date_is_rejected() {
        for bad in ["2024-13-01", "yesterday", "2024/05/30"] {
            let errors = field_errors(&json!({
                "order_date": bad,
                "customer_id": 7,
                "items": [1],
            }));
            assert_eq!(errors["order_date"], vec![NOT_A_DATE.to_string()]);
        }
    }

    #[test]
    fn non_string_date_is_rejected() {
        let errors = field_errors(&json!({
            "order_date": 20240530,
            "customer_id": 7,
            "items": [1],
        }));
        assert_eq!(errors["order_date"], vec![NOT_A_DATE.to_string()]);
    }

    #[test]
    fn customer_id_and_items_are_required() {
        let errors = field_errors(&json!({}));
        assert_eq!(errors.keys().collect::<Vec<_>>(), vec!["customer_id", "items"]);
    }

    #[test]
    fn non_integer_item_is_rejected() {
        let errors = field_errors(&json!({
            "customer_id": 7,
            "items": [1, "two"],
        }));
        assert_eq!(errors["items"], vec![NOT_AN_INTEGER.to_string()]);
    }

    #[test]
    fn empty_items_list_is_allowed() {
        // Non-empty in practice, but not enforced.
        let draft = validate_order(&json!({ "customer_id": 7, "items": [] }), today()).unwrap();
        assert!(draft.items.is_empty());
    }
}

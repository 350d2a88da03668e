use serde::Serialize;
use serde_json::Value;

use storefront_core::payload::{self, EMPTY_FIELD};
use storefront_core::{DomainError, DomainResult, Entity, FieldErrors, ProductId};

/// Entity: a product row.
///
/// `price` is a plain float; negative values are not rejected here (the
/// column is typed, nothing more).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub product_name: String,
    pub price: f64,
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Validated product record, safe to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub product_name: String,
    pub price: f64,
}

/// Validate a raw product payload.
///
/// `price` accepts a JSON number or a numeric string; both must parse as a
/// finite float. Unknown fields are ignored, `id` is server-assigned.
pub fn validate_product(raw: &Value) -> DomainResult<ProductDraft> {
    let empty = serde_json::Map::new();
    let fields = payload::as_object(raw).unwrap_or(&empty);
    let mut errors = FieldErrors::new();

    let product_name = payload::required_str(fields, "product_name", &mut errors)
        .and_then(|name| {
            if name.trim().is_empty() {
                payload::push_error(&mut errors, "product_name", EMPTY_FIELD);
                None
            } else {
                Some(name.to_string())
            }
        });

    let price = payload::required_f64(fields, "price", &mut errors);

    match (product_name, price) {
        (Some(product_name), Some(price)) => Ok(ProductDraft {
            product_name,
            price,
        }),
        _ => Err(DomainError::validation(errors)),
    }
}

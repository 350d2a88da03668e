use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use storefront_core::payload::{self, EMPTY_FIELD};
use storefront_core::{CustomerId, DomainError, DomainResult, Entity, FieldErrors};

pub const INVALID_EMAIL: &str = "Invalid email address";
pub const INVALID_PHONE: &str = "Invalid phone number. It should be a valid phone number \
     with 10 to 15 digits, optionally starting with a '+'.";

/// Light email grammar: one `@`, a dot somewhere in the domain, no whitespace.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles"));

/// Optional leading `+`, then 10 to 15 digits.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?\d{10,15}$").expect("phone pattern compiles"));

/// Entity: a customer row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    pub id: CustomerId,
    pub customer_name: String,
    pub email: String,
    pub phone: String,
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Validated customer record, safe to persist.
///
/// Carries no id: identifiers are store-assigned, and an `id` field in the
/// incoming payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerDraft {
    pub customer_name: String,
    pub email: String,
    pub phone: String,
}

/// Validate a raw customer payload.
///
/// Every recognized field is required (creation and update share this
/// schema, so updates must resend the full record). Unknown fields are
/// ignored. All failing fields are reported together.
pub fn validate_customer(raw: &Value) -> DomainResult<CustomerDraft> {
    let empty = serde_json::Map::new();
    let fields = payload::as_object(raw).unwrap_or(&empty);
    let mut errors = FieldErrors::new();

    let customer_name = payload::required_str(fields, "customer_name", &mut errors)
        .and_then(|name| {
            if name.trim().is_empty() {
                payload::push_error(&mut errors, "customer_name", EMPTY_FIELD);
                None
            } else {
                Some(name.to_string())
            }
        });

    let email = payload::required_str(fields, "email", &mut errors).and_then(|email| {
        if EMAIL_RE.is_match(email) {
            Some(email.to_string())
        } else {
            payload::push_error(&mut errors, "email", INVALID_EMAIL);
            None
        }
    });

    let phone = payload::required_str(fields, "phone", &mut errors).and_then(|phone| {
        if PHONE_RE.is_match(phone) {
            Some(phone.to_string())
        } else {
            payload::push_error(&mut errors, "phone", INVALID_PHONE);
            None
        }
    });

    match (customer_name, email, phone) {
        (Some(customer_name), Some(email), Some(phone)) => Ok(CustomerDraft {
            customer_name,
            email,
            phone,
        }),
        _ => Err(DomainError::validation(errors)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn field_errors(raw: &Value) -> FieldErrors {
        match validate_customer(raw) {
            Err(DomainError::Validation(errors)) => errors,
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn valid_payload_produces_draft_with_all_fields() {
        let draft = validate_customer(&json!({
            "customer_name": "Ada Lovelace",
            "email": "ada@example.com",
            "phone": "+15551234567",
        }))
        .unwrap();

        assert_eq!(draft.customer_name, "Ada Lovelace");
        assert_eq!(draft.email, "ada@example.com");
        assert_eq!(draft.phone, "+15551234567");
    }

    #[test]
    fn missing_fields_are_all_reported() {
        let errors = field_errors(&json!({}));
        assert_eq!(
            errors.keys().collect::<Vec<_>>(),
            vec!["customer_name", "email", "phone"]
        );
        for messages in errors.values() {
            assert_eq!(messages, &vec![payload::MISSING_FIELD.to_string()]);
        }
    }

    #[test]
    fn non_object_payload_behaves_like_empty_payload() {
        let errors = field_errors(&json!("not an object"));
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn empty_name_is_rejected() {
        let errors = field_errors(&json!({
            "customer_name": "   ",
            "email": "a@b.com",
            "phone": "5551234567",
        }));
        assert_eq!(errors["customer_name"], vec![EMPTY_FIELD.to_string()]);
    }

    #[test]
    fn email_grammar_is_enforced() {
        let errors = field_errors(&json!({
            "customer_name": "Ada",
            "email": "not-an-email",
            "phone": "5551234567",
        }));
        assert_eq!(errors["email"], vec![INVALID_EMAIL.to_string()]);

        assert!(
            validate_customer(&json!({
                "customer_name": "Ada",
                "email": "a@b.com",
                "phone": "5551234567",
            }))
            .is_ok()
        );
    }

    #[test]
    fn phone_length_bounds_are_enforced() {
        for good in ["5551234567", "+15551234567", "123456789012345"] {
            let result = validate_customer(&json!({
                "customer_name": "Ada",
                "email": "a@b.com",
                "phone": good,
            }));
            assert!(result.is_ok(), "expected {good:?} to validate");
        }

        for bad in ["123", "12345678901234567", "555-123-4567", "++15551234567"] {
            let errors = field_errors(&json!({
                "customer_name": "Ada",
                "email": "a@b.com",
                "phone": bad,
            }));
            assert_eq!(errors["phone"], vec![INVALID_PHONE.to_string()]);
        }
    }

    #[test]
    fn unknown_fields_and_client_supplied_id_are_ignored() {
        let draft = validate_customer(&json!({
            "id": 99,
            "customer_name": "Ada",
            "email": "a@b.com",
            "phone": "5551234567",
            "loyalty_tier": "gold",
        }))
        .unwrap();
        assert_eq!(draft.customer_name, "Ada");
    }

    #[test]
    fn all_invalid_fields_are_reported_together() {
        let errors = field_errors(&json!({
            "customer_name": "",
            "email": "nope",
            "phone": "123",
        }));
        assert_eq!(errors.len(), 3);
    }

    proptest! {
        #[test]
        fn any_10_to_15_digit_phone_validates(digits in "[0-9]{10,15}", plus in proptest::bool::ANY) {
            let phone = if plus { format!("+{digits}") } else { digits };
            let result = validate_customer(&json!({
                "customer_name": "Ada",
                "email": "a@b.com",
                "phone": phone,
            }));
            prop_assert!(result.is_ok());
        }

        #[test]
        fn out_of_range_digit_counts_are_rejected(digits in "[0-9]{1,9}|[0-9]{16,20}") {
            let result = validate_customer(&json!({
                "customer_name": "Ada",
                "email": "a@b.com",
                "phone": digits,
            }));
            prop_assert!(result.is_err());
        }
    }
}

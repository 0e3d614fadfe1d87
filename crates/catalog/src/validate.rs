//! Validators for inbound catalog models.
//!
//! A fresh validator is built per request flow (no shared state). Rule order
//! is declaration order and is user-visible in the response message list.

use cuppa_core::validation::{rules, Validator};

use crate::product::ProductDraft;

/// Maximum accepted product name length, in characters.
pub const MAX_NAME_LEN: usize = 120;

/// Validator for a product draft (create and update share the same shape).
pub fn product_draft() -> Validator<ProductDraft> {
    Validator::new()
        .rule(
            "name",
            rules::not_empty(|d: &ProductDraft| d.name.as_str(), "Name is required."),
        )
        .rule(
            "name",
            rules::length_between(
                |d: &ProductDraft| d.name.as_str(),
                0,
                MAX_NAME_LEN,
                "Name must be at most 120 characters.",
            ),
        )
        .rule(
            "price_cents",
            rules::greater_than(
                |d: &ProductDraft| d.price_cents,
                0,
                "Price must be greater than 0.",
            ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, price_cents: i64) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            price_cents,
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(product_draft().validate(&draft("Latte", 450)).is_empty());
    }

    #[test]
    fn empty_name_yields_exactly_the_required_violation() {
        let violations = product_draft().validate(&draft("", 10));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "name");
        assert_eq!(violations[0].message, "Name is required.");
    }

    #[test]
    fn zero_price_yields_exactly_the_price_violation() {
        let violations = product_draft().validate(&draft("Latte", 0));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "price_cents");
        assert_eq!(violations[0].message, "Price must be greater than 0.");
    }

    #[test]
    fn negative_price_is_rejected() {
        let violations = product_draft().validate(&draft("Latte", -1));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].message, "Price must be greater than 0.");
    }

    #[test]
    fn empty_name_and_zero_price_collect_both_violations_in_order() {
        let violations = product_draft().validate(&draft("", 0));
        let messages: Vec<&str> = violations.iter().map(|v| v.message.as_str()).collect();
        assert_eq!(
            messages,
            ["Name is required.", "Price must be greater than 0."]
        );
    }

    #[test]
    fn overlong_name_is_rejected() {
        let violations = product_draft().validate(&draft(&"x".repeat(121), 100));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].message, "Name must be at most 120 characters.");
    }

    #[test]
    fn name_at_the_limit_passes() {
        assert!(product_draft()
            .validate(&draft(&"x".repeat(120), 100))
            .is_empty());
    }
}

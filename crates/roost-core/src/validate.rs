//! Validation layer for incoming payloads.
//!
//! Pure checks with no side effects: a payload either comes back as a
//! normalized draft ready for storage, or the call fails with
//! `Error::Validation` naming the offending fields.

use crate::error::{Error, Result};
use crate::models::{ContactPayload, PropertyDraft, PropertyPayload};

fn is_present(value: Option<&str>) -> bool {
    matches!(value, Some(s) if !s.trim().is_empty())
}

/// Check a candidate property payload and normalize it.
///
/// `title`, `location`, and `price` are required; `price` may arrive as a
/// number or a numeric string and is coerced to `f64` (zero is a valid
/// price, `null` counts as missing). `description` defaults to `""` and
/// `images` to an empty list.
pub fn validate_property(payload: &PropertyPayload) -> Result<PropertyDraft> {
    let mut missing = Vec::new();
    if !is_present(payload.title.as_deref()) {
        missing.push("title");
    }
    if !is_present(payload.location.as_deref()) {
        missing.push("location");
    }
    if payload.price.is_none() {
        missing.push("price");
    }
    if !missing.is_empty() {
        return Err(Error::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    let price = payload
        .price
        .as_ref()
        .and_then(|p| p.as_f64())
        .ok_or_else(|| Error::Validation("Field 'price' must be numeric".to_string()))?;

    Ok(PropertyDraft {
        title: payload.title.clone().unwrap_or_default(),
        location: payload.location.clone().unwrap_or_default(),
        price,
        description: payload.description.clone().unwrap_or_default(),
        images: payload.images.clone().unwrap_or_default(),
    })
}

/// Check a contact-form payload. All three fields are required and
/// non-empty. Returns the trimmed-checked fields as `(name, phone,
/// message)`.
pub fn validate_contact(payload: &ContactPayload) -> Result<(String, String, String)> {
    if !is_present(payload.name.as_deref())
        || !is_present(payload.phone.as_deref())
        || !is_present(payload.message.as_deref())
    {
        return Err(Error::Validation("All fields are required".to_string()));
    }
    Ok((
        payload.name.clone().unwrap_or_default(),
        payload.phone.clone().unwrap_or_default(),
        payload.message.clone().unwrap_or_default(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PriceInput;

    fn full_payload() -> PropertyPayload {
        PropertyPayload {
            title: Some("Lake House".to_string()),
            location: Some("Austin".to_string()),
            price: Some(PriceInput::Number(250000.0)),
            description: None,
            images: None,
        }
    }

    #[test]
    fn test_valid_payload_is_normalized() {
        let draft = validate_property(&full_payload()).unwrap();
        assert_eq!(draft.title, "Lake House");
        assert_eq!(draft.location, "Austin");
        assert_eq!(draft.price, 250000.0);
        assert_eq!(draft.description, "");
        assert!(draft.images.is_empty());
    }

    #[test]
    fn test_missing_title_rejected() {
        let mut payload = full_payload();
        payload.title = None;
        let err = validate_property(&payload).unwrap_err();
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn test_empty_title_rejected() {
        let mut payload = full_payload();
        payload.title = Some("   ".to_string());
        assert!(validate_property(&payload).is_err());
    }

    #[test]
    fn test_missing_price_rejected() {
        let mut payload = full_payload();
        payload.price = None;
        let err = validate_property(&payload).unwrap_err();
        assert!(err.to_string().contains("price"));
    }

    #[test]
    fn test_zero_price_is_valid() {
        let mut payload = full_payload();
        payload.price = Some(PriceInput::Number(0.0));
        let draft = validate_property(&payload).unwrap();
        assert_eq!(draft.price, 0.0);
    }

    #[test]
    fn test_numeric_string_price_coerced() {
        let mut payload = full_payload();
        payload.price = Some(PriceInput::Text("99500".to_string()));
        let draft = validate_property(&payload).unwrap();
        assert_eq!(draft.price, 99500.0);
    }

    #[test]
    fn test_non_numeric_string_price_rejected() {
        let mut payload = full_payload();
        payload.price = Some(PriceInput::Text("call us".to_string()));
        let err = validate_property(&payload).unwrap_err();
        assert!(err.to_string().contains("numeric"));
    }

    #[test]
    fn test_multiple_missing_fields_named_together() {
        let payload = PropertyPayload::default();
        let err = validate_property(&payload).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("title"));
        assert!(msg.contains("location"));
        assert!(msg.contains("price"));
    }

    #[test]
    fn test_images_passed_through_in_order() {
        let mut payload = full_payload();
        payload.images = Some(vec!["a.jpg".to_string(), "b.jpg".to_string()]);
        let draft = validate_property(&payload).unwrap();
        assert_eq!(draft.images, vec!["a.jpg", "b.jpg"]);
    }

    #[test]
    fn test_contact_all_fields_present() {
        let payload = ContactPayload {
            name: Some("A".to_string()),
            phone: Some("555".to_string()),
            message: Some("Hi".to_string()),
        };
        let (name, phone, message) = validate_contact(&payload).unwrap();
        assert_eq!((name.as_str(), phone.as_str(), message.as_str()), ("A", "555", "Hi"));
    }

    #[test]
    fn test_contact_missing_message_rejected() {
        let payload = ContactPayload {
            name: Some("A".to_string()),
            phone: Some("555".to_string()),
            message: None,
        };
        let err = validate_contact(&payload).unwrap_err();
        assert_eq!(err.to_string(), "All fields are required");
    }

    #[test]
    fn test_contact_blank_phone_rejected() {
        let payload = ContactPayload {
            name: Some("A".to_string()),
            phone: Some("  ".to_string()),
            message: Some("Hi".to_string()),
        };
        assert!(validate_contact(&payload).is_err());
    }
}

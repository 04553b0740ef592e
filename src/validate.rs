use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Restaurant categories offered by the signup form.
pub const RESTAURANT_TYPES: &[&str] = &[
    "fine-dining",
    "casual-dining",
    "fast-casual",
    "cafe",
    "bar",
    "other",
];

/// Field name -> error message, one entry per violation.
pub type ValidationErrors = BTreeMap<&'static str, String>;

/// Untrusted request body, all fields optional so every violation can be
/// reported in one pass.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSubmission {
    #[serde(default)]
    pub restaurant_name: Option<String>,
    #[serde(default)]
    pub owner_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub restaurant_type: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistSubmission {
    pub restaurant_name: String,
    pub owner_name: String,
    pub email: String,
    pub phone: String,
    pub restaurant_type: String,
    pub location: String,
    #[serde(default)]
    pub message: String,
}

pub fn validate(raw: &RawSubmission) -> Result<WaitlistSubmission, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let restaurant_name = trimmed(&raw.restaurant_name);
    if restaurant_name.is_empty() {
        errors.insert("restaurantName", "Restaurant name is required".to_string());
    }

    let owner_name = trimmed(&raw.owner_name);
    if owner_name.is_empty() {
        errors.insert("ownerName", "Owner name is required".to_string());
    }

    let email = trimmed(&raw.email);
    if !is_valid_email(&email) {
        errors.insert("email", "Invalid email address".to_string());
    }

    let phone = trimmed(&raw.phone);
    if !is_valid_phone(&phone) {
        errors.insert("phone", "Valid phone number is required".to_string());
    }

    let restaurant_type = trimmed(&raw.restaurant_type);
    if restaurant_type.is_empty() {
        errors.insert("restaurantType", "Restaurant type is required".to_string());
    } else if !RESTAURANT_TYPES.contains(&restaurant_type.as_str()) {
        errors.insert(
            "restaurantType",
            "Please select a valid restaurant type".to_string(),
        );
    }

    let location = trimmed(&raw.location);
    if location.is_empty() {
        errors.insert("location", "Location is required".to_string());
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(WaitlistSubmission {
        restaurant_name,
        owner_name,
        email,
        phone,
        restaurant_type,
        location,
        message: trimmed(&raw.message),
    })
}

fn trimmed(value: &Option<String>) -> String {
    value.as_deref().unwrap_or("").trim().to_string()
}

pub fn is_valid_email(email: &str) -> bool {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    let re = EMAIL_RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
    re.is_match(email)
}

// Matches the signup form's rule: spaces are stripped before checking, so
// "(555) 123-4567" and "555-123-4567" both pass.
fn is_valid_phone(phone: &str) -> bool {
    static PHONE_RE: OnceLock<Regex> = OnceLock::new();
    let re = PHONE_RE.get_or_init(|| {
        Regex::new(r"^[+]?[(]?[0-9]{3}[)]?[-.]?[0-9]{3}[-.]?[0-9]{4,6}$").unwrap()
    });
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    re.is_match(&compact)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_raw() -> RawSubmission {
        RawSubmission {
            restaurant_name: Some("Cafe X".to_string()),
            owner_name: Some("Jo".to_string()),
            email: Some("jo@x.com".to_string()),
            phone: Some("555-123-4567".to_string()),
            restaurant_type: Some("cafe".to_string()),
            location: Some("NYC".to_string()),
            message: None,
        }
    }

    #[test]
    fn accepts_a_complete_submission() {
        let submission = validate(&full_raw()).unwrap();
        assert_eq!(submission.restaurant_name, "Cafe X");
        assert_eq!(submission.owner_name, "Jo");
        assert_eq!(submission.email, "jo@x.com");
        assert_eq!(submission.restaurant_type, "cafe");
        assert_eq!(submission.message, "");
    }

    #[test]
    fn reports_every_missing_field_at_once() {
        let errors = validate(&RawSubmission::default()).unwrap_err();
        for field in [
            "restaurantName",
            "ownerName",
            "email",
            "phone",
            "restaurantType",
            "location",
        ] {
            assert!(errors.contains_key(field), "missing error for {field}");
        }
    }

    #[test]
    fn rejects_malformed_email() {
        let mut raw = full_raw();
        raw.email = Some("not-an-email".to_string());
        let errors = validate(&raw).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key("email"));
    }

    #[test]
    fn accepts_common_phone_formats() {
        for phone in ["(555) 123-4567", "555-123-4567", "+15551234567", "555.123.4567"] {
            let mut raw = full_raw();
            raw.phone = Some(phone.to_string());
            assert!(validate(&raw).is_ok(), "rejected {phone}");
        }
    }

    #[test]
    fn rejects_short_or_alphabetic_phones() {
        for phone in ["1234", "call me", "555-12"] {
            let mut raw = full_raw();
            raw.phone = Some(phone.to_string());
            let errors = validate(&raw).unwrap_err();
            assert!(errors.contains_key("phone"), "accepted {phone}");
        }
    }

    #[test]
    fn rejects_unknown_restaurant_type() {
        let mut raw = full_raw();
        raw.restaurant_type = Some("food-truck".to_string());
        let errors = validate(&raw).unwrap_err();
        assert!(errors.contains_key("restaurantType"));
    }

    #[test]
    fn trims_whitespace_and_keeps_message() {
        let mut raw = full_raw();
        raw.restaurant_name = Some("  Cafe X  ".to_string());
        raw.message = Some("  looking forward to it  ".to_string());
        let submission = validate(&raw).unwrap();
        assert_eq!(submission.restaurant_name, "Cafe X");
        assert_eq!(submission.message, "looking forward to it");
    }

    #[test]
    fn whitespace_only_required_field_is_missing() {
        let mut raw = full_raw();
        raw.location = Some("   ".to_string());
        let errors = validate(&raw).unwrap_err();
        assert!(errors.contains_key("location"));
    }
}

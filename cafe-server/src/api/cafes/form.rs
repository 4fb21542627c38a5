//! `/add` form decoding
//!
//! Every field is optional at the serde level so that a missing field becomes a
//! 400 naming that field instead of an opaque form rejection.

use serde::Deserialize;
use shared::models::CafeCreate;

use crate::utils::{AppError, AppResult};

/// Raw form body of `POST /add`
#[derive(Debug, Default, Deserialize)]
pub struct AddCafeForm {
    pub name: Option<String>,
    pub map_url: Option<String>,
    pub img_url: Option<String>,
    pub location: Option<String>,
    pub seats: Option<String>,
    pub has_toilet: Option<String>,
    pub has_wifi: Option<String>,
    pub has_sockets: Option<String>,
    pub can_take_calls: Option<String>,
    pub coffee_price: Option<String>,
}

impl TryFrom<AddCafeForm> for CafeCreate {
    type Error = AppError;

    fn try_from(form: AddCafeForm) -> AppResult<Self> {
        Ok(CafeCreate {
            name: required("name", form.name)?,
            map_url: required("map_url", form.map_url)?,
            img_url: required("img_url", form.img_url)?,
            location: required("location", form.location)?,
            seats: required("seats", form.seats)?,
            has_toilet: parse_flag("has_toilet", form.has_toilet.as_deref())?,
            has_wifi: parse_flag("has_wifi", form.has_wifi.as_deref())?,
            has_sockets: parse_flag("has_sockets", form.has_sockets.as_deref())?,
            can_take_calls: parse_flag("can_take_calls", form.can_take_calls.as_deref())?,
            coffee_price: form.coffee_price.filter(|p| !p.trim().is_empty()),
        })
    }
}

fn required(field: &str, value: Option<String>) -> AppResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::validation(format!("Missing required field: {field}"))),
    }
}

/// Parse an amenity flag
///
/// An absent field is `false`, matching an unticked HTML checkbox. Unknown
/// spellings are rejected rather than treated as truthy, so `"false"` is false.
pub fn parse_flag(field: &str, value: Option<&str>) -> AppResult<bool> {
    let Some(raw) = value else {
        return Ok(false);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "y" | "on" | "t" => Ok(true),
        "false" | "0" | "no" | "n" | "off" | "f" | "" => Ok(false),
        _ => Err(AppError::validation(format!(
            "Invalid boolean for {field}: {raw:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_form() -> AddCafeForm {
        AddCafeForm {
            name: Some("Lighthaus".into()),
            map_url: Some("https://maps.example.com/lighthaus".into()),
            img_url: Some("https://img.example.com/lighthaus.jpg".into()),
            location: Some("Clerkenwell".into()),
            seats: Some("10-20".into()),
            has_toilet: Some("true".into()),
            has_wifi: Some("false".into()),
            has_sockets: Some("1".into()),
            can_take_calls: None,
            coffee_price: Some("£2.50".into()),
        }
    }

    #[test]
    fn test_parse_flag_accepts_common_spellings() {
        for raw in ["true", "TRUE", " yes ", "1", "on", "y", "t"] {
            assert!(parse_flag("has_wifi", Some(raw)).unwrap(), "{raw}");
        }
        for raw in ["false", "False", "0", "no", "off", "", "n", "f"] {
            assert!(!parse_flag("has_wifi", Some(raw)).unwrap(), "{raw}");
        }
        assert!(!parse_flag("has_wifi", None).unwrap());
    }

    #[test]
    fn test_parse_flag_rejects_unknown_values() {
        let err = parse_flag("has_wifi", Some("maybe")).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("has_wifi")));
    }

    #[test]
    fn test_form_converts_to_create() {
        let create = CafeCreate::try_from(full_form()).unwrap();
        assert_eq!(create.name, "Lighthaus");
        assert!(create.has_toilet);
        assert!(!create.has_wifi);
        assert!(create.has_sockets);
        assert!(!create.can_take_calls);
        assert_eq!(create.coffee_price.as_deref(), Some("£2.50"));
    }

    #[test]
    fn test_blank_price_is_none() {
        let form = AddCafeForm {
            coffee_price: Some("  ".into()),
            ..full_form()
        };
        assert_eq!(CafeCreate::try_from(form).unwrap().coffee_price, None);
    }

    #[test]
    fn test_missing_required_field() {
        let form = AddCafeForm {
            location: None,
            ..full_form()
        };
        let err = CafeCreate::try_from(form).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("location")));
    }
}

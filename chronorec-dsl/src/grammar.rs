//! Property grammar: per-property value validators

use crate::datetime::parse_timestamp;
use crate::lexer::PropertyName;
use chronorec_core::{Color, PropertyError, Timestamp, Units, Weight};
use once_cell::sync::Lazy;
use regex::Regex;

static WEIGHT_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+\.?[0-9]*$").expect("Invalid weight regex"));

static COLOR_FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$").expect("Invalid color regex")
});

static EMBEDDED_PROPERTY: Lazy<Regex> = Lazy::new(|| {
    let alternatives = PropertyName::ALL
        .iter()
        .map(|name| format!("{}:", name.keyword()))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("(?i){}", alternatives)).expect("Invalid property token regex")
});

// ============================================================================
// VALIDATED VALUES
// ============================================================================

/// A property value that passed its validator.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Identifier(String),
    Time(Timestamp),
    Units(Units),
    Weight(Weight),
    Color(Color),
}

/// Run the validator for `name` on a raw, non-empty value.
pub fn validate_property(name: PropertyName, value: &str) -> Result<PropertyValue, PropertyError> {
    match name {
        PropertyName::Identifier => Ok(PropertyValue::Identifier(value.to_string())),
        PropertyName::Time => validate_time(value).map(PropertyValue::Time),
        PropertyName::Units => validate_units(value).map(PropertyValue::Units),
        PropertyName::Weight => validate_weight(value).map(PropertyValue::Weight),
        PropertyName::Color => validate_color(value).map(PropertyValue::Color),
    }
}

pub fn validate_time(value: &str) -> Result<Timestamp, PropertyError> {
    Ok(parse_timestamp(value)?)
}

/// One of `g`, `oz`, `kg`, `lb`, any case.
pub fn validate_units(value: &str) -> Result<Units, PropertyError> {
    Units::from_keyword(value).ok_or_else(|| PropertyError::InvalidUnits {
        value: value.to_string(),
    })
}

/// Digits with an optional decimal point, strictly greater than zero.
pub fn validate_weight(value: &str) -> Result<Weight, PropertyError> {
    let invalid = || PropertyError::InvalidWeight {
        value: value.to_string(),
    };

    if !WEIGHT_FORMAT.is_match(value) {
        return Err(invalid());
    }
    let amount: f64 = value.parse().map_err(|_| invalid())?;
    if amount <= 0.0 {
        return Err(invalid());
    }
    Ok(Weight::new(value, amount))
}

/// `#` followed by 3 or 6 hex digits.
pub fn validate_color(value: &str) -> Result<Color, PropertyError> {
    if COLOR_FORMAT.is_match(value) {
        Ok(Color::new(value))
    } else {
        Err(PropertyError::InvalidColor {
            value: value.to_string(),
        })
    }
}

/// True when a value carries another `KEY:` token, i.e. two properties were
/// written on one physical line.
pub fn contains_property_token(value: &str) -> bool {
    EMBEDDED_PROPERTY.is_match(value)
}

// ============================================================================
// TESTS
// ============================================================================

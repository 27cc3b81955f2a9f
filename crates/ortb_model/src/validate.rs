//! Checks shared by the validating setters.
//!
//! Each check names the field it guards so the error can point at it.

use core::any::type_name;
use core::cmp::Ordering;

use ortb_describe::constants::Specification;
use ortb_describe::ser::Value;

use crate::InvalidValueError;

/// First code of the range reserved for exchange-specific values.
pub const CUSTOM_RANGE_START: i64 = 500;

fn specification_name<S: Specification>() -> &'static str {
    let path = type_name::<S>();
    path.rsplit("::").next().unwrap_or(path)
}

/// Accepts `value` only if `S` lists it.
///
/// # Examples
///
/// ```
/// use ortb_model::bid_request::specification::BitType;
/// use ortb_model::validate::validate_in;
///
/// assert!(validate_in::<BitType>("paid", 1).is_ok());
/// assert!(validate_in::<BitType>("paid", 2).is_err());
/// ```
pub fn validate_in<S: Specification>(
    field: &'static str,
    value: impl Into<i64>,
) -> Result<(), InvalidValueError> {
    let value = value.into();
    if S::contains(&value) {
        Ok(())
    } else {
        log::debug!("`{field}` rejected {value}, not in {}", specification_name::<S>());
        Err(InvalidValueError::NotInSpecification {
            field,
            value: value.to_string(),
            specification: specification_name::<S>(),
        })
    }
}

/// Accepts `value` if `S` lists it or it is in the exchange-specific range.
pub fn validate_in_with_custom_range<S: Specification>(
    field: &'static str,
    value: impl Into<i64>,
) -> Result<(), InvalidValueError> {
    let value = value.into();
    if value >= CUSTOM_RANGE_START {
        return Ok(());
    }
    validate_in::<S>(field, value)
}

/// Accepts a string code only if `S` lists it.
pub fn validate_str_in<S: Specification>(
    field: &'static str,
    value: &str,
) -> Result<(), InvalidValueError> {
    if S::contains(value) {
        Ok(())
    } else {
        log::debug!("`{field}` rejected `{value}`, not in {}", specification_name::<S>());
        Err(InvalidValueError::NotInSpecification {
            field,
            value: value.to_owned(),
            specification: specification_name::<S>(),
        })
    }
}

/// Returns the text of a dynamic value that must be a string.
pub fn validate_string<'a>(field: &'static str, value: &'a Value) -> Result<&'a str, InvalidValueError> {
    value.as_str().ok_or_else(|| InvalidValueError::NotAString {
        field,
        found: describe_value(value).to_owned(),
    })
}

/// Accepts zero and positive values. Values that do not compare, such as
/// NaN, are rejected.
pub fn validate_positive<T>(field: &'static str, value: T) -> Result<T, InvalidValueError>
where
    T: PartialOrd + Default + ToString,
{
    if matches!(value.partial_cmp(&T::default()), None | Some(Ordering::Less)) {
        Err(InvalidValueError::Negative {
            field,
            value: value.to_string(),
        })
    } else {
        Ok(value)
    }
}

/// Accepts dotted version numbers such as `1`, `1.2` or `2.5.1`.
pub fn validate_version(field: &'static str, value: &str) -> Result<(), InvalidValueError> {
    let valid = !value.is_empty()
        && value
            .split('.')
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()));
    if valid {
        Ok(())
    } else {
        Err(InvalidValueError::InvalidVersion {
            field,
            value: value.to_owned(),
        })
    }
}

fn describe_value(value: &Value) -> &'static str {
    match value {
        Value::Bool(_) => "a bool",
        Value::Int(_) | Value::UInt(_) => "an integer",
        Value::Float(_) => "a float",
        Value::String(_) => "a string",
        Value::List(_) => "a list",
        Value::Map(_) => "a map",
    }
}

#[cfg(test)]
mod tests {
    use ortb_describe::ser::Value;

    use super::*;
    use crate::bid_request::specification::ConnectionType;
    use crate::native_request::specification::{DataAssetType, ImageMimeType};

    #[test]
    fn specification_membership() {
        assert!(validate_in::<ConnectionType>("connectiontype", ConnectionType::WIFI).is_ok());
        assert_eq!(
            validate_in::<ConnectionType>("connectiontype", 42),
            Err(InvalidValueError::NotInSpecification {
                field: "connectiontype",
                value: "42".into(),
                specification: "ConnectionType",
            })
        );
        assert!(validate_str_in::<ImageMimeType>("mimes", "image/png").is_ok());
        assert!(validate_str_in::<ImageMimeType>("mimes", "image/bmp").is_err());
    }

    #[test]
    fn custom_range() {
        assert!(validate_in_with_custom_range::<DataAssetType>("type", 500).is_ok());
        assert!(validate_in_with_custom_range::<DataAssetType>("type", 1).is_ok());
        assert!(validate_in_with_custom_range::<DataAssetType>("type", 499).is_err());
    }

    #[test]
    fn scalars() {
        assert_eq!(validate_positive("w", 0), Ok(0));
        assert!(validate_positive("pxratio", -0.5).is_err());
        assert!(matches!(
            validate_positive("pxratio", f64::NAN),
            Err(InvalidValueError::Negative { field: "pxratio", .. })
        ));
        assert_eq!(validate_positive("pxratio", f64::INFINITY), Ok(f64::INFINITY));
        assert_eq!(validate_string("request", &Value::from("{}")), Ok("{}"));
        assert!(matches!(
            validate_string("request", &Value::Int(1)),
            Err(InvalidValueError::NotAString { .. })
        ));
        assert!(validate_version("ver", "1.2").is_ok());
        assert!(validate_version("ver", "1..2").is_err());
        assert!(validate_version("ver", "v1").is_err());
    }
}

use ortb_describe::derive::{Describe, describe_methods};
use ortb_describe::ser::{Extension, Value};

use super::specification::{ApiFrameworks, CreativeAttributes};
use crate::InvalidValueError;
use crate::validate::{validate_in, validate_string, validate_version};

/// A native impression, carrying the native ad request as its payload.
///
/// # Examples
///
/// ```
/// use ortb_describe::SerializeError;
/// use ortb_describe::ser::{Serializable, Value};
/// use ortb_model::bid_request::Native;
///
/// let mut native = Native::new();
/// assert!(matches!(
///     native.to_map(),
///     Err(SerializeError::MissingRequiredField { property: "request", .. })
/// ));
///
/// native.set_request(r#"{"ver":"1.2"}"#).set_ver("1.2").unwrap();
/// native.add_api(3).unwrap();
/// assert!(native.add_api(99).is_err());
/// assert!(native.set_request_value(&Value::Int(1)).is_err());
///
/// let map = native.to_map().unwrap();
/// assert_eq!(map.keys().collect::<Vec<_>>(), ["request", "ver", "api"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Describe)]
#[ortb(type_path = "ortb_model::bid_request::Native", auto_register)]
pub struct Native {
    /// Request payload complying with the native ad specification.
    #[ortb(required)]
    request: Option<String>,
    /// Version of the native ad specification the request complies to.
    #[ortb(recommended)]
    ver: Option<String>,
    /// Supported API frameworks for this impression.
    api: Vec<i32>,
    /// Blocked creative attributes.
    battr: Vec<i32>,
    pub ext: Extension,
}

#[describe_methods]
impl Native {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn request(&self) -> Option<&str> {
        self.request.as_deref()
    }

    /// Sets the encoded request payload.
    pub fn set_request(&mut self, request: impl Into<String>) -> &mut Self {
        self.request = Some(request.into());
        self
    }

    /// Sets the request payload from a dynamic value, which must be a string.
    pub fn set_request_value(&mut self, request: &Value) -> Result<&mut Self, InvalidValueError> {
        let request = validate_string("request", request)?;
        Ok(self.set_request(request))
    }

    #[inline]
    pub fn ver(&self) -> Option<&str> {
        self.ver.as_deref()
    }

    /// Sets the version, a dotted number such as `1.2`.
    pub fn set_ver(&mut self, ver: &str) -> Result<&mut Self, InvalidValueError> {
        validate_version("ver", ver)?;
        self.ver = Some(ver.to_owned());
        Ok(self)
    }

    #[inline]
    pub fn api(&self) -> &[i32] {
        &self.api
    }

    /// Appends a supported API framework, one of [`ApiFrameworks`].
    pub fn add_api(&mut self, api: i32) -> Result<&mut Self, InvalidValueError> {
        validate_in::<ApiFrameworks>("api", api)?;
        self.api.push(api);
        Ok(self)
    }

    /// Replaces the supported API frameworks. Nothing changes if one is invalid.
    pub fn set_api(&mut self, api: Vec<i32>) -> Result<&mut Self, InvalidValueError> {
        for &code in &api {
            validate_in::<ApiFrameworks>("api", code)?;
        }
        self.api = api;
        Ok(self)
    }

    #[inline]
    pub fn battr(&self) -> &[i32] {
        &self.battr
    }

    /// Appends a blocked creative attribute, one of [`CreativeAttributes`].
    pub fn add_battr(&mut self, battr: i32) -> Result<&mut Self, InvalidValueError> {
        validate_in::<CreativeAttributes>("battr", battr)?;
        self.battr.push(battr);
        Ok(self)
    }

    /// Replaces the blocked creative attributes. Nothing changes if one is invalid.
    pub fn set_battr(&mut self, battr: Vec<i32>) -> Result<&mut Self, InvalidValueError> {
        for &code in &battr {
            validate_in::<CreativeAttributes>("battr", code)?;
        }
        self.battr = battr;
        Ok(self)
    }
}

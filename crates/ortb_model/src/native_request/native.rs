use ortb_describe::derive::Describe;
use ortb_describe::ser::{Collection, Extension};

use super::Assets;
use super::specification::BitType;
use crate::InvalidValueError;
use crate::macros::coded_accessors;
use crate::validate::{validate_in, validate_version};

/// The native ad request, the payload of a bid request's native impression.
///
/// # Examples
///
/// ```
/// use ortb_describe::ser::Serializable;
/// use ortb_model::native_request::{Assets, Native, Title};
///
/// let mut native = Native::new();
/// assert!(native.to_map().is_err());
///
/// let mut title = Assets::new(1);
/// title.title = Some(Title { len: Some(90), ..Title::default() });
/// native.add_assets(title);
///
/// let json = serde_json::to_string(&native.to_map().unwrap()).unwrap();
/// assert_eq!(json, r#"{"ver":"1.2","assets":[{"id":1,"title":{"len":90}}]}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Describe)]
#[ortb(type_path = "ortb_model::native_request::Native", auto_register)]
pub struct Native {
    /// Version of the native markup in use.
    #[ortb(default = "1.2")]
    ver: Option<String>,
    /// Number of identical placements in this layout.
    #[ortb(default = 1)]
    pub plcmtcnt: Option<i32>,
    /// Sequence number of the ad in the stream.
    #[ortb(default = 0)]
    pub seq: Option<i32>,
    /// Assets of the native ad.
    #[ortb(required)]
    pub assets: Collection<Assets>,
    /// Whether the supply source supports a privacy notice link.
    privacy: Option<i32>,
    pub ext: Extension,
}

impl Default for Native {
    fn default() -> Self {
        Self::new()
    }
}

impl Native {
    /// Version written by [`Native::new`].
    pub const VERSION: &str = "1.2";

    pub fn new() -> Self {
        Self {
            ver: Some(Self::VERSION.to_owned()),
            plcmtcnt: None,
            seq: None,
            assets: Collection::new(),
            privacy: None,
            ext: Extension::new(),
        }
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

    /// Appends an asset.
    pub fn add_assets(&mut self, assets: Assets) -> &mut Self {
        self.assets.push(assets);
        self
    }

    coded_accessors! {
        /// Sets privacy notice support, one of [`BitType`].
        privacy, set_privacy => validate_in::<BitType>;
    }
}

use ortb_describe::derive::Describe;
use ortb_describe::ser::{Collection, Extension};

use super::Assets;

// -----------------------------------------------------------------------------
// Native

/// Top-level native ad response.
///
/// # Examples
///
/// ```
/// use ortb_describe::SerializeError;
/// use ortb_describe::ser::Serializable;
/// use ortb_model::native_response::{Assets, Data, Link, Native};
///
/// let mut native = Native::new();
/// native.add_assets(Assets::with_data(1, Data::new("4.5")));
/// assert!(matches!(
///     native.to_map(),
///     Err(SerializeError::MissingRequiredField { property: "link", .. })
/// ));
///
/// native.link = Some(Link::new("https://example.com/landing"));
/// native.add_imptrackers("https://example.com/imp");
///
/// let json = serde_json::to_string(&native.to_map().unwrap()).unwrap();
/// assert_eq!(
///     json,
///     concat!(
///         r#"{"assets":[{"id":1,"data":{"value":"4.5"}}],"#,
///         r#""link":{"url":"https://example.com/landing"},"#,
///         r#""imptrackers":["https://example.com/imp"]}"#,
///     )
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Describe)]
#[ortb(type_path = "ortb_model::native_response::Native", auto_register)]
pub struct Native {
    /// Version of the native markup in use.
    #[ortb(default = 1)]
    pub ver: Option<i32>,
    /// The native ad's assets.
    #[ortb(required)]
    pub assets: Collection<Assets>,
    /// Destination link.
    #[ortb(required)]
    pub link: Option<Link>,
    /// Impression tracking URLs.
    pub imptrackers: Vec<String>,
    /// Optional JavaScript impression tracker.
    pub jstracker: Option<String>,
    pub ext: Extension,
}

impl Native {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_assets(&mut self, assets: Assets) -> &mut Self {
        self.assets.push(assets);
        self
    }

    pub fn add_imptrackers(&mut self, url: impl Into<String>) -> &mut Self {
        self.imptrackers.push(url.into());
        self
    }
}

// -----------------------------------------------------------------------------
// Link

/// Destination of a click on the ad or one of its assets.
#[derive(Debug, Clone, Default, PartialEq, Describe)]
#[ortb(type_path = "ortb_model::native_response::Link", auto_register)]
pub struct Link {
    /// Landing URL of the clickable link.
    #[ortb(required)]
    pub url: Option<String>,
    /// Third-party click trackers.
    pub clicktrackers: Vec<String>,
    /// Fallback URL for a deep link.
    pub fallback: Option<String>,
    pub ext: Extension,
}

impl Link {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn add_clicktrackers(&mut self, url: impl Into<String>) -> &mut Self {
        self.clicktrackers.push(url.into());
        self
    }
}

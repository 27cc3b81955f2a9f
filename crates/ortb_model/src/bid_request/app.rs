use ortb_describe::derive::Describe;
use ortb_describe::ser::{Collection, Extension};

use super::Data;
use super::specification::BitType;
use crate::macros::coded_accessors;
use crate::validate::validate_in;

// -----------------------------------------------------------------------------
// App

/// An application in which the impression will be shown.
///
/// # Examples
///
/// ```
/// use ortb_describe::ser::{Serializable, Value};
/// use ortb_model::bid_request::App;
///
/// let mut app = App::new();
/// app.id = Some("app-1".into());
/// app.cat = vec!["IAB1".into()];
/// app.set_paid(1).unwrap();
/// assert!(app.set_privacypolicy(3).is_err());
///
/// let map = app.to_map().unwrap();
/// assert_eq!(map.keys().collect::<Vec<_>>(), ["id", "cat", "paid"]);
/// assert_eq!(map["paid"], Value::Int(1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Describe)]
#[ortb(type_path = "ortb_model::bid_request::App", auto_register)]
pub struct App {
    /// Application ID on the exchange.
    #[ortb(recommended)]
    pub id: Option<String>,
    /// Application name, may be aliased at the publisher's request.
    pub name: Option<String>,
    /// Domain of the application, used for advertiser side blocking.
    pub domain: Option<String>,
    /// IAB content categories of the app.
    pub cat: Vec<String>,
    /// IAB content categories of the current section of the app.
    pub sectioncat: Vec<String>,
    /// IAB content categories of the current page or view of the app.
    pub pagecat: Vec<String>,
    /// Application version.
    pub ver: Option<String>,
    /// Platform-specific application identifier, e.g. a package name.
    pub bundle: Option<String>,
    /// Whether the app has a privacy policy.
    privacypolicy: Option<i32>,
    /// Whether the app is a paid version.
    paid: Option<i32>,
    pub publisher: Publisher,
    pub content: Content,
    /// Comma-separated list of keywords about the app.
    pub keywords: Option<String>,
    /// App store URL for an installed app.
    pub storeurl: Option<String>,
    pub ext: Extension,
}

impl App {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    coded_accessors! {
        /// Sets the privacy policy flag, one of [`BitType`].
        privacypolicy, set_privacypolicy => validate_in::<BitType>;
        /// Sets the paid flag, one of [`BitType`].
        paid, set_paid => validate_in::<BitType>;
    }
}

// -----------------------------------------------------------------------------
// Publisher

/// The publisher of the app or site.
#[derive(Debug, Clone, Default, PartialEq, Describe)]
#[ortb(type_path = "ortb_model::bid_request::Publisher", auto_register)]
pub struct Publisher {
    pub id: Option<String>,
    pub name: Option<String>,
    pub cat: Vec<String>,
    pub domain: Option<String>,
    pub ext: Extension,
}

// -----------------------------------------------------------------------------
// Producer

/// The producer of the content, useful when content is syndicated.
#[derive(Debug, Clone, Default, PartialEq, Describe)]
#[ortb(type_path = "ortb_model::bid_request::Producer", auto_register)]
pub struct Producer {
    /// Content producer or originator ID.
    pub id: Option<String>,
    /// Content producer or originator name.
    pub name: Option<String>,
    /// IAB content categories describing the producer.
    pub cat: Vec<String>,
    /// Highest level domain of the content producer.
    pub domain: Option<String>,
    pub ext: Extension,
}

// -----------------------------------------------------------------------------
// Content

/// The content in which the impression will appear.
#[derive(Debug, Clone, Default, PartialEq, Describe)]
#[ortb(type_path = "ortb_model::bid_request::Content", auto_register)]
pub struct Content {
    pub id: Option<String>,
    pub episode: Option<i32>,
    pub title: Option<String>,
    pub series: Option<String>,
    pub season: Option<String>,
    pub url: Option<String>,
    pub cat: Vec<String>,
    pub keywords: Option<String>,
    livestream: Option<i32>,
    /// Length of content in seconds.
    pub len: Option<u32>,
    pub language: Option<String>,
    pub producer: Producer,
    pub data: Collection<Data>,
    pub ext: Extension,
}

impl Content {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    coded_accessors! {
        /// Sets the live stream flag, one of [`BitType`].
        livestream, set_livestream => validate_in::<BitType>;
    }
}

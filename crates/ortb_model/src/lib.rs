//! Protocol entities for bid requests and native ads.
//!
//! Every entity derives [`Describe`](ortb_describe::derive::Describe), so it
//! serializes through [`ortb_describe::ser`] into an ordered map with unset
//! properties omitted and missing required properties reported.
//!
//! Fields restricted to a code list are private and guarded by setters that
//! return [`InvalidValueError`] on a rejected value. The remaining fields are
//! public.
//!
//! ```
//! use ortb_describe::ser::Serializable;
//! use ortb_model::bid_request::{App, Device};
//!
//! let mut app = App::new();
//! app.bundle = Some("com.example.game".into());
//! app.publisher.name = Some("Example".into());
//!
//! let json = serde_json::to_string(&app.to_map().unwrap()).unwrap();
//! assert_eq!(json, r#"{"bundle":"com.example.game","publisher":{"name":"Example"}}"#);
//!
//! // Nothing set: an empty map, not an error.
//! assert!(Device::new().to_map().unwrap().is_empty());
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Modules

mod error;
mod macros;

pub mod bid_request;
pub mod native_request;
pub mod native_response;
pub mod validate;

// -----------------------------------------------------------------------------
// Exports

pub use error::InvalidValueError;

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use ortb_describe::info::{DeclaredType, DefaultValue};
    use ortb_describe::ser::{Serializable, Value};
    use ortb_describe::{DescribeError, DescriptorFactory, SerializeError};

    use crate::{bid_request, native_request, native_response};

    fn native_ad() -> native_response::Native {
        let mut native = native_response::Native::new();
        native.link = Some(native_response::Link::new("https://example.com"));
        native
            .add_assets(native_response::Assets::with_title(
                1,
                native_response::Title::new("Buy now"),
            ))
            .add_assets(native_response::Assets::with_data(
                2,
                native_response::Data::new("4.5"),
            ))
            .add_assets(native_response::Assets::new(3));
        native
    }

    #[test]
    fn encoding_is_deterministic() {
        let native = native_ad();
        let first = serde_json::to_string(&native.to_map().unwrap()).unwrap();
        let second = serde_json::to_string(&native.clone().to_map().unwrap()).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            first,
            concat!(
                r#"{"assets":[{"id":1,"title":{"text":"Buy now"}},"#,
                r#"{"id":2,"data":{"value":"4.5"}},{"id":3}],"#,
                r#""link":{"url":"https://example.com"}}"#,
            )
        );
    }

    #[test]
    fn collection_order_follows_insertion() {
        let mut native = native_ad();
        assert!(native.assets.remove(0).is_some());
        native.add_assets(native_response::Assets::new(0));

        let map = native.to_map().unwrap();
        let ids: Vec<_> = map["assets"]
            .as_list()
            .unwrap()
            .iter()
            .map(|asset| asset.as_map().unwrap()["id"].clone())
            .collect();
        assert_eq!(ids, [Value::Int(2), Value::Int(3), Value::Int(0)]);
    }

    #[test]
    fn nested_required_fields() {
        let mut native = native_ad();
        native.link = Some(native_response::Link::default());
        assert!(matches!(
            native.to_map(),
            Err(SerializeError::MissingRequiredField {
                property: "url",
                class: "ortb_model::native_response::Link",
            })
        ));

        let mut request = native_request::Native::new();
        request.add_assets(native_request::Assets::default());
        assert!(matches!(
            request.to_map(),
            Err(SerializeError::MissingRequiredField {
                property: "id",
                class: "ortb_model::native_request::Assets",
            })
        ));

        let mut data = native_request::Assets::new(1);
        data.data = Some(native_request::Data::default());
        assert!(matches!(
            data.to_map(),
            Err(SerializeError::MissingRequiredField { property: "type", .. })
        ));
    }

    #[test]
    fn rejected_values_leave_the_entity_unchanged() {
        let mut img = native_request::Image::default();
        img.set_type(1).unwrap();
        assert!(img.set_type(7).is_err());
        assert_eq!(img.r#type(), Some(1));

        let mut native = bid_request::Native::new();
        native.set_api(vec![1, 2]).unwrap();
        assert!(native.set_api(vec![3, 42]).is_err());
        assert_eq!(native.api(), [1, 2]);

        let mut device = bid_request::Device::new();
        assert!(matches!(
            device.set_ipv6("192.0.2.1"),
            Err(crate::InvalidValueError::InvalidAddress { field: "ipv6", .. })
        ));
        assert_eq!(device.ipv6(), None);
        assert!(device.set_pxratio(f64::NAN).is_err());
        assert_eq!(device.pxratio(), None);
    }

    #[test]
    fn descriptors_carry_declared_metadata() {
        let factory = DescriptorFactory::shared();

        let native = factory.describe::<native_request::Native>();
        assert_eq!(
            native.property_names(),
            ["ver", "plcmtcnt", "seq", "assets", "privacy", "ext"]
        );
        assert_eq!(
            native.property("ver").unwrap().default_value(),
            Some(&DefaultValue::Str("1.2"))
        );
        let assets = native.property("assets").unwrap();
        assert!(assets.required());
        assert_eq!(assets.declared_type(), DeclaredType::Collection);

        let img = factory.describe::<native_request::Image>();
        assert!(img.property("wmin").unwrap().recommended());
        assert!(img.property("kind").is_none());
        assert_eq!(img.property("type").unwrap().declared_type(), DeclaredType::Int);
        assert_eq!(img.property("mimes").unwrap().declared_type(), DeclaredType::Array);

        let assets = factory.describe::<native_response::Assets>();
        assert_eq!(
            assets.property("required").unwrap().default_value(),
            Some(&DefaultValue::Int(0))
        );
        assert_eq!(assets.property("link").unwrap().declared_type(), DeclaredType::Object);
    }

    #[cfg(feature = "auto_register")]
    #[test]
    fn registered_entities() {
        let factory = DescriptorFactory::shared();

        let app = factory.describe_by_path("ortb_model::bid_request::App").unwrap();
        assert_eq!(app.type_name(), "App");
        assert!(app.property("publisher").is_some());

        assert!(factory.describe_by_name("Device").is_ok());
        // Declared by the bid request and both native modules.
        assert!(matches!(
            factory.describe_by_name("Native"),
            Err(DescribeError::UnknownType { .. })
        ));

        let native = factory.describe::<bid_request::Native>();
        assert_eq!(native.method("set_request"), Some(true));
        assert!(native.is_public("add_battr"));
        assert_eq!(native.method("validate"), None);
    }
}

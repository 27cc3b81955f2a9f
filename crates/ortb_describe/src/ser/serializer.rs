use alloc::string::ToString;

use crate::ser::{Object, Property, Serializable, Value};
use crate::{DescriptorFactory, SerializeError};

// -----------------------------------------------------------------------------
// Serializer

/// Walks an instance against its [`ClassDescriptor`](crate::ClassDescriptor).
///
/// For each declared property, in declaration order:
///
/// - nested objects are serialized into maps, collections into lists of maps;
/// - `Null`, empty lists and empty maps are omitted;
/// - a required property that was omitted fails the whole call.
///
/// There is no partial result: the output either holds every required
/// property or an error is returned.
///
/// # Examples
///
/// ```
/// use ortb_describe::{DescriptorFactory, SerializeError, derive::Describe, ser::Serializer};
///
/// #[derive(Describe)]
/// struct Title {
///     #[ortb(required)]
///     text: Option<String>,
///     len: Option<u32>,
/// }
///
/// let factory = DescriptorFactory::uncached();
/// let serializer = Serializer::new(&factory);
///
/// let title = Title { text: Some("Sale".into()), len: None };
/// let map = serializer.to_map(&title).unwrap();
/// assert_eq!(map.keys().collect::<Vec<_>>(), ["text"]);
///
/// let untitled = Title { text: None, len: Some(4) };
/// assert!(matches!(
///     serializer.to_map(&untitled),
///     Err(SerializeError::MissingRequiredField { property: "text", .. }),
/// ));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Serializer<'f> {
    factory: &'f DescriptorFactory,
}

impl<'f> Serializer<'f> {
    #[inline]
    pub const fn new(factory: &'f DescriptorFactory) -> Self {
        Self { factory }
    }

    /// Serializes `value` into an ordered map.
    pub fn to_map(&self, value: &dyn Serializable) -> Result<Object, SerializeError> {
        let descriptor = self.factory.describe_value(value);
        let mut output = Object::with_capacity(descriptor.len());

        for meta in descriptor.iter() {
            let converted = match value.property(meta.index()) {
                Property::Null => None,
                Property::Value(v) => Some(v),
                Property::Object(nested) => Some(Value::Map(self.to_map(nested)?)),
                Property::Collection(items) => Some(Value::List(
                    items
                        .into_iter()
                        .map(|item| self.to_map(item).map(Value::Map))
                        .collect::<Result<_, _>>()?,
                )),
            };

            match converted {
                Some(v) if v.is_retained() => {
                    log::trace!("{}::{} written", descriptor.type_name(), meta.name());
                    output.insert(meta.name().to_string(), v);
                }
                _ if meta.required() => {
                    return Err(SerializeError::MissingRequiredField {
                        property: meta.name(),
                        class: descriptor.type_path(),
                    });
                }
                _ => log::trace!("{}::{} omitted", descriptor.type_name(), meta.name()),
            }
        }

        Ok(output)
    }
}

/// Serializes `value` with [`DescriptorFactory::shared`].
#[inline]
pub fn to_map(value: &dyn Serializable) -> Result<Object, SerializeError> {
    Serializer::new(DescriptorFactory::shared()).to_map(value)
}

#[cfg(test)]
mod tests {
    use super::Serializer;
    use crate::derive::Describe;
    use crate::ser::{Collection, Extension, Object, Serializable, Value};
    use crate::{DescriptorFactory, SerializeError};

    #[derive(Describe)]
    #[ortb(type_path = "tests::Image")]
    struct Image {
        url: Option<String>,
        w: Option<u32>,
    }

    #[derive(Describe)]
    #[ortb(type_path = "tests::Asset")]
    struct Asset {
        #[ortb(required)]
        id: Option<i64>,
        img: Option<Image>,
        ext: Extension,
    }

    #[derive(Describe)]
    #[ortb(type_path = "tests::Native")]
    struct Native {
        #[ortb(default = 1)]
        ver: Option<i32>,
        #[ortb(required)]
        assets: Collection<Asset>,
        imptrackers: Vec<String>,
    }

    fn asset(id: i64) -> Asset {
        Asset {
            id: Some(id),
            img: None,
            ext: Extension::new(),
        }
    }

    #[test]
    fn nested_collections_keep_order() {
        let native = Native {
            ver: Some(1),
            assets: [asset(3), asset(1), asset(2)].into_iter().collect(),
            imptrackers: vec!["https://t.example".into()],
        };

        let map = native.to_map().unwrap();
        let ids: Vec<_> = map["assets"]
            .as_list()
            .unwrap()
            .iter()
            .map(|a| a.as_map().unwrap()["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, [3, 1, 2]);
        assert_eq!(map.keys().collect::<Vec<_>>(), ["ver", "assets", "imptrackers"]);
    }

    #[test]
    fn omission_rule() {
        let mut a = asset(7);
        a.img = Some(Image { url: None, w: None });
        let map = a.to_map().unwrap();
        // An empty nested object and an empty extension are both dropped.
        assert_eq!(map.len(), 1);

        a.img = Some(Image { url: None, w: Some(0) });
        a.ext.set("k", 1);
        let map = a.to_map().unwrap();
        assert_eq!(map["img"].as_map().unwrap()["w"], Value::Int(0));
        assert_eq!(map["ext"].as_map().unwrap()["k"], Value::Int(1));
    }

    #[test]
    fn required_fields() {
        let empty = Native {
            ver: None,
            assets: Collection::new(),
            imptrackers: Vec::new(),
        };
        assert_eq!(
            empty.to_map(),
            Err(SerializeError::MissingRequiredField {
                property: "assets",
                class: "tests::Native",
            })
        );

        // A nested failure aborts the outer call.
        let mut native = empty;
        native.assets.push(Asset {
            id: None,
            img: None,
            ext: Extension::new(),
        });
        assert!(matches!(
            native.to_map(),
            Err(SerializeError::MissingRequiredField { property: "id", .. })
        ));
    }

    #[test]
    fn deterministic_and_cache_transparent() {
        let native = Native {
            ver: Some(2),
            assets: [asset(1)].into_iter().collect(),
            imptrackers: Vec::new(),
        };
        let shared = serde_json::to_string(&native.to_map().unwrap()).unwrap();
        let again = serde_json::to_string(&native.to_map().unwrap()).unwrap();
        let uncached = DescriptorFactory::uncached();
        let fresh = Serializer::new(&uncached).to_map(&native).unwrap();

        assert_eq!(shared, again);
        assert_eq!(shared, serde_json::to_string(&fresh).unwrap());
        assert_eq!(shared, r#"{"ver":2,"assets":[{"id":1}]}"#);
    }

    #[test]
    fn same_path_types_keep_their_own_properties() {
        fn first() -> Object {
            #[derive(Describe)]
            struct Item {
                name: Option<String>,
            }
            Item { name: Some("a".into()) }.to_map().unwrap()
        }

        fn second() -> Result<Object, SerializeError> {
            #[derive(Describe)]
            struct Item {
                #[ortb(required)]
                id: Option<i64>,
                price: Option<f64>,
            }
            Item { id: Some(7), price: Some(1.5) }.to_map()
        }

        assert_eq!(first().keys().collect::<Vec<_>>(), ["name"]);
        let second = second().unwrap();
        assert_eq!(second.keys().collect::<Vec<_>>(), ["id", "price"]);
        assert_eq!(second["id"], Value::Int(7));
    }

    #[test]
    fn non_finite_floats_are_omitted() {
        #[derive(Describe)]
        #[ortb(type_path = "tests::Geo")]
        struct Geo {
            #[ortb(required)]
            lat: Option<f64>,
            lon: Option<f64>,
        }

        let geo = Geo { lat: Some(1.0), lon: Some(f64::NAN) };
        let json = serde_json::to_string(&geo.to_map().unwrap()).unwrap();
        assert_eq!(json, r#"{"lat":1.0}"#);

        let geo = Geo { lat: Some(f64::INFINITY), lon: None };
        assert!(matches!(
            geo.to_map(),
            Err(SerializeError::MissingRequiredField { property: "lat", .. })
        ));
    }
}

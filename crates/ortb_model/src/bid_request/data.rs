use ortb_describe::derive::Describe;
use ortb_describe::ser::{Collection, Extension};

// -----------------------------------------------------------------------------
// Data

/// Additional user data from one data provider.
///
/// # Examples
///
/// ```
/// use ortb_describe::ser::{Serializable, Value};
/// use ortb_model::bid_request::{Data, Segment};
///
/// let mut data = Data::new();
/// data.id = Some("provider-1".into());
/// data.add_segment(Segment { id: Some("s1".into()), ..Segment::default() });
/// data.add_segment(Segment::default());
///
/// let map = data.to_map().unwrap();
/// let segments = map["segment"].as_list().unwrap();
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[0].as_map().unwrap()["id"], Value::from("s1"));
/// assert!(segments[1].as_map().unwrap().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Describe)]
#[ortb(type_path = "ortb_model::bid_request::Data", auto_register)]
pub struct Data {
    /// Exchange-specific ID for the data provider.
    pub id: Option<String>,
    /// Exchange-specific name for the data provider.
    pub name: Option<String>,
    /// Segments of actual data values.
    pub segment: Collection<Segment>,
    pub ext: Extension,
}

impl Data {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment.
    pub fn add_segment(&mut self, segment: Segment) -> &mut Self {
        self.segment.push(segment);
        self
    }
}

// -----------------------------------------------------------------------------
// Segment

/// One data value of a [`Data`] provider.
#[derive(Debug, Clone, Default, PartialEq, Describe)]
#[ortb(type_path = "ortb_model::bid_request::Segment", auto_register)]
pub struct Segment {
    pub id: Option<String>,
    pub name: Option<String>,
    /// String representation of the data segment value.
    pub value: Option<String>,
    pub ext: Extension,
}

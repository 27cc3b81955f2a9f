use core::fmt;
use core::str::FromStr;

use indexmap::IndexMap;

// -----------------------------------------------------------------------------
// Tag

/// A recognized mapping modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tag {
    /// The target path must be produced.
    Required,
    /// The target value is a freshly generated identifier.
    Uuid,
    /// The value to use when the source is absent.
    Default,
}

impl Tag {
    pub const ALL: [Tag; 3] = [Self::Required, Self::Uuid, Self::Default];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Uuid => "uuid",
            Self::Default => "default",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a tag name outside the recognized set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized tag `{0}`")]
pub struct UnknownTag(pub String);

impl FromStr for Tag {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| UnknownTag(s.to_owned()))
    }
}

// -----------------------------------------------------------------------------
// TagValue

/// The value attached to a tag: `true` for a bare tag, or its text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TagValue {
    Flag(bool),
    Text(String),
}

impl TagValue {
    /// Returns `true` for a set flag or any text.
    pub fn is_set(&self) -> bool {
        match self {
            Self::Flag(v) => *v,
            Self::Text(_) => true,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            Self::Flag(_) => None,
        }
    }
}

impl From<bool> for TagValue {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<&str> for TagValue {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for TagValue {
    #[inline]
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(v) => fmt::Display::fmt(v, f),
            Self::Text(v) => f.write_str(v),
        }
    }
}

// -----------------------------------------------------------------------------
// Tags

/// The validated tags of one mapping item, in the order they were written.
///
/// Only [`Tag`] keys can be stored, so unrecognized tags cannot survive
/// compilation.
///
/// # Examples
///
/// ```
/// use ortb_mapper::{Tag, TagValue, Tags};
///
/// let tags = Tags::parse("required@default 0@bogus");
/// assert!(tags.is_required());
/// assert_eq!(tags.default_value(), Some("0"));
/// assert!(!tags.contains(Tag::Uuid));
/// assert_eq!(tags.len(), 2);
/// assert_eq!(tags.get(Tag::Required), Some(&TagValue::Flag(true)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tags {
    tags: IndexMap<Tag, TagValue>,
}

impl Tags {
    pub const SEPARATOR: char = '@';
    pub const VALUE_SEPARATOR: char = ' ';

    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a tag string such as `required@default 0`.
    ///
    /// Tokens are separated by `@`; empty tokens are skipped. A space splits a
    /// token into name and value, and a bare name gets the value `true`.
    /// Only the first word after the name is kept. Unrecognized names are
    /// dropped. A repeated name keeps its first position and its last value.
    pub fn parse(raw: &str) -> Self {
        let mut tags = Self::new();
        for token in raw.split(Self::SEPARATOR) {
            if token.is_empty() {
                continue;
            }
            let (name, value) = match token.split_once(Self::VALUE_SEPARATOR) {
                Some((name, rest)) => {
                    let word = rest.split(Self::VALUE_SEPARATOR).next().unwrap_or_default();
                    (name, TagValue::from(word))
                }
                None => (token, TagValue::Flag(true)),
            };
            tags.insert_named(name, value);
        }
        tags
    }

    /// Inserts a tag given by name, dropping unrecognized names.
    ///
    /// Returns `false` if the name was dropped.
    pub fn insert_named(&mut self, name: &str, value: TagValue) -> bool {
        match name.parse::<Tag>() {
            Ok(tag) => {
                self.insert(tag, value);
                true
            }
            Err(err) => {
                log::debug!("{err} dropped");
                false
            }
        }
    }

    /// Inserts a tag, returning its previous value.
    #[inline]
    pub fn insert(&mut self, tag: Tag, value: TagValue) -> Option<TagValue> {
        self.tags.insert(tag, value)
    }

    #[inline]
    pub fn get(&self, tag: Tag) -> Option<&TagValue> {
        self.tags.get(&tag)
    }

    #[inline]
    pub fn contains(&self, tag: Tag) -> bool {
        self.tags.contains_key(&tag)
    }

    /// Whether `required` is present and set.
    pub fn is_required(&self) -> bool {
        self.get(Tag::Required).is_some_and(TagValue::is_set)
    }

    /// Whether `uuid` is present and set.
    pub fn is_uuid(&self) -> bool {
        self.get(Tag::Uuid).is_some_and(TagValue::is_set)
    }

    /// The text of `default`, if it has one.
    pub fn default_value(&self) -> Option<&str> {
        self.get(Tag::Default).and_then(TagValue::as_text)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> indexmap::map::Iter<'_, Tag, TagValue> {
        self.tags.iter()
    }
}

impl Extend<(Tag, TagValue)> for Tags {
    fn extend<I: IntoIterator<Item = (Tag, TagValue)>>(&mut self, iter: I) {
        self.tags.extend(iter);
    }
}

impl FromIterator<(Tag, TagValue)> for Tags {
    fn from_iter<I: IntoIterator<Item = (Tag, TagValue)>>(iter: I) -> Self {
        Self {
            tags: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Tags {
    type Item = (Tag, TagValue);
    type IntoIter = indexmap::map::IntoIter<Tag, TagValue>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.tags.into_iter()
    }
}

impl<'a> IntoIterator for &'a Tags {
    type Item = (&'a Tag, &'a TagValue);
    type IntoIter = indexmap::map::Iter<'a, Tag, TagValue>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{Tag, TagValue, Tags};

    #[test]
    fn tokens() {
        let tags = Tags::parse("@required@@uuid@");
        assert_eq!(
            tags.iter().map(|(t, _)| *t).collect::<Vec<_>>(),
            [Tag::Required, Tag::Uuid]
        );
        assert!(tags.is_uuid());

        let tags = Tags::parse("default DE extra");
        assert_eq!(tags.get(Tag::Default), Some(&TagValue::from("DE")));

        let tags = Tags::parse("default ");
        assert_eq!(tags.default_value(), Some(""));
    }

    #[test]
    fn unknown_names_are_dropped() {
        assert!(Tags::parse("bogus@Required@ required").is_empty());
        assert!(Tags::parse("").is_empty());
        assert_eq!("uuid".parse::<Tag>(), Ok(Tag::Uuid));
        assert!("UUID".parse::<Tag>().is_err());
    }

    #[test]
    fn repeated_tag_keeps_position() {
        let tags = Tags::parse("default a@required@default b");
        assert_eq!(
            tags.iter().collect::<Vec<_>>(),
            [
                (&Tag::Default, &TagValue::from("b")),
                (&Tag::Required, &TagValue::Flag(true)),
            ]
        );
    }
}

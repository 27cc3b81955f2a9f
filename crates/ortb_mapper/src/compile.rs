//! The schema compiler.
//!
//! A schema is an ordered list of entries. The key of an entry is a target
//! path, optionally followed by `:` and a tag string; the value is the source
//! expression.
//!
//! ```text
//! "imp.id:required"           => "$.request.id"
//! "id:required@uuid"          => "generate"
//! "device.geo.country:default DE" => "$.geo.country"
//! ```

use serde_json::{Map, Value};

use crate::{MapError, MapItem, MappingTable, TagValue, Tags};

/// Separates the target path from the tag string in an entry key.
pub const PATH_SEPARATOR: char = ':';

/// Splits an entry key into its target path and tags.
///
/// Only the text up to the next `:` after the path is read as tags; any later
/// `:` section is ignored.
///
/// # Examples
///
/// ```
/// use ortb_mapper::{Tag, compile::split_key};
///
/// let (path, tags) = split_key("token:required@uuid");
/// assert_eq!(path, "token");
/// assert!(tags.contains(Tag::Required) && tags.contains(Tag::Uuid));
///
/// let (path, tags) = split_key("name");
/// assert_eq!(path, "name");
/// assert!(tags.is_empty());
/// ```
pub fn split_key(key: &str) -> (&str, Tags) {
    match key.split_once(PATH_SEPARATOR) {
        Some((path, rest)) => {
            let raw = rest.split(PATH_SEPARATOR).next().unwrap_or_default();
            (path, Tags::parse(raw))
        }
        None => (key, Tags::new()),
    }
}

/// Compiles string entries into a [`MappingTable`].
///
/// A later entry with the same target path replaces the earlier one.
///
/// # Examples
///
/// ```
/// use ortb_mapper::{Tag, TagValue, compile};
///
/// let table = compile([
///     ("id:required", "$.src.id"),
///     ("name:bogus", "x"),
/// ]);
///
/// let id = table.get("id").unwrap();
/// assert_eq!(id.source(), "$.src.id");
/// assert_eq!(id.tags().get(Tag::Required), Some(&TagValue::Flag(true)));
/// assert!(table.get("name").unwrap().tags().is_empty());
/// ```
pub fn compile<I, K, V>(entries: I) -> MappingTable
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    entries
        .into_iter()
        .map(|(key, source)| {
            let (path, tags) = split_key(key.as_ref());
            MapItem::new(path, source, tags)
        })
        .collect()
}

/// Compiles a schema written as a JSON object.
///
/// See [`compile_json`] for the accepted entry forms.
///
/// # Examples
///
/// ```
/// use ortb_mapper::compile_str;
///
/// let table = compile_str(r#"{
///     "token:required@uuid": "generate",
///     "country": { "source": "$.geo.country", "tags": { "default": "DE" } }
/// }"#).unwrap();
///
/// assert_eq!(table.paths().collect::<Vec<_>>(), ["token", "country"]);
/// assert_eq!(table.get("country").unwrap().tags().default_value(), Some("DE"));
///
/// assert!(compile_str("[]").is_err());
/// ```
pub fn compile_str(schema: &str) -> Result<MappingTable, MapError> {
    let value: Value = serde_json::from_str(schema)?;
    compile_json(&value)
}

/// Compiles a schema held in a JSON value.
///
/// The schema must be an object. Each value is either:
///
/// - a string: the source expression, tags come from the key;
/// - an object `{"source": "...", "tags": ...}` where `tags` is a tag string
///   or a mapping from tag name to a string, bool or number. These tags are
///   added after the tags of the key.
///
/// Unrecognized tag names are dropped. Tags of any other JSON type fail with
/// [`MapError::InvalidTags`]. Compilation stops at the first error.
pub fn compile_json(schema: &Value) -> Result<MappingTable, MapError> {
    let Value::Object(entries) = schema else {
        return Err(MapError::InvalidEntry {
            key: String::new(),
            reason: "schema must be a JSON object",
        });
    };

    let mut table = MappingTable::new();
    for (key, value) in entries {
        table.add(compile_entry(key, value)?);
    }
    Ok(table)
}

fn compile_entry(key: &str, value: &Value) -> Result<MapItem, MapError> {
    let (path, mut tags) = split_key(key);

    match value {
        Value::String(source) => Ok(MapItem::new(path, source.as_str(), tags)),
        Value::Object(entry) => {
            let Some(Value::String(source)) = entry.get("source") else {
                return Err(MapError::InvalidEntry {
                    key: key.to_owned(),
                    reason: "`source` must be a string",
                });
            };
            match entry.get("tags") {
                None | Some(Value::Null) => {}
                Some(Value::String(raw)) => tags.extend(Tags::parse(raw)),
                Some(Value::Object(map)) => structured_tags(path, map, &mut tags)?,
                Some(other) => {
                    return Err(MapError::InvalidTags {
                        path: path.to_owned(),
                        found: json_type(other),
                    });
                }
            }
            Ok(MapItem::new(path, source.as_str(), tags))
        }
        _ => Err(MapError::InvalidEntry {
            key: key.to_owned(),
            reason: "expected a source string or an entry object",
        }),
    }
}

fn structured_tags(path: &str, map: &Map<String, Value>, tags: &mut Tags) -> Result<(), MapError> {
    for (name, value) in map {
        let value = match value {
            Value::Bool(v) => TagValue::Flag(*v),
            Value::String(v) => TagValue::Text(v.clone()),
            Value::Number(v) => TagValue::Text(v.to_string()),
            other => {
                return Err(MapError::InvalidTags {
                    path: path.to_owned(),
                    found: json_type(other),
                });
            }
        };
        tags.insert_named(name, value);
    }
    Ok(())
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a bool",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{compile, compile_json, compile_str};
    use crate::{MapError, Tag, TagValue};

    #[test]
    fn key_forms() {
        let table = compile([
            ("id:required", "$.src.id"),
            ("token:required@uuid", "generate"),
            ("name:bogus", "x"),
            ("plain", "y"),
            ("a:default 5:ignored", "z"),
        ]);

        assert_eq!(table.len(), 5);
        let token = table.get("token").unwrap().tags();
        assert_eq!(token.get(Tag::Required), Some(&TagValue::Flag(true)));
        assert_eq!(token.get(Tag::Uuid), Some(&TagValue::Flag(true)));
        assert_eq!(token.len(), 2);
        assert!(table.get("name").unwrap().tags().is_empty());
        assert!(table.get("plain").unwrap().tags().is_empty());
        assert_eq!(table.get("a").unwrap().tags().default_value(), Some("5"));
    }

    #[test]
    fn duplicate_paths_keep_the_last_entry() {
        let table = compile([("id:required", "first"), ("id", "second")]);
        assert_eq!(table.len(), 1);
        let id = table.get("id").unwrap();
        assert_eq!(id.source(), "second");
        assert!(!id.is_required());
    }

    #[test]
    fn structured_entries() {
        let table = compile_json(&json!({
            "imp.id:required": "$.imp.id",
            "bidfloor": { "source": "$.floor", "tags": { "default": 0.5, "bogus": [1] } }
        }));
        // A non-scalar tag value is malformed whatever the tag name.
        assert!(matches!(table, Err(MapError::InvalidTags { .. })));

        let table = compile_json(&json!({
            "bidfloor:required": { "source": "$.floor", "tags": { "default": 0.5, "bogus": true } },
            "tagid": { "source": "$.tag", "tags": "uuid" }
        }))
        .unwrap();
        let floor = table.get("bidfloor").unwrap();
        assert!(floor.is_required());
        assert_eq!(floor.tags().default_value(), Some("0.5"));
        assert_eq!(floor.tags().len(), 2);
        assert!(table.get("tagid").unwrap().tags().is_uuid());
    }

    #[test]
    fn invalid_tags_fail_the_whole_call() {
        let err = compile_json(&json!({
            "ok": "$.a",
            "id": { "source": "$.id", "tags": 7 }
        }))
        .unwrap_err();
        match err {
            MapError::InvalidTags { path, found } => {
                assert_eq!(path, "id");
                assert_eq!(found, "a number");
            }
            other => panic!("unexpected error: {other}"),
        }

        assert!(matches!(
            compile_json(&json!({ "id": 1 })),
            Err(MapError::InvalidEntry { .. })
        ));
        assert!(matches!(
            compile_json(&json!({ "id": { "tags": "required" } })),
            Err(MapError::InvalidEntry { .. })
        ));
        assert!(matches!(compile_str("{"), Err(MapError::Json(_))));
    }
}

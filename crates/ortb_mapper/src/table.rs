use indexmap::IndexMap;
use indexmap::map;

use crate::Tags;

// -----------------------------------------------------------------------------
// MapItem

/// One compiled mapping rule.
///
/// How `source` is interpreted and how the tags are applied is up to the
/// consumer of the [`MappingTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapItem {
    target_path: String,
    source: String,
    tags: Tags,
}

impl MapItem {
    #[inline]
    pub fn new(target_path: impl Into<String>, source: impl Into<String>, tags: Tags) -> Self {
        Self {
            target_path: target_path.into(),
            source: source.into(),
            tags,
        }
    }

    /// The path written to, unique within a table.
    #[inline]
    pub fn target_path(&self) -> &str {
        &self.target_path
    }

    /// The expression the value is read from.
    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[inline]
    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    #[inline]
    pub fn is_required(&self) -> bool {
        self.tags.is_required()
    }
}

// -----------------------------------------------------------------------------
// MappingTable

/// Compiled mapping items keyed by target path, in insertion order.
///
/// # Examples
///
/// ```
/// use ortb_mapper::{MapItem, MappingTable, Tags};
///
/// let mut table = MappingTable::new();
/// table.add(MapItem::new("id", "$.a", Tags::new()));
/// table.add(MapItem::new("name", "$.b", Tags::new()));
/// table.add(MapItem::new("id", "$.c", Tags::parse("required")));
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.get("id").map(|item| item.source()), Some("$.c"));
/// assert_eq!(table.paths().collect::<Vec<_>>(), ["id", "name"]);
///
/// assert!(table.remove("name"));
/// assert!(!table.remove("name"));
/// assert!(!table.contains("name"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingTable {
    items: IndexMap<String, MapItem>,
}

impl MappingTable {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an item, replacing any item with the same target path.
    ///
    /// A replaced item keeps its position. Returns the replaced item.
    pub fn add(&mut self, item: MapItem) -> Option<MapItem> {
        self.items.insert(item.target_path.clone(), item)
    }

    #[inline]
    pub fn contains(&self, target_path: &str) -> bool {
        self.items.contains_key(target_path)
    }

    #[inline]
    pub fn get(&self, target_path: &str) -> Option<&MapItem> {
        self.items.get(target_path)
    }

    /// Removes an item, keeping the order of the rest.
    ///
    /// Returns `false` if no item has this target path.
    pub fn remove(&mut self, target_path: &str) -> bool {
        self.items.shift_remove(target_path).is_some()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the target paths in insertion order.
    #[inline]
    pub fn paths(&self) -> impl ExactSizeIterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    #[inline]
    pub fn iter(&self) -> map::Values<'_, String, MapItem> {
        self.items.values()
    }

    /// Returns the items carrying a set `required` tag.
    pub fn required(&self) -> impl Iterator<Item = &MapItem> {
        self.iter().filter(|item| item.is_required())
    }
}

impl Extend<MapItem> for MappingTable {
    fn extend<I: IntoIterator<Item = MapItem>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl FromIterator<MapItem> for MappingTable {
    fn from_iter<I: IntoIterator<Item = MapItem>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl IntoIterator for MappingTable {
    type Item = MapItem;
    type IntoIter = map::IntoValues<String, MapItem>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_values()
    }
}

impl<'a> IntoIterator for &'a MappingTable {
    type Item = &'a MapItem;
    type IntoIter = map::Values<'a, String, MapItem>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.values()
    }
}

#[cfg(test)]
mod tests {
    use super::{MapItem, MappingTable};
    use crate::Tags;

    #[test]
    fn last_write_wins() {
        let mut table = MappingTable::new();
        assert!(table.add(MapItem::new("id", "first", Tags::new())).is_none());
        let size = table.len();

        let replaced = table.add(MapItem::new("id", "second", Tags::parse("uuid")));
        assert_eq!(replaced.map(|item| item.source().to_owned()).as_deref(), Some("first"));
        assert_eq!(table.len(), size);

        let item = table.get("id").unwrap();
        assert_eq!(item.source(), "second");
        assert!(item.tags().is_uuid());
    }

    #[test]
    fn iteration_order_survives_removal() {
        let mut table: MappingTable = ["a", "b", "c", "d"]
            .into_iter()
            .map(|p| MapItem::new(p, p, Tags::new()))
            .collect();
        assert!(table.remove("b"));
        assert_eq!(
            table.iter().map(MapItem::target_path).collect::<Vec<_>>(),
            ["a", "c", "d"]
        );
        assert_eq!(table.into_iter().count(), 3);
    }
}

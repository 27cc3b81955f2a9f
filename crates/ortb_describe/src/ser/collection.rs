use alloc::vec::{self, Vec};
use core::slice;

use crate::ser::{CollectionProperty, Property, Serializable};

/// An ordered collection of entities, serialized as a list of maps.
///
/// # Examples
///
/// ```
/// use ortb_describe::ser::Collection;
///
/// let mut c: Collection<u32> = [4, 5, 6].into_iter().collect();
/// assert_eq!(c.first(), Some(&4));
/// assert_eq!(c.index_of(&6), Some(2));
/// assert!(c.remove_element(&5));
/// assert_eq!(c.slice(1, None), &[6]);
/// assert_eq!(c.remove(0), Some(4));
/// assert_eq!(c.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Collection<T> {
    elements: Vec<T>,
}

impl<T> Default for Collection<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Collection<T> {
    #[inline]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Appends an element.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.elements.push(value);
    }

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// Returns `None` and drops `value` if `index` is out of bounds.
    pub fn set(&mut self, index: usize, value: T) -> Option<T> {
        let slot = self.elements.get_mut(index)?;
        Some(core::mem::replace(slot, value))
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.elements.get_mut(index)
    }

    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Removes and returns the element at `index`, shifting later elements.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        (index < self.elements.len()).then(|| self.elements.remove(index))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.elements.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.elements.iter_mut()
    }

    /// Returns up to `len` elements starting at `offset`, clamped to the bounds.
    pub fn slice(&self, offset: usize, len: Option<usize>) -> &[T] {
        let start = offset.min(self.elements.len());
        let end = match len {
            Some(len) => start.saturating_add(len).min(self.elements.len()),
            None => self.elements.len(),
        };
        &self.elements[start..end]
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }
}

impl<T: PartialEq> Collection<T> {
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.elements.contains(value)
    }

    /// Returns the index of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.elements.iter().position(|e| e == value)
    }

    /// Removes the first element equal to `value`, returning `true` if found.
    pub fn remove_element(&mut self, value: &T) -> bool {
        match self.index_of(value) {
            Some(index) => {
                self.elements.remove(index);
                true
            }
            None => false,
        }
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    #[inline]
    fn from(elements: Vec<T>) -> Self {
        Self { elements }
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Collection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: Serializable> CollectionProperty for Collection<T> {
    fn to_property(&self) -> Property<'_> {
        Property::Collection(self.iter().map(|v| v as &dyn Serializable).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::Collection;

    #[test]
    fn slice_is_clamped() {
        let c: Collection<_> = (0..5).collect();
        assert_eq!(c.slice(1, Some(2)), &[1, 2]);
        assert_eq!(c.slice(3, Some(10)), &[3, 4]);
        assert!(c.slice(9, None).is_empty());
    }

    #[test]
    fn remove_out_of_bounds() {
        let mut c = Collection::from(vec!['a']);
        assert_eq!(c.remove(1), None);
        assert_eq!(c.set(0, 'b'), Some('a'));
        assert!(!c.remove_element(&'a'));
        assert!(c.contains(&'b'));
        c.clear();
        assert!(c.is_empty());
    }
}

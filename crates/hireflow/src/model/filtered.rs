//! Stackable predicate filters and the live views they produce.

use std::fmt;
use std::iter::FusedIterator;
use std::slice;

/// Test applied to each element of a filtered collection.
pub trait Predicate<T>: Send + Sync {
    fn test(&self, item: &T) -> bool;

    /// Human readable summary, used in log lines and command feedback.
    fn describe(&self) -> String {
        "custom predicate".to_string()
    }
}

impl<T, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    fn test(&self, item: &T) -> bool {
        self(item)
    }
}

/// Conjunction of every predicate added since the last [`clear`](Self::clear).
///
/// With no predicates it matches everything. The filter owns no data; it is applied to
/// a backing slice through [`apply`](Self::apply).
pub struct StackableFilter<T> {
    predicates: Vec<Box<dyn Predicate<T>>>,
}

impl<T> Default for StackableFilter<T> {
    fn default() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }
}

impl<T> StackableFilter<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Narrows the active filter to `current AND predicate`.
    pub fn push(&mut self, predicate: impl Predicate<T> + 'static) {
        self.predicates.push(Box::new(predicate));
    }

    pub fn clear(&mut self) {
        self.predicates.clear();
    }

    pub fn is_active(&self) -> bool {
        !self.predicates.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.predicates.len()
    }

    pub fn matches(&self, item: &T) -> bool {
        self.predicates.iter().all(|predicate| predicate.test(item))
    }

    pub fn describe(&self) -> Vec<String> {
        self.predicates
            .iter()
            .map(|predicate| predicate.describe())
            .collect()
    }

    /// Read-through view over `items`. Nothing is cached; every access re-evaluates.
    pub fn apply<'a>(&'a self, items: &'a [T]) -> FilteredView<'a, T> {
        FilteredView {
            items,
            filter: self,
        }
    }
}

impl<T> fmt::Debug for StackableFilter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackableFilter")
            .field("predicates", &self.describe())
            .finish()
    }
}

/// Borrowed, read-only projection of a backing slice through a [`StackableFilter`].
pub struct FilteredView<'a, T> {
    items: &'a [T],
    filter: &'a StackableFilter<T>,
}

impl<'a, T> Clone for FilteredView<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for FilteredView<'a, T> {}

impl<'a, T> FilteredView<'a, T> {
    pub fn iter(&self) -> FilteredIter<'a, T> {
        FilteredIter {
            inner: self.items.iter(),
            filter: self.filter,
        }
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Element at a zero-based position among the visible elements.
    pub fn get(&self, position: usize) -> Option<&'a T> {
        self.iter().nth(position)
    }

    /// Total number of elements in the backing slice, visible or not.
    pub fn backing_len(&self) -> usize {
        self.items.len()
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<'a, T> IntoIterator for FilteredView<'a, T> {
    type Item = &'a T;
    type IntoIter = FilteredIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct FilteredIter<'a, T> {
    inner: slice::Iter<'a, T>,
    filter: &'a StackableFilter<T>,
}

impl<'a, T> Iterator for FilteredIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let filter = self.filter;
        self.inner.by_ref().find(|item| filter.matches(item))
    }
}

impl<'a, T> FusedIterator for FilteredIter<'a, T> {}

//! Ordered collection that refuses weak-identity duplicates.

use std::fmt;
use std::slice;

use serde::{Deserialize, Deserializer, Serialize};

use super::error::ModelError;

/// Entity families stored in a [`UniqueList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Person,
    Job,
    Application,
}

impl EntityKind {
    pub const fn label(self) -> &'static str {
        match self {
            EntityKind::Person => "person",
            EntityKind::Job => "job",
            EntityKind::Application => "application",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Same-ness notion narrower than `PartialEq`, used for duplicate detection.
pub trait WeakIdentity {
    const KIND: EntityKind;

    fn is_same(&self, other: &Self) -> bool;
}

/// Insertion-ordered list in which no two elements are weak-identity equal.
///
/// Lookups for [`contains`](Self::contains), [`set`](Self::set) and
/// [`remove`](Self::remove) go through [`WeakIdentity::is_same`], never through
/// structural equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UniqueList<T> {
    items: Vec<T>,
}

impl<T> Default for UniqueList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: WeakIdentity> UniqueList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.iter().any(|existing| existing.is_same(item))
    }

    /// Stored element that is weak-identity equal to `item`.
    pub fn find(&self, item: &T) -> Option<&T> {
        self.items.iter().find(|existing| existing.is_same(item))
    }

    pub fn add(&mut self, item: T) -> Result<(), ModelError> {
        if self.contains(&item) {
            return Err(ModelError::Duplicate(T::KIND));
        }
        self.items.push(item);
        Ok(())
    }

    /// Replaces `target` with `replacement` in place.
    ///
    /// `replacement` may share the identity of `target` itself but of no other element.
    pub fn set(&mut self, target: &T, replacement: T) -> Result<(), ModelError> {
        let position = self.check_set(target, &replacement)?;
        self.items[position] = replacement;
        Ok(())
    }

    /// Runs the checks of [`set`](Self::set) without mutating and returns the
    /// position `target` occupies.
    pub fn check_set(&self, target: &T, replacement: &T) -> Result<usize, ModelError> {
        let position = self
            .position(target)
            .ok_or(ModelError::NotFound(T::KIND))?;

        let collides = self
            .items
            .iter()
            .enumerate()
            .any(|(index, existing)| index != position && existing.is_same(replacement));
        if collides {
            return Err(ModelError::Duplicate(T::KIND));
        }
        Ok(position)
    }

    pub fn remove(&mut self, item: &T) -> Result<T, ModelError> {
        let position = self.position(item).ok_or(ModelError::NotFound(T::KIND))?;
        Ok(self.items.remove(position))
    }

    /// Replaces the whole backing sequence, rejecting internal collisions.
    pub fn set_all(&mut self, items: Vec<T>) -> Result<(), ModelError> {
        ensure_unique(&items)?;
        self.items = items;
        Ok(())
    }

    /// Keeps only the elements `keep` accepts and returns how many were dropped.
    pub fn retain(&mut self, keep: impl FnMut(&T) -> bool) -> usize {
        let before = self.items.len();
        self.items.retain(keep);
        before - self.items.len()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|existing| existing.is_same(item))
    }
}

/// Fails if two elements of `items` share a weak identity.
pub(crate) fn ensure_unique<T: WeakIdentity>(items: &[T]) -> Result<(), ModelError> {
    let collision = items
        .iter()
        .enumerate()
        .any(|(index, item)| items[index + 1..].iter().any(|other| item.is_same(other)));
    if collision {
        return Err(ModelError::Duplicate(T::KIND));
    }
    Ok(())
}

impl<T: WeakIdentity> TryFrom<Vec<T>> for UniqueList<T> {
    type Error = ModelError;

    fn try_from(items: Vec<T>) -> Result<Self, Self::Error> {
        let mut list = Self::new();
        list.set_all(items)?;
        Ok(list)
    }
}

impl<'a, T> IntoIterator for &'a UniqueList<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'de, T> Deserialize<'de> for UniqueList<T>
where
    T: Deserialize<'de> + WeakIdentity,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let items = Vec::<T>::deserialize(deserializer)?;
        Self::try_from(items).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Weak identity on `key`, structural equality on both fields.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    struct Entry {
        key: &'static str,
        value: u32,
    }

    impl WeakIdentity for Entry {
        const KIND: EntityKind = EntityKind::Person;

        fn is_same(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    fn entry(key: &'static str, value: u32) -> Entry {
        Entry { key, value }
    }

    fn list(entries: &[Entry]) -> UniqueList<Entry> {
        UniqueList::try_from(entries.to_vec()).expect("unique entries")
    }

    #[test]
    fn add_rejects_weak_duplicates() {
        let mut entries = list(&[entry("a", 1)]);
        assert_eq!(
            entries.add(entry("a", 2)),
            Err(ModelError::Duplicate(EntityKind::Person))
        );
        assert_eq!(entries.len(), 1);
        entries.add(entry("b", 1)).expect("distinct key");
        assert_eq!(entries.as_slice(), &[entry("a", 1), entry("b", 1)]);
    }

    #[test]
    fn contains_uses_weak_identity() {
        let entries = list(&[entry("a", 1)]);
        assert!(entries.contains(&entry("a", 99)));
        assert_eq!(entries.find(&entry("a", 99)), Some(&entry("a", 1)));
        assert!(!entries.contains(&entry("z", 1)));
    }

    #[test]
    fn set_preserves_position() {
        let mut entries = list(&[entry("a", 1), entry("b", 2), entry("c", 3)]);
        entries.set(&entry("b", 0), entry("d", 4)).expect("replace");
        assert_eq!(
            entries.as_slice(),
            &[entry("a", 1), entry("d", 4), entry("c", 3)]
        );
    }

    #[test]
    fn set_allows_replacement_with_same_identity() {
        let mut entries = list(&[entry("a", 1), entry("b", 2)]);
        entries.set(&entry("a", 1), entry("a", 10)).expect("same key");
        assert_eq!(entries.as_slice()[0], entry("a", 10));
    }

    #[test]
    fn set_rejects_missing_target_and_collisions() {
        let mut entries = list(&[entry("a", 1), entry("b", 2)]);
        assert_eq!(
            entries.set(&entry("x", 1), entry("y", 1)),
            Err(ModelError::NotFound(EntityKind::Person))
        );
        assert_eq!(
            entries.set(&entry("a", 1), entry("b", 5)),
            Err(ModelError::Duplicate(EntityKind::Person))
        );
        assert_eq!(entries.as_slice(), &[entry("a", 1), entry("b", 2)]);
    }

    #[test]
    fn check_set_reports_without_mutating() {
        let entries = list(&[entry("a", 1), entry("b", 2)]);
        assert_eq!(entries.check_set(&entry("b", 0), &entry("b", 9)), Ok(1));
        assert_eq!(
            entries.check_set(&entry("a", 1), &entry("b", 5)),
            Err(ModelError::Duplicate(EntityKind::Person))
        );
        assert_eq!(entries.as_slice(), &[entry("a", 1), entry("b", 2)]);
    }

    #[test]
    fn remove_takes_the_weak_match() {
        let mut entries = list(&[entry("a", 1), entry("b", 2)]);
        let removed = entries.remove(&entry("a", 42)).expect("present");
        assert_eq!(removed, entry("a", 1));
        assert_eq!(
            entries.remove(&entry("a", 1)),
            Err(ModelError::NotFound(EntityKind::Person))
        );
    }

    #[test]
    fn set_all_rejects_internal_collisions_and_keeps_old_contents() {
        let mut entries = list(&[entry("a", 1)]);
        assert_eq!(
            entries.set_all(vec![entry("b", 1), entry("c", 1), entry("b", 2)]),
            Err(ModelError::Duplicate(EntityKind::Person))
        );
        assert_eq!(entries.as_slice(), &[entry("a", 1)]);
    }

    #[test]
    fn deserialization_checks_uniqueness() {
        let err = serde_json::from_str::<UniqueList<Entry>>(
            r#"[{"key":"a","value":1},{"key":"a","value":2}]"#,
        );
        assert!(err.is_err());
    }
}

// Copyright 2026 the Charta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named font classes.

use alloc::sync::Arc;
use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::family::FamilyId;
use crate::family_name::NameKey;

type FamilyVec = SmallVec<[FamilyId; 2]>;

/// Class names that exist in every map.
const PREDEFINED: &[&str] = &["serif", "sans-serif", "monospace", "math"];

/// Maps font classes to ordered lists of family identifiers.
///
/// A class is an alias like `serif` that stands for a prioritized list of
/// concrete families. Only *defined* classes can be bound or queried; the
/// predefined set can be extended with [`define`](Self::define). Class name
/// lookup folds case the same way family name lookup does.
#[derive(Clone, Debug)]
pub struct ClassMap {
    map: HashMap<Arc<[u8]>, Entry>,
}

#[derive(Clone, Debug)]
struct Entry {
    name: Arc<str>,
    families: FamilyVec,
}

impl ClassMap {
    /// Creates a map without any defined classes.
    pub fn empty() -> Self {
        Self {
            map: HashMap::default(),
        }
    }

    /// Defines a class with no members. Defining an existing class keeps its
    /// members.
    pub fn define(&mut self, name: &str) {
        let key = NameKey::fold(name);
        self.map
            .entry(key.as_bytes().into())
            .or_insert_with(|| Entry {
                name: name.into(),
                families: FamilyVec::new(),
            });
    }

    /// Returns `true` if the given class is defined.
    pub fn contains(&self, name: &str) -> bool {
        let key = NameKey::fold(name);
        self.map.contains_key(key.as_bytes())
    }

    /// Returns the associated family identifiers for the given class, or
    /// `None` if the class is not defined.
    pub fn get(&self, name: &str) -> Option<&[FamilyId]> {
        let key = NameKey::fold(name);
        Some(self.map.get(key.as_bytes())?.families.as_slice())
    }

    /// Replaces the family identifiers for the given class.
    ///
    /// Returns `false` if the class is not defined.
    pub fn set(&mut self, name: &str, families: impl Iterator<Item = FamilyId>) -> bool {
        let key = NameKey::fold(name);
        let Some(entry) = self.map.get_mut(key.as_bytes()) else {
            return false;
        };
        entry.families.clear();
        entry.families.extend(families);
        true
    }

    /// Appends the family identifiers to the list for the given class.
    ///
    /// Returns `false` if the class is not defined.
    pub fn append(&mut self, name: &str, families: impl Iterator<Item = FamilyId>) -> bool {
        let key = NameKey::fold(name);
        let Some(entry) = self.map.get_mut(key.as_bytes()) else {
            return false;
        };
        entry.families.extend(families);
        true
    }

    /// Returns an iterator over the defined class names.
    pub fn classes(&self) -> impl Iterator<Item = &str> + Clone {
        self.map.values().map(|entry| &*entry.name)
    }
}

impl Default for ClassMap {
    fn default() -> Self {
        let mut map = Self::empty();
        for name in PREDEFINED {
            map.define(name);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::ClassMap;
    use crate::family::FamilyId;

    #[test]
    fn class_predefined_set() {
        let map = ClassMap::default();
        assert!(map.contains("serif"));
        assert!(map.contains("sans-serif"));
        assert!(map.contains("monospace"));
        assert!(map.contains("math"));
        assert!(!map.contains("fantasy"));
        assert_eq!(map.get("serif"), Some(&[][..]));
    }

    #[test]
    fn class_set_replaces_and_append_extends() {
        let mut map = ClassMap::default();
        let a = FamilyId::new();
        let b = FamilyId::new();
        let c = FamilyId::new();
        assert!(map.set("serif", [a, b].into_iter()));
        assert_eq!(map.get("serif"), Some(&[a, b][..]));
        assert!(map.set("serif", [c].into_iter()));
        assert_eq!(map.get("serif"), Some(&[c][..]));
        assert!(map.append("serif", [a].into_iter()));
        assert_eq!(map.get("serif"), Some(&[c, a][..]));
    }

    #[test]
    fn class_undefined_rejects_binding() {
        let mut map = ClassMap::default();
        assert!(!map.set("fantasy", [FamilyId::new()].into_iter()));
        assert_eq!(map.get("fantasy"), None);
        map.define("fantasy");
        assert!(map.set("fantasy", core::iter::empty()));
    }

    #[test]
    fn class_lookup_folds_case() {
        let map = ClassMap::default();
        assert!(map.contains("Serif"));
        assert!(map.contains("SANS-SERIF"));
    }
}

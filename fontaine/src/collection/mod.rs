// Copyright 2026 the Charta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Support for working with font collections.

mod query;

pub use query::{Match, Query, QueryFamily};

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::attributes::FontVariant;
use crate::class::ClassMap;
use crate::family::{FamilyId, FamilyInfo};
use crate::family_name::{FamilyName, FamilyNameMap};

/// Options for a font collection.
#[derive(Copy, Clone, Debug)]
pub struct CollectionOptions {
    /// If true, the collection starts out with the predefined font classes
    /// (`serif`, `sans-serif`, `monospace`, `math`) already defined.
    ///
    /// The default value is true.
    pub predefined_classes: bool,
}

impl Default for CollectionOptions {
    fn default() -> Self {
        Self {
            predefined_classes: true,
        }
    }
}

/// Collection of font families and the classes that alias them.
///
/// Families are registered by the embedder together with their declared
/// variant sets; nothing is discovered from the system. Names mentioned
/// before any faces exist for them (a directive may list families that are
/// not installed) are interned without a [`FamilyInfo`] and simply never
/// match.
#[derive(Clone, Debug, Default)]
pub struct Collection {
    names: FamilyNameMap,
    families: HashMap<FamilyId, FamilyInfo>,
    classes: ClassMap,
}

impl Collection {
    /// Creates a new collection with the given options.
    pub fn new(options: CollectionOptions) -> Self {
        Self {
            names: FamilyNameMap::default(),
            families: HashMap::default(),
            classes: if options.predefined_classes {
                ClassMap::default()
            } else {
                ClassMap::empty()
            },
        }
    }

    /// Registers a family with the given declared variants and returns its
    /// identifier.
    ///
    /// Registering a name again replaces the declared variant set.
    pub fn register_family(
        &mut self,
        name: &str,
        variants: impl IntoIterator<Item = FontVariant>,
    ) -> FamilyId {
        let name = self.names.get_or_insert(name);
        let id = name.id();
        self.families.insert(id, FamilyInfo::new(name, variants));
        id
    }

    /// Interns a family name without declaring any variants and returns its
    /// identifier.
    pub fn intern_family_name(&mut self, name: &str) -> FamilyId {
        self.names.get_or_insert(name).id()
    }

    /// Returns an iterator over all known family names.
    pub fn family_names(&self) -> impl Iterator<Item = &str> + Clone {
        self.names.iter().map(FamilyName::name)
    }

    /// Returns the family identifier for the given family name.
    pub fn family_id(&self, name: &str) -> Option<FamilyId> {
        Some(self.names.get(name)?.id())
    }

    /// Returns the family name for the given family identifier.
    pub fn family_name(&self, id: FamilyId) -> Option<&str> {
        Some(self.names.get_by_id(id)?.name())
    }

    /// Returns the family object for the given family identifier.
    pub fn family(&self, id: FamilyId) -> Option<&FamilyInfo> {
        self.families.get(&id)
    }

    /// Returns the family object for the given name.
    pub fn family_by_name(&self, name: &str) -> Option<&FamilyInfo> {
        self.family(self.family_id(name)?)
    }

    /// Defines a font class with no members.
    pub fn define_class(&mut self, name: &str) {
        self.classes.define(name);
    }

    /// Returns `true` if the given name is a defined font class.
    pub fn is_class(&self, name: &str) -> bool {
        self.classes.contains(name)
    }

    /// Returns the family identifiers associated with the given class.
    pub fn class_families(&self, name: &str) -> Option<&[FamilyId]> {
        self.classes.get(name)
    }

    /// Replaces the set of family identifiers associated with the given
    /// class.
    ///
    /// Returns `false` if the class is not defined.
    pub fn set_class_families(
        &mut self,
        name: &str,
        families: impl Iterator<Item = FamilyId>,
    ) -> bool {
        self.classes.set(name, families)
    }

    /// Appends the set of family identifiers to the given class.
    ///
    /// Returns `false` if the class is not defined.
    pub fn append_class_families(
        &mut self,
        name: &str,
        families: impl Iterator<Item = FamilyId>,
    ) -> bool {
        self.classes.append(name, families)
    }

    /// Returns an iterator over the defined class names.
    pub fn classes(&self) -> impl Iterator<Item = &str> + Clone {
        self.classes.classes()
    }

    /// Returns an object for selecting fonts from this collection.
    pub fn query(&self) -> Query<'_> {
        Query::new(self)
    }

    /// Expands an ordered family list into the concrete fallback chain it
    /// denotes.
    ///
    /// Classes are replaced by their members and duplicate identifiers keep
    /// their first position.
    pub fn expand_families<'f, I>(&self, families: I) -> Vec<FamilyId>
    where
        I: IntoIterator,
        I::Item: Into<QueryFamily<'f>>,
    {
        let mut chain = Vec::new();
        let mut push = |id: FamilyId| {
            if !chain.contains(&id) {
                chain.push(id);
            }
        };
        for family in families {
            match family.into() {
                QueryFamily::Named(name) => {
                    if let Some(id) = self.family_id(name) {
                        push(id);
                    }
                }
                QueryFamily::Id(id) => push(id),
                QueryFamily::Class(name) => {
                    for id in self.class_families(name).unwrap_or_default() {
                        push(*id);
                    }
                }
            }
        }
        chain
    }
}

#[cfg(test)]
mod tests {
    use super::{Collection, CollectionOptions, QueryFamily};
    use crate::attributes::FontVariant;

    #[test]
    fn collection_register_and_lookup() {
        let mut collection = Collection::default();
        let id = collection.register_family("PT Sans", [FontVariant::default()]);
        assert_eq!(collection.family_id("pt sans"), Some(id));
        assert_eq!(collection.family_name(id), Some("PT Sans"));
        assert!(collection.family(id).is_some());
    }

    #[test]
    fn collection_interned_name_has_no_faces() {
        let mut collection = Collection::default();
        let id = collection.intern_family_name("Imaginary");
        assert_eq!(collection.family_id("imaginary"), Some(id));
        assert!(collection.family(id).is_none());
    }

    #[test]
    fn collection_options_control_predefined_classes() {
        let collection = Collection::new(CollectionOptions {
            predefined_classes: false,
        });
        assert!(!collection.is_class("serif"));
        let collection = Collection::default();
        assert!(collection.is_class("serif"));
    }

    #[test]
    fn collection_expand_families_dedups_and_keeps_order() {
        let mut collection = Collection::default();
        let serif = collection.register_family("PT Serif", [FontVariant::default()]);
        let sans = collection.register_family("PT Sans", [FontVariant::default()]);
        collection.set_class_families("serif", [serif].into_iter());
        let chain = collection.expand_families([
            QueryFamily::Named("PT Sans"),
            QueryFamily::Class("serif"),
            QueryFamily::Named("pt sans"),
        ]);
        assert_eq!(chain, [sans, serif]);
    }
}

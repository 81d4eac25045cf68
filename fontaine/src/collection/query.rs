// Copyright 2026 the Charta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Query support.

use alloc::vec::Vec;

use super::Collection;
use crate::attributes::FontVariant;
use crate::family::FamilyId;

/// State for font selection.
///
/// Instances of this can be obtained from [`Collection::query`].
#[derive(Clone, Debug)]
pub struct Query<'a> {
    collection: &'a Collection,
    families: Vec<FamilyId>,
    variant: FontVariant,
}

impl<'a> Query<'a> {
    pub(super) fn new(collection: &'a Collection) -> Self {
        Self {
            collection,
            families: Vec::new(),
            variant: FontVariant::default(),
        }
    }

    /// Sets the ordered sequence of families to match against.
    ///
    /// Classes are expanded to their members; names without registered faces
    /// stay in the chain but never match.
    pub fn set_families<'f, I>(&mut self, families: I)
    where
        I: IntoIterator,
        I::Item: Into<QueryFamily<'f>>,
    {
        self.families = self.collection.expand_families(families);
    }

    /// Sets the variant to match against.
    pub fn set_variant(&mut self, variant: FontVariant) {
        self.variant = variant;
    }

    /// Returns the concrete fallback chain the query walks.
    pub fn families(&self) -> &[FamilyId] {
        &self.families
    }

    /// Returns the best match from the first family in the chain that can
    /// satisfy the query.
    pub fn best(&self) -> Option<Match> {
        self.matches().next()
    }

    /// Returns an iterator over the best match of every family in the chain
    /// that can satisfy the query, in fallback order.
    pub fn matches(&self) -> impl Iterator<Item = Match> + '_ {
        let variant = self.variant;
        self.families.iter().filter_map(move |&id| {
            let info = self.collection.family(id)?;
            let index = info.match_index(variant)?;
            Some(Match {
                family: id,
                index,
                variant: info.variants()[index],
            })
        })
    }
}

/// Describes a font family for selection.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum QueryFamily<'a> {
    /// A family referenced by name.
    Named(&'a str),
    /// A family referenced by identifier.
    Id(FamilyId),
    /// A font class standing for its member families.
    Class(&'a str),
}

impl<'a> From<&'a str> for QueryFamily<'a> {
    fn from(value: &'a str) -> Self {
        Self::Named(value)
    }
}

impl From<FamilyId> for QueryFamily<'_> {
    fn from(value: FamilyId) -> Self {
        Self::Id(value)
    }
}

/// A font selected by a [`Query`].
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Match {
    /// The family the variant belongs to.
    pub family: FamilyId,
    /// Index of the variant in the family's declared set.
    pub index: usize,
    /// The matched variant.
    pub variant: FontVariant,
}

#[cfg(test)]
mod tests {
    use super::{Collection, QueryFamily};
    use crate::attributes::{FontStyle, FontVariant, FontWeight};

    fn style_variant(style: FontStyle, weight: FontWeight) -> FontVariant {
        FontVariant {
            style,
            weight,
            ..Default::default()
        }
    }

    fn sample() -> Collection {
        let mut collection = Collection::default();
        collection.register_family(
            "PT Serif",
            [
                style_variant(FontStyle::Normal, FontWeight::REGULAR),
                style_variant(FontStyle::Italic, FontWeight::REGULAR),
            ],
        );
        collection.register_family(
            "PT Sans",
            [
                style_variant(FontStyle::Normal, FontWeight::REGULAR),
                style_variant(FontStyle::Normal, FontWeight::BOLD),
            ],
        );
        let serif = collection.family_id("PT Serif").unwrap();
        collection.set_class_families("serif", [serif].into_iter());
        collection
    }

    #[test]
    fn query_walks_fallback_chain() {
        let collection = sample();
        let mut query = collection.query();
        query.set_families([
            QueryFamily::Named("Missing Family"),
            QueryFamily::Named("PT Sans"),
        ]);
        let found = query.best().unwrap();
        assert_eq!(Some(found.family), collection.family_id("PT Sans"));
    }

    #[test]
    fn query_expands_classes() {
        let collection = sample();
        let mut query = collection.query();
        query.set_families([QueryFamily::Class("serif")]);
        query.set_variant(style_variant(FontStyle::Italic, FontWeight::REGULAR));
        let found = query.best().unwrap();
        assert_eq!(Some(found.family), collection.family_id("PT Serif"));
        assert_eq!(found.variant.style, FontStyle::Italic);
    }

    #[test]
    fn query_interned_names_never_match() {
        let mut collection = Collection::default();
        collection.intern_family_name("Imaginary");
        let mut query = collection.query();
        query.set_families([QueryFamily::Named("Imaginary")]);
        assert_eq!(query.families().len(), 1);
        assert!(query.best().is_none());
    }

    #[test]
    fn query_nearest_weight_within_family() {
        let collection = sample();
        let mut query = collection.query();
        query.set_families([QueryFamily::Named("PT Sans")]);
        query.set_variant(style_variant(FontStyle::Normal, FontWeight::new(600.0)));
        let found = query.best().unwrap();
        assert_eq!(found.variant.weight, FontWeight::BOLD);
    }
}

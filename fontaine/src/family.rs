// Copyright 2026 the Charta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Model for font families.

use alloc::sync::Arc;
use core::sync::atomic::{AtomicU64, Ordering};
use smallvec::SmallVec;

use crate::attributes::FontVariant;
use crate::family_name::FamilyName;

/// Unique identifier for a font family.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(transparent)]
pub struct FamilyId(u64);

impl FamilyId {
    /// Creates a new unique identifier.
    #[allow(clippy::new_without_default, reason = "each call returns a distinct id")]
    pub fn new() -> Self {
        static ID_COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the underlying integer value.
    pub fn to_u64(self) -> u64 {
        self.0
    }
}

/// Named set of variants that are instances of a core design.
///
/// A family registered without any variants is known by name but can never
/// satisfy a query; fallback moves past it.
#[derive(Clone, Debug)]
pub struct FamilyInfo(Arc<FamilyInner>);

impl FamilyInfo {
    /// Creates a new font family object with the given name and declared
    /// variants.
    pub fn new(name: FamilyName, variants: impl IntoIterator<Item = FontVariant>) -> Self {
        let variants: SmallVec<[FontVariant; 4]> = variants.into_iter().collect();
        let default_variant =
            crate::matching::match_variant(&variants, FontVariant::default()).unwrap_or(0);
        Self(Arc::new(FamilyInner {
            name,
            default_variant,
            variants,
        }))
    }

    /// Returns the unique identifier for the family.
    pub fn id(&self) -> FamilyId {
        self.0.name.id()
    }

    /// Returns the name of the family.
    pub fn name(&self) -> &str {
        self.0.name.name()
    }

    /// Returns the variants declared by the family.
    pub fn variants(&self) -> &[FontVariant] {
        &self.0.variants
    }

    /// Returns the default variant of the family, the one nearest to default
    /// attributes.
    pub fn default_variant(&self) -> Option<FontVariant> {
        self.0.variants.get(self.0.default_variant).copied()
    }

    /// Returns the index of the declared variant nearest to the request.
    pub fn match_index(&self, request: FontVariant) -> Option<usize> {
        crate::matching::match_variant(self.variants(), request)
    }

    /// Returns the declared variant nearest to the request.
    pub fn match_variant(&self, request: FontVariant) -> Option<FontVariant> {
        self.variants().get(self.match_index(request)?).copied()
    }
}

#[derive(Clone, Debug)]
struct FamilyInner {
    name: FamilyName,
    default_variant: usize,
    variants: SmallVec<[FontVariant; 4]>,
}

#[cfg(test)]
mod tests {
    use super::FamilyInfo;
    use crate::attributes::{FontStyle, FontVariant, FontWeight};
    use crate::family_name::FamilyNameMap;

    fn upright(weight: FontWeight) -> FontVariant {
        FontVariant {
            weight,
            ..Default::default()
        }
    }

    #[test]
    fn family_default_variant_prefers_regular() {
        let mut names = FamilyNameMap::default();
        let family = FamilyInfo::new(
            names.get_or_insert("PT Sans"),
            [
                upright(FontWeight::BOLD),
                upright(FontWeight::REGULAR),
                FontVariant {
                    style: FontStyle::Italic,
                    ..Default::default()
                },
            ],
        );
        assert_eq!(family.default_variant(), Some(upright(FontWeight::REGULAR)));
    }

    #[test]
    fn family_without_variants_matches_nothing() {
        let mut names = FamilyNameMap::default();
        let family = FamilyInfo::new(names.get_or_insert("Ghost"), []);
        assert_eq!(family.default_variant(), None);
        assert_eq!(family.match_index(FontVariant::default()), None);
    }
}

// Copyright 2026 the Charta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Model for font family names.

use alloc::sync::Arc;
use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::family::FamilyId;

/// Handle for a font family that includes both the name and a unique
/// identifier.
#[derive(Clone, Debug)]
pub struct FamilyName {
    id: FamilyId,
    name: Arc<str>,
}

impl FamilyName {
    /// Returns the unique identifier for the font family.
    pub fn id(&self) -> FamilyId {
        self.id
    }

    /// Returns the name of the font family.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<&FamilyName> for FamilyId {
    fn from(value: &FamilyName) -> Self {
        value.id
    }
}

/// Bidirectional map that associates font family names with unique
/// identifiers.
///
/// Lookup is case-insensitive: `"pt sans"` and `"PT Sans"` name the same
/// family.
#[derive(Clone, Default, Debug)]
pub struct FamilyNameMap {
    name_map: HashMap<Arc<[u8]>, FamilyName>,
    id_map: HashMap<FamilyId, FamilyName>,
}

impl FamilyNameMap {
    /// Returns the family name object for the given name.
    pub fn get(&self, name: &str) -> Option<&FamilyName> {
        let key = NameKey::fold(name);
        self.name_map.get(key.as_bytes())
    }

    /// Returns the family name object for the given identifier.
    pub fn get_by_id(&self, id: FamilyId) -> Option<&FamilyName> {
        self.id_map.get(&id)
    }

    /// Returns the family name object with the given name or creates
    /// a new one if it doesn't exist.
    pub fn get_or_insert(&mut self, name: &str) -> FamilyName {
        let key = NameKey::fold(name);
        if let Some(name) = self.name_map.get(key.as_bytes()) {
            name.clone()
        } else {
            let new_name = FamilyName {
                name: name.into(),
                id: FamilyId::new(),
            };
            self.name_map
                .insert(key.as_bytes().into(), new_name.clone());
            self.id_map.insert(new_name.id, new_name.clone());
            new_name
        }
    }

    /// Returns an iterator over all of the font family names.
    pub fn iter(&self) -> impl Iterator<Item = &FamilyName> + Clone {
        self.name_map.values()
    }
}

/// Key for case-insensitive lookup of names.
///
/// Shared with [`ClassMap`](crate::ClassMap) so class names fold the same
/// way family names do.
#[derive(Default)]
pub(crate) struct NameKey {
    data: SmallVec<[u8; 64]>,
}

impl NameKey {
    pub(crate) fn fold(s: &str) -> Self {
        let mut res = Self::default();
        let mut buf = [0_u8; 4];
        for ch in s.chars() {
            for ch in ch.to_lowercase() {
                res.data
                    .extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
            }
        }
        res
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

// Copyright 2026 the Charta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font family catalog with class aliases, fallback chains and variant
//! matching.
//!
//! A [`Collection`] holds the families an embedder has registered along with
//! the font classes (`serif`, `sans-serif`, ...) that alias ordered lists of
//! them. A [`Query`] expands a prioritized family list into a concrete
//! fallback chain and selects the nearest declared [`FontVariant`] for the
//! requested stretch, style and weight.
//!
//! No font files are parsed here: a family's variant set is declared by the
//! embedder when the family is registered.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod attributes;
mod class;
mod collection;
mod family;
mod family_name;
mod matching;

pub use attributes::{FontStretch, FontStyle, FontVariant, FontWeight};
pub use class::ClassMap;
pub use collection::{Collection, CollectionOptions, Match, Query, QueryFamily};
pub use family::{FamilyId, FamilyInfo};
pub use family_name::{FamilyName, FamilyNameMap};

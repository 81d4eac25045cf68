// Copyright 2026 the Charta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use charta::StyleContext;
use fontaine::{Collection, FontStretch, FontStyle, FontVariant, FontWeight};

pub(crate) fn variant(style: FontStyle, weight: FontWeight) -> FontVariant {
    FontVariant::new(FontStretch::NORMAL, style, weight)
}

/// A small catalog covering the shapes the directive tests exercise:
/// upright/italic pairs, a weight range and populated classes.
pub(crate) fn sample_collection() -> Collection {
    let mut collection = Collection::default();
    collection.register_family(
        "PT Sans",
        [
            variant(FontStyle::Normal, FontWeight::REGULAR),
            variant(FontStyle::Normal, FontWeight::BOLD),
            variant(FontStyle::Italic, FontWeight::REGULAR),
        ],
    );
    collection.register_family(
        "PT Serif",
        [
            variant(FontStyle::Normal, FontWeight::REGULAR),
            variant(FontStyle::Italic, FontWeight::REGULAR),
        ],
    );
    collection.register_family(
        "Vollkorn",
        [
            variant(FontStyle::Normal, FontWeight::REGULAR),
            variant(FontStyle::Normal, FontWeight::MEDIUM),
        ],
    );
    collection.register_family(
        "Latin Modern Math",
        [variant(FontStyle::Normal, FontWeight::REGULAR)],
    );
    collection.register_family(
        "IBM Plex Mono",
        [
            variant(FontStyle::Normal, FontWeight::LIGHT),
            variant(FontStyle::Normal, FontWeight::REGULAR),
        ],
    );

    let serif = collection.family_id("PT Serif").unwrap();
    let sans = collection.family_id("PT Sans").unwrap();
    let mono = collection.family_id("IBM Plex Mono").unwrap();
    let math = collection.family_id("Latin Modern Math").unwrap();
    collection.set_class_families("serif", [serif].into_iter());
    collection.set_class_families("sans-serif", [sans].into_iter());
    collection.set_class_families("monospace", [mono].into_iter());
    collection.set_class_families("math", [math].into_iter());
    collection
}

pub(crate) fn sample_context() -> StyleContext {
    StyleContext::with_collection(sample_collection())
}

/// Evaluates one directive and asserts the rendered diagnostics, fixture
/// style.
pub(crate) fn check(ctx: &mut StyleContext, directive: &str, expected: &[&str]) {
    let evaluation = ctx.evaluate(directive);
    assert_eq!(
        evaluation.render_diagnostics(),
        expected,
        "diagnostics mismatch for {directive:?}"
    );
}

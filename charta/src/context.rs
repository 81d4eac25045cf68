// Copyright 2026 the Charta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Context for evaluating font directives.

use alloc::string::String;
use alloc::vec::Vec;

use fontaine::{Collection, FamilyId, Match};

use crate::diag::{Diagnostic, Severity};
use crate::parse::Directive;
use crate::source::Source;
use crate::font;
use crate::style::TextStyle;

/// Owns the font collection and the current text style, and evaluates
/// directives against them.
#[derive(Clone, Debug, Default)]
pub struct StyleContext {
    collection: Collection,
    style: TextStyle,
}

impl StyleContext {
    /// Creates a new context with an empty collection and the default
    /// style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new context around an existing collection.
    pub fn with_collection(collection: Collection) -> Self {
        Self {
            collection,
            style: TextStyle::default(),
        }
    }

    /// Returns the font collection.
    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    /// Returns the font collection, mutably.
    pub fn collection_mut(&mut self) -> &mut Collection {
        &mut self.collection
    }

    /// Returns the current text style.
    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    /// Evaluates a single directive, updating the style and the
    /// collection's classes.
    ///
    /// Bad arguments never abort evaluation; they surface in the returned
    /// [`Evaluation`] and the remaining arguments still apply.
    pub fn evaluate(&mut self, text: &str) -> Evaluation {
        let source = Source::new(text);
        let mut diagnostics = Vec::new();
        match Directive::parse(&source) {
            Ok(directive) => {
                if directive.name.v == "font" {
                    font::apply(
                        &directive.args,
                        &mut self.collection,
                        &mut self.style,
                        &mut diagnostics,
                    );
                } else {
                    diagnostics.push(Diagnostic::error(directive.name.span, "unknown function"));
                }
            }
            Err(diagnostic) => diagnostics.push(diagnostic),
        }
        Evaluation {
            source,
            diagnostics,
        }
    }

    /// Expands the current family stack into its concrete fallback chain.
    pub fn fallback_chain(&self) -> Vec<FamilyId> {
        self.collection.expand_families(self.style.families.iter())
    }

    /// Resolves the current style to a concrete font, walking the fallback
    /// chain for the nearest declared variant.
    pub fn resolve(&self) -> Option<Match> {
        let mut query = self.collection.query();
        query.set_families(self.style.families.iter());
        query.set_variant(self.style.variant());
        query.best()
    }
}

impl From<Collection> for StyleContext {
    fn from(collection: Collection) -> Self {
        Self::with_collection(collection)
    }
}

/// The outcome of evaluating a directive.
#[derive(Clone, Debug)]
pub struct Evaluation {
    source: Source,
    diagnostics: Vec<Diagnostic>,
}

impl Evaluation {
    /// Returns the evaluated source.
    pub fn source(&self) -> &Source {
        &self.source
    }

    /// Returns the diagnostics, in source order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns `true` if no errors were reported. Warnings don't count.
    pub fn is_ok(&self) -> bool {
        self.diagnostics
            .iter()
            .all(|d| d.severity != Severity::Error)
    }

    /// Renders all diagnostics in the form
    /// `<severity>: <line:col-line:col> <message>`.
    pub fn render_diagnostics(&self) -> Vec<String> {
        self.diagnostics
            .iter()
            .map(|d| d.render(&self.source))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use fontaine::{Collection, FontVariant};

    use super::StyleContext;
    use crate::Family;

    #[test]
    fn context_renders_fixture_diagnostics() {
        let mut ctx = StyleContext::new();
        let evaluation = ctx.evaluate("#[font false]");
        assert_eq!(
            evaluation.render_diagnostics(),
            ["error: 1:8-1:13 unexpected argument"]
        );
        assert!(!evaluation.is_ok());
    }

    #[test]
    fn context_warnings_are_ok() {
        let mut ctx = StyleContext::new();
        let evaluation = ctx.evaluate("#[font weight: 2700]");
        assert!(evaluation.is_ok());
        assert_eq!(
            evaluation.render_diagnostics(),
            ["warning: 1:16-1:20 should be between 100 and 900"]
        );
    }

    #[test]
    fn context_rejects_unknown_functions() {
        let mut ctx = StyleContext::new();
        let evaluation = ctx.evaluate("#[fnot \"PT Sans\"]");
        assert_eq!(
            evaluation.render_diagnostics(),
            ["error: 1:3-1:7 unknown function"]
        );
    }

    #[test]
    fn context_directives_accumulate() {
        let mut collection = Collection::default();
        collection.register_family("PT Serif", [FontVariant::default()]);
        let mut ctx = StyleContext::with_collection(collection);
        assert!(ctx.evaluate("#[font serif: \"PT Serif\"]").is_ok());
        assert!(ctx.evaluate("#[font serif]").is_ok());
        assert_eq!(ctx.style().families, [Family::class("serif")]);
        let resolved = ctx.resolve().unwrap();
        assert_eq!(
            Some(resolved.family),
            ctx.collection().family_id("PT Serif")
        );
    }

    #[test]
    fn context_fallback_chain_skips_missing() {
        let mut collection = Collection::default();
        let sans = collection.register_family("PT Sans", [FontVariant::default()]);
        let mut ctx = StyleContext::with_collection(collection);
        assert!(ctx
            .evaluate("#[font \"No Such Family\", \"PT Sans\"]")
            .is_ok());
        assert_eq!(ctx.fallback_chain().len(), 2);
        assert_eq!(ctx.resolve().map(|m| m.family), Some(sans));
    }
}

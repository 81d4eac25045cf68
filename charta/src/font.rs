// Copyright 2026 the Charta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The font directive.

use alloc::format;
use alloc::vec::Vec;

use fontaine::{Collection, FamilyId, FontStretch, FontStyle, FontWeight};

use crate::diag::{Diagnostic, Spanned};
use crate::parse::{Arg, Args};
use crate::style::{Family, TextStyle};
use crate::value::Value;

/// Applies a parsed `font` argument list to the style and collection.
///
/// Problems become diagnostics and the offending argument is skipped; the
/// remaining arguments still apply.
pub(crate) fn apply(
    args: &Args,
    collection: &mut Collection,
    style: &mut TextStyle,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let mut families = Vec::new();
    for arg in &args.items {
        match &arg.name {
            None => positional(arg, collection, style, &mut families, diagnostics),
            Some(name) => match name.v.as_str() {
                "size" => set_size(&arg.value, style, diagnostics),
                "style" => set_style(&arg.value, style, diagnostics),
                "weight" => set_weight(&arg.value, style, diagnostics),
                "stretch" => set_stretch(&arg.value, style, diagnostics),
                class if collection.is_class(class) => {
                    bind_class(class, &arg.value, collection, diagnostics);
                }
                _ => diagnostics.push(Diagnostic::error(arg.span, "unexpected argument")),
            },
        }
    }
    // Any family mention replaces the whole stack.
    if !families.is_empty() {
        style.families = families;
    }
}

fn positional(
    arg: &Arg,
    collection: &mut Collection,
    style: &mut TextStyle,
    families: &mut Vec<Family>,
    diagnostics: &mut Vec<Diagnostic>,
) {
    match &arg.value.v {
        Value::Length(length) => style.size = *length,
        Value::Str(_) | Value::Array(_) => {
            collect_families(&arg.value, collection, families, diagnostics);
        }
        Value::Ident(ident) if collection.is_class(ident) => {
            families.push(Family::class(ident.clone()));
        }
        _ => diagnostics.push(Diagnostic::error(arg.span, "unexpected argument")),
    }
}

fn collect_families(
    value: &Spanned<Value>,
    collection: &mut Collection,
    families: &mut Vec<Family>,
    diagnostics: &mut Vec<Diagnostic>,
) {
    match &value.v {
        Value::Str(name) => {
            collection.intern_family_name(name);
            families.push(Family::named(name.clone()));
        }
        Value::Ident(ident) if collection.is_class(ident) => {
            families.push(Family::class(ident.clone()));
        }
        Value::Array(items) => {
            for item in items {
                collect_families(item, collection, families, diagnostics);
            }
        }
        _ => diagnostics.push(mismatch(value, "font family")),
    }
}

fn set_size(value: &Spanned<Value>, style: &mut TextStyle, diagnostics: &mut Vec<Diagnostic>) {
    match &value.v {
        Value::Length(length) => style.size = *length,
        _ => diagnostics.push(mismatch(value, "length")),
    }
}

fn set_style(value: &Spanned<Value>, style: &mut TextStyle, diagnostics: &mut Vec<Diagnostic>) {
    match &value.v {
        Value::Ident(ident) => match FontStyle::parse(ident) {
            Some(parsed) => style.style = parsed,
            None => diagnostics.push(mismatch(value, "font style")),
        },
        _ => diagnostics.push(mismatch(value, "font style")),
    }
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    reason = "weights far beyond f32 precision are nonsense anyway"
)]
fn set_weight(value: &Spanned<Value>, style: &mut TextStyle, diagnostics: &mut Vec<Diagnostic>) {
    let numeric = match &value.v {
        Value::Int(int) => Some(*int as f32),
        Value::Float(float) => Some(*float as f32),
        Value::Ident(ident) => match FontWeight::parse(ident) {
            Some(parsed) => {
                style.weight = parsed;
                return;
            }
            None => None,
        },
        _ => None,
    };
    let Some(numeric) = numeric else {
        diagnostics.push(mismatch(value, "font weight"));
        return;
    };
    // Out-of-range weights still apply; they are only suspicious.
    let weight = FontWeight::new(numeric);
    if !weight.is_nominal() {
        diagnostics.push(Diagnostic::warning(
            value.span,
            "should be between 100 and 900",
        ));
    }
    style.weight = weight;
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    reason = "stretch ratios are small"
)]
fn set_stretch(value: &Spanned<Value>, style: &mut TextStyle, diagnostics: &mut Vec<Diagnostic>) {
    match &value.v {
        Value::Ident(ident) => match FontStretch::parse(ident) {
            Some(parsed) => style.stretch = parsed,
            None => diagnostics.push(mismatch(value, "font stretch")),
        },
        Value::Float(ratio) => style.stretch = FontStretch::from_ratio(*ratio as f32),
        Value::Int(ratio) => style.stretch = FontStretch::from_ratio(*ratio as f32),
        _ => diagnostics.push(mismatch(value, "font stretch")),
    }
}

fn bind_class(
    class: &str,
    value: &Spanned<Value>,
    collection: &mut Collection,
    diagnostics: &mut Vec<Diagnostic>,
) {
    // Snapshot the prior members so a self-reference can splice them in.
    let prior: Vec<FamilyId> = collection
        .class_families(class)
        .map(<[FamilyId]>::to_vec)
        .unwrap_or_default();
    let mut members = Vec::new();
    collect_class_members(class, &prior, value, collection, &mut members, diagnostics);
    collection.set_class_families(class, members.into_iter());
}

fn collect_class_members(
    class: &str,
    prior: &[FamilyId],
    value: &Spanned<Value>,
    collection: &mut Collection,
    members: &mut Vec<FamilyId>,
    diagnostics: &mut Vec<Diagnostic>,
) {
    match &value.v {
        Value::Str(name) => members.push(collection.intern_family_name(name)),
        Value::Ident(ident) if name_eq(ident, class) => members.extend_from_slice(prior),
        Value::Ident(ident) if collection.is_class(ident) => {
            members.extend_from_slice(collection.class_families(ident).unwrap_or_default());
        }
        Value::Array(items) => {
            for item in items {
                collect_class_members(class, prior, item, collection, members, diagnostics);
            }
        }
        _ => diagnostics.push(mismatch(value, "font family")),
    }
}

fn mismatch(value: &Spanned<Value>, expected: &str) -> Diagnostic {
    Diagnostic::error(
        value.span,
        format!("expected {expected}, found {}", describe(&value.v)),
    )
}

/// Names what a value is, preferring the attribute kind a keyword belongs
/// to over the raw type so mismatches read like
/// `expected font style, found font weight`.
fn describe(value: &Value) -> &'static str {
    if let Value::Ident(ident) = value {
        if FontStyle::parse(ident).is_some() {
            return "font style";
        }
        if FontWeight::parse(ident).is_some() {
            return "font weight";
        }
        if FontStretch::parse(ident).is_some() {
            return "font stretch";
        }
    }
    value.type_name()
}

fn name_eq(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

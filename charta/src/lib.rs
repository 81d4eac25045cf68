// Copyright 2026 the Charta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Evaluation of the `#[font ...]` configuration directive.
//!
//! The directive configures the current [`TextStyle`]: the font family
//! stack (names, class keywords like `serif`, or arrays of both), the font
//! size, and the requested style, weight and stretch. It can also rebind a
//! font class, optionally extending the class's own prior members:
//!
//! ```text
//! #[font "PT Sans", style: italic, weight: 600]
//! #[font serif: ("Vollkorn", serif)]
//! ```
//!
//! Evaluation never aborts on a bad argument: every problem becomes a
//! [`Diagnostic`] with a source span and the remaining arguments still
//! apply. Diagnostics render in the fixture format
//! `<severity>: <line:col-line:col> <message>`, for example
//! `error: 1:8-1:13 unexpected argument`.
//!
//! [`StyleContext`] is the entry point: it owns a [`fontaine::Collection`]
//! and the current style, evaluates directive source against them and
//! resolves the resulting fallback chain to a concrete font variant.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod context;
mod diag;
mod font;
mod parse;
mod source;
mod style;
mod value;

pub use context::{Evaluation, StyleContext};
pub use diag::{Diagnostic, Severity, Span, Spanned};
pub use parse::{Arg, Args, Directive};
pub use source::Source;
pub use style::{Family, TextStyle};
pub use value::{Length, Value};

pub use fontaine::{FontStretch, FontStyle, FontVariant, FontWeight};

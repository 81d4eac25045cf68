// Copyright 2026 the Charta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spans and diagnostics.

use alloc::string::String;
use core::fmt;

use crate::source::Source;

/// A byte range in directive source text.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Span {
    /// The inclusive start of the range.
    pub start: usize,
    /// The exclusive end of the range.
    pub end: usize,
}

impl Span {
    /// Creates a new span from the given byte range.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Creates an empty span at the given byte offset.
    pub fn at(pos: usize) -> Self {
        Self::new(pos, pos)
    }

    /// Returns the smallest span covering both spans.
    pub fn join(self, other: Self) -> Self {
        Self::new(self.start.min(other.start), self.end.max(other.end))
    }
}

/// A value together with the span it was parsed from.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Spanned<T> {
    /// The spanned value.
    pub v: T,
    /// The value's span.
    pub span: Span,
}

impl<T> Spanned<T> {
    /// Creates a new instance from a value and its span.
    pub fn new(v: T, span: Span) -> Self {
        Self { v, span }
    }

    /// Maps the value while keeping the span.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Spanned<U> {
        Spanned::new(f(self.v), self.span)
    }
}

/// How bad a diagnostic is.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Severity {
    /// The source is questionable, but evaluation proceeds normally.
    Warning,
    /// The offending argument is dropped.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Warning => "warning",
            Self::Error => "error",
        })
    }
}

/// A problem found while evaluating a directive.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Diagnostic {
    /// The span of the offending source.
    pub span: Span,
    /// The severity of the problem.
    pub severity: Severity,
    /// A message describing the problem.
    pub message: String,
}

impl Diagnostic {
    /// Creates a new error diagnostic.
    pub fn error(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// Creates a new warning diagnostic.
    pub fn warning(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    /// Returns `true` if this diagnostic is an error.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Renders the diagnostic against its source in the form
    /// `<severity>: <line:col-line:col> <message>`.
    pub fn render(&self, source: &Source) -> String {
        let (start_line, start_col) = source.line_col(self.span.start);
        let (end_line, end_col) = source.line_col(self.span.end);
        alloc::format!(
            "{}: {start_line}:{start_col}-{end_line}:{end_col} {}",
            self.severity,
            self.message
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} at bytes {}-{}",
            self.severity, self.message, self.span.start, self.span.end
        )
    }
}

impl core::error::Error for Diagnostic {}

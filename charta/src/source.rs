// Copyright 2026 the Charta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Directive source text.

use alloc::string::String;
use alloc::vec::Vec;

/// Directive source text with precomputed line starts.
///
/// Positions are byte offsets; [`line_col`](Self::line_col) converts them to
/// the 1-based, char-counted line and column pairs diagnostics render with.
#[derive(Clone, Debug)]
pub struct Source {
    text: String,
    line_starts: Vec<usize>,
}

impl Source {
    /// Creates a new source from the given text.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let mut line_starts = Vec::new();
        line_starts.push(0);
        line_starts.extend(
            text.bytes()
                .enumerate()
                .filter(|(_, b)| *b == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self { text, line_starts }
    }

    /// Returns the source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the 1-based line and column for the given byte offset.
    ///
    /// Columns count chars, so multi-byte text does not skew spans.
    pub fn line_col(&self, byte: usize) -> (usize, usize) {
        let byte = byte.min(self.text.len());
        let line = self.line_starts.partition_point(|start| *start <= byte);
        let line_start = self.line_starts[line - 1];
        let col = self.text[line_start..byte].chars().count() + 1;
        (line, col)
    }
}

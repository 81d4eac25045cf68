// Copyright 2026 the Charta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `charta`.
//!
//! - The `util` module contains the canned font catalog and the assertion
//!   helpers shared by the test modules.
//! - We do not use the default Rust test harness, but instead use this
//!   `mod.rs` file as the entry point to run all other tests, which makes
//!   it easy to share utilities between them.
//! - Diagnostics tests live in `directive`, fallback and matching tests in
//!   `resolution`. Test names start with the topic, so `directive_weight_*`
//!   sorts next to the other weight cases.

#![allow(missing_docs, reason = "we don't need docs for testing")]

mod util;

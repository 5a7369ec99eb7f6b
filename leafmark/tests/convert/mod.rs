//! Markdown conversion tests
//!
//! End to end checks of markdown → node tree → HTML, plus property tests for the inline
//! pipeline.

mod documents;
mod properties;

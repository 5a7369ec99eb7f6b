//! Node tree tests
//!
//! Rendering and validation of hand built trees.

mod render;

//! Library half of the leafmark binary, shared with its integration tests.

pub mod transforms;

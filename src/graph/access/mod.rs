//! Internal traversal building blocks.
//!
//! Kept `pub(crate)` so every traversal shares one visited-set implementation
//! without exposing it as public API.

pub(crate) mod visited;

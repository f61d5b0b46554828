//! Likeboard Types - Pure data types shared by the store and the HTTP layer
//!
//! This crate has no async runtime dependencies.

pub mod repository;

pub use repository::*;

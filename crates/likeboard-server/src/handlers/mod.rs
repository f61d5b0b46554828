//! HTTP handlers

pub mod health;
pub mod repositories;

pub use health::health;

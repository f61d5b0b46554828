//! Likeboard Core Library
//!
//! Error type and port traits for the Likeboard service.

// Re-export pure types from likeboard-types
pub use likeboard_types::*;

pub mod error;
pub mod ports;

pub use error::{LikeboardError, Result};

//! Domain layer
//!
//! Error types shared by the outer surfaces.

pub mod errors;

pub use errors::{Result, ShowboxError};

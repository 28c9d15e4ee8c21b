//! Core building blocks shared by the registry
//!
//! Error types, the small value enums used by classes and members, and the
//! logging setup.

mod error;
pub mod logging;
mod types;

pub use error::*;
pub use logging::*;
pub use types::*;

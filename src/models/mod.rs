//! Models Module - Data Structures & Errors
//!
//! Single source of truth for the input record, the trained artifact
//! bundle, result types and the application error taxonomy.

pub mod artifact;
pub mod errors;
pub mod record;
pub mod types;

pub use artifact::*;
pub use errors::*;
pub use record::*;
pub use types::*;

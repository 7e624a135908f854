//! CLI command implementations.

pub mod list;
pub mod resolve;
pub mod validate;

/// Shared kernel - Common utilities and error types
pub mod error;
mod result;

pub use result::Result;

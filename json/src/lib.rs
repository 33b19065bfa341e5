pub mod error;
pub mod json;
pub use error::{JsonError, Result};
pub use json::*;

#[cfg(test)]
mod json_test;

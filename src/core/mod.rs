//! Core error types shared by the plugin and store modules.

pub mod error;

pub use error::{Error, Result};

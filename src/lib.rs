//! greeter library
//!
//! A greeter that stores a name and formats a greeting for it, plus the
//! config and logging setup used by the `greeter` binary.

pub mod config;
pub mod error;
pub mod greeter;
pub mod logging;

pub use config::{GreeterConfig, NameSource, DEFAULT_NAME};
pub use error::{GreeterError, Result};
pub use greeter::Greeter;

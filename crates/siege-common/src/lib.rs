//! # Siege Common
//!
//! Shared types, errors, and utilities for SiegeBot.
//!
//! This crate provides the foundational types used across every other crate
//! in the SiegeBot workspace: the normalized statistics record, the platform
//! and playlist enumerations, the workspace error type and logging setup.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod types;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{Result, SiegeError};
pub use logging::{bootstrap_subscriber, init_logging, LogFormat, LoggingConfig, LoggingGuard};
pub use types::*;
pub use utils::*;

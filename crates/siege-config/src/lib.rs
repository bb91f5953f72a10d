//! # Siege Config
//!
//! Type-safe configuration management for SiegeBot.
//!
//! This crate provides the configuration schema, defaults, loading from TOML
//! files with environment overrides, validation, and the linked account map.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod accounts;
pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use accounts::*;
pub use defaults::*;
pub use loader::*;
pub use schema::*;
pub use validator::*;

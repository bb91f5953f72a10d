//! # SiegeBot
//!
//! Discord bot relaying Rainbow Six Siege player statistics from Tracker Network.
//!
//! This is the main binary crate that wires configuration, logging, the
//! stats resolver and the Poise framework together.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod bot;
pub mod error;

pub use bot::*;
pub use error::*;

//! # Siege Commands
//!
//! Discord command implementations using Poise framework for SiegeBot.
//!
//! This crate provides the slash commands, their option choices and the
//! embed cards they reply with.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod about;
pub mod cards;
pub mod challenges;
pub mod choices;
pub mod framework;
pub mod stats;

pub use cards::*;
pub use choices::*;
pub use framework::*;

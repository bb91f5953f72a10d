//! # Siege Stats
//!
//! Rainbow Six Siege statistics resolution for SiegeBot.
//!
//! This crate talks to the Tracker Network profile API, normalizes its
//! loosely shaped payload into a [`siege_common::StatsRecord`], serves demo
//! data when configured to, and maps operator names to image URLs.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod challenges;
pub mod client;
pub mod demo;
pub mod models;
pub mod operators;
pub mod resolver;

pub use challenges::*;
pub use client::*;
pub use demo::*;
pub use models::*;
pub use operators::*;
pub use resolver::*;

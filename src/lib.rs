//! Lineup server library
//!
//! This library exposes server modules for integration testing.

pub mod config;
pub mod lifecycle;
pub mod logging;

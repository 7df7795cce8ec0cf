//! colourpicker - an OKLCH colour picker for the terminal
//!
//! Picker state, recent-colour history, configuration and input parsing
//! around the `colour-engine` crate.
//! This library exposes modules for integration testing.

pub mod error;
pub mod input;
pub mod models;
pub mod services;

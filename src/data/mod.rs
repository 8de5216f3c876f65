//! External weather data acquisition.

pub mod openmeteo;

pub use openmeteo::*;

//! AstroStrike - Asteroid Impact Simulator
//!
//! A library crate providing the impact estimator, the approach integrator
//! and the Bevy plugin that drives it frame by frame.

pub mod collision;
pub mod geo;
pub mod impact;
pub mod outcome;
pub mod physics;
pub mod report;
pub mod scenarios;
pub mod tsunami;
pub mod types;

#[cfg(test)]
pub mod test_utils;

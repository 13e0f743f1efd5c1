//! Random number generation for Monte Carlo simulation.
//!
//! This module provides [`SimRng`], a seeded PRNG wrapper for reproducible
//! path simulation. The engine never touches a global generator; every
//! pricer owns its own instance.

mod prng;

pub use prng::SimRng;

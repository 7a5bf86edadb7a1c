//! Freight Simulation Library
//!
//! A deterministic, single-threaded logistics simulation: cities connected
//! by weighted routes, a capacity-limited truck fleet, and a multi-day
//! delivery schedule with overflow rerouting and hub replenishment.

pub mod scenario;
pub mod simulation;

//! Core types for the logistics simulation
//!
//! Identifier newtypes and shared aliases used across the engine.

use serde::Serialize;

/// A unique identifier for a city in the network
/// Dense index assigned in registration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CityId(pub usize);

/// A unique identifier for a truck in the fleet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TruckId(pub usize);

/// Stock and cargo amounts.
///
/// Signed: the low-level delivery primitive trusts its caller to check origin
/// stock and destination headroom, so out-of-range values must be
/// representable rather than panicking on unsigned underflow.
pub type StockAmount = i64;

/// Route distances are non-negative integers; the graph is static for a run.
pub type Distance = u32;

/// A single scheduled delivery: move `amount` units from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRequest {
    pub from: CityId,
    pub to: CityId,
    pub amount: StockAmount,
}

/// Maximum units moved per replenishment delivery from the hub
pub const REPLENISH_BATCH: StockAmount = 50;

//! Standalone logistics simulation engine
//!
//! This module contains the routing and allocation core: shortest-path
//! search over the city network, truck selection, delivery execution with
//! overflow rerouting, and the multi-day scheduling/replenishment loop.
//! It has no I/O of its own; outcomes are reported as structured events.

mod delivery;
mod events;
mod fleet;
mod network;
mod types;
mod world;

pub use events::{DeliveryError, SimEvent};
pub use fleet::{Fleet, Truck};
pub use network::{City, CityNetwork, RoutePlan};
pub use types::{CityId, Distance, RouteRequest, StockAmount, TruckId, REPLENISH_BATCH};
pub use world::{DeliverySchedule, SimWorld};

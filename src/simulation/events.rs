//! Structured events and the delivery error taxonomy
//!
//! The engine reports outcomes as discrete values rather than formatted
//! text; rendering belongs to whatever consumes the event stream.

use serde::Serialize;
use thiserror::Error;

use super::types::{CityId, StockAmount, TruckId};

/// A structured outcome emitted by the engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SimEvent {
    /// A delivery completed, including the route driven
    DeliveryCompleted {
        truck: TruckId,
        from: CityId,
        to: CityId,
        amount: StockAmount,
        path: Vec<CityId>,
    },
    /// No connecting route exists; the single delivery attempt was dropped
    DeliveryFailedNoRoute { from: CityId, to: CityId },
    /// A destination could not absorb the full amount; `remainder` goes to
    /// overflow rerouting
    CapacityExceeded { city: CityId, remainder: StockAmount },
    /// A city fell below its minimum stock and replenishment was started
    ReplenishmentNeeded { city: CityId, deficit: StockAmount },
    /// No truck qualified for a requested pickup
    TruckUnavailable { from: CityId, amount: StockAmount },
    /// A scheduled route was skipped because the origin lacked stock
    InsufficientStock { city: CityId, amount: StockAmount },
    /// Overflow rerouting found no viable alternative destination
    NoAlternativeDestination {
        from: CityId,
        to: CityId,
        remainder: StockAmount,
    },
    /// End-of-run stock level for one city
    FinalStatus {
        city: CityId,
        current: StockAmount,
        min: StockAmount,
        max: StockAmount,
    },
}

/// Why a delivery attempt failed
///
/// Every variant is recoverable at the call site that issued the attempt;
/// none aborts the overall run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    #[error("no route from city {} to city {}", .from.0, .to.0)]
    NoRouteFound { from: CityId, to: CityId },

    #[error("no truck available at city {} for {} units", .from.0, .amount)]
    NoTruckAvailable { from: CityId, amount: StockAmount },

    #[error("city {} holds less than the {} units requested", .city.0, .amount)]
    InsufficientStock { city: CityId, amount: StockAmount },

    #[error("no alternative destination for {} units out of city {}", .remainder, .from.0)]
    NoAlternativeDestination {
        from: CityId,
        to: CityId,
        remainder: StockAmount,
    },
}

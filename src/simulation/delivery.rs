//! Delivery execution and overflow routing
//!
//! The low-level `deliver` primitive plus the capacity-enforcing
//! `execute_delivery` orchestration that reroutes overflow.

use log::{debug, warn};

use super::events::{DeliveryError, SimEvent};
use super::types::{CityId, StockAmount, TruckId};
use super::world::SimWorld;

impl SimWorld {
    /// Moves `amount` units from `from` to `to` with the given truck.
    ///
    /// Low-level primitive: it verifies that a route exists and nothing
    /// else. Checking origin stock and destination headroom is the caller's
    /// responsibility; skipping those checks produces out-of-range stock
    /// values by documented contract. `amount` must be positive.
    pub fn deliver(
        &mut self,
        truck_id: TruckId,
        from: CityId,
        to: CityId,
        amount: StockAmount,
    ) -> Result<(), DeliveryError> {
        debug_assert!(amount > 0, "deliveries move a positive amount");

        if self.fleet.truck(truck_id).is_none() {
            warn!("delivery requested for unknown truck {truck_id:?}");
            return Err(DeliveryError::NoTruckAvailable { from, amount });
        }

        let Some(plan) = self.network.shortest_path(from, to) else {
            self.record(SimEvent::DeliveryFailedNoRoute { from, to });
            return Err(DeliveryError::NoRouteFound { from, to });
        };

        // Pickup leg: position the truck, load cargo out of the origin
        if let Some(truck) = self.fleet.truck_mut(truck_id) {
            truck.location = from;
        }
        if let Some(origin) = self.network.city_mut(from) {
            origin.current_stock -= amount;
        }
        if let Some(truck) = self.fleet.truck_mut(truck_id) {
            truck.load += amount;
        }

        // Drop-off leg: drive the route, unload into the destination
        if let Some(truck) = self.fleet.truck_mut(truck_id) {
            truck.location = to;
            truck.load -= amount;
        }
        if let Some(destination) = self.network.city_mut(to) {
            destination.current_stock += amount;
        }

        debug!(
            "truck {} drove {} -> {} with {amount} units over {} legs",
            truck_id.0,
            from.0,
            to.0,
            plan.len().saturating_sub(1)
        );
        self.record(SimEvent::DeliveryCompleted {
            truck: truck_id,
            from,
            to,
            amount,
            path: plan.cities,
        });
        Ok(())
    }

    /// Delivers with destination-capacity enforcement.
    ///
    /// The destination receives at most its spare capacity; any remainder is
    /// rerouted to the closest alternative city that can absorb all of it.
    pub fn execute_delivery(
        &mut self,
        truck_id: TruckId,
        from: CityId,
        to: CityId,
        amount: StockAmount,
    ) -> Result<(), DeliveryError> {
        let available = self
            .network
            .city(to)
            .map_or(0, |city| city.spare_capacity());

        if amount <= available {
            return self.deliver(truck_id, from, to, amount);
        }

        // Partial fulfilment of the original destination
        if available > 0 {
            self.deliver(truck_id, from, to, available)?;
        }

        let remainder = amount - available;
        warn!("city {} is out of room, rerouting {remainder} units", to.0);
        self.record(SimEvent::CapacityExceeded {
            city: to,
            remainder,
        });

        self.reroute_overflow(from, to, remainder)
    }

    /// Sends an overflow remainder to the closest viable alternative city.
    fn reroute_overflow(
        &mut self,
        from: CityId,
        to: CityId,
        remainder: StockAmount,
    ) -> Result<(), DeliveryError> {
        let Some((candidate, spare)) = self.find_closest_alternative(from, to, remainder) else {
            self.record(SimEvent::NoAlternativeDestination {
                from,
                to,
                remainder,
            });
            return Err(DeliveryError::NoAlternativeDestination {
                from,
                to,
                remainder,
            });
        };

        let deliver_amt = remainder.min(spare);
        let Some(truck) = self.fleet.pick_truck(&self.network, from, deliver_amt) else {
            self.record(SimEvent::TruckUnavailable {
                from,
                amount: deliver_amt,
            });
            return Err(DeliveryError::NoTruckAvailable {
                from,
                amount: deliver_amt,
            });
        };

        self.deliver(truck, from, candidate, deliver_amt)
    }

    /// Closest city other than `from` and `to` with spare capacity for the
    /// whole remainder.
    ///
    /// Ranked by route length in nodes, not summed distance; ties resolve to
    /// the lowest city id.
    fn find_closest_alternative(
        &self,
        from: CityId,
        to: CityId,
        remainder: StockAmount,
    ) -> Option<(CityId, StockAmount)> {
        self.network
            .cities()
            .filter(|city| city.id != from && city.id != to)
            .filter(|city| {
                city.current_stock < city.max_stock && city.spare_capacity() >= remainder
            })
            .filter_map(|city| {
                let plan = self.network.shortest_path(from, city.id)?;
                Some((plan.len(), city.id, city.spare_capacity()))
            })
            .min_by_key(|(hops, id, _)| (*hops, *id))
            .map(|(_, id, spare)| (id, spare))
    }
}

//! Truck registry and selection heuristics

use std::collections::BTreeMap;

use super::network::CityNetwork;
use super::types::{CityId, StockAmount, TruckId};

/// A capacity-limited truck
///
/// `load` is applied and cleared within a single delivery, so it reads zero
/// at every quiescent point between deliveries.
#[derive(Debug, Clone)]
pub struct Truck {
    pub id: TruckId,
    pub name: String,
    /// Immutable cargo ceiling
    pub capacity: StockAmount,
    pub load: StockAmount,
    pub location: CityId,
}

impl Truck {
    /// Cargo room left on this truck
    pub fn spare_capacity(&self) -> StockAmount {
        self.capacity - self.load
    }
}

/// The truck registry
///
/// Backed by a `BTreeMap` so selection ties always resolve to the lowest
/// truck id.
#[derive(Default)]
pub struct Fleet {
    trucks: BTreeMap<TruckId, Truck>,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a truck and returns its id
    pub fn add_truck(
        &mut self,
        name: impl Into<String>,
        capacity: StockAmount,
        location: CityId,
    ) -> TruckId {
        let id = TruckId(self.trucks.len());
        self.trucks.insert(
            id,
            Truck {
                id,
                name: name.into(),
                capacity,
                load: 0,
                location,
            },
        );
        id
    }

    pub fn truck(&self, id: TruckId) -> Option<&Truck> {
        self.trucks.get(&id)
    }

    pub fn truck_mut(&mut self, id: TruckId) -> Option<&mut Truck> {
        self.trucks.get_mut(&id)
    }

    /// All trucks in ascending id order
    pub fn trucks(&self) -> impl Iterator<Item = &Truck> {
        self.trucks.values()
    }

    pub fn truck_count(&self) -> usize {
        self.trucks.len()
    }

    /// Chooses a truck to carry `amount` units out of `from`.
    ///
    /// Two tiers, first match wins:
    /// 1. Trucks already at `from` with spare capacity, smallest load first.
    /// 2. Trucks one hop away with spare capacity, ranked by
    ///    `load + edge_distance` then load. Trucks further out are never
    ///    considered.
    ///
    /// Ties resolve to the lowest truck id. Pure query, no mutation.
    pub fn pick_truck(
        &self,
        network: &CityNetwork,
        from: CityId,
        amount: StockAmount,
    ) -> Option<TruckId> {
        // Tier 1: trucks already at the origin
        if let Some(truck) = self
            .trucks
            .values()
            .filter(|t| t.location == from && t.spare_capacity() >= amount)
            .min_by_key(|t| (t.load, t.id))
        {
            return Some(truck.id);
        }

        // Tier 2: trucks at directly adjacent cities
        let neighbors = network.neighbors(from);
        self.trucks
            .values()
            .filter_map(|truck| {
                if truck.spare_capacity() < amount {
                    return None;
                }
                let (_, distance) = neighbors
                    .iter()
                    .find(|(city, _)| *city == truck.location)?;
                Some((truck.load + StockAmount::from(*distance), truck))
            })
            .min_by_key(|(rank, truck)| (*rank, truck.load, truck.id))
            .map(|(_, truck)| truck.id)
    }
}

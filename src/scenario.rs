//! Scenario configuration
//!
//! The external loader for the engine: JSON files describe the static
//! inputs (cities, routes, trucks, hub, and the day-by-day route table).
//! `build` resolves names to ids and produces a ready-to-run world.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::simulation::{
    CityId, CityNetwork, DeliverySchedule, Distance, Fleet, RouteRequest, SimWorld, StockAmount,
};

#[derive(Debug, Clone, Deserialize)]
pub struct CityConfig {
    pub name: String,
    pub min_stock: StockAmount,
    pub max_stock: StockAmount,
    pub current_stock: StockAmount,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RouteConfig {
    pub from: String,
    pub to: String,
    pub distance: Distance,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TruckConfig {
    pub name: String,
    pub capacity: StockAmount,
    pub location: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeliveryConfig {
    pub from: String,
    pub to: String,
    pub amount: StockAmount,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DayPlanConfig {
    pub day: u32,
    pub deliveries: Vec<DeliveryConfig>,
}

/// A full simulation scenario as loaded from disk
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub cities: Vec<CityConfig>,
    pub routes: Vec<RouteConfig>,
    pub trucks: Vec<TruckConfig>,
    /// City that sources replenishment deliveries
    pub hub: String,
    pub days: Vec<DayPlanConfig>,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing scenario {}", path.display()))
    }

    /// Builds a ready-to-run world, validating configuration preconditions.
    pub fn build(&self) -> Result<SimWorld> {
        let mut network = CityNetwork::new();
        let mut ids: HashMap<&str, CityId> = HashMap::new();

        for city in &self.cities {
            if city.min_stock > city.max_stock {
                bail!("city {} has min_stock above max_stock", city.name);
            }
            if ids.contains_key(city.name.as_str()) {
                bail!("duplicate city name {}", city.name);
            }
            let id = network.add_city(
                &city.name,
                city.min_stock,
                city.max_stock,
                city.current_stock,
            );
            ids.insert(&city.name, id);
        }

        let lookup = |name: &str| -> Result<CityId> {
            ids.get(name)
                .copied()
                .with_context(|| format!("unknown city {name}"))
        };

        for route in &self.routes {
            network.add_route(lookup(&route.from)?, lookup(&route.to)?, route.distance)?;
        }

        let mut fleet = Fleet::new();
        for truck in &self.trucks {
            fleet.add_truck(&truck.name, truck.capacity, lookup(&truck.location)?);
        }

        let mut schedule = DeliverySchedule::new();
        for plan in &self.days {
            for delivery in &plan.deliveries {
                schedule.add_request(
                    plan.day,
                    RouteRequest {
                        from: lookup(&delivery.from)?,
                        to: lookup(&delivery.to)?,
                        amount: delivery.amount,
                    },
                );
            }
        }

        let hub = lookup(&self.hub)?;
        Ok(SimWorld::new(network, fleet, schedule, hub))
    }

    /// Built-in demo scenario: six cities around a central hub, two trucks,
    /// three scheduled days. Lakeside starts below its minimum and day two
    /// overruns Westbrook's capacity, so both replenishment and overflow
    /// rerouting are exercised out of the box.
    pub fn demo() -> Self {
        let city = |name: &str, min, max, current| CityConfig {
            name: name.to_string(),
            min_stock: min,
            max_stock: max,
            current_stock: current,
        };
        let route = |from: &str, to: &str, distance| RouteConfig {
            from: from.to_string(),
            to: to.to_string(),
            distance,
        };
        let delivery = |from: &str, to: &str, amount| DeliveryConfig {
            from: from.to_string(),
            to: to.to_string(),
            amount,
        };

        Scenario {
            cities: vec![
                city("Central", 0, 1000, 800),
                city("Northport", 100, 300, 150),
                city("Eastvale", 50, 200, 80),
                city("Southmere", 100, 250, 90),
                city("Westbrook", 80, 220, 200),
                city("Lakeside", 60, 180, 30),
            ],
            routes: vec![
                route("Central", "Northport", 100),
                route("Central", "Eastvale", 120),
                route("Central", "Southmere", 90),
                route("Central", "Westbrook", 140),
                route("Central", "Lakeside", 200),
                route("Northport", "Eastvale", 60),
                route("Southmere", "Westbrook", 70),
                route("Eastvale", "Lakeside", 80),
                route("Southmere", "Lakeside", 110),
            ],
            trucks: vec![
                TruckConfig {
                    name: "Hauler One".to_string(),
                    capacity: 50,
                    location: "Central".to_string(),
                },
                TruckConfig {
                    name: "Hauler Two".to_string(),
                    capacity: 80,
                    location: "Southmere".to_string(),
                },
            ],
            hub: "Central".to_string(),
            days: vec![
                DayPlanConfig {
                    day: 1,
                    deliveries: vec![
                        delivery("Central", "Northport", 40),
                        delivery("Westbrook", "Southmere", 30),
                        delivery("Central", "Eastvale", 50),
                    ],
                },
                DayPlanConfig {
                    day: 2,
                    deliveries: vec![
                        delivery("Northport", "Lakeside", 30),
                        delivery("Central", "Westbrook", 60),
                    ],
                },
                DayPlanConfig {
                    day: 3,
                    deliveries: vec![
                        delivery("Eastvale", "Lakeside", 25),
                        delivery("Central", "Southmere", 60),
                    ],
                },
            ],
        }
    }
}

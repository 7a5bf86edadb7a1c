//! Main simulation world and the daily scheduling loop
//!
//! `SimWorld` owns the two shared mutable stores (city network, fleet) for
//! the lifetime of a run; every operation mutates state through them.

use log::{debug, info};
use std::collections::BTreeMap;

use super::events::SimEvent;
use super::fleet::Fleet;
use super::network::CityNetwork;
use super::types::{CityId, RouteRequest, REPLENISH_BATCH};

/// Fixed multi-day delivery plan, day number to ordered request list
#[derive(Debug, Clone, Default)]
pub struct DeliverySchedule {
    days: BTreeMap<u32, Vec<RouteRequest>>,
}

impl DeliverySchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_request(&mut self, day: u32, request: RouteRequest) {
        self.days.entry(day).or_default().push(request);
    }

    /// Requests for one day, in schedule order
    pub fn day_requests(&self, day: u32) -> &[RouteRequest] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All scheduled day numbers, ascending
    pub fn days(&self) -> Vec<u32> {
        self.days.keys().copied().collect()
    }
}

/// The main simulation world
pub struct SimWorld {
    /// City registry and route graph
    pub network: CityNetwork,

    /// Truck registry
    pub fleet: Fleet,

    /// Fixed daily delivery plan
    pub schedule: DeliverySchedule,

    /// City that sources all replenishment deliveries
    pub hub: CityId,

    /// Structured outcomes accumulated over the run
    events: Vec<SimEvent>,
}

impl SimWorld {
    pub fn new(
        network: CityNetwork,
        fleet: Fleet,
        schedule: DeliverySchedule,
        hub: CityId,
    ) -> Self {
        Self {
            network,
            fleet,
            schedule,
            hub,
            events: Vec::new(),
        }
    }

    /// Events recorded so far, in emission order
    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }

    /// Drains the accumulated events
    pub fn take_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn record(&mut self, event: SimEvent) {
        debug!("event: {event:?}");
        self.events.push(event);
    }

    /// Executes one day's fixed delivery list in order.
    ///
    /// Requests with no qualifying truck or insufficient origin stock are
    /// skipped and reported; a failure never stops the rest of the day.
    pub fn run_day(&mut self, day: u32) {
        let requests = self.schedule.day_requests(day).to_vec();
        info!("day {day}: {} scheduled deliveries", requests.len());

        for RouteRequest { from, to, amount } in requests {
            let Some(truck) = self.fleet.pick_truck(&self.network, from, amount) else {
                self.record(SimEvent::TruckUnavailable { from, amount });
                continue;
            };

            let origin_stock = self
                .network
                .city(from)
                .map_or(0, |city| city.current_stock);
            if origin_stock < amount {
                self.record(SimEvent::InsufficientStock { city: from, amount });
                continue;
            }

            if let Err(err) = self.execute_delivery(truck, from, to, amount) {
                debug!("day {day}: delivery {from:?} -> {to:?} not completed: {err}");
            }
        }
    }

    /// Tops up every city sitting below its minimum stock with batched
    /// deliveries from the hub.
    ///
    /// Batches are capped at [`REPLENISH_BATCH`] units. Replenishment for a
    /// city is abandoned as soon as no truck qualifies, the hub cannot cover
    /// a full batch, or the city has no headroom left.
    pub fn meet_minimums(&mut self) {
        for city_id in self.network.city_ids() {
            let Some(city) = self.network.city(city_id) else {
                continue;
            };
            let mut deficit = city.deficit();
            if deficit == 0 {
                continue;
            }

            self.record(SimEvent::ReplenishmentNeeded {
                city: city_id,
                deficit,
            });

            while deficit > 0 {
                let batch = deficit.min(REPLENISH_BATCH);

                let Some(truck) = self.fleet.pick_truck(&self.network, self.hub, batch) else {
                    self.record(SimEvent::TruckUnavailable {
                        from: self.hub,
                        amount: batch,
                    });
                    break;
                };

                let hub_stock = self
                    .network
                    .city(self.hub)
                    .map_or(0, |hub| hub.current_stock);
                let headroom = self
                    .network
                    .city(city_id)
                    .map_or(0, |city| city.spare_capacity());
                let final_amount = batch.min(hub_stock).min(headroom);

                if hub_stock < batch || headroom == 0 {
                    debug!(
                        "abandoning replenishment of {city_id:?}: hub stock {hub_stock}, headroom {headroom}"
                    );
                    break;
                }

                if self.deliver(truck, self.hub, city_id, final_amount).is_err() {
                    break;
                }
                deficit -= final_amount;
            }
        }
    }

    /// Runs every scheduled day in order, replenishing after each, then
    /// reports the final stock of every city.
    pub fn run_simulation(&mut self) {
        for day in self.schedule.days() {
            self.run_day(day);
            self.meet_minimums();
        }

        let statuses: Vec<SimEvent> = self
            .network
            .cities()
            .map(|city| SimEvent::FinalStatus {
                city: city.id,
                current: city.current_stock,
                min: city.min_stock,
                max: city.max_stock,
            })
            .collect();
        for status in statuses {
            self.record(status);
        }
    }
}

//! City network graph for routing
//!
//! Holds the static weighted route graph together with the mutable per-city
//! stock table. All stock mutation funnels through this registry.

use anyhow::{Context, Result};
use petgraph::algo::astar;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::BTreeMap;
use std::collections::HashMap;

use super::types::{CityId, Distance, StockAmount};

/// A city with its stock floor, ceiling, and current level
#[derive(Debug, Clone)]
pub struct City {
    pub id: CityId,
    pub name: String,
    /// Replenishment floor
    pub min_stock: StockAmount,
    /// Capacity ceiling
    pub max_stock: StockAmount,
    pub current_stock: StockAmount,
}

impl City {
    /// Room left before the city hits its capacity ceiling
    pub fn spare_capacity(&self) -> StockAmount {
        (self.max_stock - self.current_stock).max(0)
    }

    /// Units short of the replenishment floor
    pub fn deficit(&self) -> StockAmount {
        (self.min_stock - self.current_stock).max(0)
    }
}

/// A computed route between two cities
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePlan {
    /// Cities visited, origin and destination inclusive
    pub cities: Vec<CityId>,
    /// Summed edge distances along the route
    pub cost: Distance,
}

impl RoutePlan {
    /// Number of cities on the route, endpoints included
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

/// The logistics network graph
///
/// Cities live in a `BTreeMap` so iteration (and every tie-break derived from
/// it) runs in id-ascending order, keeping runs reproducible.
#[derive(Default)]
pub struct CityNetwork {
    /// The underlying petgraph directed graph; symmetric routes are inserted
    /// as one edge per direction
    graph: DiGraph<CityId, Distance>,

    /// Maps city IDs to their node indices in the graph
    city_to_node: HashMap<CityId, NodeIndex>,

    /// City registry, keyed in ascending id order
    cities: BTreeMap<CityId, City>,
}

impl CityNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a city and returns its id
    pub fn add_city(
        &mut self,
        name: impl Into<String>,
        min_stock: StockAmount,
        max_stock: StockAmount,
        current_stock: StockAmount,
    ) -> CityId {
        let id = CityId(self.cities.len());
        let node = self.graph.add_node(id);
        self.city_to_node.insert(id, node);
        self.cities.insert(
            id,
            City {
                id,
                name: name.into(),
                min_stock,
                max_stock,
                current_stock,
            },
        );
        id
    }

    /// Adds a symmetric route between two registered cities
    pub fn add_route(&mut self, a: CityId, b: CityId, distance: Distance) -> Result<()> {
        let node_a = *self
            .city_to_node
            .get(&a)
            .with_context(|| format!("city {a:?} not registered"))?;
        let node_b = *self
            .city_to_node
            .get(&b)
            .with_context(|| format!("city {b:?} not registered"))?;

        self.graph.add_edge(node_a, node_b, distance);
        self.graph.add_edge(node_b, node_a, distance);
        Ok(())
    }

    pub fn city(&self, id: CityId) -> Option<&City> {
        self.cities.get(&id)
    }

    pub fn city_mut(&mut self, id: CityId) -> Option<&mut City> {
        self.cities.get_mut(&id)
    }

    /// All cities in ascending id order
    pub fn cities(&self) -> impl Iterator<Item = &City> {
        self.cities.values()
    }

    /// All city ids in ascending order
    pub fn city_ids(&self) -> Vec<CityId> {
        self.cities.keys().copied().collect()
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Cities directly reachable from `city` with their edge distances,
    /// sorted by id for deterministic downstream ranking
    pub fn neighbors(&self, city: CityId) -> Vec<(CityId, Distance)> {
        let Some(&node) = self.city_to_node.get(&city) else {
            return Vec::new();
        };

        let mut out: Vec<(CityId, Distance)> = self
            .graph
            .edges(node)
            .map(|edge| (self.graph[edge.target()], *edge.weight()))
            .collect();
        out.sort_unstable();
        out
    }

    /// Finds the cheapest route between two cities.
    ///
    /// Uniform-cost search: A* with a null heuristic, so the frontier is
    /// ordered purely by accumulated edge distance (Dijkstra-equivalent).
    /// Returns `None` when the cities are disconnected or unknown.
    pub fn shortest_path(&self, start: CityId, goal: CityId) -> Option<RoutePlan> {
        if start == goal {
            self.city_to_node.get(&start)?;
            return Some(RoutePlan {
                cities: vec![start],
                cost: 0,
            });
        }

        let start_node = *self.city_to_node.get(&start)?;
        let goal_node = *self.city_to_node.get(&goal)?;

        let (cost, node_path) = astar(
            &self.graph,
            start_node,
            |node| node == goal_node,
            |edge| *edge.weight(),
            |_| 0, // Null heuristic = Dijkstra
        )?;

        let cities = node_path.iter().map(|node| self.graph[*node]).collect();
        Some(RoutePlan { cities, cost })
    }
}

//! Path finder and truck selector validation

use freight_sim::simulation::{CityId, CityNetwork, Fleet};

/// Diamond graph: a-b-d is cheap (cost 2), a-c-d is expensive (cost 6)
fn diamond_network() -> (CityNetwork, [CityId; 4]) {
    let mut network = CityNetwork::new();
    let a = network.add_city("a", 0, 100, 50);
    let b = network.add_city("b", 0, 100, 50);
    let c = network.add_city("c", 0, 100, 50);
    let d = network.add_city("d", 0, 100, 50);

    network.add_route(a, b, 1).unwrap();
    network.add_route(b, d, 1).unwrap();
    network.add_route(a, c, 5).unwrap();
    network.add_route(c, d, 1).unwrap();

    (network, [a, b, c, d])
}

#[test]
fn test_shortest_path_picks_minimum_cost() {
    let (network, [a, b, _, d]) = diamond_network();

    let plan = network.shortest_path(a, d).expect("a and d are connected");
    assert_eq!(plan.cities, vec![a, b, d]);
    assert_eq!(plan.cost, 2);
}

#[test]
fn test_shortest_path_prefers_cost_over_hop_count() {
    let mut network = CityNetwork::new();
    let a = network.add_city("a", 0, 100, 0);
    let b = network.add_city("b", 0, 100, 0);
    let c = network.add_city("c", 0, 100, 0);

    // Direct edge is more expensive than the two-hop detour
    network.add_route(a, b, 10).unwrap();
    network.add_route(a, c, 1).unwrap();
    network.add_route(c, b, 1).unwrap();

    let plan = network.shortest_path(a, b).expect("connected");
    assert_eq!(plan.cities, vec![a, c, b]);
    assert_eq!(plan.cost, 2);
}

#[test]
fn test_shortest_path_same_city() {
    let (network, [a, ..]) = diamond_network();

    let plan = network.shortest_path(a, a).expect("trivial path exists");
    assert_eq!(plan.cities, vec![a]);
    assert_eq!(plan.cost, 0);
}

#[test]
fn test_shortest_path_symmetric_routes() {
    let (network, [a, b, _, d]) = diamond_network();

    let forward = network.shortest_path(a, d).expect("connected");
    let backward = network.shortest_path(d, a).expect("connected");
    assert_eq!(backward.cities, vec![d, b, a]);
    assert_eq!(backward.cost, forward.cost);
}

#[test]
fn test_shortest_path_disconnected_returns_none() {
    let mut network = CityNetwork::new();
    let a = network.add_city("a", 0, 100, 0);
    let b = network.add_city("b", 0, 100, 0);
    let island = network.add_city("island", 0, 100, 0);
    network.add_route(a, b, 1).unwrap();

    assert!(network.shortest_path(a, island).is_none());
}

#[test]
fn test_pick_truck_same_city_smallest_load() {
    let (network, [a, ..]) = diamond_network();

    let mut fleet = Fleet::new();
    let heavy = fleet.add_truck("heavy", 100, a);
    let light = fleet.add_truck("light", 100, a);
    fleet.truck_mut(heavy).unwrap().load = 40;
    fleet.truck_mut(light).unwrap().load = 10;

    assert_eq!(fleet.pick_truck(&network, a, 20), Some(light));
}

#[test]
fn test_pick_truck_respects_spare_capacity() {
    let (network, [a, ..]) = diamond_network();

    let mut fleet = Fleet::new();
    let small = fleet.add_truck("small", 30, a);
    let big = fleet.add_truck("big", 100, a);
    fleet.truck_mut(small).unwrap().load = 25;

    // Small truck has the lower load but only 5 spare
    assert_eq!(fleet.pick_truck(&network, a, 20), Some(big));
}

#[test]
fn test_pick_truck_adjacent_ranked_by_load_plus_distance() {
    let mut network = CityNetwork::new();
    let hub = network.add_city("hub", 0, 100, 0);
    let near = network.add_city("near", 0, 100, 0);
    let far = network.add_city("far", 0, 100, 0);
    network.add_route(hub, near, 2).unwrap();
    network.add_route(hub, far, 10).unwrap();

    let mut fleet = Fleet::new();
    let idle_far = fleet.add_truck("idle_far", 100, far);
    let loaded_near = fleet.add_truck("loaded_near", 100, near);
    fleet.truck_mut(loaded_near).unwrap().load = 5;

    // loaded_near ranks 5 + 2 = 7, idle_far ranks 0 + 10 = 10
    assert_eq!(fleet.pick_truck(&network, hub, 20), Some(loaded_near));
    let _ = idle_far;
}

#[test]
fn test_pick_truck_same_city_tie_resolves_to_lowest_id() {
    let (network, [a, ..]) = diamond_network();

    let mut fleet = Fleet::new();
    let first = fleet.add_truck("first", 100, a);
    let second = fleet.add_truck("second", 100, a);
    // Identical loads at the origin leave only the id to decide
    fleet.truck_mut(first).unwrap().load = 10;
    fleet.truck_mut(second).unwrap().load = 10;

    assert_eq!(fleet.pick_truck(&network, a, 20), Some(first));
}

#[test]
fn test_pick_truck_adjacent_tie_resolves_to_lowest_id() {
    let mut network = CityNetwork::new();
    let hub = network.add_city("hub", 0, 100, 0);
    let east = network.add_city("east", 0, 100, 0);
    let west = network.add_city("west", 0, 100, 0);
    network.add_route(hub, east, 5).unwrap();
    network.add_route(hub, west, 5).unwrap();

    let mut fleet = Fleet::new();
    let first = fleet.add_truck("first", 100, east);
    let second = fleet.add_truck("second", 100, west);
    // Equal loads at equal edge distances tie on both ranking keys
    fleet.truck_mut(first).unwrap().load = 10;
    fleet.truck_mut(second).unwrap().load = 10;

    assert_eq!(fleet.pick_truck(&network, hub, 20), Some(first));
}

#[test]
fn test_pick_truck_ignores_non_adjacent() {
    let mut network = CityNetwork::new();
    let a = network.add_city("a", 0, 100, 0);
    let b = network.add_city("b", 0, 100, 0);
    let c = network.add_city("c", 0, 100, 0);
    // c is two hops from a
    network.add_route(a, b, 1).unwrap();
    network.add_route(b, c, 1).unwrap();

    let mut fleet = Fleet::new();
    fleet.add_truck("remote", 100, c);

    assert_eq!(fleet.pick_truck(&network, a, 10), None);
}

#[test]
fn test_pick_truck_none_when_all_full() {
    let (network, [a, ..]) = diamond_network();

    let mut fleet = Fleet::new();
    let truck = fleet.add_truck("full", 50, a);
    fleet.truck_mut(truck).unwrap().load = 50;

    assert_eq!(fleet.pick_truck(&network, a, 1), None);
}

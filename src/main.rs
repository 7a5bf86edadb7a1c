use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use freight_sim::scenario::Scenario;
use freight_sim::simulation::{SimEvent, SimWorld};

#[derive(Parser)]
#[command(name = "freight_sim")]
#[command(about = "Logistics network simulation")]
struct Cli {
    /// Path to a JSON scenario file; the built-in demo runs when omitted
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Emit the event stream as JSON lines instead of the text report
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let scenario = match &cli.scenario {
        Some(path) => Scenario::load(path)?,
        None => Scenario::demo(),
    };
    let mut world = scenario.build()?;

    world.run_simulation();
    if cli.json {
        render_json(&mut world)?;
    } else {
        render_report(&mut world);
    }
    Ok(())
}

/// Emits one JSON object per event, for machine consumers.
fn render_json(world: &mut SimWorld) -> Result<()> {
    for event in world.take_events() {
        println!("{}", serde_json::to_string(&event)?);
    }
    Ok(())
}

/// Renders the structured event stream as text.
///
/// All formatting lives here; the engine itself only produces events.
fn render_report(world: &mut SimWorld) {
    let events = world.take_events();

    let city_name = |id| {
        world
            .network
            .city(id)
            .map(|city| city.name.as_str())
            .unwrap_or("?")
    };
    let truck_name = |id| {
        world
            .fleet
            .truck(id)
            .map(|truck| truck.name.as_str())
            .unwrap_or("?")
    };

    println!("=== Freight Simulation Report ===");
    for event in &events {
        match event {
            SimEvent::DeliveryCompleted {
                truck,
                from,
                to,
                amount,
                path,
            } => {
                let route: Vec<&str> = path.iter().map(|city| city_name(*city)).collect();
                println!(
                    "  {} delivered {} units {} -> {} via [{}]",
                    truck_name(*truck),
                    amount,
                    city_name(*from),
                    city_name(*to),
                    route.join(", ")
                );
            }
            SimEvent::DeliveryFailedNoRoute { from, to } => {
                println!(
                    "  no route from {} to {}, delivery dropped",
                    city_name(*from),
                    city_name(*to)
                );
            }
            SimEvent::CapacityExceeded { city, remainder } => {
                println!(
                    "  {} is at capacity, rerouting {} units",
                    city_name(*city),
                    remainder
                );
            }
            SimEvent::ReplenishmentNeeded { city, deficit } => {
                println!(
                    "  {} is {} units below minimum, replenishing",
                    city_name(*city),
                    deficit
                );
            }
            SimEvent::TruckUnavailable { from, amount } => {
                println!(
                    "  no truck available at {} for {} units",
                    city_name(*from),
                    amount
                );
            }
            SimEvent::InsufficientStock { city, amount } => {
                println!(
                    "  {} lacks the {} units requested, route skipped",
                    city_name(*city),
                    amount
                );
            }
            SimEvent::NoAlternativeDestination {
                from,
                to,
                remainder,
            } => {
                println!(
                    "  no alternative near {} can take {} units overflowing from {}",
                    city_name(*from),
                    remainder,
                    city_name(*to)
                );
            }
            SimEvent::FinalStatus { .. } => {}
        }
    }

    println!();
    println!("--- Final stock ---");
    for event in &events {
        if let SimEvent::FinalStatus {
            city,
            current,
            min,
            max,
        } = event
        {
            println!(
                "  {:<12} {:>5} (min {}, max {})",
                city_name(*city),
                current,
                min,
                max
            );
        }
    }
}

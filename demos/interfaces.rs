//! Vehicles and tasks driven through their trait interfaces.
//!
//! Run with: cargo run --example interfaces

use patternkit::prelude::*;
use patternkit::task::{EmailTask, ReportGenerationTask};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let service = VehicleService::new();
    let fleet = vec![VehicleKind::Car.build(), VehicleKind::Bike.build()];

    println!("--- Vehicles ---");
    for line in service.start_all(&fleet) {
        println!("{}", line);
    }
    for line in service.stop_all(&fleet) {
        println!("{}", line);
    }

    let truck = vehicle_for("truck")?;
    println!("{}", service.start(truck.as_ref()));
    println!("{}", service.stop(truck.as_ref()));

    println!("\n--- Tasks ---");
    let tasks: Vec<Box<dyn Task>> = vec![
        Box::new(EmailTask::new("student@example.com", "Hello", "Welcome!")),
        Box::new(ReportGenerationTask::new("Weekly Sales")),
    ];

    for line in TaskProcessor::new().process_all(&tasks) {
        println!("{}", line);
    }

    Ok(())
}

//! Console walkthrough of configuration, factory, observer and strategy.
//!
//! This example shows how to:
//! - Build the application configuration once and pass it around
//! - Create vehicles from textual keys
//! - Broadcast task-status changes to several channels
//! - Swap sort strategies at runtime
//!
//! Run with: cargo run --example design_patterns
//! Set `RUST_LOG=patternkit=debug` to see the library's own logging.

use patternkit::prelude::*;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = ConfigStore::builder()
        .with_env_overrides("PATTERNKIT", "__")
        .build()?;

    show_config(&config);
    show_factory()?;
    show_notifications();
    show_sorting(&config)?;

    Ok(())
}

fn show_config(config: &ConfigStore) {
    println!("=== Configuration ===");
    let cfg = config.get();
    println!("App: {} | Version: {}\n", cfg.app_name, cfg.version);
}

fn show_factory() -> Result<()> {
    println!("=== Factory ===");
    for key in ["car", "bike"] {
        let vehicle = vehicle_for(key)?;
        println!("{}", vehicle.drive());
    }

    if let Err(e) = vehicle_for("hovercraft") {
        println!("hovercraft -> {}", e);
    }
    println!();
    Ok(())
}

fn show_notifications() {
    println!("=== Observer ===");
    let hub = NotificationHub::new();
    let email = Arc::new(EmailNotifier::new());
    let sms = Arc::new(SmsNotifier::new());
    let push = Arc::new(PushNotifier::new());

    hub.add_observer(email.clone());
    hub.add_observer(sms.clone());
    hub.add_observer(push.clone());

    for status in ["In Progress", "Completed"] {
        let report = hub.set_status(status);
        println!("'{}' delivered to {} subscribers", status, report.delivered);
    }

    for line in email
        .messages()
        .into_iter()
        .chain(sms.messages())
        .chain(push.messages())
    {
        println!("  {}", line);
    }
    println!();
}

fn show_sorting(config: &ConfigStore) -> Result<()> {
    println!("=== Strategy ===");
    let data = [34, 7, 23, 32, 5, 62];
    let mut sorter = SortContext::new();

    // Configured strategy first, then the other one.
    let configured = config.get().sort_strategy;
    let other = match configured {
        SortKind::Quick => SortKind::Merge,
        SortKind::Merge => SortKind::Quick,
    };

    for kind in [configured, other] {
        sorter.set_strategy(kind.strategy());
        let mut copy = data;
        sorter.execute_sort(&mut copy)?;
        println!("{:?} sorted using {}", copy, kind);
    }

    Ok(())
}

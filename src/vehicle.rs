//! Vehicles and the string-keyed factory that builds them.
//!
//! ```rust
//! use patternkit::vehicle::{VehicleService, vehicle_for};
//!
//! let car = vehicle_for("car").unwrap();
//! assert_eq!(car.drive(), "Driving a Car");
//!
//! let service = VehicleService::new();
//! assert_eq!(service.start(car.as_ref()), "Car engine started");
//!
//! assert!(vehicle_for("spaceship").is_err());
//! ```

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Anything that can be driven and has an engine.
///
/// Each operation returns the line describing what it did.
pub trait Vehicle: Send + Sync {
    /// Which kind of vehicle this is.
    fn kind(&self) -> VehicleKind;

    /// Drive the vehicle.
    fn drive(&self) -> String;

    /// Start the engine.
    fn start_engine(&self) -> String {
        format!("{} engine started", self.kind().label())
    }

    /// Stop the engine.
    fn stop_engine(&self) -> String {
        format!("{} engine stopped", self.kind().label())
    }
}

/// A car.
#[derive(Debug, Clone, Copy, Default)]
pub struct Car;

impl Vehicle for Car {
    fn kind(&self) -> VehicleKind {
        VehicleKind::Car
    }

    fn drive(&self) -> String {
        "Driving a Car".to_string()
    }
}

/// A motorbike.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bike;

impl Vehicle for Bike {
    fn kind(&self) -> VehicleKind {
        VehicleKind::Bike
    }

    fn drive(&self) -> String {
        "Riding a Bike".to_string()
    }
}

/// A truck.
#[derive(Debug, Clone, Copy, Default)]
pub struct Truck;

impl Vehicle for Truck {
    fn kind(&self) -> VehicleKind {
        VehicleKind::Truck
    }

    fn drive(&self) -> String {
        "Driving a Truck".to_string()
    }
}

/// The vehicle types the factory knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleKind {
    /// [`Car`]
    Car,
    /// [`Bike`]
    Bike,
    /// [`Truck`]
    Truck,
}

impl VehicleKind {
    /// Build a vehicle of this kind.
    pub fn build(self) -> Box<dyn Vehicle> {
        match self {
            Self::Car => Box::new(Car),
            Self::Bike => Box::new(Bike),
            Self::Truck => Box::new(Truck),
        }
    }

    /// Capitalised name used in output lines.
    pub fn label(self) -> &'static str {
        match self {
            Self::Car => "Car",
            Self::Bike => "Bike",
            Self::Truck => "Truck",
        }
    }
}

impl FromStr for VehicleKind {
    type Err = Error;

    /// Case-insensitive; unknown keys are [`Error::InvalidArgument`].
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "car" => Ok(Self::Car),
            "bike" => Ok(Self::Bike),
            "truck" => Ok(Self::Truck),
            _ => Err(Error::invalid_argument(format!(
                "unknown vehicle type: {}",
                s
            ))),
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Build a vehicle from its textual key.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `key` is not `car`, `bike` or `truck`.
pub fn vehicle_for(key: &str) -> Result<Box<dyn Vehicle>> {
    let kind: VehicleKind = key.parse()?;
    tracing::debug!(%kind, "vehicle built");
    Ok(kind.build())
}

/// Starts and stops vehicles, logging every action.
#[derive(Debug, Clone, Copy, Default)]
pub struct VehicleService;

impl VehicleService {
    /// Create a service.
    pub fn new() -> Self {
        Self
    }

    /// Start one vehicle.
    pub fn start(&self, vehicle: &dyn Vehicle) -> String {
        let line = vehicle.start_engine();
        tracing::info!(vehicle = %vehicle.kind(), "{}", line);
        line
    }

    /// Stop one vehicle.
    pub fn stop(&self, vehicle: &dyn Vehicle) -> String {
        let line = vehicle.stop_engine();
        tracing::info!(vehicle = %vehicle.kind(), "{}", line);
        line
    }

    /// Start every vehicle, in order.
    pub fn start_all(&self, vehicles: &[Box<dyn Vehicle>]) -> Vec<String> {
        vehicles.iter().map(|v| self.start(v.as_ref())).collect()
    }

    /// Stop every vehicle, in order.
    pub fn stop_all(&self, vehicles: &[Box<dyn Vehicle>]) -> Vec<String> {
        vehicles.iter().map(|v| self.stop(v.as_ref())).collect()
    }
}

//! Ride status enum, ride records, and the demo ride fixtures shown on the
//! dashboard.
//!
//! Ride booking is not live pre-launch; the dashboard serves a fixed set of
//! demo rides so waitlisted users can see what the product will look like.

use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Lifecycle status of a ride.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RideStatus {
    DriverAssigned,
    EnRoute,
    PetPickedUp,
    InTransit,
    Delivered,
    Completed,
}

impl RideStatus {
    /// Parse from the wire / database value.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            "driver_assigned" => Ok(Self::DriverAssigned),
            "en_route" => Ok(Self::EnRoute),
            "pet_picked_up" => Ok(Self::PetPickedUp),
            "in_transit" => Ok(Self::InTransit),
            "delivered" => Ok(Self::Delivered),
            "completed" => Ok(Self::Completed),
            other => Err(CoreError::Validation(format!(
                "Unknown ride status '{other}'"
            ))),
        }
    }

    /// Wire / database value.
    pub fn name(self) -> &'static str {
        match self {
            Self::DriverAssigned => "driver_assigned",
            Self::EnRoute => "en_route",
            Self::PetPickedUp => "pet_picked_up",
            Self::InTransit => "in_transit",
            Self::Delivered => "delivered",
            Self::Completed => "completed",
        }
    }

    /// Human-readable label shown next to a ride.
    pub fn label(self) -> &'static str {
        match self {
            Self::DriverAssigned => "Driver assigned",
            Self::EnRoute => "Driver en route",
            Self::PetPickedUp => "Pet picked up",
            Self::InTransit => "In transit",
            Self::Delivered => "Delivered",
            Self::Completed => "Completed",
        }
    }

    /// Emoji paired with the status label.
    pub fn emoji(self) -> &'static str {
        match self {
            Self::DriverAssigned => "🐾",
            Self::EnRoute => "🚗",
            Self::PetPickedUp => "🐶",
            Self::InTransit => "🚕",
            Self::Delivered => "🎉",
            Self::Completed => "✅",
        }
    }

    /// Whether the ride is currently in progress (between driver assignment
    /// and delivery).
    pub fn is_active(self) -> bool {
        matches!(
            self,
            Self::DriverAssigned | Self::EnRoute | Self::PetPickedUp | Self::InTransit
        )
    }
}

// ---------------------------------------------------------------------------
// Ride record
// ---------------------------------------------------------------------------

/// A single ride as shown on the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct Ride {
    pub id: &'static str,
    pub pickup_location: &'static str,
    pub dropoff_location: &'static str,
    pub pickup_time: Timestamp,
    pub status: RideStatus,
    pub driver_name: Option<&'static str>,
    pub driver_avatar: Option<&'static str>,
    pub car_model: Option<&'static str>,
    pub license_plate: Option<&'static str>,
    pub pet_notes: Option<&'static str>,
    /// Star rating left after a completed ride (1-5).
    pub rating: Option<i16>,
    pub created_at: Timestamp,
}

/// Rides grouped the way the dashboard presents them.
#[derive(Debug, Clone)]
pub struct RideGroups {
    /// The first ride with an active status, if any.
    pub current: Option<Ride>,
    /// Rides waiting on a driver.
    pub upcoming: Vec<Ride>,
    /// Finished rides.
    pub past: Vec<Ride>,
}

/// Group rides into the dashboard's current / upcoming / past buckets.
pub fn group_rides(rides: &[Ride]) -> RideGroups {
    RideGroups {
        current: rides.iter().find(|r| r.status.is_active()).cloned(),
        upcoming: rides
            .iter()
            .filter(|r| r.status == RideStatus::DriverAssigned)
            .cloned()
            .collect(),
        past: rides
            .iter()
            .filter(|r| r.status == RideStatus::Completed)
            .cloned()
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Demo fixtures
// ---------------------------------------------------------------------------

fn demo_ts(year: i32, month: u32, day: u32, hour: u32, min: u32) -> Timestamp {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0)
        .single()
        .expect("demo timestamps are valid")
}

/// The fixed demo rides served to every dashboard.
pub fn demo_rides() -> Vec<Ride> {
    vec![
        Ride {
            id: "1",
            pickup_location: "123 Main St, Downtown",
            dropoff_location: "Pet Paradise Vet, Uptown",
            pickup_time: demo_ts(2024, 1, 25, 14, 30),
            status: RideStatus::InTransit,
            driver_name: Some("Sarah Johnson"),
            driver_avatar: Some("/professional-woman-avatar.png"),
            car_model: Some("Honda CR-V"),
            license_plate: Some("ABC-123"),
            pet_notes: Some("Friendly golden retriever, loves treats"),
            rating: None,
            created_at: demo_ts(2024, 1, 25, 13, 0),
        },
        Ride {
            id: "2",
            pickup_location: "456 Oak Ave, Midtown",
            dropoff_location: "Happy Paws Grooming",
            pickup_time: demo_ts(2024, 1, 26, 10, 0),
            status: RideStatus::DriverAssigned,
            driver_name: Some("Mike Chen"),
            driver_avatar: Some("/professional-man-avatar.png"),
            car_model: Some("Toyota Prius"),
            license_plate: Some("XYZ-789"),
            pet_notes: Some("Small cat, gets nervous in cars"),
            rating: None,
            created_at: demo_ts(2024, 1, 24, 16, 0),
        },
        Ride {
            id: "3",
            pickup_location: "789 Pine St, Westside",
            dropoff_location: "Central Park Dog Run",
            pickup_time: demo_ts(2024, 1, 15, 9, 15),
            status: RideStatus::Completed,
            driver_name: Some("Emma Wilson"),
            driver_avatar: None,
            car_model: None,
            license_plate: None,
            pet_notes: Some("Energetic husky, needs secure carrier"),
            rating: Some(5),
            created_at: demo_ts(2024, 1, 14, 20, 30),
        },
    ]
}

//! Handlers for the dashboard widgets.
//!
//! Pre-launch, the rides widget serves fixed demo data and the profile
//! falls back to a demo identity when the caller has no waitlist row yet.
//! All endpoints require authentication via [`AuthUser`].

use axum::extract::State;
use axum::Json;
use chrono::{TimeZone, Utc};
use petride_core::ride::{demo_rides, group_rides, Ride, RideStatus};
use petride_core::types::Timestamp;
use petride_db::repositories::WaitlistRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Demo profile
// ---------------------------------------------------------------------------

const DEMO_NAME: &str = "Jessica Chen";
const DEMO_EMAIL: &str = "jessica@petride.com";
const DEMO_PHONE: &str = "+1 (555) 123-4567";
const DEMO_CITY: &str = "San Francisco";
const DEMO_PET_TYPE: &str = "dog";

/// Pet names are not collected yet; every profile shows the demo pet.
const DEMO_PET_NAME: &str = "Rover";

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Profile payload for the dashboard header.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub pet_type: String,
    pub pet_name: String,
    pub member_since: Timestamp,
}

/// A single ride with its display status resolved.
#[derive(Debug, Serialize)]
pub struct RideItem {
    pub id: &'static str,
    pub pickup_location: &'static str,
    pub dropoff_location: &'static str,
    pub pickup_time: Timestamp,
    pub status: RideStatus,
    pub status_label: &'static str,
    pub status_emoji: &'static str,
    pub driver_name: Option<&'static str>,
    pub driver_avatar: Option<&'static str>,
    pub car_model: Option<&'static str>,
    pub license_plate: Option<&'static str>,
    pub pet_notes: Option<&'static str>,
    pub rating: Option<i16>,
    pub created_at: Timestamp,
}

/// Rides grouped the way the dashboard renders them.
#[derive(Debug, Serialize)]
pub struct RidesResponse {
    pub current: Option<RideItem>,
    pub upcoming: Vec<RideItem>,
    pub past: Vec<RideItem>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/dashboard/profile
///
/// The caller's waitlist row shaped as a profile, or the demo profile when
/// no row exists yet (the caller's email still wins over the demo email).
pub async fn profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<ProfileResponse>> {
    let response = match WaitlistRepo::find_by_user_id(&state.pool, auth_user.user_id).await? {
        Some(entry) => ProfileResponse {
            name: entry.name,
            email: entry.email,
            phone: entry.phone,
            city: entry.city,
            pet_type: entry.pet_type,
            pet_name: DEMO_PET_NAME.to_string(),
            member_since: entry.created_at,
        },
        None => ProfileResponse {
            name: DEMO_NAME.to_string(),
            email: if auth_user.email.is_empty() {
                DEMO_EMAIL.to_string()
            } else {
                auth_user.email
            },
            phone: DEMO_PHONE.to_string(),
            city: DEMO_CITY.to_string(),
            pet_type: DEMO_PET_TYPE.to_string(),
            pet_name: DEMO_PET_NAME.to_string(),
            member_since: demo_member_since(),
        },
    };
    Ok(Json(response))
}

/// GET /api/v1/dashboard/rides
///
/// The demo ride list, grouped into current / upcoming / past.
pub async fn rides(_auth_user: AuthUser) -> Json<RidesResponse> {
    let groups = group_rides(&demo_rides());
    Json(RidesResponse {
        current: groups.current.map(ride_item),
        upcoming: groups.upcoming.into_iter().map(ride_item).collect(),
        past: groups.past.into_iter().map(ride_item).collect(),
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn ride_item(ride: Ride) -> RideItem {
    RideItem {
        id: ride.id,
        pickup_location: ride.pickup_location,
        dropoff_location: ride.dropoff_location,
        pickup_time: ride.pickup_time,
        status: ride.status,
        status_label: ride.status.label(),
        status_emoji: ride.status.emoji(),
        driver_name: ride.driver_name,
        driver_avatar: ride.driver_avatar,
        car_model: ride.car_model,
        license_plate: ride.license_plate,
        pet_notes: ride.pet_notes,
        rating: ride.rating,
        created_at: ride.created_at,
    }
}

fn demo_member_since() -> Timestamp {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .expect("demo timestamp is valid")
}

//! Surface-point geolocation for the home body.
//!
//! Maps a clicked point on the home body's sphere to latitude, longitude,
//! and an estimated local time-of-day. The longitude frame carries a 270°
//! offset aligning computed coordinates with the rendered sphere's prime
//! meridian; the time estimate divides the globe into pure longitudinal
//! zones (15° per hour) with no political boundaries and no daylight
//! saving.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::scene::kinematics::Vec3;

/// Degrees of longitude per hour of local-time offset.
const DEGREES_PER_HOUR: f64 = 15.0;

/// Frame alignment between the rendered texture's prime meridian and the
/// +Z axis. Changing this shifts every computed longitude; it is a
/// product constant, not geophysics.
const MERIDIAN_OFFSET_DEG: f64 = 270.0;

/// Geographic fix computed from a surface click.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationResult {
    /// Latitude in degrees, within [-90, 90].
    pub latitude: f64,
    /// Longitude in degrees, within (-180, 180].
    pub longitude: f64,
    /// Estimated local time at the click point, 24-hour `HH:MM`.
    pub local_time: String,
}

/// Map a surface click on the home body to a geographic fix.
///
/// `point` is the click position in the body's local frame; it is
/// normalized onto the unit sphere before use, so callers may pass the
/// raw intersection point (normalization is idempotent). Deterministic
/// in `(point, now)`: identical inputs produce identical results.
///
/// Only home-body clicks should reach this function; routing is the
/// responsibility of [`crate::scene::SolarSystem::select`].
#[must_use]
pub fn map_click_to_location(point: Vec3, now: DateTime<Utc>) -> LocationResult {
    let unit = point.normalize();

    let latitude = 90.0 - unit.y.clamp(-1.0, 1.0).acos().to_degrees();
    let longitude =
        (MERIDIAN_OFFSET_DEG + unit.x.atan2(unit.z).to_degrees()).rem_euclid(360.0) - 180.0;

    LocationResult {
        latitude,
        longitude,
        local_time: local_time_label(longitude, now),
    }
}

/// Format the estimated local time for a longitude as `HH:MM`.
///
/// The offset is applied arithmetically to the UTC instant and the
/// shifted instant formatted as if it were already local — a
/// longitudinal estimate, not a timezone conversion.
fn local_time_label(longitude: f64, now: DateTime<Utc>) -> String {
    let offset_hours = longitude / DEGREES_PER_HOUR;
    #[allow(clippy::cast_possible_truncation)]
    let shift = Duration::milliseconds((offset_hours * 3_600_000.0).round() as i64);
    (now + shift).format("%H:%M").to_string()
}

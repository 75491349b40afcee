//! Great-circle distance.

/// Canonical Earth radius for fare distances, in miles.
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Great-circle distance in miles between two (latitude, longitude)
/// coordinates in degrees, via the haversine formula.
///
/// # Examples
///
/// ```
/// use railplan::fare::haversine_miles;
///
/// let washington = (38.897, -77.006);
/// let new_york = (40.750, -73.994);
///
/// let miles = haversine_miles(washington, new_york);
/// assert!((200.0..210.0).contains(&miles));
/// assert_eq!(haversine_miles(washington, washington), 0.0);
/// ```
pub fn haversine_miles(a: (f64, f64), b: (f64, f64)) -> f64 {
    let (lat1, lon1) = a;
    let (lat2, lon2) = b;

    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();

    let h = (dlat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_MILES * c
}

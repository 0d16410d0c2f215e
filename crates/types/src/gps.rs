//! Report location.

use serde::{Deserialize, Serialize};

/// A reported latitude/longitude pair.
///
/// The exact origin `(0, 0)` is the producer's sentinel for "no location provided". There is
/// no separate missing state: a report without a location decodes to the origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GpsPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GpsPoint {
    /// The "no location" sentinel.
    pub const ORIGIN: GpsPoint = GpsPoint { lat: 0.0, lng: 0.0 };

    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether a GPS line should be shown.
    ///
    /// Only the exact origin is suppressed; a point on the equator or the prime meridian is
    /// still present.
    pub fn is_present(&self) -> bool {
        self.lat != 0.0 || self.lng != 0.0
    }

    /// `"GPS: <lat>, <lng>"` with four fixed decimals, or `None` for the sentinel.
    pub fn display_line(&self) -> Option<String> {
        self.is_present()
            .then(|| format!("GPS: {}, {}", to_fixed4(self.lat), to_fixed4(self.lng)))
    }
}

/// Four fixed decimals, with exact halfway values rounded away from zero.
///
/// `{:.4}` rounds exact ties to even. A value can only sit exactly halfway between two
/// four-decimal neighbours if it is a multiple of 1/32, where the scaled value is exact.
fn to_fixed4(value: f64) -> String {
    let scaled = value * 10_000.0;
    if (value * 32.0).fract() == 0.0 && scaled.fract().abs() == 0.5 {
        let rounded = scaled.trunc() + scaled.signum();
        return format!("{:.4}", rounded / 10_000.0);
    }
    format!("{value:.4}")
}

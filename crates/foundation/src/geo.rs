/// Geographic anchor position, degrees and meters.
///
/// Terrain clamping and the world-space transform derived from this point
/// live in the positioning substrate; annotation code only carries it.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct GeoPoint {
    pub lat_deg: f64,
    pub lon_deg: f64,
    pub alt_m: f64,
}

impl GeoPoint {
    pub fn new(lat_deg: f64, lon_deg: f64, alt_m: f64) -> Self {
        Self {
            lat_deg,
            lon_deg,
            alt_m,
        }
    }
}

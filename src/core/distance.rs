use crate::models::{Lead, MapPoint};

/// Earth's radius in statute miles
const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Radius for city-level location filtering
pub const CITY_RADIUS_MILES: f64 = 50.0;

/// Fallback viewport when no location matched and no leads survived filtering
pub const CONTINENTAL_US_CENTER: MapPoint = MapPoint {
    lat: 39.8283,
    lng: -98.5795,
};
pub const CONTINENTAL_US_ZOOM: u8 = 4;

/// Calculate the Haversine distance between two points in miles
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lng1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lng2` - Longitude of second point in degrees
#[inline]
pub fn haversine_miles(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}

/// Bounding box around a set of result coordinates
#[derive(Debug, Clone, Copy)]
pub struct ResultBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl ResultBounds {
    /// Compute the box enclosing every lead; `None` for an empty slice
    pub fn from_leads(leads: &[Lead]) -> Option<Self> {
        let first = leads.first()?;
        let mut bounds = ResultBounds {
            min_lat: first.coordinates.lat,
            max_lat: first.coordinates.lat,
            min_lng: first.coordinates.lng,
            max_lng: first.coordinates.lng,
        };
        for lead in &leads[1..] {
            bounds.min_lat = bounds.min_lat.min(lead.coordinates.lat);
            bounds.max_lat = bounds.max_lat.max(lead.coordinates.lat);
            bounds.min_lng = bounds.min_lng.min(lead.coordinates.lng);
            bounds.max_lng = bounds.max_lng.max(lead.coordinates.lng);
        }
        Some(bounds)
    }

    pub fn center(&self) -> MapPoint {
        MapPoint {
            lat: (self.min_lat + self.max_lat) / 2.0,
            lng: (self.min_lng + self.max_lng) / 2.0,
        }
    }

    /// Zoom level for the box: a wider span zooms further out
    pub fn zoom(&self) -> u8 {
        let span = (self.max_lat - self.min_lat).max(self.max_lng - self.min_lng);
        zoom_for_span(span)
    }
}

/// Map a coordinate span (degrees) to a zoom level
#[inline]
pub fn zoom_for_span(span: f64) -> u8 {
    if span > 20.0 {
        4
    } else if span > 10.0 {
        5
    } else if span > 5.0 {
        6
    } else if span > 2.0 {
        7
    } else if span > 1.0 {
        8
    } else {
        10
    }
}

/// A place the parser recognizes: either a hub city or a whole state
#[derive(Debug, Clone)]
pub struct Place {
    /// Lowercase lookup key, also the token matched inside queries
    pub key: &'static str,
    /// Label used on generated leads
    pub display: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub state: &'static str,
    pub is_state: bool,
}

/// Fixed lookup table mapping place names to coordinates and state membership
///
/// Built once at startup and shared by reference. Table order is stable:
/// the local parser's first-substring-match rule depends on it.
#[derive(Debug, Clone)]
pub struct Gazetteer {
    places: Vec<Place>,
}

impl Gazetteer {
    /// The reference table: eleven US business hubs plus three states
    pub fn default_us() -> Self {
        let city = |key, display, lat, lng, state| Place {
            key,
            display,
            lat,
            lng,
            state,
            is_state: false,
        };
        let state = |key, display, lat, lng, abbr| Place {
            key,
            display,
            lat,
            lng,
            state: abbr,
            is_state: true,
        };

        Self {
            places: vec![
                city("new york", "New York", 40.7589, -73.9851, "NY"),
                city("los angeles", "Los Angeles", 34.0522, -118.2437, "CA"),
                city("chicago", "Chicago", 41.8781, -87.6298, "IL"),
                city("houston", "Houston", 29.7604, -95.3698, "TX"),
                city("phoenix", "Phoenix", 33.4484, -112.0740, "AZ"),
                city("philadelphia", "Philadelphia", 39.9526, -75.1652, "PA"),
                city("san antonio", "San Antonio", 29.4241, -98.4936, "TX"),
                city("dallas", "Dallas", 32.7767, -96.7970, "TX"),
                city("san francisco", "San Francisco", 37.7749, -122.4194, "CA"),
                city("miami", "Miami", 25.7617, -80.1918, "FL"),
                city("atlanta", "Atlanta", 33.7490, -84.3880, "GA"),
                state("california", "California", 36.7783, -119.4179, "CA"),
                state("texas", "Texas", 31.9686, -99.9018, "TX"),
                state("florida", "Florida", 27.7663, -82.6404, "FL"),
            ],
        }
    }

    /// Resolve a place by name, case-insensitively
    pub fn lookup(&self, name: &str) -> Option<&Place> {
        self.places
            .iter()
            .find(|p| p.key.eq_ignore_ascii_case(name) || p.display.eq_ignore_ascii_case(name))
    }

    /// First place whose key appears as a substring of the lowercased query
    pub fn find_in(&self, query_lower: &str) -> Option<&Place> {
        self.places.iter().find(|p| query_lower.contains(p.key))
    }

    /// Hub cities available to the lead generator
    pub fn cities(&self) -> impl Iterator<Item = &Place> {
        self.places.iter().filter(|p| !p.is_state)
    }

    /// Whether a lead's city label belongs to the given state
    pub fn city_in_state(&self, city: &str, state: &str) -> bool {
        self.lookup(city).map(|p| p.state == state).unwrap_or(false)
    }
}

/// Industry keyword synonyms, scanned in order; first match wins
///
/// Keywords map to the canonical industry label carried by generated leads.
pub const INDUSTRY_SYNONYMS: &[(&str, &str)] = &[
    ("technology", "Technology"),
    ("tech", "Technology"),
    ("software", "Technology"),
    ("it", "Technology"),
    ("healthcare", "Healthcare"),
    ("medical", "Healthcare"),
    ("health", "Healthcare"),
    ("finance", "Finance"),
    ("financial", "Finance"),
    ("banking", "Finance"),
    ("fintech", "Finance"),
    ("manufacturing", "Manufacturing"),
    ("industrial", "Manufacturing"),
    ("retail", "Retail"),
    ("ecommerce", "Retail"),
    ("commerce", "Retail"),
    ("consulting", "Consulting"),
    ("services", "Consulting"),
    ("legal", "Legal"),
    ("law", "Legal"),
    ("attorney", "Legal"),
    ("real estate", "Real Estate"),
    ("property", "Real Estate"),
    ("education", "Education"),
    ("academic", "Education"),
    ("nonprofit", "Nonprofit"),
    ("non-profit", "Nonprofit"),
];

use std::sync::Arc;

use crate::core::distance::{
    haversine_miles, ResultBounds, CITY_RADIUS_MILES, CONTINENTAL_US_CENTER, CONTINENTAL_US_ZOOM,
};
use crate::core::gazetteer::{Gazetteer, Place};
use crate::models::{Lead, MapPoint, ParsedQuery, QueryResult};

const STATE_ZOOM: u8 = 6;
const CITY_ZOOM: u8 = 10;

/// Applies a ParsedQuery to a lead snapshot
///
/// Filters are an AND-conjunction; each predicate runs only when its field is
/// set. Results are stably sorted by score, descending, and paired with a
/// suggested map viewport.
#[derive(Clone)]
pub struct QueryExecutor {
    gazetteer: Arc<Gazetteer>,
}

impl QueryExecutor {
    pub fn new(gazetteer: Arc<Gazetteer>) -> Self {
        Self { gazetteer }
    }

    pub fn execute(&self, parsed: &ParsedQuery, leads: &[Lead]) -> QueryResult {
        let mut filtered: Vec<Lead> = leads.to_vec();

        // A location the gazetteer does not know filters nothing; the remote
        // parser may hand back places outside the table.
        let place = parsed
            .location
            .as_deref()
            .and_then(|name| self.gazetteer.lookup(name));

        if let Some(place) = place {
            if place.is_state {
                filtered.retain(|lead| {
                    self.gazetteer
                        .city_in_state(&lead.coordinates.city, place.state)
                });
            } else {
                filtered.retain(|lead| {
                    haversine_miles(
                        lead.coordinates.lat,
                        lead.coordinates.lng,
                        place.lat,
                        place.lng,
                    ) <= CITY_RADIUS_MILES
                });
            }
        }

        if let Some(industry) = &parsed.industry {
            let needle = industry.to_lowercase();
            filtered.retain(|lead| lead.industry.to_lowercase().contains(&needle));
        }

        if let Some(min_score) = parsed.min_score {
            filtered.retain(|lead| lead.score >= min_score);
        }

        if let Some(min_value) = parsed.min_value {
            filtered.retain(|lead| lead.value_estimate >= min_value);
        }

        if let Some(priority) = parsed.priority {
            filtered.retain(|lead| lead.priority == priority);
        }

        // Stable: equal scores keep their snapshot order
        filtered.sort_by(|a, b| b.score.cmp(&a.score));

        let (map_center, map_zoom) = viewport(place, &filtered);

        QueryResult {
            count: filtered.len(),
            map_center,
            map_zoom,
            query: parsed.clone(),
            leads: filtered,
        }
    }
}

fn viewport(place: Option<&Place>, filtered: &[Lead]) -> (Option<MapPoint>, u8) {
    if let Some(place) = place {
        let center = MapPoint {
            lat: place.lat,
            lng: place.lng,
        };
        let zoom = if place.is_state { STATE_ZOOM } else { CITY_ZOOM };
        return (Some(center), zoom);
    }

    match ResultBounds::from_leads(filtered) {
        Some(bounds) => (Some(bounds.center()), bounds.zoom()),
        None => (Some(CONTINENTAL_US_CENTER), CONTINENTAL_US_ZOOM),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinates, Priority};
    use chrono::Utc;
    use uuid::Uuid;

    fn lead(city: &str, lat: f64, lng: f64, industry: &str, score: u32) -> Lead {
        Lead {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            coordinates: Coordinates {
                lat,
                lng,
                city: city.to_string(),
            },
            source: "Google Ads".to_string(),
            lead_type: "SMB".to_string(),
            industry: industry.to_string(),
            score,
            value_estimate: 30_000,
            priority: Priority::Medium,
        }
    }

    fn executor() -> QueryExecutor {
        QueryExecutor::new(Arc::new(Gazetteer::default_us()))
    }

    fn dallas_lead(score: u32) -> Lead {
        lead("Dallas", 32.7767, -96.7970, "Technology", score)
    }

    fn new_york_lead(score: u32) -> Lead {
        lead("New York", 40.7589, -73.9851, "Legal", score)
    }

    #[test]
    fn test_empty_query_returns_everything_sorted() {
        let leads = vec![dallas_lead(70), new_york_lead(95), dallas_lead(85)];
        let result = executor().execute(&ParsedQuery::default(), &leads);

        assert_eq!(result.count, 3);
        let scores: Vec<u32> = result.leads.iter().map(|l| l.score).collect();
        assert_eq!(scores, vec![95, 85, 70]);
        // Dallas-to-New-York longitude span is ~22.8 degrees
        assert_eq!(result.map_zoom, 4);
    }

    #[test]
    fn test_empty_pool_gets_continental_default() {
        let result = executor().execute(&ParsedQuery::default(), &[]);
        assert_eq!(result.count, 0);
        assert_eq!(result.map_zoom, CONTINENTAL_US_ZOOM);
        let center = result.map_center.unwrap();
        assert!((center.lat - 39.8283).abs() < 1e-9);
        assert!((center.lng + 98.5795).abs() < 1e-9);
    }

    #[test]
    fn test_city_radius_filter() {
        let query = ParsedQuery {
            location: Some("dallas".to_string()),
            ..Default::default()
        };
        // Lead at the exact gazetteer coordinate is inside the 50-mile radius;
        // New York is ~1370 miles away
        let leads = vec![dallas_lead(80), new_york_lead(90)];
        let result = executor().execute(&query, &leads);

        assert_eq!(result.count, 1);
        assert_eq!(result.leads[0].coordinates.city, "Dallas");
        assert_eq!(result.map_zoom, 10);
        let center = result.map_center.unwrap();
        assert!((center.lat - 32.7767).abs() < 1e-9);
    }

    #[test]
    fn test_state_containment_filter() {
        let query = ParsedQuery {
            location: Some("texas".to_string()),
            ..Default::default()
        };
        let leads = vec![
            dallas_lead(80),
            lead("Houston", 29.7604, -95.3698, "Finance", 75),
            new_york_lead(90),
        ];
        let result = executor().execute(&query, &leads);

        assert_eq!(result.count, 2);
        assert!(result
            .leads
            .iter()
            .all(|l| l.coordinates.city == "Dallas" || l.coordinates.city == "Houston"));
        assert_eq!(result.map_zoom, 6);
    }

    #[test]
    fn test_industry_substring_match() {
        let query = ParsedQuery {
            industry: Some("tech".to_string()),
            ..Default::default()
        };
        let leads = vec![dallas_lead(80), new_york_lead(90)];
        let result = executor().execute(&query, &leads);

        assert_eq!(result.count, 1);
        assert_eq!(result.leads[0].industry, "Technology");
    }

    #[test]
    fn test_conjunction_of_predicates() {
        let query = ParsedQuery {
            location: Some("texas".to_string()),
            industry: Some("Technology".to_string()),
            min_score: Some(75),
            ..Default::default()
        };
        let leads = vec![
            dallas_lead(80),                                     // matches all
            dallas_lead(70),                                     // fails score
            lead("Houston", 29.7604, -95.3698, "Finance", 90),   // fails industry
            new_york_lead(95),                                   // fails location
        ];
        let result = executor().execute(&query, &leads);

        assert_eq!(result.count, 1);
        assert_eq!(result.leads[0].score, 80);

        // Every surviving lead satisfies every predicate
        for l in &result.leads {
            assert!(l.score >= 75);
            assert!(l.industry.to_lowercase().contains("technology"));
        }
    }

    #[test]
    fn test_min_value_filter() {
        let mut cheap = dallas_lead(80);
        cheap.value_estimate = 12_000;
        let mut rich = dallas_lead(70);
        rich.value_estimate = 55_000;

        let query = ParsedQuery {
            min_value: Some(50_000),
            ..Default::default()
        };
        let result = executor().execute(&query, &[cheap, rich]);

        assert_eq!(result.count, 1);
        assert_eq!(result.leads[0].value_estimate, 55_000);
    }

    #[test]
    fn test_priority_exact_match() {
        let mut high = dallas_lead(80);
        high.priority = Priority::High;
        let medium = dallas_lead(90);

        let query = ParsedQuery {
            priority: Some(Priority::High),
            ..Default::default()
        };
        let result = executor().execute(&query, &[high, medium]);

        assert_eq!(result.count, 1);
        assert_eq!(result.leads[0].priority, Priority::High);
    }

    #[test]
    fn test_sort_is_stable_on_equal_scores() {
        let first = dallas_lead(80);
        let second = new_york_lead(80);
        let first_id = first.id;
        let second_id = second.id;

        let result = executor().execute(&ParsedQuery::default(), &[first, second]);
        assert_eq!(result.leads[0].id, first_id);
        assert_eq!(result.leads[1].id, second_id);
    }

    #[test]
    fn test_unknown_location_filters_nothing() {
        let query = ParsedQuery {
            location: Some("seattle".to_string()),
            ..Default::default()
        };
        let leads = vec![dallas_lead(80), new_york_lead(90)];
        let result = executor().execute(&query, &leads);

        // No gazetteer entry: filter skipped, viewport from result bounds
        assert_eq!(result.count, 2);
        assert!(result.map_center.is_some());
    }
}

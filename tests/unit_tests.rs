// Unit tests for leadscope

use std::sync::Arc;

use chrono::Utc;
use leadscope::core::{haversine_miles, Gazetteer, LocalParser, QueryExecutor};
use leadscope::models::{Action, Coordinates, Lead, ParsedQuery, Priority};
use uuid::Uuid;

fn lead(city: &str, lat: f64, lng: f64, industry: &str, score: u32, value: u64) -> Lead {
    Lead {
        id: Uuid::new_v4(),
        created_at: Utc::now(),
        coordinates: Coordinates {
            lat,
            lng,
            city: city.to_string(),
        },
        source: "Referrals".to_string(),
        lead_type: "Enterprise".to_string(),
        industry: industry.to_string(),
        score,
        value_estimate: value,
        priority: Priority::Medium,
    }
}

fn gazetteer() -> Arc<Gazetteer> {
    Arc::new(Gazetteer::default_us())
}

#[test]
fn test_haversine_dallas_point_is_zero() {
    let d = haversine_miles(32.7767, -96.7970, 32.7767, -96.7970);
    assert!(d < 0.01);
}

#[test]
fn test_haversine_dallas_to_new_york_excluded_from_radius() {
    // ~1370 miles, far outside the 50-mile city radius
    let d = haversine_miles(32.7767, -96.7970, 40.7589, -73.9851);
    assert!(d > 50.0);
}

#[test]
fn test_local_parse_is_total() {
    let parser = LocalParser::new(gazetteer());
    let inputs = [
        "",
        "   ",
        "no matches here at all",
        "ünïcödé λεαδς дальше 東京",
        "$$$$kkkk 12345 over above score",
        "\u{0000}\u{FFFF}",
    ];
    for input in inputs {
        // Must produce a well-formed ParsedQuery without panicking
        let _ = parser.parse(input);
    }
}

#[test]
fn test_scenario_value_extraction() {
    let parser = LocalParser::new(gazetteer());
    let parsed = parser.parse("Show me tech leads in California over $50k");
    assert_eq!(parsed.location.as_deref(), Some("california"));
    assert_eq!(parsed.industry.as_deref(), Some("Technology"));
    assert_eq!(parsed.min_value, Some(50_000));
    assert_eq!(parsed.action, Action::Show);
}

#[test]
fn test_scenario_score_and_location() {
    let parser = LocalParser::new(gazetteer());
    let parsed = parser.parse("Find legal contacts near Dallas with score 70+");
    assert_eq!(parsed.location.as_deref(), Some("dallas"));
    assert_eq!(parsed.industry.as_deref(), Some("Legal"));
    assert_eq!(parsed.min_score, Some(70));
    assert_eq!(parsed.action, Action::Find);
}

#[test]
fn test_scenario_empty_query() {
    let parser = LocalParser::new(gazetteer());
    let parsed = parser.parse("");
    assert_eq!(parsed, ParsedQuery::default());

    let executor = QueryExecutor::new(gazetteer());
    let leads = vec![
        lead("Dallas", 32.78, -96.80, "Technology", 70, 20_000),
        lead("Miami", 25.76, -80.19, "Legal", 90, 30_000),
    ];
    let result = executor.execute(&parsed, &leads);

    // Everything comes back, sorted by score descending
    assert_eq!(result.count, 2);
    assert_eq!(result.leads[0].score, 90);
    assert_eq!(result.leads[1].score, 70);
}

#[test]
fn test_scenario_state_level_containment() {
    let parser = LocalParser::new(gazetteer());
    let parsed = parser.parse("california");
    assert_eq!(parsed.location.as_deref(), Some("california"));

    let executor = QueryExecutor::new(gazetteer());
    let leads = vec![
        lead("San Francisco", 37.77, -122.42, "Technology", 80, 20_000),
        lead("Los Angeles", 34.05, -118.24, "Retail", 75, 25_000),
        lead("Dallas", 32.78, -96.80, "Technology", 90, 30_000),
    ];
    let result = executor.execute(&parsed, &leads);

    assert_eq!(result.count, 2);
    assert!(result
        .leads
        .iter()
        .all(|l| l.coordinates.city == "San Francisco" || l.coordinates.city == "Los Angeles"));
    assert_eq!(result.map_zoom, 6);
}

#[test]
fn test_filter_conjunction_soundness_and_completeness() {
    let executor = QueryExecutor::new(gazetteer());
    let parsed = ParsedQuery {
        industry: Some("Technology".to_string()),
        min_score: Some(75),
        min_value: Some(20_000),
        ..Default::default()
    };

    let pool: Vec<Lead> = (0u32..40)
        .map(|i| {
            lead(
                "Dallas",
                32.78,
                -96.80,
                if i % 2 == 0 { "Technology" } else { "Finance" },
                60 + i,
                15_000 + u64::from(i) * 1000,
            )
        })
        .collect();

    let result = executor.execute(&parsed, &pool);

    // Soundness: every returned lead satisfies every predicate
    for l in &result.leads {
        assert!(l.industry.contains("Technology"));
        assert!(l.score >= 75);
        assert!(l.value_estimate >= 20_000);
    }

    // Completeness: every qualifying lead appears
    let expected = pool
        .iter()
        .filter(|l| l.industry.contains("Technology") && l.score >= 75 && l.value_estimate >= 20_000)
        .count();
    assert_eq!(result.count, expected);
}

#[test]
fn test_sort_invariant_non_increasing_and_stable() {
    let executor = QueryExecutor::new(gazetteer());
    let a = lead("Dallas", 32.78, -96.80, "Technology", 80, 20_000);
    let b = lead("Miami", 25.76, -80.19, "Legal", 80, 25_000);
    let c = lead("Atlanta", 33.75, -84.39, "Finance", 95, 30_000);
    let (a_id, b_id) = (a.id, b.id);

    let result = executor.execute(&ParsedQuery::default(), &[a, b, c]);

    for pair in result.leads.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    // Equal scores keep input order
    assert_eq!(result.leads[1].id, a_id);
    assert_eq!(result.leads[2].id, b_id);
}

#[test]
fn test_distance_filter_inclusion_and_exclusion() {
    let executor = QueryExecutor::new(gazetteer());
    let parsed = ParsedQuery {
        location: Some("dallas".to_string()),
        ..Default::default()
    };

    let at_center = lead("Dallas", 32.7767, -96.7970, "Technology", 80, 20_000);
    let far_away = lead("New York", 40.7589, -73.9851, "Technology", 90, 30_000);
    let at_center_id = at_center.id;

    let result = executor.execute(&parsed, &[at_center, far_away]);
    assert_eq!(result.count, 1);
    assert_eq!(result.leads[0].id, at_center_id);
}

#[test]
fn test_priority_query_end_to_end() {
    let parser = LocalParser::new(gazetteer());
    let parsed = parser.parse("show high priority leads in texas");
    assert_eq!(parsed.priority, Some(Priority::High));
    assert_eq!(parsed.location.as_deref(), Some("texas"));

    let executor = QueryExecutor::new(gazetteer());
    let mut important = lead("Houston", 29.76, -95.37, "Finance", 70, 20_000);
    important.priority = Priority::High;
    let routine = lead("Houston", 29.76, -95.37, "Finance", 95, 50_000);

    let result = executor.execute(&parsed, &[important, routine]);
    assert_eq!(result.count, 1);
    assert_eq!(result.leads[0].priority, Priority::High);
}

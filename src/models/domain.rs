use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Geographic position of a lead, labeled with the hub city it was drawn near
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
    pub city: String,
}

/// Lead priority, assigned once at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    #[serde(alias = "high")]
    High,
    #[serde(alias = "medium")]
    Medium,
    #[serde(alias = "low")]
    Low,
}

/// A synthetic prospective-customer record
///
/// Immutable after creation; the store drops the oldest leads once it
/// exceeds its capacity, which is the only way a lead goes away.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    pub id: Uuid,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    pub coordinates: Coordinates,
    pub source: String,
    #[serde(rename = "type")]
    pub lead_type: String,
    pub industry: String,
    pub score: u32,
    #[serde(rename = "valueEstimate")]
    pub value_estimate: u64,
    pub priority: Priority,
}

/// Client-side intent extracted from the query; does not affect filtering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    #[default]
    Show,
    Find,
    Highlight,
    Filter,
}

/// Structured filter derived from a free-text query
///
/// Every field except `action` is optional; a field left `None` applies no
/// constraint. The remote parser returns this shape as JSON, so missing
/// fields deserialize to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParsedQuery {
    pub location: Option<String>,
    pub industry: Option<String>,
    pub min_score: Option<u32>,
    pub min_value: Option<u64>,
    pub priority: Option<Priority>,
    pub action: Action,
}

/// A map coordinate pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Filtered, score-sorted leads plus the suggested map viewport
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    pub leads: Vec<Lead>,
    pub count: usize,
    pub map_center: Option<MapPoint>,
    pub map_zoom: u8,
    pub query: ParsedQuery,
}

/// Aggregate view of the lead pool
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadStats {
    pub total_leads: usize,
    pub high_priority_count: usize,
    pub average_score: u32,
    pub total_value: u64,
    pub last_update: DateTime<Utc>,
}

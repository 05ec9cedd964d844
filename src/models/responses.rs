use serde::{Deserialize, Serialize};

use crate::models::domain::{Lead, LeadStats, ParsedQuery, QueryResult};
use crate::services::query::ParseMethod;

/// Response for the natural-language query endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResponse {
    pub success: bool,
    pub query: String,
    pub parsed_query: ParsedQuery,
    pub results: QueryResult,
    pub method: ParseMethod,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Full lead pool snapshot with aggregate stats
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadListResponse {
    pub leads: Vec<Lead>,
    pub stats: LeadStats,
}

/// Leads for a single city
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityLeadsResponse {
    pub city: String,
    pub leads: Vec<Lead>,
    pub count: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub total_leads: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

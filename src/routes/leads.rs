use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::models::{
    CityLeadsResponse, ErrorResponse, HealthResponse, LeadListResponse, QueryRequest,
    QueryResponse,
};
use crate::services::{LeadStore, QueryService};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<LeadStore>,
    pub query: Arc<QueryService>,
}

/// Configure all lead routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/query", web::post().to(run_query))
        .route("/leads", web::get().to(list_leads))
        // Registered before the city route so "id" is not read as a city name
        .route("/leads/id/{id}", web::get().to(lead_by_id))
        .route("/leads/{city}", web::get().to(leads_by_city));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        total_leads: state.store.len().await,
        timestamp: chrono::Utc::now(),
    })
}

/// Natural-language query endpoint
///
/// POST /api/query
///
/// Request body:
/// ```json
/// { "query": "Show me tech leads in California over $50k" }
/// ```
async fn run_query(
    state: web::Data<AppState>,
    req: web::Json<QueryRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for query request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    tracing::info!("Processing query: {:?}", req.query);

    let leads = state.store.active_leads().await;
    let outcome = state.query.parse_query(&req.query, &leads).await;

    tracing::info!(
        "Query matched {} of {} leads via {:?} parse",
        outcome.results.count,
        leads.len(),
        outcome.method
    );

    HttpResponse::Ok().json(QueryResponse {
        success: true,
        query: req.query.clone(),
        parsed_query: outcome.parsed,
        results: outcome.results,
        method: outcome.method,
        timestamp: chrono::Utc::now(),
    })
}

/// Full pool snapshot with stats
///
/// GET /api/leads
async fn list_leads(state: web::Data<AppState>) -> impl Responder {
    let leads = state.store.active_leads().await;
    let stats = state.store.stats().await;

    HttpResponse::Ok().json(LeadListResponse { leads, stats })
}

/// Single lead lookup
///
/// GET /api/leads/id/{id}
async fn lead_by_id(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let raw = path.into_inner();
    let id = match raw.parse::<uuid::Uuid>() {
        Ok(id) => id,
        Err(_) => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid lead id".to_string(),
                message: format!("'{}' is not a valid UUID", raw),
                status_code: 400,
            });
        }
    };

    match state.store.lead_by_id(id).await {
        Some(lead) => HttpResponse::Ok().json(lead),
        None => HttpResponse::NotFound().json(ErrorResponse {
            error: "Lead not found".to_string(),
            message: format!("No lead with id {}", id),
            status_code: 404,
        }),
    }
}

/// Leads for one city, case-insensitive
///
/// GET /api/leads/{city}
async fn leads_by_city(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let city = path.into_inner();
    let leads = state.store.leads_by_city(&city).await;

    HttpResponse::Ok().json(CityLeadsResponse {
        count: leads.len(),
        city,
        leads,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_shape() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            total_leads: 0,
            timestamp: chrono::Utc::now(),
        };
        assert_eq!(response.status, "healthy");
    }
}

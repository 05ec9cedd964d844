// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Action, Coordinates, Lead, LeadStats, MapPoint, ParsedQuery, Priority, QueryResult};
pub use requests::QueryRequest;
pub use responses::{CityLeadsResponse, ErrorResponse, HealthResponse, LeadListResponse, QueryResponse};

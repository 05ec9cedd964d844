//! Leadscope - geographic lead intelligence service
//!
//! This library maintains a bounded pool of synthetic geographically
//! distributed lead records and answers free-text queries against it:
//! a remote chat-completion parse when configured, with a deterministic
//! local fallback that never fails.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{haversine_miles, Gazetteer, LocalParser, QueryExecutor};
pub use self::models::{Action, Lead, ParsedQuery, Priority, QueryResult};
pub use self::services::{LeadGenerator, LeadStore, ParseMethod, QueryService, RemoteParser};

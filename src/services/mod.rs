// Service exports
pub mod query;
pub mod remote;
pub mod store;

pub use query::{ParseMethod, QueryOutcome, QueryService};
pub use remote::{RemoteParseError, RemoteParser};
pub use store::{LeadGenerator, LeadStore};

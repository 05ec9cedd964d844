// Core query pipeline exports
pub mod distance;
pub mod executor;
pub mod gazetteer;
pub mod parser;

pub use distance::{haversine_miles, zoom_for_span, ResultBounds};
pub use executor::QueryExecutor;
pub use gazetteer::{Gazetteer, Place, INDUSTRY_SYNONYMS};
pub use parser::LocalParser;

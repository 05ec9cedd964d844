use serde::{Deserialize, Serialize};

use crate::core::{LocalParser, QueryExecutor};
use crate::models::{Lead, ParsedQuery, QueryResult};
use crate::services::remote::RemoteParser;

/// Which parser produced the structured query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMethod {
    Remote,
    Local,
}

/// Outcome of a full parse-and-execute round
#[derive(Debug, Clone)]
pub struct QueryOutcome {
    pub parsed: ParsedQuery,
    pub results: QueryResult,
    pub method: ParseMethod,
}

/// Two-stage query strategy: remote parse when configured, local otherwise
///
/// The robustness contract of the whole pipeline lives here: any remote
/// failure (missing credential, network error, bad status, malformed
/// content) silently degrades to the deterministic local parser, so
/// `parse_query` always produces a result.
pub struct QueryService {
    remote: Option<RemoteParser>,
    local: LocalParser,
    executor: QueryExecutor,
}

impl QueryService {
    pub fn new(remote: Option<RemoteParser>, local: LocalParser, executor: QueryExecutor) -> Self {
        Self {
            remote,
            local,
            executor,
        }
    }

    pub async fn parse_query(&self, query: &str, leads: &[Lead]) -> QueryOutcome {
        if let Some(remote) = &self.remote {
            match remote.parse(query).await {
                Ok(parsed) => {
                    tracing::debug!("remote parse succeeded for {:?}", query);
                    let results = self.executor.execute(&parsed, leads);
                    return QueryOutcome {
                        parsed,
                        results,
                        method: ParseMethod::Remote,
                    };
                }
                Err(e) => {
                    tracing::warn!("remote parse failed, using local parser: {}", e);
                }
            }
        }

        let parsed = self.local.parse(query);
        let results = self.executor.execute(&parsed, leads);
        QueryOutcome {
            parsed,
            results,
            method: ParseMethod::Local,
        }
    }
}

use std::sync::Arc;

use regex::Regex;

use crate::core::gazetteer::{Gazetteer, INDUSTRY_SYNONYMS};
use crate::models::{Action, ParsedQuery, Priority};

/// Deterministic local query parser
///
/// A pure function of the query string: every input, including the empty
/// string and non-ASCII text, yields a well-formed ParsedQuery. Patterns are
/// compiled once at construction.
pub struct LocalParser {
    gazetteer: Arc<Gazetteer>,
    score_re: Regex,
    dollar_k_re: Regex,
    over_re: Regex,
    above_re: Regex,
}

impl LocalParser {
    pub fn new(gazetteer: Arc<Gazetteer>) -> Self {
        // The patterns are fixed literals, so compilation cannot fail at
        // runtime; the expects trip only on a typo caught by the test suite.
        Self {
            gazetteer,
            score_re: Regex::new(r"score\s*(\d+)").expect("invalid score pattern"),
            dollar_k_re: Regex::new(r"\$(\d+)k").expect("invalid $k pattern"),
            over_re: Regex::new(r"over\s*\$?(\d+),?(\d+)").expect("invalid over pattern"),
            above_re: Regex::new(r"above\s*\$?(\d+)").expect("invalid above pattern"),
        }
    }

    pub fn parse(&self, query: &str) -> ParsedQuery {
        let q = query.to_lowercase();

        ParsedQuery {
            action: extract_action(&q),
            location: self.gazetteer.find_in(&q).map(|p| p.key.to_string()),
            industry: extract_industry(&q),
            min_score: self
                .score_re
                .captures(&q)
                .and_then(|c| c.get(1))
                .and_then(|m| m.as_str().parse().ok()),
            min_value: self.extract_min_value(&q),
            priority: extract_priority(&q),
        }
    }

    /// Dollar-amount extraction, patterns tried in fixed order
    ///
    /// The thousands multiplier fires when a `k` appears anywhere in the
    /// query, not just inside the matched amount. That is what lets
    /// "over 50k" resolve to 50000 (the `over` pattern never captures the
    /// letter), at the cost of a documented misfire when an unrelated word
    /// containing `k` co-occurs with a bare amount.
    fn extract_min_value(&self, q: &str) -> Option<u64> {
        let raw = if let Some(c) = self.dollar_k_re.captures(q) {
            c.get(1).and_then(|m| m.as_str().parse::<u64>().ok())
        } else if let Some(c) = self.over_re.captures(q) {
            // "$50,000" captures as "50" + "000"; joined they read as one amount
            let joined = format!(
                "{}{}",
                c.get(1).map(|m| m.as_str()).unwrap_or(""),
                c.get(2).map(|m| m.as_str()).unwrap_or("")
            );
            joined.parse::<u64>().ok()
        } else if let Some(c) = self.above_re.captures(q) {
            c.get(1).and_then(|m| m.as_str().parse::<u64>().ok())
        } else {
            None
        };

        raw.map(|v| {
            if q.contains('k') {
                v.saturating_mul(1000)
            } else {
                v
            }
        })
    }
}

fn extract_action(q: &str) -> Action {
    if q.contains("find") {
        Action::Find
    } else if q.contains("highlight") {
        Action::Highlight
    } else if q.contains("filter") {
        Action::Filter
    } else {
        Action::Show
    }
}

/// First synonym appearing as a whole word wins, in table order
///
/// Whole-word matching keeps short keywords like "it" from firing inside
/// unrelated words ("with", "city").
fn extract_industry(q: &str) -> Option<String> {
    INDUSTRY_SYNONYMS
        .iter()
        .find(|(keyword, _)| contains_word(q, keyword))
        .map(|(_, canonical)| canonical.to_string())
}

fn extract_priority(q: &str) -> Option<Priority> {
    if q.contains("high priority") {
        Some(Priority::High)
    } else if q.contains("medium priority") {
        Some(Priority::Medium)
    } else if q.contains("low priority") {
        Some(Priority::Low)
    } else {
        None
    }
}

/// Substring match bounded by non-alphanumeric characters on both sides
fn contains_word(haystack: &str, needle: &str) -> bool {
    let bytes = haystack.as_bytes();
    let mut start = 0;
    while let Some(pos) = haystack[start..].find(needle) {
        let at = start + pos;
        let end = at + needle.len();
        let before_ok = at == 0 || !bytes[at - 1].is_ascii_alphanumeric();
        let after_ok = end == bytes.len() || !bytes[end].is_ascii_alphanumeric();
        if before_ok && after_ok {
            return true;
        }
        start = at + 1;
    }
    false
}

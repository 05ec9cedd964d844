use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::Rng;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::gazetteer::{Gazetteer, Place};
use crate::models::{Coordinates, Lead, LeadStats, Priority};

/// Lead origin channels with their draw weights
const SOURCES: &[(&str, f64)] = &[
    ("Google Ads", 0.25),
    ("Referrals", 0.20),
    ("Organic Search", 0.20),
    ("LinkedIn", 0.15),
    ("Trade Shows", 0.10),
    ("Cold Outreach", 0.10),
];

const LEAD_TYPES: &[&str] = &["Enterprise", "Mid-Market", "SMB", "Startup"];

const INDUSTRIES: &[&str] = &[
    "Technology",
    "Healthcare",
    "Finance",
    "Manufacturing",
    "Retail",
    "Consulting",
    "Legal",
    "Real Estate",
    "Education",
    "Nonprofit",
];

/// Metro-scale jitter applied to hub coordinates, degrees per axis
const COORD_JITTER_DEG: f64 = 0.05;

/// Synthesizes lead records around the gazetteer's hub cities
///
/// Pure generation: no I/O, no failure modes.
#[derive(Clone)]
pub struct LeadGenerator {
    hubs: Vec<Place>,
}

impl LeadGenerator {
    pub fn new(gazetteer: &Gazetteer) -> Self {
        Self {
            hubs: gazetteer.cities().cloned().collect(),
        }
    }

    pub fn generate(&self) -> Lead {
        let mut rng = rand::thread_rng();

        let hub = &self.hubs[rng.gen_range(0..self.hubs.len())];
        let lat = hub.lat + rng.gen_range(-COORD_JITTER_DEG..=COORD_JITTER_DEG);
        let lng = hub.lng + rng.gen_range(-COORD_JITTER_DEG..=COORD_JITTER_DEG);

        Lead {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            coordinates: Coordinates {
                lat,
                lng,
                city: hub.display.to_string(),
            },
            source: weighted_source(&mut rng).to_string(),
            lead_type: LEAD_TYPES[rng.gen_range(0..LEAD_TYPES.len())].to_string(),
            industry: INDUSTRIES[rng.gen_range(0..INDUSTRIES.len())].to_string(),
            score: rng.gen_range(60..=100),
            value_estimate: rng.gen_range(10_000..60_000),
            priority: weighted_priority(&mut rng),
        }
    }
}

fn weighted_source(rng: &mut impl Rng) -> &'static str {
    let roll: f64 = rng.gen();
    let mut cumulative = 0.0;
    for (source, weight) in SOURCES {
        cumulative += weight;
        if roll < cumulative {
            return source;
        }
    }
    // Weights sum to 1.0; reachable only through float rounding
    SOURCES[SOURCES.len() - 1].0
}

/// 30% HIGH / 50% MEDIUM / 20% LOW
fn weighted_priority(rng: &mut impl Rng) -> Priority {
    let roll: f64 = rng.gen();
    if roll < 0.30 {
        Priority::High
    } else if roll < 0.80 {
        Priority::Medium
    } else {
        Priority::Low
    }
}

struct StoreInner {
    leads: VecDeque<Lead>,
    last_update: DateTime<Utc>,
}

/// Capacity-bounded, continuously refreshed pool of lead records
///
/// Append-then-trim: the refresh task is the only writer, every other
/// operation reads a snapshot. A query observes the pool either before or
/// after a tick, never mid-append.
pub struct LeadStore {
    inner: RwLock<StoreInner>,
    generator: LeadGenerator,
    capacity: usize,
}

impl LeadStore {
    pub fn new(generator: LeadGenerator, capacity: usize) -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                leads: VecDeque::with_capacity(capacity + 1),
                last_update: Utc::now(),
            }),
            generator,
            capacity,
        }
    }

    /// Pre-populate the pool so early queries have something to chew on
    pub async fn seed(&self, count: usize) {
        let mut inner = self.inner.write().await;
        for _ in 0..count.min(self.capacity) {
            let lead = self.generator.generate();
            inner.leads.push_back(lead);
        }
        inner.last_update = Utc::now();
    }

    /// Append one fresh lead and trim the oldest beyond capacity
    pub async fn tick(&self) {
        let lead = self.generator.generate();
        let mut inner = self.inner.write().await;
        inner.leads.push_back(lead);
        while inner.leads.len() > self.capacity {
            inner.leads.pop_front();
        }
        inner.last_update = Utc::now();
    }

    /// Snapshot of the current pool, oldest first
    pub async fn active_leads(&self) -> Vec<Lead> {
        let inner = self.inner.read().await;
        inner.leads.iter().cloned().collect()
    }

    pub async fn lead_by_id(&self, id: Uuid) -> Option<Lead> {
        let inner = self.inner.read().await;
        inner.leads.iter().find(|l| l.id == id).cloned()
    }

    /// Case-insensitive exact match on the lead's city label
    pub async fn leads_by_city(&self, city: &str) -> Vec<Lead> {
        let inner = self.inner.read().await;
        inner
            .leads
            .iter()
            .filter(|l| l.coordinates.city.eq_ignore_ascii_case(city))
            .cloned()
            .collect()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.leads.len()
    }

    pub async fn stats(&self) -> LeadStats {
        let inner = self.inner.read().await;
        let total_leads = inner.leads.len();
        let high_priority_count = inner
            .leads
            .iter()
            .filter(|l| l.priority == Priority::High)
            .count();
        let total_value: u64 = inner.leads.iter().map(|l| l.value_estimate).sum();
        let average_score = if total_leads > 0 {
            let sum: u64 = inner.leads.iter().map(|l| u64::from(l.score)).sum();
            (sum as f64 / total_leads as f64).round() as u32
        } else {
            0
        };

        LeadStats {
            total_leads,
            high_priority_count,
            average_score,
            total_value,
            last_update: inner.last_update,
        }
    }

    /// Spawn the background refresh loop; the task owns the only write path
    pub fn spawn_refresh(self: &Arc<Self>, interval: Duration) -> tokio::task::JoinHandle<()> {
        let store = Arc::clone(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // The first interval tick fires immediately; skip it so a freshly
            // seeded pool is not bumped at startup.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                store.tick().await;
                tracing::debug!("lead store refreshed, size {}", store.len().await);
            }
        })
    }
}

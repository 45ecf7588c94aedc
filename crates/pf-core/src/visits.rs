//! Visit counter and last-visit bookkeeping.

use crate::error::StoreError;
use crate::storage::{KeyValueStore, keys};
use chrono::{DateTime, SecondsFormat, Utc};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisitOutcome {
    FirstVisit { count: u64 },
    Returning { count: u64, days_since: i64 },
}

impl VisitOutcome {
    pub fn count(self) -> u64 {
        match self {
            VisitOutcome::FirstVisit { count } | VisitOutcome::Returning { count, .. } => count,
        }
    }

    pub fn message(self) -> String {
        match self {
            VisitOutcome::FirstVisit { .. } => "Welcome! This is your first visit.".to_owned(),
            VisitOutcome::Returning { count, days_since: 0 } => {
                format!("Welcome back! Visit #{count}. Last visit was earlier today.")
            }
            VisitOutcome::Returning { count, days_since: 1 } => {
                format!("Welcome back! Visit #{count}. Last visit was 1 day ago.")
            }
            VisitOutcome::Returning { count, days_since } => {
                format!("Welcome back! Visit #{count}. Last visit was {days_since} days ago.")
            }
        }
    }
}

/// Count this page load and stamp the visit time.
///
/// The counter is bumped and the last-visit timestamp overwritten on every
/// call; the previous timestamp only feeds the returned outcome.
pub fn record_visit(store: &impl KeyValueStore, now: DateTime<Utc>) -> Result<VisitOutcome, StoreError> {
    let previous = store
        .get(keys::VISITOR_COUNT)?
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .unwrap_or(0);
    let last_visit = store
        .get(keys::LAST_VISIT)?
        .and_then(|raw| DateTime::parse_from_rfc3339(raw.trim()).ok())
        .map(|at| at.with_timezone(&Utc));

    let count = previous.saturating_add(1);
    store.set(keys::VISITOR_COUNT, &count.to_string())?;
    store.set(keys::LAST_VISIT, &now.to_rfc3339_opts(SecondsFormat::Millis, true))?;

    Ok(match last_visit {
        None => VisitOutcome::FirstVisit { count },
        Some(last) => VisitOutcome::Returning {
            count,
            days_since: (now - last).num_days().max(0),
        },
    })
}

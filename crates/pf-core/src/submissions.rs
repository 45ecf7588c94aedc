//! Append-only log of accepted contact form submissions.

use crate::error::StoreError;
use crate::storage::{self, KeyValueStore, keys};
use crate::validate::{ContactForm, FormReport};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
    /// ISO-8601 UTC with millisecond precision, e.g. `2026-10-19T08:30:00.000Z`.
    #[serde(default)]
    pub timestamp: String,
}

impl Submission {
    pub fn new(form: &ContactForm, at: DateTime<Utc>) -> Self {
        Self {
            name: form.name.trim().to_owned(),
            email: form.email.trim().to_owned(),
            message: form.message.trim().to_owned(),
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

pub struct SubmissionLog;

impl SubmissionLog {
    /// Raw stored entries, untouched. Text that is not a JSON array is
    /// treated as an empty log.
    fn load_raw(store: &impl KeyValueStore) -> Result<Vec<Value>, StoreError> {
        let Some(raw) = store.get(keys::FORM_SUBMISSIONS)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str::<Vec<Value>>(&raw) {
            Ok(entries) => Ok(entries),
            Err(err) => {
                warn!("discarding unreadable {}: {err}", keys::FORM_SUBMISSIONS);
                Ok(Vec::new())
            }
        }
    }

    /// Read the persisted log. Entries that do not decode as a submission
    /// are skipped here but kept in storage.
    pub fn load(store: &impl KeyValueStore) -> Result<Vec<Submission>, StoreError> {
        Ok(Self::load_raw(store)?
            .into_iter()
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect())
    }

    /// Append one submission and return the new stored entry count.
    pub fn append(store: &impl KeyValueStore, submission: Submission) -> Result<usize, StoreError> {
        let mut entries = Self::load_raw(store)?;
        entries.push(serde_json::to_value(submission)?);
        storage::set_json(store, keys::FORM_SUBMISSIONS, &entries)?;
        Ok(entries.len())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one field failed; nothing was stored.
    Rejected(FormReport),
    /// Stored; `total` is the new log length.
    Accepted { total: usize },
}

/// Validate and, if every field passes, store the form and clear it.
///
/// On a storage error the form is left untouched.
pub fn submit(
    store: &impl KeyValueStore,
    form: &mut ContactForm,
    now: DateTime<Utc>,
) -> Result<SubmitOutcome, StoreError> {
    let report = form.validate();
    if !report.is_valid() {
        return Ok(SubmitOutcome::Rejected(report));
    }
    let total = SubmissionLog::append(store, Submission::new(form, now))?;
    *form = ContactForm::default();
    Ok(SubmitOutcome::Accepted { total })
}

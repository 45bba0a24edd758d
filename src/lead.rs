//! Lead capture
//!
//! The form next to the wheel posts `{name, email, company, nextShow, notes}`.
//! A well-formed submission always succeeds for the visitor: storage and the
//! notification email are best effort and their failures are only logged.

use serde::{Deserialize, Serialize};

const MAX_NAME_LEN: usize = 100;
const MAX_EMAIL_LEN: usize = 254;
const MAX_COMPANY_LEN: usize = 120;
const MAX_SHOW_LEN: usize = 120;
const MAX_NOTES_LEN: usize = 2000;

/// Raw form payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
    pub company: String,
    pub next_show: Option<String>,
    pub notes: Option<String>,
}

/// A submission that passed validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub name: String,
    pub email: String,
    pub company: String,
    pub next_show: Option<String>,
    pub notes: Option<String>,
}

/// Schema violations, reported back to the visitor
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeadError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Field too long: {field} (max {max} characters)")]
    TooLong { field: &'static str, max: usize },

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
}

/// Failure in a downstream collaborator (store or mailer)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{service} unavailable: {reason}")]
pub struct DownstreamError {
    pub service: &'static str,
    pub reason: String,
}

impl DownstreamError {
    pub fn new(service: &'static str, reason: impl Into<String>) -> Self {
        Self {
            service,
            reason: reason.into(),
        }
    }
}

fn required(field: &'static str, value: &str, max: usize) -> Result<String, LeadError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(LeadError::MissingField(field));
    }
    if value.chars().count() > max {
        return Err(LeadError::TooLong { field, max });
    }
    Ok(value.to_string())
}

fn optional(field: &'static str, value: Option<&str>, max: usize) -> Result<Option<String>, LeadError> {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    if value.chars().count() > max {
        return Err(LeadError::TooLong { field, max });
    }
    Ok(Some(value.to_string()))
}

fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

impl LeadSubmission {
    /// Check the payload against the form schema
    pub fn validate(&self) -> Result<Lead, LeadError> {
        let name = required("name", &self.name, MAX_NAME_LEN)?;
        let email = required("email", &self.email, MAX_EMAIL_LEN)?;
        if !is_valid_email(&email) {
            return Err(LeadError::InvalidEmail(email));
        }
        let company = required("company", &self.company, MAX_COMPANY_LEN)?;
        let next_show = optional("nextShow", self.next_show.as_deref(), MAX_SHOW_LEN)?;
        let notes = optional("notes", self.notes.as_deref(), MAX_NOTES_LEN)?;

        Ok(Lead {
            name,
            email,
            company,
            next_show,
            notes,
        })
    }
}

/// Where validated leads are kept
pub trait LeadStore {
    fn store(&mut self, lead: &Lead) -> Result<(), DownstreamError>;
}

/// Who gets told about a new lead
pub trait LeadNotifier {
    fn notify(&mut self, lead: &Lead) -> Result<(), DownstreamError>;
}

/// What happened downstream of an accepted submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub stored: bool,
    pub notified: bool,
}

/// Validate-then-forward pipeline for the lead form
pub struct LeadIntake<S, N> {
    store: S,
    notifier: N,
}

impl<S: LeadStore, N: LeadNotifier> LeadIntake<S, N> {
    pub fn new(store: S, notifier: N) -> Self {
        Self { store, notifier }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Validate and forward. Only schema violations are errors.
    pub fn submit(&mut self, submission: &LeadSubmission) -> Result<SubmissionReceipt, LeadError> {
        let lead = match submission.validate() {
            Ok(lead) => lead,
            Err(e) => {
                log::info!("Lead rejected: {}", e);
                return Err(e);
            }
        };

        let stored = match self.store.store(&lead) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Lead from {} not stored: {}", lead.email, e);
                false
            }
        };
        let notified = match self.notifier.notify(&lead) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Lead from {} not announced: {}", lead.email, e);
                false
            }
        };

        log::info!(
            "Lead accepted from {} ({}), stored: {}, notified: {}",
            lead.email,
            lead.company,
            stored,
            notified
        );
        Ok(SubmissionReceipt { stored, notified })
    }
}

/// Keeps leads in memory (demo host and tests)
#[derive(Debug, Default)]
pub struct MemoryLeadStore {
    pub leads: Vec<Lead>,
}

impl LeadStore for MemoryLeadStore {
    fn store(&mut self, lead: &Lead) -> Result<(), DownstreamError> {
        self.leads.push(lead.clone());
        Ok(())
    }
}

/// Notifier that only writes to the log
#[derive(Debug, Default)]
pub struct LogNotifier;

impl LeadNotifier for LogNotifier {
    fn notify(&mut self, lead: &Lead) -> Result<(), DownstreamError> {
        log::info!("New lead: {} <{}> from {}", lead.name, lead.email, lead.company);
        Ok(())
    }
}

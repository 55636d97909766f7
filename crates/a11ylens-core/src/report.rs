//! Audit report types.
//!
//! Shaped after the wire format of the analysis backend: a scored report
//! with a flat list of findings. The store treats the whole report as an
//! opaque payload and never inspects individual fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Result of a completed accessibility audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditReport {
    /// Unique id assigned by the analysis backend.
    pub id: Uuid,
    /// URL of the audited page or document.
    pub url: String,
    /// Overall accessibility score, 0-100.
    pub score: u8,
    /// Individual findings, worst first as returned by the backend.
    #[serde(default)]
    pub issues: Vec<AuditIssue>,
    /// When the analysis completed.
    pub completed_at: DateTime<Utc>,
}

impl AuditReport {
    /// Create a report with no findings, scored now.
    #[must_use]
    pub fn new(url: impl Into<String>, score: u8) -> Self {
        Self {
            id: Uuid::new_v4(),
            url: url.into(),
            score,
            issues: Vec::new(),
            completed_at: Utc::now(),
        }
    }
}

/// A single accessibility finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditIssue {
    /// Rule identifier (e.g. a WCAG success criterion or backend rule id).
    pub rule: String,
    /// Human-readable description of the problem.
    pub message: String,
    /// How severe the finding is.
    pub severity: Severity,
    /// CSS selector of the offending element, when the target is a page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
    /// Link to remediation guidance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_url: Option<String>,
}

/// Severity of a finding, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Cosmetic or advisory.
    Minor,
    /// Degrades the experience for some users.
    Moderate,
    /// Blocks common assistive-technology flows.
    Serious,
    /// Makes content unusable with assistive technology.
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Minor => "minor",
            Self::Moderate => "moderate",
            Self::Serious => "serious",
            Self::Critical => "critical",
        };
        f.write_str(s)
    }
}

/// Kind of document submitted for a document audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// PDF document.
    Pdf,
    /// Word document.
    Word,
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pdf => "pdf",
            Self::Word => "word",
        };
        f.write_str(s)
    }
}

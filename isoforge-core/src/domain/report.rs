// isoforge-core/src/domain/report.rs
//
// A run never aborts on bad source data. Everything that went wrong is
// recorded here (and logged), then saved next to the generated files.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    /// A fetcher returned nothing (or failed) for one item.
    SourceUnavailable {
        source: String,
        item: String,
        detail: String,
    },
    /// A country without continent, or a parent chain that never reaches its country.
    UnresolvableReference { code: String, detail: String },
    /// A parent chain that loops back on itself.
    CyclicHierarchy { code: String, country: String },
    /// One output file could not be produced. The other files are unaffected.
    WriteFailed { file: String, detail: String },
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceUnavailable {
                source,
                item,
                detail,
            } => write!(f, "[{}] nothing fetched for {}: {}", source, item, detail),
            Self::UnresolvableReference { code, detail } => {
                write!(f, "unresolvable reference on {}: {}", code, detail)
            }
            Self::CyclicHierarchy { code, country } => {
                write!(f, "cyclic parent chain from {} (country {})", code, country)
            }
            Self::WriteFailed { file, detail } => write!(f, "could not write {}: {}", file, detail),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunReport {
    pub generated_at: String,
    pub project_name: String,
    pub countries: usize,
    pub subdivisions: usize,
    pub aliases: usize,
    pub currencies: usize,
    pub subdivision_types: usize,
    /// Output files written, relative to the target directory.
    pub files: Vec<String>,
    pub issues: Vec<Issue>,
}

impl RunReport {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            project_name: project_name.into(),
            ..Self::default()
        }
    }

    /// Records a degraded-data condition and logs it.
    pub fn record(&mut self, issue: Issue) {
        warn!("⚠️  {}", issue);
        self.issues.push(issue);
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }
}

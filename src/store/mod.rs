//! Persistence ports.
//!
//! The core never talks to a database directly. It reads the roster and
//! writes summaries through the narrow traits below, so any backend (or the
//! bundled [`InMemoryStore`]) can sit behind them.

mod memory;

use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeSummary, PeriodToken, RosterEntry};

pub use memory::InMemoryStore;

/// Result of a bulk summary insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "status", content = "count", rename_all = "snake_case")]
pub enum InsertOutcome {
    /// This many summaries were written.
    Inserted(usize),
    /// The batch was empty; nothing was written.
    NothingToInsert,
}

/// Read access to the employee roster.
pub trait RosterSource {
    /// Returns every roster row. An empty roster is a valid answer.
    fn roster(&self) -> EngineResult<Vec<RosterEntry>>;
}

/// Bulk writer for one period's summaries.
pub trait SummarySink {
    /// Inserts the whole batch under the period's bucket.
    fn insert_summaries(
        &self,
        period: &PeriodToken,
        summaries: &[EmployeeSummary],
    ) -> EngineResult<InsertOutcome>;
}

/// Read access to every stored period bucket.
pub trait SummaryArchive {
    /// Returns each bucket with its summaries, ordered by period label.
    fn buckets(&self) -> EngineResult<Vec<(PeriodToken, Vec<EmployeeSummary>)>>;
}

/// Single-field writer for an employee's running average.
pub trait AverageStore {
    /// Sets the average on the roster row with this exact full name,
    /// creating the row if there is none.
    fn set_average(&self, full_name: &str, average: f64) -> EngineResult<()>;
}

/// Everything the HTTP layer needs from a backend.
pub trait AttendanceStore:
    RosterSource + SummarySink + SummaryArchive + AverageStore + Send + Sync
{
}

impl<T> AttendanceStore for T where
    T: RosterSource + SummarySink + SummaryArchive + AverageStore + Send + Sync
{
}

/// Validates and writes an employee's running average.
///
/// A missing or blank name, or a missing value, is rejected before anything
/// is written. Non-finite values are rejected as invalid.
///
/// # Example
///
/// ```
/// use attendance_engine::store::{InMemoryStore, RosterSource, upsert_average};
///
/// let store = InMemoryStore::new();
/// upsert_average(&store, Some("Jane Smith"), Some(8.5)).unwrap();
/// assert_eq!(store.roster().unwrap()[0].average, Some(8.5));
///
/// assert!(upsert_average(&store, None, Some(8.5)).is_err());
/// ```
pub fn upsert_average<S>(store: &S, name: Option<&str>, average: Option<f64>) -> EngineResult<()>
where
    S: AverageStore + ?Sized,
{
    let name = name
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| EngineError::MissingField {
            field: "name".to_string(),
        })?;

    let average = average.ok_or_else(|| EngineError::MissingField {
        field: "average".to_string(),
    })?;

    if !average.is_finite() {
        return Err(EngineError::InvalidField {
            field: "average".to_string(),
            message: "must be a finite number".to_string(),
        });
    }

    store.set_average(name, average)?;
    tracing::info!(employee = %name, average, "Updated running average");
    Ok(())
}

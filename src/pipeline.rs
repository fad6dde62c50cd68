//! One upload run, end to end.
//!
//! Raw bytes → grid → daily records + period → per-employee summaries →
//! one bulk write to the summary sink. The run holds no state of its own, so
//! independent uploads can be processed concurrently.

use serde::Serialize;
use tracing::{info, warn};

use crate::aggregation::aggregate;
use crate::config::RulesConfig;
use crate::error::EngineResult;
use crate::extraction::extract_from_bytes;
use crate::models::PeriodToken;
use crate::store::{InsertOutcome, RosterSource, SummarySink};

/// What an upload run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadReport {
    /// The period bucket the summaries were written to.
    pub period: PeriodToken,
    /// Number of daily records extracted.
    pub records: usize,
    /// Number of employee summaries produced.
    pub employees: usize,
    /// What the sink reported.
    pub outcome: InsertOutcome,
}

/// Processes one uploaded time report.
///
/// Extraction never fails; an unreadable file just produces no summaries.
/// A roster read failure is logged and treated as an empty roster. The sink
/// is called exactly once with the whole batch, and its error, if any, is
/// returned to the caller.
///
/// # Example
///
/// ```
/// use attendance_engine::config::ConfigLoader;
/// use attendance_engine::pipeline::process_upload;
/// use attendance_engine::store::{InMemoryStore, InsertOutcome};
///
/// let csv = "Employee:,,,Jane Smith\nLu,2025-09-01,08:00,17:00,9:00\n";
/// let store = InMemoryStore::new();
/// let report = process_upload(
///     csv.as_bytes(),
///     "NGTimereport-20250901-20250930.csv",
///     ConfigLoader::with_defaults().config(),
///     &store,
/// )
/// .unwrap();
///
/// assert_eq!(report.period.as_str(), "september_2025");
/// assert_eq!(report.outcome, InsertOutcome::Inserted(1));
/// ```
pub fn process_upload<S>(
    bytes: &[u8],
    file_name: &str,
    rules: &RulesConfig,
    store: &S,
) -> EngineResult<UploadReport>
where
    S: RosterSource + SummarySink + ?Sized,
{
    let extraction = extract_from_bytes(bytes, file_name, rules.extraction());
    let records = extraction.records.len();

    let roster = store.roster().unwrap_or_else(|err| {
        warn!(error = %err, "Roster unavailable, using defaults");
        Vec::new()
    });

    let summaries = aggregate(
        extraction.records,
        &extraction.period,
        &roster,
        rules.aggregation(),
    );

    let outcome = store.insert_summaries(&extraction.period, &summaries)?;

    info!(
        file_name = %file_name,
        period = %extraction.period,
        records,
        employees = summaries.len(),
        outcome = ?outcome,
        "Processed attendance upload"
    );

    Ok(UploadReport {
        period: extraction.period,
        records,
        employees: summaries.len(),
        outcome,
    })
}

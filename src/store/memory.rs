//! In-memory store.

use std::collections::BTreeMap;

use parking_lot::RwLock;

use crate::error::EngineResult;
use crate::models::{EmployeeSummary, PeriodToken, RosterEntry};

use super::{AverageStore, InsertOutcome, RosterSource, SummaryArchive, SummarySink};

/// A process-local store implementing every persistence port.
///
/// Inserts append to the period's bucket, like a bulk insert into a
/// collection named after the period.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    roster: RwLock<Vec<RosterEntry>>,
    buckets: RwLock<BTreeMap<PeriodToken, Vec<EmployeeSummary>>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with roster rows.
    pub fn with_roster(roster: Vec<RosterEntry>) -> Self {
        Self {
            roster: RwLock::new(roster),
            ..Self::default()
        }
    }

    /// Returns a copy of one bucket's summaries.
    pub fn bucket(&self, period: &PeriodToken) -> Vec<EmployeeSummary> {
        self.buckets.read().get(period).cloned().unwrap_or_default()
    }
}

impl RosterSource for InMemoryStore {
    fn roster(&self) -> EngineResult<Vec<RosterEntry>> {
        Ok(self.roster.read().clone())
    }
}

impl SummarySink for InMemoryStore {
    fn insert_summaries(
        &self,
        period: &PeriodToken,
        summaries: &[EmployeeSummary],
    ) -> EngineResult<InsertOutcome> {
        if summaries.is_empty() {
            return Ok(InsertOutcome::NothingToInsert);
        }

        self.buckets
            .write()
            .entry(period.clone())
            .or_default()
            .extend_from_slice(summaries);

        Ok(InsertOutcome::Inserted(summaries.len()))
    }
}

impl SummaryArchive for InMemoryStore {
    fn buckets(&self) -> EngineResult<Vec<(PeriodToken, Vec<EmployeeSummary>)>> {
        Ok(self
            .buckets
            .read()
            .iter()
            .map(|(period, summaries)| (period.clone(), summaries.clone()))
            .collect())
    }
}

impl AverageStore for InMemoryStore {
    fn set_average(&self, full_name: &str, average: f64) -> EngineResult<()> {
        let mut roster = self.roster.write();
        match roster.iter_mut().find(|entry| entry.full_name == full_name) {
            Some(entry) => entry.average = Some(average),
            None => roster.push(RosterEntry {
                average: Some(average),
                ..RosterEntry::named(full_name)
            }),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Breakdown;
    use rust_decimal::Decimal;

    fn summary(name: &str, period: &PeriodToken) -> EmployeeSummary {
        EmployeeSummary {
            name: name.to_string(),
            area: "No area".to_string(),
            team: "No team".to_string(),
            group: None,
            average: None,
            attendance: Decimal::ONE_HUNDRED,
            period: period.clone(),
            breakdown: Breakdown::Weekly {
                hoursweek: "08:00".to_string(),
                days: 0,
            },
        }
    }

    #[test]
    fn test_empty_batch_writes_nothing() {
        let store = InMemoryStore::new();
        let period = PeriodToken::from_label("may_2025");
        assert_eq!(
            store.insert_summaries(&period, &[]).unwrap(),
            InsertOutcome::NothingToInsert
        );
        assert!(store.buckets().unwrap().is_empty());
    }

    #[test]
    fn test_inserts_append_to_bucket() {
        let store = InMemoryStore::new();
        let period = PeriodToken::from_label("may_2025");

        store.insert_summaries(&period, &[summary("Ana", &period)]).unwrap();
        let outcome = store
            .insert_summaries(&period, &[summary("Bob", &period), summary("Cy", &period)])
            .unwrap();

        assert_eq!(outcome, InsertOutcome::Inserted(2));
        assert_eq!(store.bucket(&period).len(), 3);
    }

    #[test]
    fn test_set_average_updates_exact_name_only() {
        let store = InMemoryStore::with_roster(vec![RosterEntry::named("Jane Smith")]);

        store.set_average("Jane Smith", 9.0).unwrap();
        store.set_average("jane smith", 7.0).unwrap();

        let roster = store.roster().unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].average, Some(9.0));
        assert_eq!(roster[1].full_name, "jane smith");
    }
}

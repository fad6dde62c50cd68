//! Per-employee attendance reports across all stored periods.
//!
//! Joins every stored period bucket with the roster and returns one entry per
//! employee: roster-derived personal data plus attendance for each period.

use std::collections::BTreeMap;

use crate::aggregation::{RosterIndex, normalize_name, title_case};
use crate::error::EngineResult;
use crate::models::{
    Breakdown, EmployeeReport, EmployeeSummary, PeriodAttendance, PeriodToken, PersonalData,
    RosterEntry,
};
use crate::store::{RosterSource, SummaryArchive};

const NOT_AVAILABLE: &str = "N/A";

/// Builds reports keyed by title-cased employee name.
///
/// Personal data comes from the roster row matching the normalized name and
/// falls back to `"N/A"` text when there is none. When an employee appears
/// twice in one period, the later summary wins.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{Breakdown, EmployeeSummary, PeriodToken};
/// use attendance_engine::report::build_report;
/// use rust_decimal::Decimal;
/// use std::collections::BTreeMap;
///
/// let period = PeriodToken::from_label("october_2025");
/// let summary = EmployeeSummary {
///     name: "Jane Smith".to_string(),
///     area: "No area".to_string(),
///     team: "No team".to_string(),
///     group: None,
///     average: None,
///     attendance: Decimal::new(9000, 2),
///     period: period.clone(),
///     breakdown: Breakdown::PerDay {
///         hourstotal: "40:00".to_string(),
///         hoursperday: BTreeMap::new(),
///     },
/// };
///
/// let report = build_report(&[], &[(period, vec![summary])]);
/// assert_eq!(report["Jane Smith"].personal.area, "N/A");
/// assert_eq!(report["Jane Smith"].periods["october_2025"].hourstotal, "40:00");
/// ```
pub fn build_report(
    roster: &[RosterEntry],
    buckets: &[(PeriodToken, Vec<EmployeeSummary>)],
) -> BTreeMap<String, EmployeeReport> {
    let index = RosterIndex::new(roster);
    let mut reports: BTreeMap<String, EmployeeReport> = BTreeMap::new();

    for (period, summaries) in buckets {
        for summary in summaries {
            let normalized = normalize_name(&summary.name);
            let report = reports
                .entry(title_case(&normalized))
                .or_insert_with(|| EmployeeReport {
                    personal: personal_data(index.get(&normalized)),
                    periods: BTreeMap::new(),
                });
            report
                .periods
                .insert(period.to_string(), period_attendance(summary));
        }
    }

    reports
}

/// Reads the roster and every bucket from a store and builds the report.
pub fn load_report<S>(store: &S) -> EngineResult<BTreeMap<String, EmployeeReport>>
where
    S: RosterSource + SummaryArchive + ?Sized,
{
    let roster = store.roster()?;
    let buckets = store.buckets()?;
    tracing::debug!(
        roster = roster.len(),
        periods = buckets.len(),
        "Building employee report"
    );
    Ok(build_report(&roster, &buckets))
}

fn text_or_na(value: Option<&String>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), String::clone)
}

fn personal_data(entry: Option<&RosterEntry>) -> PersonalData {
    PersonalData {
        level: text_or_na(entry.and_then(|e| e.level.as_ref())),
        shift: text_or_na(entry.and_then(|e| e.shift.as_ref())),
        group: text_or_na(entry.and_then(|e| e.group.as_ref())),
        team: text_or_na(entry.and_then(|e| e.team.as_ref())),
        average: entry.and_then(|e| e.average),
        area: text_or_na(entry.and_then(|e| e.area.as_ref())),
    }
}

fn period_attendance(summary: &EmployeeSummary) -> PeriodAttendance {
    let hoursperday = match &summary.breakdown {
        Breakdown::PerDay { hoursperday, .. } => hoursperday.clone(),
        Breakdown::Weekly { .. } => BTreeMap::new(),
    };

    PeriodAttendance {
        attendance: summary.attendance,
        hourstotal: summary.breakdown.total().to_string(),
        hoursperday,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{InMemoryStore, SummarySink};
    use rust_decimal::Decimal;

    fn summary(name: &str, period: &str, total: &str) -> EmployeeSummary {
        let mut days = BTreeMap::new();
        days.insert(format!("01-{}", period), total.to_string());
        EmployeeSummary {
            name: name.to_string(),
            area: "No area".to_string(),
            team: "No team".to_string(),
            group: None,
            average: None,
            attendance: Decimal::ONE_HUNDRED,
            period: PeriodToken::from_label(period),
            breakdown: Breakdown::PerDay {
                hourstotal: total.to_string(),
                hoursperday: days,
            },
        }
    }

    #[test]
    fn test_periods_are_collected_per_employee() {
        let september = PeriodToken::from_label("september_2025");
        let october = PeriodToken::from_label("october_2025");
        let buckets = vec![
            (september, vec![summary("Jane Smith", "september_2025", "10:00")]),
            (october, vec![summary("jane smith", "october_2025", "12:00")]),
        ];

        let report = build_report(&[], &buckets);

        assert_eq!(report.len(), 1);
        let jane = &report["Jane Smith"];
        assert_eq!(jane.periods.len(), 2);
        assert_eq!(jane.periods["october_2025"].hourstotal, "12:00");
        assert_eq!(
            jane.periods["september_2025"].hoursperday["01-september_2025"],
            "10:00"
        );
    }

    #[test]
    fn test_personal_data_from_roster() {
        let roster = vec![RosterEntry {
            area: Some("Ops".to_string()),
            level: Some("3".to_string()),
            average: Some(8.0),
            ..RosterEntry::named("Jane Smith")
        }];
        let buckets = vec![(
            PeriodToken::from_label("may_2025"),
            vec![summary("Jane Smith", "may_2025", "01:00")],
        )];

        let personal = &build_report(&roster, &buckets)["Jane Smith"].personal;

        assert_eq!(personal.area, "Ops");
        assert_eq!(personal.level, "3");
        assert_eq!(personal.average, Some(8.0));
        assert_eq!(personal.shift, "N/A");
        assert_eq!(personal.team, "N/A");
    }

    #[test]
    fn test_weekly_summaries_report_week_total() {
        let mut weekly = summary("Ana", "may_2025", "00:00");
        weekly.breakdown = Breakdown::Weekly {
            hoursweek: "38:00".to_string(),
            days: 4,
        };
        let report = build_report(&[], &[(PeriodToken::from_label("may_2025"), vec![weekly])]);

        let may = &report["Ana"].periods["may_2025"];
        assert_eq!(may.hourstotal, "38:00");
        assert!(may.hoursperday.is_empty());
    }

    #[test]
    fn test_load_report_reads_store() {
        let store = InMemoryStore::with_roster(vec![RosterEntry::named("Ana")]);
        let period = PeriodToken::from_label("may_2025");
        store
            .insert_summaries(&period, &[summary("Ana", "may_2025", "02:00")])
            .unwrap();

        let report = load_report(&store).unwrap();
        assert_eq!(report["Ana"].periods["may_2025"].hourstotal, "02:00");
    }
}

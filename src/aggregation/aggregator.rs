//! Per-employee aggregation.
//!
//! This module groups the extractor's flat record list by employee and
//! produces one [`EmployeeSummary`] per group, in the output shape chosen by
//! [`AggregationMode`].

use std::collections::BTreeMap;

use tracing::debug;

use crate::config::{AggregationMode, AggregationRules};
use crate::models::{Breakdown, DailyRecord, EmployeeSummary, PeriodToken, RosterEntry};

use super::attendance::{attendance_percentage, counts_as_attended};
use super::duration::{format_minutes, parse_minutes};
use super::names::{normalize_name, title_case};
use super::roster::RosterIndex;

/// Groups records by normalized name, preserving input order within each
/// group. Groups come out sorted by name.
pub fn group_by_employee(records: Vec<DailyRecord>) -> BTreeMap<String, Vec<DailyRecord>> {
    let mut groups: BTreeMap<String, Vec<DailyRecord>> = BTreeMap::new();
    for record in records {
        groups
            .entry(normalize_name(&record.name))
            .or_default()
            .push(record);
    }
    groups
}

/// Aggregates one period's records into per-employee summaries.
///
/// Day labels are positional within each group (`01-<period>`,
/// `02-<period>`, ...) and ignore the parsed calendar day. Roster attributes
/// are looked up by normalized name; missing matches, and an empty roster,
/// fall back to the configured defaults.
///
/// # Example
///
/// ```
/// use attendance_engine::aggregation::aggregate;
/// use attendance_engine::config::AggregationRules;
/// use attendance_engine::models::{Breakdown, DailyRecord, PeriodToken};
///
/// let day = |total: &str| DailyRecord {
///     name: "Jane Smith".to_string(),
///     day: None,
///     entry: Some("08:00".to_string()),
///     exit: None,
///     total: Some(total.to_string()),
///     note: None,
/// };
/// let period = PeriodToken::from_label("september_2025");
/// let summaries = aggregate(
///     vec![day("1:30"), day("2:15")],
///     &period,
///     &[],
///     &AggregationRules::default(),
/// );
///
/// assert_eq!(summaries.len(), 1);
/// match &summaries[0].breakdown {
///     Breakdown::PerDay { hourstotal, hoursperday } => {
///         assert_eq!(hourstotal, "03:45");
///         assert_eq!(hoursperday["01-september_2025"], "01:30");
///         assert_eq!(hoursperday["02-september_2025"], "02:15");
///     }
///     other => panic!("unexpected breakdown {:?}", other),
/// }
/// ```
pub fn aggregate(
    records: Vec<DailyRecord>,
    period: &PeriodToken,
    roster: &[RosterEntry],
    rules: &AggregationRules,
) -> Vec<EmployeeSummary> {
    let index = RosterIndex::new(roster);

    group_by_employee(records)
        .into_iter()
        .map(|(name, days)| summarize(&name, &days, period, &index, rules))
        .collect()
}

fn summarize(
    name: &str,
    days: &[DailyRecord],
    period: &PeriodToken,
    index: &RosterIndex<'_>,
    rules: &AggregationRules,
) -> EmployeeSummary {
    let mut total_minutes = 0;
    let mut hours_per_day = BTreeMap::new();

    for (position, record) in days.iter().enumerate() {
        let minutes = parse_minutes(record.total.as_deref());
        total_minutes += minutes;
        hours_per_day.insert(
            format!("{:02}-{}", position + 1, period),
            format_minutes(minutes),
        );
    }

    let attended = days
        .iter()
        .filter(|record| counts_as_attended(record, &rules.missing_checkout_note))
        .count();
    let attendance = attendance_percentage(attended, days.len());

    let breakdown = match rules.mode {
        AggregationMode::PerDay => Breakdown::PerDay {
            hourstotal: format_minutes(total_minutes),
            hoursperday: hours_per_day,
        },
        AggregationMode::Weekly => Breakdown::Weekly {
            hoursweek: format_minutes(total_minutes),
            days: u32::try_from(attended).unwrap_or(u32::MAX).saturating_sub(1),
        },
    };

    let attributes = index.attributes(name, rules);
    debug!(
        employee = %name,
        days = days.len(),
        attended,
        total = %breakdown.total(),
        matched_roster = index.get(name).is_some(),
        "Summarized employee"
    );

    EmployeeSummary {
        name: title_case(name),
        area: attributes.area,
        team: attributes.team,
        group: attributes.group,
        average: attributes.average,
        attendance,
        period: period.clone(),
        breakdown,
    }
}

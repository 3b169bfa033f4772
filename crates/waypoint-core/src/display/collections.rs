//! Collection wrapper types for displaying groups of domain objects.
//!
//! This module provides wrapper types that format collections of domain objects
//! with consistent structure and empty collection handling.

use std::{fmt, ops::Index};

use jiff::{Timestamp, civil::Date, tz::TimeZone};

use super::datetime::{DayLabel, LocalTime};
use crate::models::{PlanSummary, PlanType};

/// Newtype wrapper for displaying collections of plan summaries.
///
/// Handles empty collections gracefully.
///
/// # Examples
///
/// ```rust
/// use waypoint_core::{
///     display::PlanSummaries,
///     models::{PlanSummary, PlanType},
/// };
/// use jiff::Timestamp;
///
/// let plan = PlanSummary {
///     id: "k2x9".to_string(),
///     title: "Karachi to Khunjerab".to_string(),
///     plan_type: PlanType::Travel,
///     start_location: Some("Karachi".to_string()),
///     end_location: Some("Khunjerab Pass".to_string()),
///     created_at: Timestamp::now(),
///     total_tasks: 5,
///     completed_tasks: 2,
///     high_risk_tasks: 1,
///     health_alerts: 1,
/// };
///
/// let output = format!("{}", PlanSummaries(vec![plan]));
/// assert!(output.contains("Karachi to Khunjerab"));
/// assert!(output.contains("(2/5)"));
/// ```
pub struct PlanSummaries(pub Vec<PlanSummary>);

impl PlanSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of plan summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the plan summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, PlanSummary> {
        self.0.iter()
    }
}

impl Index<usize> for PlanSummaries {
    type Output = PlanSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a PlanSummaries {
    type Item = &'a PlanSummary;
    type IntoIter = std::slice::Iter<'a, PlanSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for PlanSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No plans created yet.")
        } else {
            for plan in &self.0 {
                write!(f, "{}", plan)?;
            }
            Ok(())
        }
    }
}

/// Plans created on one local calendar day, split by kind.
#[derive(Debug, Clone)]
pub struct HistoryDay {
    pub date: Date,
    pub travel: Vec<PlanSummary>,
    pub general: Vec<PlanSummary>,
}

/// Planning history grouped by local creation date, newest day first.
///
/// Within a day plans keep the order they were given in, which for the store
/// is most-recent-first.
pub struct PlanHistory {
    days: Vec<HistoryDay>,
    today: Date,
    tz: TimeZone,
}

impl PlanHistory {
    /// Groups summaries relative to `today` in timezone `tz`.
    pub fn new(summaries: Vec<PlanSummary>, today: Date, tz: TimeZone) -> Self {
        let mut days: Vec<HistoryDay> = Vec::new();
        for summary in summaries {
            let date = summary.created_at.to_zoned(tz.clone()).date();
            let idx = match days.iter().position(|d| d.date == date) {
                Some(idx) => idx,
                None => {
                    days.push(HistoryDay {
                        date,
                        travel: Vec::new(),
                        general: Vec::new(),
                    });
                    days.len() - 1
                }
            };
            if summary.plan_type == PlanType::Travel {
                days[idx].travel.push(summary);
            } else {
                days[idx].general.push(summary);
            }
        }
        days.sort_by(|a, b| b.date.cmp(&a.date));

        Self { days, today, tz }
    }

    /// Groups summaries relative to the current day in the system timezone.
    pub fn for_now(summaries: Vec<PlanSummary>) -> Self {
        let tz = TimeZone::system();
        let today = Timestamp::now().to_zoned(tz.clone()).date();
        Self::new(summaries, today, tz)
    }

    pub fn days(&self) -> &[HistoryDay] {
        &self.days
    }
}

fn plural(n: u32, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

impl fmt::Display for PlanHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Planning History")?;
        writeln!(f)?;

        if self.days.is_empty() {
            return writeln!(
                f,
                "No plans created yet. Start planning your travels and daily tasks to see your history here!"
            );
        }

        for day in &self.days {
            writeln!(
                f,
                "## {}",
                DayLabel {
                    date: day.date,
                    today: self.today,
                }
            )?;
            writeln!(f)?;

            if !day.travel.is_empty() {
                writeln!(f, "### Travel Plans")?;
                writeln!(f)?;
                for plan in &day.travel {
                    let mut line = format!(
                        "- **{}** {}",
                        plan.title,
                        plural(plan.total_tasks, "task")
                    );
                    if let (Some(start), Some(end)) = (&plan.start_location, &plan.end_location) {
                        line.push_str(&format!(", {start} → {end}"));
                    }
                    if plan.high_risk_tasks > 0 {
                        line.push_str(&format!(", ⚠ {} high risk", plan.high_risk_tasks));
                    }
                    if plan.health_alerts > 0 {
                        line.push_str(&format!(", {}", plural(plan.health_alerts, "health alert")));
                    }
                    writeln!(f, "{line} ({})", LocalTime(&plan.created_at, &self.tz))?;
                }
                writeln!(f)?;
            }

            if !day.general.is_empty() {
                if !day.travel.is_empty() {
                    writeln!(f, "### General Plans")?;
                    writeln!(f)?;
                }
                for plan in &day.general {
                    writeln!(
                        f,
                        "- **{}** {} • {}",
                        plan.title,
                        plural(plan.total_tasks, "task"),
                        LocalTime(&plan.created_at, &self.tz)
                    )?;
                }
                writeln!(f)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn summary(title: &str, plan_type: PlanType, at: &str) -> PlanSummary {
        PlanSummary {
            id: title.to_lowercase(),
            title: title.to_string(),
            plan_type,
            start_location: None,
            end_location: None,
            created_at: at.parse().unwrap(),
            total_tasks: 1,
            completed_tasks: 0,
            high_risk_tasks: 0,
            health_alerts: 0,
        }
    }

    #[test]
    fn test_history_groups_by_day_newest_first() {
        let summaries = vec![
            summary("Hunza", PlanType::Travel, "2026-10-16T08:00:00Z"),
            summary("Groceries", PlanType::General, "2026-10-16T07:00:00Z"),
            summary("Gilgit", PlanType::Travel, "2026-10-15T10:00:00Z"),
        ];
        let history = PlanHistory::new(summaries, date(2026, 10, 16), TimeZone::UTC);

        assert_eq!(history.days().len(), 2);
        assert_eq!(history.days()[0].date, date(2026, 10, 16));
        assert_eq!(history.days()[0].travel.len(), 1);
        assert_eq!(history.days()[0].general.len(), 1);
        assert_eq!(history.days()[1].travel[0].title, "Gilgit");

        let output = history.to_string();
        let today = output.find("## Today").unwrap();
        let yesterday = output.find("## Yesterday").unwrap();
        assert!(today < yesterday);
        assert!(output.contains("### General Plans"));
        assert!(output.contains("- **Hunza** 1 task (08:00)"));
    }

    #[test]
    fn test_history_general_only_day_has_no_subheading() {
        let summaries = vec![summary("Errands", PlanType::General, "2026-10-16T07:00:00Z")];
        let output = PlanHistory::new(summaries, date(2026, 10, 16), TimeZone::UTC).to_string();
        assert!(!output.contains("### General Plans"));
        assert!(output.contains("- **Errands** 1 task • 07:00"));
    }

    #[test]
    fn test_empty_history() {
        let output = PlanHistory::new(vec![], date(2026, 10, 16), TimeZone::UTC).to_string();
        assert!(output.contains("No plans created yet."));
    }

    #[test]
    fn test_empty_summaries() {
        assert_eq!(PlanSummaries(vec![]).to_string(), "No plans created yet.\n");
    }
}

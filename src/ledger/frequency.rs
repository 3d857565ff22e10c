use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::dates::months_between;

/// How often a reminder repeats, counted from its anchor date.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Once,
    Daily,
    Weekly,
    Biweekly,
    Monthly,
    Bimonthly,
    Quarterly,
    Semiannual,
    Annual,
    /// Catch-all for tokens written by newer or foreign clients. Never
    /// occurs.
    #[serde(other)]
    Unknown,
}

impl Frequency {
    /// Whether an obligation anchored at `anchor` falls due on `target`.
    ///
    /// Pure and total: any pair of dates yields an answer and pre-anchor
    /// targets are always false. Month-anchored classes match on day-of-month
    /// equality, so an anchor on day 29-31 skips months that are too short
    /// (a Jan 31 monthly reminder never fires in February); the occurrence
    /// is skipped for that period rather than rolled to month end.
    ///
    /// Callers holding timestamps must truncate to the calendar date first;
    /// time of day never participates in the decision.
    pub fn occurs_on(self, anchor: NaiveDate, target: NaiveDate) -> bool {
        if target < anchor {
            return false;
        }
        let diff_days = (target - anchor).num_days();
        let diff_months = months_between(anchor, target);
        let same_day_of_month = target.day() == anchor.day();

        match self {
            Frequency::Once => diff_days == 0,
            Frequency::Daily => true,
            Frequency::Weekly => diff_days % 7 == 0,
            Frequency::Biweekly => diff_days % 14 == 0,
            Frequency::Monthly => same_day_of_month,
            Frequency::Bimonthly => same_day_of_month && diff_months % 2 == 0,
            Frequency::Quarterly => same_day_of_month && diff_months % 3 == 0,
            Frequency::Semiannual => same_day_of_month && diff_months % 6 == 0,
            Frequency::Annual => same_day_of_month && diff_months % 12 == 0,
            Frequency::Unknown => false,
        }
    }

    /// True for every class that can fire more than once.
    pub fn is_recurring(self) -> bool {
        !matches!(self, Frequency::Once | Frequency::Unknown)
    }

    pub fn label(self) -> &'static str {
        match self {
            Frequency::Once => "One-time",
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
            Frequency::Biweekly => "Every 2 Weeks",
            Frequency::Monthly => "Monthly",
            Frequency::Bimonthly => "Every 2 Months",
            Frequency::Quarterly => "Quarterly",
            Frequency::Semiannual => "Every 6 Months",
            Frequency::Annual => "Yearly",
            Frequency::Unknown => "Unknown",
        }
    }
}

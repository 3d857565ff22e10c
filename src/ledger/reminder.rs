use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::dates::lenient_date;
use super::frequency::Frequency;

/// A standing obligation not tied to a concrete transaction.
///
/// For recurring reminders `due_date` is the anchor: every future occurrence
/// is computed from it, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reminder {
    pub id: Uuid,
    pub title: String,
    /// Anchor date. `None` when the upstream record carried a date the
    /// decoder could not parse; such a reminder never occurs.
    #[serde(default, with = "lenient_date")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    pub frequency: Frequency,
    #[serde(default)]
    pub completed: bool,
}

impl Reminder {
    pub fn new(
        id: Uuid,
        title: impl Into<String>,
        due_date: NaiveDate,
        frequency: Frequency,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            due_date: Some(due_date),
            amount: None,
            frequency,
            completed: false,
        }
    }

    pub fn with_amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Whether this reminder falls due on `day`.
    pub fn occurs_on(&self, day: NaiveDate) -> bool {
        self.due_date
            .map(|anchor| self.frequency.occurs_on(anchor, day))
            .unwrap_or(false)
    }

    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }
}

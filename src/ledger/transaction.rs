use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::dates::lenient_datetime;

/// A single dated cash movement.
///
/// `amount` is always positive; direction is carried by `kind`. Records are
/// edited whole by their owner, never mutated by this crate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
    pub kind: TransactionKind,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion: Option<Emotion>,
    /// When the movement happened. `None` when the upstream record carried a
    /// timestamp the decoder could not parse; such records are kept but
    /// excluded from every derived view.
    #[serde(default, with = "lenient_datetime")]
    pub occurred_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<Uuid>,
}

impl Transaction {
    pub fn new(
        id: Uuid,
        description: impl Into<String>,
        amount: f64,
        kind: TransactionKind,
        category: impl Into<String>,
        occurred_at: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
            kind,
            category: category.into(),
            emotion: None,
            occurred_at: Some(occurred_at),
            project_id: None,
        }
    }

    pub fn with_emotion(mut self, emotion: Emotion) -> Self {
        self.emotion = Some(emotion);
        self
    }

    pub fn with_project(mut self, project_id: Uuid) -> Self {
        self.project_id = Some(project_id);
        self
    }

    /// Calendar day of the movement, when known.
    pub fn occurred_on(&self) -> Option<NaiveDate> {
        self.occurred_at.map(|stamp| stamp.date())
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// Mood tag attached at capture time; consumed by the emotion breakdown
/// only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Emotion {
    Happy,
    InLove,
    Satisfied,
    Anxious,
    Sad,
    Frustrated,
    Tired,
    Neutral,
}

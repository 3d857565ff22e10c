//! Monthly derived views over transaction, plan, and reminder snapshots.
//!
//! Everything here is a pure function over immutable inputs: callers hand in
//! a consistent snapshot of their collections plus a month window and get
//! fully materialized results back. Nothing is cached or mutated.

pub mod planning;

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

use crate::ledger::{
    dates::MonthRef,
    installment::InstallmentPlan,
    reminder::Reminder,
    transaction::{Emotion, Transaction},
};

pub use planning::{project, MonthlyProjection, TimelineEntry, SCHEDULED_CATEGORY};

/// Synthetic category that folds committed installments into the expense
/// breakdown.
pub const CREDIT_CATEGORY: &str = "Credit";

/// Per-category expense total. Order of first appearance is preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Per-emotion spending total. Order of first appearance is preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct EmotionTotal {
    pub emotion: Emotion,
    pub total: f64,
}

/// One calendar item, tagged with where it came from so consumers can render
/// each source differently.
#[derive(Debug, Clone, PartialEq)]
pub enum MonthItem {
    Transaction(Transaction),
    Installment(InstallmentDue),
    Reminder(Reminder),
}

/// An installment lifted out of its plan for calendar display.
#[derive(Debug, Clone, PartialEq)]
pub struct InstallmentDue {
    pub plan_id: Uuid,
    pub description: String,
    pub number: u32,
    pub of_total: u32,
    pub due_date: NaiveDate,
    pub amount: f64,
    pub is_paid: bool,
}

/// The monthly dashboard numbers plus the calendar bucket map.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    pub period: MonthRef,
    pub income: f64,
    /// Normal expenses plus every installment committed this month, paid or
    /// not.
    pub expenses: f64,
    pub balance: f64,
    pub installment_committed: f64,
    pub category_breakdown: Vec<CategoryTotal>,
    /// Every day of the month is present, possibly with an empty bucket.
    pub items_by_day: BTreeMap<u32, Vec<MonthItem>>,
}

/// Computes the monthly totals, the category breakdown, and the day-indexed
/// item map for a `(month, year)` window.
///
/// Records whose date is unknown (see [`Transaction::occurred_at`]) are
/// skipped everywhere: never bucketed, never summed.
pub fn summarize(
    transactions: &[Transaction],
    plans: &[InstallmentPlan],
    reminders: &[Reminder],
    period: MonthRef,
) -> MonthlySummary {
    let monthly: Vec<&Transaction> = transactions
        .iter()
        .filter(|txn| txn.occurred_on().is_some_and(|day| period.contains(day)))
        .collect();

    let income: f64 = monthly
        .iter()
        .filter(|txn| txn.is_income())
        .map(|txn| txn.amount)
        .sum();
    let normal_expenses: f64 = monthly
        .iter()
        .filter(|txn| txn.is_expense())
        .map(|txn| txn.amount)
        .sum();

    let installment_committed: f64 = plans
        .iter()
        .flat_map(|plan| plan.installments_due_in(period))
        .map(|inst| inst.amount)
        .sum();

    let expenses = normal_expenses + installment_committed;

    let mut category_breakdown: Vec<CategoryTotal> = Vec::new();
    for txn in monthly.iter().filter(|txn| txn.is_expense()) {
        accumulate(&mut category_breakdown, &txn.category, txn.amount);
    }
    if installment_committed > 0.0 {
        accumulate(&mut category_breakdown, CREDIT_CATEGORY, installment_committed);
    }

    let items_by_day = bucket_by_day(&monthly, plans, reminders, period);

    debug!(
        year = period.year,
        month = period.month,
        income,
        expenses,
        "summarized month"
    );

    MonthlySummary {
        period,
        income,
        expenses,
        balance: income - expenses,
        installment_committed,
        category_breakdown,
        items_by_day,
    }
}

fn accumulate(breakdown: &mut Vec<CategoryTotal>, category: &str, amount: f64) {
    match breakdown.iter_mut().find(|entry| entry.category == category) {
        Some(entry) => entry.total += amount,
        None => breakdown.push(CategoryTotal {
            category: category.to_owned(),
            total: amount,
        }),
    }
}

fn bucket_by_day(
    monthly: &[&Transaction],
    plans: &[InstallmentPlan],
    reminders: &[Reminder],
    period: MonthRef,
) -> BTreeMap<u32, Vec<MonthItem>> {
    let mut map = BTreeMap::new();
    for day in 1..=period.days() {
        let Some(target) = period.day(day) else {
            continue;
        };
        let mut items = Vec::new();

        for txn in monthly {
            if txn.occurred_on() == Some(target) {
                items.push(MonthItem::Transaction((*txn).clone()));
            }
        }
        for plan in plans {
            for inst in &plan.installments {
                if inst.due_date == target {
                    items.push(MonthItem::Installment(InstallmentDue {
                        plan_id: plan.id,
                        description: plan.description.clone(),
                        number: inst.number,
                        of_total: plan.total_installments,
                        due_date: inst.due_date,
                        amount: inst.amount,
                        is_paid: inst.is_paid,
                    }));
                }
            }
        }
        for reminder in reminders {
            if reminder.occurs_on(target) {
                items.push(MonthItem::Reminder(reminder.clone()));
            }
        }

        map.insert(day, items);
    }
    map
}

/// Reminders whose anchor date falls inside `period`, soonest first.
pub fn reminders_due_in(reminders: &[Reminder], period: MonthRef) -> Vec<Reminder> {
    let mut due: Vec<Reminder> = reminders
        .iter()
        .filter(|reminder| reminder.due_date.is_some_and(|day| period.contains(day)))
        .cloned()
        .collect();
    due.sort_by_key(|reminder| reminder.due_date);
    due
}

/// Spending totals per mood tag, in order of first appearance. Untagged
/// transactions are ignored.
pub fn emotion_breakdown(transactions: &[Transaction]) -> Vec<EmotionTotal> {
    let mut totals: Vec<EmotionTotal> = Vec::new();
    for txn in transactions {
        let Some(emotion) = txn.emotion else {
            continue;
        };
        match totals.iter_mut().find(|entry| entry.emotion == emotion) {
            Some(entry) => entry.total += txn.amount,
            None => totals.push(EmotionTotal {
                emotion,
                total: txn.amount,
            }),
        }
    }
    totals
}

/// Case-insensitive description search, newest first. Records with an
/// unknown date sort last.
pub fn search_history(transactions: &[Transaction], term: &str) -> Vec<Transaction> {
    let needle = term.to_lowercase();
    let mut found: Vec<Transaction> = transactions
        .iter()
        .filter(|txn| txn.description.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    found.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
    found
}

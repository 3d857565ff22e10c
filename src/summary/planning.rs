use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

use crate::ledger::{
    dates::MonthRef,
    installment::InstallmentPlan,
    reminder::Reminder,
    transaction::{Transaction, TransactionKind},
};

use super::CREDIT_CATEGORY;

/// Category attached to reminder-derived timeline entries.
pub const SCHEDULED_CATEGORY: &str = "Scheduled";

/// One row of the projected month, whatever its source.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEntry {
    /// Identifier of the originating transaction, plan, or reminder.
    pub source_id: Uuid,
    pub date: NaiveDate,
    pub description: String,
    pub amount: f64,
    pub kind: TransactionKind,
    pub category: String,
    pub is_installment: bool,
    pub is_paid: bool,
    pub is_recurring: bool,
}

/// A whole month flattened into one chronological sequence with totals.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyProjection {
    pub period: MonthRef,
    pub timeline: Vec<TimelineEntry>,
    pub income: f64,
    /// Normal expenses plus committed installments plus every expanded
    /// recurring occurrence of the month.
    pub expenses: f64,
    pub balance: f64,
}

/// Merges transactions, due installments, and every recurring-reminder
/// occurrence of the month into one date-ordered timeline.
///
/// Unlike [`super::summarize`], each reminder contributes an entry for every
/// day it occurs on, and those occurrence amounts are folded into the
/// expense total. The sort is stable: entries sharing a date keep source
/// order (transactions, then installments, then reminders).
pub fn project(
    transactions: &[Transaction],
    plans: &[InstallmentPlan],
    reminders: &[Reminder],
    period: MonthRef,
) -> MonthlyProjection {
    let mut timeline: Vec<TimelineEntry> = Vec::new();
    let mut income = 0.0;
    let mut normal_expenses = 0.0;
    let mut installment_expenses = 0.0;
    let mut recurring_expenses = 0.0;

    for txn in transactions {
        let Some(day) = txn.occurred_on() else {
            continue;
        };
        if !period.contains(day) {
            continue;
        }
        match txn.kind {
            TransactionKind::Income => income += txn.amount,
            TransactionKind::Expense => normal_expenses += txn.amount,
        }
        timeline.push(TimelineEntry {
            source_id: txn.id,
            date: day,
            description: txn.description.clone(),
            amount: txn.amount,
            kind: txn.kind,
            category: txn.category.clone(),
            is_installment: false,
            is_paid: false,
            is_recurring: false,
        });
    }

    for plan in plans {
        for inst in plan.installments_due_in(period) {
            installment_expenses += inst.amount;
            timeline.push(TimelineEntry {
                source_id: plan.id,
                date: inst.due_date,
                description: format!(
                    "{} ({}/{})",
                    plan.description, inst.number, plan.total_installments
                ),
                amount: inst.amount,
                kind: TransactionKind::Expense,
                category: CREDIT_CATEGORY.to_owned(),
                is_installment: true,
                is_paid: inst.is_paid,
                is_recurring: false,
            });
        }
    }

    for reminder in reminders {
        for day in 1..=period.days() {
            let Some(target) = period.day(day) else {
                continue;
            };
            if !reminder.occurs_on(target) {
                continue;
            }
            let amount = reminder.amount.unwrap_or(0.0);
            recurring_expenses += amount;
            timeline.push(TimelineEntry {
                source_id: reminder.id,
                date: target,
                description: reminder.title.clone(),
                amount,
                kind: TransactionKind::Expense,
                category: SCHEDULED_CATEGORY.to_owned(),
                is_installment: false,
                is_paid: false,
                is_recurring: true,
            });
        }
    }

    // Stable sort: same-day entries keep their push order.
    timeline.sort_by_key(|entry| entry.date);

    let expenses = normal_expenses + installment_expenses + recurring_expenses;
    debug!(
        year = period.year,
        month = period.month,
        entries = timeline.len(),
        "projected month"
    );

    MonthlyProjection {
        period,
        timeline,
        income,
        expenses,
        balance: income - expenses,
    }
}

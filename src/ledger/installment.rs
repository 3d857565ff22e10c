use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::dates::{add_months, MonthRef};
use crate::errors::ScheduleError;

/// One scheduled payment inside a plan. Owned by its plan; `is_paid` is the
/// only field that changes after generation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Installment {
    pub number: u32,
    pub due_date: NaiveDate,
    pub amount: f64,
    #[serde(default)]
    pub is_paid: bool,
}

/// A financed purchase split into equal monthly installments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InstallmentPlan {
    pub id: Uuid,
    pub description: String,
    pub total_amount: f64,
    pub total_installments: u32,
    /// Advisory pointer kept for the owner's bookkeeping; nothing here
    /// enforces it.
    pub current_installment: u32,
    pub start_date: NaiveDate,
    pub installments: Vec<Installment>,
}

impl InstallmentPlan {
    /// Registers a plan, generating the full schedule up front.
    pub fn new(
        id: Uuid,
        description: impl Into<String>,
        total_amount: f64,
        total_installments: u32,
        start_date: NaiveDate,
    ) -> Result<Self, ScheduleError> {
        let installments = expand_schedule(total_amount, total_installments, start_date)?;
        Ok(Self {
            id,
            description: description.into(),
            total_amount,
            total_installments,
            current_installment: 1,
            start_date,
            installments,
        })
    }

    /// Flat per-installment amount as shown alongside the plan.
    pub fn monthly_amount(&self) -> f64 {
        self.total_amount / self.total_installments as f64
    }

    pub fn paid_count(&self) -> usize {
        self.installments.iter().filter(|inst| inst.is_paid).count()
    }

    /// Paid fraction in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        self.paid_count() as f64 / self.total_installments as f64
    }

    pub fn is_settled(&self) -> bool {
        self.installments.iter().all(|inst| inst.is_paid)
    }

    /// Flips the paid flag of installment `number`. Returns false when the
    /// plan has no such installment.
    pub fn toggle_paid(&mut self, number: u32) -> bool {
        match self
            .installments
            .iter_mut()
            .find(|inst| inst.number == number)
        {
            Some(inst) => {
                inst.is_paid = !inst.is_paid;
                true
            }
            None => false,
        }
    }

    /// Installments whose due date falls inside `period`, paid or not.
    pub fn installments_due_in(&self, period: MonthRef) -> impl Iterator<Item = &Installment> {
        self.installments
            .iter()
            .filter(move |inst| period.contains(inst.due_date))
    }
}

/// Generates the dated, equal-amount schedule of a plan.
///
/// Due dates step one calendar month at a time, each computed directly from
/// `start_date` so a clamped short month never drags later dates down:
/// day-of-month clamps to the last day of months that are too short. Amounts
/// are the flat division `total_amount / count`; the sum of generated
/// amounts can differ from `total_amount` by float error, and callers must
/// not assume it away.
pub fn expand_schedule(
    total_amount: f64,
    total_installments: u32,
    start_date: NaiveDate,
) -> Result<Vec<Installment>, ScheduleError> {
    if total_installments == 0 {
        return Err(ScheduleError::NoInstallments);
    }
    if !total_amount.is_finite() {
        return Err(ScheduleError::NonFiniteAmount(total_amount));
    }
    if total_amount <= 0.0 {
        return Err(ScheduleError::NonPositiveAmount(total_amount));
    }

    let amount = total_amount / total_installments as f64;
    Ok((1..=total_installments)
        .map(|number| Installment {
            number,
            due_date: add_months(start_date, number - 1),
            amount,
            is_paid: false,
        })
        .collect())
}

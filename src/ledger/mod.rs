//! Domain entities and the calendar policy they share.

pub mod dates;
pub mod frequency;
pub mod installment;
pub mod reminder;
pub mod transaction;

pub use dates::{add_months, days_in_month, months_between, MonthRef};
pub use frequency::Frequency;
pub use installment::{expand_schedule, Installment, InstallmentPlan};
pub use reminder::Reminder;
pub use transaction::{Emotion, Transaction, TransactionKind};

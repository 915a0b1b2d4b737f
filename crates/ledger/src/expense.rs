//! The module contains the `Expense` type representing one recorded expense.
use core::fmt;

use serde::Serialize;

/// A recorded expense as returned by the store. Records are immutable once
/// appended; the id is assigned by the store.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Expense {
    pub id: i64,
    pub date: String,
    pub description: String,
    pub category: String,
    pub amount: f64,
}

/// Caller-supplied fields of an expense before the store has assigned an id.
///
/// The store takes `date` as opaque text; format enforcement belongs to the
/// caller.
#[derive(Clone, Debug, PartialEq)]
pub struct NewExpense {
    pub date: String,
    pub description: String,
    pub category: String,
    pub amount: f64,
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:.2} {} {}",
            self.date, self.amount, self.category, self.description
        )
    }
}

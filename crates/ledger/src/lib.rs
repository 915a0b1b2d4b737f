//! Persistence store for expense records.
//!
//! One SQLite table, three operations: [`Ledger::initialize`],
//! [`Ledger::append`] and [`Ledger::list_all`]. The store treats every field
//! it receives as opaque; validation belongs to the caller.
use std::path::PathBuf;

use rusqlite::{Connection, params};

pub use error::LedgerError;
pub use expense::{Expense, NewExpense};

mod error;
mod expense;

type ResultLedger<T> = Result<T, LedgerError>;

/// Where the backing SQLite database lives.
///
/// The location is injected at construction so tests can run against a
/// temporary file or an in-memory database.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Location {
    Memory,
    File(PathBuf),
}

impl Location {
    fn describe(&self) -> String {
        match self {
            Self::Memory => ":memory:".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

/// Handle over the expense store.
///
/// Holds one connection for the lifetime of the handle; each operation is its
/// own implicit transaction. There is a single thread of control, so SQLite's
/// single-writer semantics are never contended.
#[derive(Debug)]
pub struct Ledger {
    connection: Connection,
}

impl Ledger {
    /// Connect to the backing database, creating the file if absent.
    pub fn open(location: &Location) -> ResultLedger<Self> {
        let connection = match location {
            Location::Memory => Connection::open_in_memory(),
            Location::File(path) => Connection::open(path),
        }
        .map_err(|source| LedgerError::Connection {
            path: location.describe(),
            source,
        })?;

        tracing::debug!(location = %location.describe(), "expense store opened");
        Ok(Self { connection })
    }

    /// Ensure the `expenses` table exists. Idempotent, safe on every start.
    pub fn initialize(&self) -> ResultLedger<()> {
        self.connection.execute_batch(
            "CREATE TABLE IF NOT EXISTS expenses (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT NOT NULL,
                description TEXT NOT NULL,
                category TEXT NOT NULL,
                amount REAL NOT NULL
            );",
        )?;
        Ok(())
    }

    /// Insert one record and return it with its store-assigned id.
    ///
    /// A single parameterized statement, so the insert either commits durably
    /// or leaves no row behind.
    pub fn append(&self, expense: &NewExpense) -> ResultLedger<Expense> {
        self.connection.execute(
            "INSERT INTO expenses (date, description, category, amount) VALUES (?1, ?2, ?3, ?4)",
            params![
                expense.date,
                expense.description,
                expense.category,
                expense.amount
            ],
        )?;
        let id = self.connection.last_insert_rowid();

        tracing::debug!(id, date = %expense.date, "expense appended");
        Ok(Expense {
            id,
            date: expense.date.clone(),
            description: expense.description.clone(),
            category: expense.category.clone(),
            amount: expense.amount,
        })
    }

    /// Fetch every record, ascending by the text value of `date`.
    ///
    /// SQLite compares TEXT bytewise, which keeps the store's ordering
    /// contract lexicographic; ties fall back to insertion order.
    pub fn list_all(&self) -> ResultLedger<Vec<Expense>> {
        let mut statement = self.connection.prepare(
            "SELECT id, date, description, category, amount FROM expenses ORDER BY date ASC, id ASC",
        )?;
        let expenses = statement
            .query_map([], |row| {
                Ok(Expense {
                    id: row.get(0)?,
                    date: row.get(1)?,
                    description: row.get(2)?,
                    category: row.get(3)?,
                    amount: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(expenses)
    }
}

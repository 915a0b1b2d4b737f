use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};

use ledger::{Expense, Ledger, Location};

use crate::{
    config::AppConfig,
    error::{AppError, Result},
    form, ui,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Date,
    Description,
    Category,
    Amount,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Date => "Date (YYYY-MM-DD)",
            Self::Description => "Description",
            Self::Category => "Category",
            Self::Amount => "Amount",
        }
    }

    fn next(self) -> Self {
        match self {
            Self::Date => Self::Description,
            Self::Description => Self::Category,
            Self::Category => Self::Amount,
            Self::Amount => Self::Date,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Date => Self::Amount,
            Self::Description => Self::Date,
            Self::Category => Self::Description,
            Self::Amount => Self::Category,
        }
    }
}

#[derive(Debug)]
pub struct FormState {
    pub date: String,
    pub description: String,
    pub category: String,
    pub amount: String,
    pub focus: FormField,
}

impl FormState {
    fn new() -> Self {
        Self {
            date: form::today(),
            description: String::new(),
            category: String::new(),
            amount: String::new(),
            focus: FormField::Date,
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Date => &self.date,
            FormField::Description => &self.description,
            FormField::Category => &self.category,
            FormField::Amount => &self.amount,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Date => &mut self.date,
            FormField::Description => &mut self.description,
            FormField::Category => &mut self.category,
            FormField::Amount => &mut self.amount,
        }
    }

    /// Reset after a successful submit; the date refills with today so
    /// consecutive entries for the same day stay one keystroke away.
    fn clear(&mut self) {
        self.date = form::today();
        self.description.clear();
        self.category.clear();
        self.amount.clear();
        self.focus = FormField::Date;
    }
}

#[derive(Debug, Default)]
pub struct ExpensesState {
    pub items: Vec<Expense>,
    pub selected: usize,
}

impl ExpensesState {
    fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = (self.selected + 1).min(self.items.len() - 1);
    }

    fn select_prev(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = self.selected.saturating_sub(1);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Debug)]
pub struct ToastState {
    pub message: String,
    pub level: ToastLevel,
}

#[derive(Debug)]
pub struct AppState {
    pub form: FormState,
    pub expenses: ExpensesState,
    pub toast: Option<ToastState>,
    /// Set when the store could not be opened or initialized; the shell then
    /// runs with an empty table and refuses submits.
    pub store_error: Option<String>,
    pub database: String,
}

pub struct App {
    ledger: Option<Ledger>,
    pub state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let location = if config.database == ":memory:" {
            Location::Memory
        } else {
            Location::File(PathBuf::from(&config.database))
        };

        let (ledger, store_error) = match open_store(&location) {
            Ok(ledger) => (Some(ledger), None),
            Err(err) => {
                tracing::error!("failed to initialize expense store: {err}");
                (None, Some(err.to_string()))
            }
        };

        let mut app = Self {
            ledger,
            state: AppState {
                form: FormState::new(),
                expenses: ExpensesState::default(),
                toast: None,
                store_error,
                database: config.database,
            },
            should_quit: false,
        };
        app.refresh();
        app
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        ui::restore_terminal()?;
        result
    }

    fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit {
            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key),
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match ui::keymap::map_key(key) {
            ui::keymap::AppAction::Quit => {
                self.should_quit = true;
            }
            ui::keymap::AppAction::NextField => {
                self.state.form.focus = self.state.form.focus.next();
            }
            ui::keymap::AppAction::PrevField => {
                self.state.form.focus = self.state.form.focus.prev();
            }
            ui::keymap::AppAction::Submit => {
                self.submit();
            }
            ui::keymap::AppAction::Backspace => {
                let focus = self.state.form.focus;
                self.state.form.value_mut(focus).pop();
            }
            ui::keymap::AppAction::Up => {
                self.state.expenses.select_prev();
            }
            ui::keymap::AppAction::Down => {
                self.state.expenses.select_next();
            }
            ui::keymap::AppAction::Input(ch) => {
                let focus = self.state.form.focus;
                self.state.form.value_mut(focus).push(ch);
            }
            ui::keymap::AppAction::None => {}
        }
    }

    /// Validate the form and append on accept. Rejected or failed submits
    /// keep the field contents so nothing typed is lost.
    pub fn submit(&mut self) {
        self.state.toast = None;

        let Some(ledger) = &self.ledger else {
            self.toast_error("Expense store unavailable.".to_string());
            return;
        };

        let expense = match form::validate(
            &self.state.form.date,
            &self.state.form.description,
            &self.state.form.category,
            &self.state.form.amount,
        ) {
            Ok(expense) => expense,
            Err(message) => {
                self.toast_error(message);
                return;
            }
        };

        match ledger.append(&expense) {
            Ok(recorded) => {
                tracing::info!(id = recorded.id, "expense recorded");
                self.state.form.clear();
                self.state.toast = Some(ToastState {
                    message: "Expense added.".to_string(),
                    level: ToastLevel::Success,
                });
                self.refresh();
            }
            Err(err) => {
                tracing::error!("failed to append expense: {err}");
                self.toast_error(format!("Could not save expense: {err}"));
            }
        }
    }

    fn refresh(&mut self) {
        let Some(ledger) = &self.ledger else {
            return;
        };

        match ledger.list_all() {
            Ok(items) => {
                if !items.is_empty() {
                    self.state.expenses.selected =
                        self.state.expenses.selected.min(items.len() - 1);
                }
                self.state.expenses.items = items;
            }
            Err(err) => {
                tracing::error!("failed to load expenses: {err}");
                self.toast_error(format!("Could not load expenses: {err}"));
            }
        }
    }

    fn toast_error(&mut self, message: String) {
        self.state.toast = Some(ToastState {
            message,
            level: ToastLevel::Error,
        });
    }
}

fn open_store(location: &Location) -> std::result::Result<Ledger, ledger::LedgerError> {
    let ledger = Ledger::open(location)?;
    ledger.initialize()?;
    Ok(ledger)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_app() -> App {
        App::new(AppConfig {
            database: ":memory:".to_string(),
            level: "info".to_string(),
        })
    }

    fn fill_valid_form(app: &mut App) {
        app.state.form.date = "2025-01-05".to_string();
        app.state.form.description = "Coffee".to_string();
        app.state.form.category = "Food & Drink".to_string();
        app.state.form.amount = "3.75".to_string();
    }

    #[test]
    fn starts_with_empty_table_and_prefilled_date() {
        let app = memory_app();
        assert!(app.state.expenses.items.is_empty());
        assert!(app.state.store_error.is_none());
        assert_eq!(app.state.form.date, form::today());
    }

    #[test]
    fn submit_with_empty_fields_is_rejected_without_store_call() {
        let mut app = memory_app();
        app.state.form.date.clear();
        app.submit();

        let toast = app.state.toast.as_ref().unwrap();
        assert_eq!(toast.level, ToastLevel::Error);
        assert_eq!(toast.message, "All fields are required.");
        assert!(app.state.expenses.items.is_empty());
    }

    #[test]
    fn submit_with_non_positive_amount_is_rejected_and_fields_kept() {
        let mut app = memory_app();
        fill_valid_form(&mut app);
        app.state.form.amount = "-3.75".to_string();
        app.submit();

        let toast = app.state.toast.as_ref().unwrap();
        assert_eq!(toast.message, "Amount must be positive.");
        assert!(app.state.expenses.items.is_empty());
        // Rejected input stays in place for correction.
        assert_eq!(app.state.form.description, "Coffee");
        assert_eq!(app.state.form.amount, "-3.75");
    }

    #[test]
    fn valid_submit_appends_clears_and_refreshes() {
        let mut app = memory_app();
        fill_valid_form(&mut app);
        app.submit();

        assert_eq!(app.state.expenses.items.len(), 1);
        assert_eq!(app.state.expenses.items[0].description, "Coffee");
        assert_eq!(app.state.expenses.items[0].amount, 3.75);
        assert_eq!(
            app.state.toast.as_ref().unwrap().level,
            ToastLevel::Success
        );
        // Fields cleared, date prefilled again, focus back on the date.
        assert!(app.state.form.description.is_empty());
        assert!(app.state.form.amount.is_empty());
        assert_eq!(app.state.form.date, form::today());
        assert_eq!(app.state.form.focus, FormField::Date);
    }

    #[test]
    fn table_stays_sorted_by_date_across_submits() {
        let mut app = memory_app();
        fill_valid_form(&mut app);
        app.submit();

        app.state.form.date = "2025-01-01".to_string();
        app.state.form.description = "Groceries".to_string();
        app.state.form.category = "Food".to_string();
        app.state.form.amount = "55.20".to_string();
        app.submit();

        let items = &app.state.expenses.items;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].description, "Groceries");
        assert_eq!(items[1].description, "Coffee");
    }

    #[test]
    fn append_failure_keeps_fields_and_shows_error_toast() {
        let mut app = memory_app();
        // An open handle whose table was never created: validation passes,
        // the append itself fails at the storage level.
        app.ledger = Some(Ledger::open(&Location::Memory).unwrap());

        fill_valid_form(&mut app);
        app.submit();

        let toast = app.state.toast.as_ref().unwrap();
        assert_eq!(toast.level, ToastLevel::Error);
        assert!(toast.message.starts_with("Could not save expense"));
        // Failed submits lose nothing the user typed.
        assert_eq!(app.state.form.date, "2025-01-05");
        assert_eq!(app.state.form.description, "Coffee");
        assert_eq!(app.state.form.category, "Food & Drink");
        assert_eq!(app.state.form.amount, "3.75");
        assert!(app.state.expenses.items.is_empty());
    }

    #[test]
    fn degraded_store_refuses_submits_with_a_message() {
        let mut app = App::new(AppConfig {
            database: "/nonexistent-dir/expenses.db".to_string(),
            level: "info".to_string(),
        });
        assert!(app.state.store_error.is_some());

        fill_valid_form(&mut app);
        app.submit();
        assert_eq!(
            app.state.toast.as_ref().unwrap().message,
            "Expense store unavailable."
        );
        assert!(app.state.expenses.items.is_empty());
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut app = memory_app();
        app.state.expenses.select_next();
        assert_eq!(app.state.expenses.selected, 0);

        fill_valid_form(&mut app);
        app.submit();
        app.state.expenses.select_next();
        app.state.expenses.select_next();
        assert_eq!(app.state.expenses.selected, 0);
    }
}

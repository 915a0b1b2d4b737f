//! Validation of the entry form, before anything touches the store.
use chrono::NaiveDate;

use ledger::NewExpense;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's date in the canonical `YYYY-MM-DD` shape, used to prefill the
/// form's date field.
pub fn today() -> String {
    chrono::Local::now()
        .date_naive()
        .format(DATE_FORMAT)
        .to_string()
}

/// Check the four raw fields and build the record to append.
///
/// Rejections carry the message shown to the user; the caller keeps the field
/// contents so nothing is lost on failure. The date must be zero-padded ISO
/// 8601, which keeps the store's text ordering calendar-correct.
pub fn validate(
    date: &str,
    description: &str,
    category: &str,
    amount: &str,
) -> Result<NewExpense, String> {
    let date = date.trim();
    let description = description.trim();
    let category = category.trim();
    let amount_raw = amount.trim();

    if date.is_empty() || description.is_empty() || category.is_empty() || amount_raw.is_empty() {
        return Err("All fields are required.".to_string());
    }

    let amount: f64 = amount_raw
        .parse()
        .map_err(|_| "Amount must be a valid number.".to_string())?;
    if !amount.is_finite() {
        return Err("Amount must be a valid number.".to_string());
    }
    if amount <= 0.0 {
        return Err("Amount must be positive.".to_string());
    }

    let parsed = NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map_err(|_| "Date must be in YYYY-MM-DD format.".to_string())?;
    // chrono accepts "2025-1-5"; require the canonical zero-padded form so
    // lexicographic order in the store matches calendar order.
    if parsed.format(DATE_FORMAT).to_string() != date {
        return Err("Date must be in YYYY-MM-DD format.".to_string());
    }

    Ok(NewExpense {
        date: date.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_any_empty_field() {
        let cases = [
            ("", "Coffee", "Food", "3.75"),
            ("2025-01-05", "", "Food", "3.75"),
            ("2025-01-05", "Coffee", "", "3.75"),
            ("2025-01-05", "Coffee", "Food", ""),
            ("   ", "Coffee", "Food", "3.75"),
        ];

        for (date, description, category, amount) in cases {
            let result = validate(date, description, category, amount);
            assert_eq!(result.unwrap_err(), "All fields are required.");
        }
    }

    #[test]
    fn rejects_non_numeric_amount() {
        let result = validate("2025-01-05", "Coffee", "Food", "three");
        assert_eq!(result.unwrap_err(), "Amount must be a valid number.");

        let result = validate("2025-01-05", "Coffee", "Food", "inf");
        assert_eq!(result.unwrap_err(), "Amount must be a valid number.");
    }

    #[test]
    fn rejects_non_positive_amount() {
        for amount in ["0", "-3.75", "0.0"] {
            let result = validate("2025-01-05", "Coffee", "Food", amount);
            assert_eq!(result.unwrap_err(), "Amount must be positive.");
        }
    }

    #[test]
    fn rejects_unpadded_or_malformed_dates() {
        for date in ["2025-1-5", "05/01/2025", "not-a-date", "2025-13-01"] {
            let result = validate(date, "Coffee", "Food", "3.75");
            assert_eq!(result.unwrap_err(), "Date must be in YYYY-MM-DD format.");
        }
    }

    #[test]
    fn accepts_valid_input_and_trims_fields() {
        let expense = validate(" 2025-01-05 ", " Coffee ", " Food & Drink ", " 3.75 ").unwrap();

        assert_eq!(expense.date, "2025-01-05");
        assert_eq!(expense.description, "Coffee");
        assert_eq!(expense.category, "Food & Drink");
        assert_eq!(expense.amount, 3.75);
    }

    #[test]
    fn today_is_canonical() {
        let today = today();
        assert!(NaiveDate::parse_from_str(&today, DATE_FORMAT).is_ok());
        assert_eq!(today.len(), 10);
    }
}

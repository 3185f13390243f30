//! Record display formatting
//!
//! Rows are numbered from 1 on screen; the library itself indexes from 0.

use crate::models::Record;

use super::report::{right_align, separator, truncate};

const REGISTER_WIDTH: usize = 78;

/// Format one register row; `index` is the 0-based ledger position
pub fn format_record_row(index: usize, record: &Record) -> String {
    format!(
        "{:>4} {} {:11} {:16} {:>14}  {}",
        index + 1,
        record.date.format("%Y-%m-%d"),
        record.kind.label(),
        truncate(&record.category, 16),
        right_align(&record.amount.to_string(), 14),
        truncate(&record.description, 24)
    )
}

/// Format the whole ledger as a numbered register
pub fn format_register(records: &[Record]) -> String {
    if records.is_empty() {
        return "No transactions recorded.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4} {:10} {:11} {:16} {:>14}  {}\n",
        "#", "Date", "Kind", "Category", "Amount", "Description"
    ));
    output.push_str(&separator(REGISTER_WIDTH));
    output.push('\n');

    for (index, record) in records.iter().enumerate() {
        output.push_str(&format_record_row(index, record));
        output.push('\n');
    }

    output
}

/// Format a record's fields as loaded into the edit form
pub fn format_record_details(index: usize, record: &Record) -> String {
    let mut output = String::new();

    output.push_str(&format!("Row:         {}\n", index + 1));
    output.push_str(&format!("Date:        {}\n", record.date.format("%Y-%m-%d")));
    output.push_str(&format!("Kind:        {}\n", record.kind));
    output.push_str(&format!("Category:    {}\n", record.category));
    output.push_str(&format!("Amount:      {}\n", record.amount));

    if !record.description.is_empty() {
        output.push_str(&format!("Description: {}\n", record.description));
    }

    output
}

/// One-line summary used by the today queue, e.g. `Pengeluaran - Food - Rp200000`
pub fn format_queue_line(record: &Record, currency_symbol: &str) -> String {
    format!(
        "{} - {} - {}",
        record.kind,
        record.category,
        record.amount.format_with_symbol(currency_symbol)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, Kind};
    use chrono::NaiveDate;

    fn food() -> Record {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        Record::with_details(date, Kind::Expense, "Food", Amount::new(200000), "lunch")
    }

    #[test]
    fn test_queue_line() {
        assert_eq!(format_queue_line(&food(), "Rp"), "Pengeluaran - Food - Rp200000");
    }

    #[test]
    fn test_register_is_one_based() {
        let output = format_register(&[food()]);
        let row = output.lines().nth(2).unwrap();
        assert!(row.trim_start().starts_with("1 2024-01-01 Pengeluaran"));
        assert!(row.contains("200000"));
        assert!(row.ends_with("lunch"));
    }

    #[test]
    fn test_empty_register() {
        assert_eq!(format_register(&[]), "No transactions recorded.\n");
    }

    #[test]
    fn test_details() {
        let details = format_record_details(0, &food());
        assert!(details.contains("Row:         1"));
        assert!(details.contains("Description: lunch"));
    }
}

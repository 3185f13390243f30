//! Financial report formatting and shared layout helpers

use crate::models::Summary;

const REPORT_WIDTH: usize = 36;

/// Format the income/expense/balance report
pub fn format_summary(summary: &Summary, currency_symbol: &str) -> String {
    let income = format!("{}{}", currency_symbol, summary.total_income);
    let expense = format!("{}{}", currency_symbol, summary.total_expense);
    let balance = if summary.balance < 0 {
        format!("-{}{}", currency_symbol, summary.balance.unsigned_abs())
    } else {
        format!("{}{}", currency_symbol, summary.balance)
    };

    let mut output = String::new();
    output.push_str(&format_header("Financial Report", REPORT_WIDTH));
    output.push('\n');
    output.push_str(&double_separator(REPORT_WIDTH));
    output.push('\n');
    output.push_str(&format!("{:<18}{}\n", "Total income:", right_align(&income, 18)));
    output.push_str(&format!("{:<18}{}\n", "Total expense:", right_align(&expense, 18)));
    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');
    output.push_str(&format!("{:<18}{}\n", "Balance:", right_align(&balance, 18)));

    output
}

/// Center a title in a field of given width
pub fn format_header(title: &str, width: usize) -> String {
    let len = title.chars().count();
    let padding = width.saturating_sub(len) / 2;
    format!("{}{}", " ".repeat(padding), title)
}

pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

/// Right-align text in a field of given width
pub fn right_align(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

use chrono::{DateTime, Utc};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    Label,
    Value,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::Label => style(text).bold(),
        StyleType::Value => style(text).green().bold(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Right-aligned price cell.
pub fn price_cell(price: f64) -> Cell {
    Cell::new(format_price(Some(price))).set_alignment(CellAlignment::Right)
}

/// Creates a cell for displaying percentage change with color coding.
pub fn change_cell(change: f64) -> Cell {
    let text = format_percentage(change, true);
    let color = if change >= 0.0 { Color::Green } else { Color::Red };
    Cell::new(text)
        .fg(color)
        .set_alignment(CellAlignment::Right)
}

/// Creates a cell for "N/A" values.
pub fn na_cell() -> Cell {
    Cell::new("N/A")
        .fg(Color::DarkGrey)
        .set_alignment(CellAlignment::Right)
}

/// Spinner shown while the price feed is being fetched.
pub fn new_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} [{elapsed_precise}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Formats a price with more decimals the smaller it is.
pub fn format_price(price: Option<f64>) -> String {
    match price {
        None => "N/A".to_string(),
        Some(p) if p == 0.0 => "$0.00".to_string(),
        Some(p) if p.abs() < 0.01 => format!("${p:.6}"),
        Some(p) if p.abs() < 1.0 => format!("${p:.4}"),
        Some(p) => format!("${p:.2}"),
    }
}

pub fn format_percentage(percentage: f64, show_sign: bool) -> String {
    let fixed = format!("{:.2}", percentage.abs());
    let sign = if percentage < 0.0 && fixed != "0.00" {
        "-"
    } else if show_sign {
        "+"
    } else {
        ""
    };
    format!("{sign}{fixed}%")
}

/// Two decimals with thousands separators, e.g. `$1,234.50`.
pub fn format_usd_value(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // Values that round to zero print unsigned.
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}${grouped}.{fraction}")
}

pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%d/%m/%Y %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_price_precision() {
        assert_eq!(format_price(None), "N/A");
        assert_eq!(format_price(Some(0.0)), "$0.00");
        assert_eq!(format_price(Some(0.004)), "$0.004000");
        assert_eq!(format_price(Some(0.2081)), "$0.2081");
        assert_eq!(format_price(Some(1645.934)), "$1645.93");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(12.346, true), "+12.35%");
        assert_eq!(format_percentage(12.346, false), "12.35%");
        assert_eq!(format_percentage(-3.1, true), "-3.10%");
        assert_eq!(format_percentage(0.0, true), "+0.00%");
        assert_eq!(format_percentage(-0.004, false), "0.00%");
    }

    #[test]
    fn test_format_usd_value() {
        assert_eq!(format_usd_value(0.0), "$0.00");
        assert_eq!(format_usd_value(999.999), "$1,000.00");
        assert_eq!(format_usd_value(1234567.5), "$1,234,567.50");
        assert_eq!(format_usd_value(-42.1), "-$42.10");
        assert_eq!(format_usd_value(-0.001), "$0.00");
        assert_eq!(format_usd_value(-0.0), "$0.00");
    }

    #[test]
    fn test_format_date() {
        let date = Utc.with_ymd_and_hms(2023, 8, 29, 7, 10, 40).unwrap();
        assert_eq!(format_date(&date), "29/08/2023 07:10:40");
    }
}

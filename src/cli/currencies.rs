use super::ui;
use crate::core::Snapshot;
use comfy_table::{Cell, CellAlignment};

/// Table of the given currencies with their latest price and change.
pub fn render_currency_table(snapshot: &Snapshot, currencies: &[String]) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Currency"),
        ui::header_cell("Latest Price"),
        ui::header_cell("Change"),
        ui::header_cell("Change (%)"),
        ui::header_cell("Records"),
    ]);

    for currency in currencies {
        match snapshot.get_token_price_history(currency) {
            Some(history) => table.add_row(vec![
                Cell::new(currency),
                ui::price_cell(history.latest_price),
                Cell::new(format!("{:+.6}", history.price_change_24h))
                    .set_alignment(CellAlignment::Right),
                ui::change_cell(history.price_change_percent_24h),
                Cell::new(history.records.len()).set_alignment(CellAlignment::Right),
            ]),
            None => table.add_row(vec![
                Cell::new(currency),
                ui::na_cell(),
                ui::na_cell(),
                ui::na_cell(),
                ui::na_cell(),
            ]),
        };
    }

    table.to_string()
}

pub fn run_list(snapshot: &Snapshot) {
    let currencies = snapshot.get_all_currencies();
    if currencies.is_empty() {
        println!("No price data available.");
        return;
    }
    println!("{}", render_currency_table(snapshot, &currencies));
    println!(
        "\n{}",
        ui::style_text(
            &format!("{} currencies", currencies.len()),
            ui::StyleType::Subtle
        )
    );
}

pub fn run_search(snapshot: &Snapshot, query: &str) {
    let matches = snapshot.search_currencies(query);
    if matches.is_empty() {
        println!("No currencies match '{query}'.");
        return;
    }
    println!("{}", render_currency_table(snapshot, &matches));
}

pub fn render_summary(snapshot: &Snapshot) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Currency"),
        ui::header_cell("Latest Price"),
        ui::header_cell("Change (%)"),
    ]);
    for (currency, summary) in snapshot.get_price_summary() {
        table.add_row(vec![
            Cell::new(currency),
            ui::price_cell(summary.latest_price),
            ui::change_cell(summary.change_percent),
        ]);
    }
    table.to_string()
}

pub fn run_summary(snapshot: &Snapshot) {
    if snapshot.is_empty() {
        println!("No price data available.");
        return;
    }
    println!("{}", render_summary(snapshot));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::history::tests::snapshot_of;

    #[test]
    fn test_currency_table_lists_requested_rows() {
        let snapshot = snapshot_of(&[("BTC", 1, 100.0), ("BTC", 2, 110.0), ("ETH", 1, 0.5)]);
        let output = render_currency_table(&snapshot, &["BTC".to_string(), "NOPE".to_string()]);

        assert!(output.contains("BTC"));
        assert!(output.contains("$110.00"));
        assert!(output.contains("+10.00%"));
        assert!(output.contains("NOPE"));
        assert!(output.contains("N/A"));
        assert!(!output.contains("ETH"));
    }

    #[test]
    fn test_summary_omits_zero_prices() {
        let snapshot = snapshot_of(&[("BTC", 1, 100.0), ("DEAD", 1, 0.0)]);
        let output = render_summary(&snapshot);
        assert!(output.contains("BTC"));
        assert!(!output.contains("DEAD"));
    }
}

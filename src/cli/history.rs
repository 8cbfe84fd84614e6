use super::ui;
use crate::core::quote::token_icon_url;
use crate::core::{Snapshot, TokenPriceHistory};
use anyhow::{Result, bail};
use comfy_table::{Cell, CellAlignment};

fn render_statistics(history: &TokenPriceHistory) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Latest Price"),
        ui::header_cell("Change"),
        ui::header_cell("Change (%)"),
        ui::header_cell("Low"),
        ui::header_cell("High"),
        ui::header_cell("Records"),
    ]);
    table.add_row(vec![
        ui::price_cell(history.latest_price),
        Cell::new(format!("{:+.6}", history.price_change_24h)).set_alignment(CellAlignment::Right),
        ui::change_cell(history.price_change_percent_24h),
        history.lowest_price().map_or_else(ui::na_cell, ui::price_cell),
        history.highest_price().map_or_else(ui::na_cell, ui::price_cell),
        Cell::new(history.records.len()).set_alignment(CellAlignment::Right),
    ]);
    table.to_string()
}

fn render_records(history: &TokenPriceHistory) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Date"), ui::header_cell("Price")]);
    for record in &history.records {
        table.add_row(vec![
            Cell::new(ui::format_date(&record.date)),
            ui::price_cell(record.price),
        ]);
    }
    table.to_string()
}

pub fn render(history: &TokenPriceHistory) -> String {
    format!(
        "Currency: {}\n{}\n\n{}\n\n{}",
        ui::style_text(&history.currency, ui::StyleType::Title),
        ui::style_text(&token_icon_url(&history.currency), ui::StyleType::Subtle),
        render_statistics(history),
        render_records(history)
    )
}

pub fn run(snapshot: &Snapshot, currency: &str) -> Result<()> {
    let Some(history) = snapshot.get_token_price_history(currency) else {
        let suggestions = snapshot.search_currencies(currency);
        if suggestions.is_empty() {
            bail!("No price history for currency: {}", currency);
        }
        bail!(
            "No price history for currency: {}. Did you mean: {}?",
            currency,
            suggestions.join(", ")
        );
    };

    println!("{}", render(&history));
    Ok(())
}
